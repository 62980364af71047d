// src/render/panel.rs
//
// The analysis panel as an HTML fragment. Every value that came from a data
// file is escaped; the only raw HTML is the preview's market fragment.

use crate::core::html::escape_html as esc;
use crate::data::Match;
use crate::preview::{
    ComparisonCard, CoverStatus, OuStats, PanelHeader, Preview, RecentCard, Standings, StatRow,
};

const DASH: &str = "-";

fn or_dash(v: &Option<String>) -> String {
    esc(v.as_deref().filter(|s| !s.is_empty()).unwrap_or(DASH))
}

/// Cover badge span; empty string when there is nothing to show.
pub fn cover_badge(status: Option<&str>) -> String {
    let Some(c) = status.and_then(CoverStatus::classify) else {
        return s!();
    };
    format!("<span class=\"{}\">{}</span>", c.css_class(), esc(c.label()))
}

/// home | label | away rows; empty string for no rows.
pub fn stat_rows_table(rows: &[StatRow]) -> String {
    if rows.is_empty() {
        return s!();
    }
    let mut out = s!("<table class=\"mini-stat-table\">");
    for r in rows {
        push_fmt!(
            out,
            "<tr><td>{}</td><td class=\"stat-label\">{}</td><td>{}</td></tr>",
            esc(r.home.as_deref().unwrap_or("")),
            esc(r.label.as_deref().unwrap_or("")),
            esc(r.away.as_deref().unwrap_or("")),
        );
    }
    out.push_str("</table>");
    out
}

pub fn recent_card(title: &str, card: Option<&RecentCard>, accent_class: &str) -> String {
    let Some(c) = card else {
        return format!(
            "<div class=\"mini-card\"><h6>{}</h6><div class=\"empty-card\">No data available.</div></div>",
            esc(title)
        );
    };
    let mut out = s!("<div class=\"mini-card\">");
    push_fmt!(out, "<h6 class=\"{}\">{}</h6>", accent_class, esc(title));
    push_fmt!(out, "<div class=\"card-score\">{}</div>", or_dash(&c.score));
    push_fmt!(out, "<div class=\"match-sub\">{} vs {}</div>", or_dash(&c.home), or_dash(&c.away));
    push_fmt!(out, "<div class=\"match-sub\">{}</div>", esc(c.date.as_deref().unwrap_or("")));
    push_fmt!(
        out,
        "<div class=\"match-sub\">AH: <strong>{}</strong> / O/U: <strong>{}</strong></div>",
        or_dash(&c.ah),
        or_dash(&c.ou)
    );
    push_fmt!(out, "<div style=\"margin:4px 0;\">{}</div>", cover_badge(c.cover_status.as_deref()));
    out.push_str(&stat_rows_table(&c.stats_rows));
    out.push_str("</div>");
    out
}

pub fn recent_section(preview: &Preview) -> String {
    let r = preview.recent.as_ref();
    let mut out = s!("<div class=\"grid-3\">");
    out.push_str(&recent_card("Last home match", r.and_then(|r| r.last_home()), "home-color"));
    out.push_str(&recent_card("Last away match", r.and_then(|r| r.last_away()), "away-color"));
    out.push_str(&recent_card("Reference H2H", r.and_then(|r| r.h2h()), "match-sub"));
    out.push_str("</div>");
    out
}

fn comparison_card(title: &str, card: Option<&ComparisonCard>) -> String {
    let Some(c) = card else {
        return format!(
            "<div class=\"mini-card\"><h6>{}</h6><div class=\"empty-card\">Not available.</div></div>",
            esc(title)
        );
    };
    let mut out = s!("<div class=\"mini-card\">");
    push_fmt!(out, "<h6>{}</h6>", esc(title));
    push_fmt!(out, "<div class=\"match-line\">{}</div>", or_dash(&c.score));
    push_fmt!(out, "<div class=\"match-sub\">{} vs {}</div>", or_dash(&c.home_team), or_dash(&c.away_team));
    push_fmt!(
        out,
        "<div class=\"match-sub\">AH: <strong>{}</strong> / O/U: <strong>{}</strong></div>",
        or_dash(&c.ah),
        or_dash(&c.ou)
    );
    push_fmt!(out, "<div class=\"match-sub\">Venue: <strong>{}</strong></div>", or_dash(&c.venue));
    push_fmt!(out, "<div style=\"margin:4px 0;\">{}</div>", cover_badge(c.cover_status.as_deref()));
    out.push_str(&stat_rows_table(&c.stats_rows));
    if let Some(a) = c.analysis.as_deref().filter(|a| !a.is_empty()) {
        push_fmt!(out, "<div class=\"match-sub\" style=\"margin-top:6px;\">{}</div>", esc(a));
    }
    out.push_str("</div>");
    out
}

pub fn comparisons_section(preview: &Preview) -> String {
    let Some(c) = preview.comparisons.as_ref().filter(|c| !c.is_empty()) else {
        return s!("<div class=\"empty-card\">No indirect comparisons saved.</div>");
    };
    format!(
        "<div class=\"grid-2\">{}{}</div>",
        comparison_card("Home vs away side's last opponent", c.left()),
        comparison_card("Away vs home side's last opponent", c.right()),
    )
}

fn standings_block(title: &str, std: Option<&Standings>, ou: Option<&OuStats>, accent: &str) -> String {
    let mut out = s!("<div class=\"mini-card\">");
    push_fmt!(out, "<div class=\"{}\" style=\"font-weight:800;font-size:1.05rem;\">{}</div>", accent, esc(title));
    if let Some(s) = std {
        push_fmt!(out, "<div class=\"match-sub\">Position: <strong>{}</strong></div>", or_dash(&s.ranking));
        push_fmt!(
            out,
            "<div class=\"match-sub\">P: {} | W-D-L: {}-{}-{} | GF:GA {}:{}</div>",
            or_dash(&s.played),
            or_dash(&s.won),
            or_dash(&s.drawn),
            or_dash(&s.lost),
            or_dash(&s.goals_for),
            or_dash(&s.goals_against),
        );
        if let Some(kind) = s.specific_type.as_deref().filter(|k| !k.is_empty()) {
            push_fmt!(
                out,
                "<div class=\"match-sub\">{}: P {} | W-D-L {}-{}-{} | GF:GA {}:{}</div>",
                esc(kind),
                or_dash(&s.specific_played),
                or_dash(&s.specific_won),
                or_dash(&s.specific_drawn),
                or_dash(&s.specific_lost),
                or_dash(&s.specific_goals_for),
                or_dash(&s.specific_goals_against),
            );
        }
    }
    if let Some(o) = ou.filter(|o| o.has_sample()) {
        push_fmt!(
            out,
            "<div class=\"match-sub\">O/U last {} matches: <span class=\"ou-over\">Over {}%</span> / \
             <span class=\"ou-under\">Under {}%</span> / <span class=\"ou-push\">Push {}%</span></div>",
            or_dash(&o.total),
            or_dash(&o.over_pct),
            or_dash(&o.under_pct),
            or_dash(&o.push_pct),
        );
    }
    out.push_str("</div>");
    out
}

pub fn standings_section(preview: &Preview, home: &str, away: &str) -> String {
    if !preview.has_standings_data() {
        return s!("<div class=\"empty-card\">No standings or over/under data in the cached analysis.</div>");
    }
    format!(
        "<div class=\"grid-2\">{}{}</div>",
        standings_block(home, preview.home_standings(), preview.home_ou(), "home-color"),
        standings_block(away, preview.away_standings(), preview.away_ou(), "away-color"),
    )
}

/// The full panel card for `m`. `None` renders the "select a match" hint.
pub fn render_panel(m: Option<&Match>, preview: Option<&Preview>, source_label: &str) -> String {
    let Some(m) = m else {
        return s!("<div class=\"empty-card\">Select a match to see its analysis.</div>");
    };
    let h = PanelHeader::resolve(m, preview);

    let mut sections = s!("<div class=\"section-title\">Advanced match analysis</div>");
    match preview {
        Some(p) => {
            sections.push_str(&standings_section(p, &h.home, &h.away));
            sections.push_str("<div class=\"section-title\">Recent history</div>");
            sections.push_str(&recent_section(p));
            sections.push_str("<div class=\"section-title\">Indirect comparisons</div>");
            sections.push_str(&comparisons_section(p));
            if let Some(market) = p.market_html() {
                sections.push_str("<div class=\"section-title\">Market / H2H view</div>");
                push_fmt!(sections, "<div class=\"market-box\">{market}</div>");
            }
        }
        None => sections.push_str(
            "<div class=\"empty-card\">No cached analysis for this match. Upload an analysis JSON \
             or generate one with live analysis.</div>",
        ),
    }

    format!(
        r#"<div class="panel-card">
  <div class="panel-header">
    <div>
      <p class="eyebrow">Data source: {source}</p>
      <div class="panel-title">{home} vs {away}</div>
      <div class="chips">
        <span class="chip ah">AH {ah}</span>
        <span class="chip ou">O/U {ou}</span>
      </div>
      <div class="match-sub" style="margin-top:6px;">ID {id} | {time}</div>
    </div>
    <div class="score-box">
      <div class="match-sub" style="color:#cbd5e1;">Score</div>
      <div class="score-value">{score}</div>
    </div>
  </div>
  {sections}
</div>"#,
        source = esc(source_label),
        home = esc(&h.home),
        away = esc(&h.away),
        ah = esc(&h.handicap),
        ou = esc(&h.goal_line),
        id = esc(&h.id),
        time = esc(&h.time),
        score = esc(&h.score),
    )
}
