// src/scrape/analysis.rs
use crate::{
    config::options::AppOptions,
    core::{browser, sanitize::is_safe_id},
    error::{PanelError, Result},
    lines::{OuTally, Side, cover_from_text},
    preview::{Preview, RecentCard, RecentHistory},
    specs::analysis::{self, AnalysisPage, HistoryRow},
    store,
};

/// Render the match's h2h page in the headless browser, build a preview from
/// it and cache it in the first preview directory.
pub fn analyze_match(opts: &AppOptions, id: &str) -> Result<Preview> {
    if !is_safe_id(id) {
        return Err(PanelError::InvalidId(s!(id)));
    }
    let bin = browser::find_browser(&opts.browser).ok_or(PanelError::BrowserUnavailable)?;

    let url = opts.source.h2h_url(id);
    logf!("Analysing match {id} via {url}");
    let dom = browser::dump_dom(&bin, &url, opts.browser.timeout())?;

    let page = analysis::parse_doc(&dom);
    if page.is_empty() {
        return Err(PanelError::EmptyPage { url });
    }
    let preview = build_preview(&page);

    // Cache, but a failed write doesn't lose the analysis.
    if let Err(e) = store::save_preview(&opts.data.preview_write_dir(), id, &preview) {
        loge!("Could not cache preview for {id}: {e}");
    }
    Ok(preview)
}

/// Pure part of the analysis: page → preview document.
pub fn build_preview(page: &AnalysisPage) -> Preview {
    let home = page.home_name.clone().unwrap_or_default();
    let away = page.away_name.clone().unwrap_or_default();

    let mut p = Preview::default();
    p.home_name = page.home_name.clone();
    p.away_name = page.away_name.clone();
    p.final_score = page.final_score.clone();
    p.match_time = page.match_time.clone();

    let recent = RecentHistory {
        last_home: page.home_recent.first().map(|r| recent_card(r, &home, Side::Home)),
        last_away: page.away_recent.first().map(|r| recent_card(r, &away, Side::Away)),
        h2h: page.h2h.first().map(|r| recent_card(r, &home, Side::Home)),
    };
    if recent.last_home.is_some() || recent.last_away.is_some() || recent.h2h.is_some() {
        p.recent = Some(recent);
    }

    p.home_ou_stats = ou_stats(&page.home_recent);
    p.away_ou_stats = ou_stats(&page.away_recent);
    p
}

/// Which side of `row` the team plays. Falls back to `usual` when the name
/// doesn't match either column.
fn side_of(team: &str, row: &HistoryRow, usual: Side) -> Side {
    let t = team.trim();
    if t.is_empty() {
        return usual;
    }
    if row.home.eq_ignore_ascii_case(t) {
        Side::Home
    } else if row.away.eq_ignore_ascii_case(t) {
        Side::Away
    } else {
        usual
    }
}

fn recent_card(row: &HistoryRow, team: &str, usual: Side) -> RecentCard {
    let side = side_of(team, row, usual);
    let non_empty = |s: &str| Some(s.to_string()).filter(|s| !s.is_empty());
    RecentCard {
        score: non_empty(&row.score),
        ah: non_empty(&row.ah),
        ou: non_empty(&row.ou),
        cover_status: cover_from_text(&row.score, &row.ah, side).map(|c| s!(c.wire())),
        stats_rows: Vec::new(),
        date: non_empty(&row.date),
        home: non_empty(&row.home),
        away: non_empty(&row.away),
    }
}

fn ou_stats(rows: &[HistoryRow]) -> Option<crate::preview::OuStats> {
    let tally = OuTally::from_rows(rows.iter().map(|r| (r.score.as_str(), r.ou.as_str())));
    (tally.total() > 0).then(|| tally.to_stats())
}
