// src/render/page.rs
//
// Full HTML page for the web viewer: header row, options, match list, panel.
// Navigation is plain links / GET forms; the POST endpoints are driven by a
// few lines of inline script.

use crate::core::html::escape_html as esc;
use crate::data::{ListTab, Match};

use super::styles::PANEL_CSS;

pub struct PageView<'a> {
    pub source_label: &'a str,
    pub counts: (usize, usize),
    pub tab: ListTab,
    pub query: &'a str,
    pub matches: &'a [&'a Match],
    pub selected: Option<&'a str>,
    /// Match pinned by Quick preview; survives row clicks, tab switches and searches.
    pub preview: Option<&'a str>,
    /// Already-rendered panel (see `render_panel`).
    pub panel_html: &'a str,
    /// Pretty JSON of the active preview, shown in a collapsible block.
    pub raw_json: Option<&'a str>,
    pub notice: Option<&'a str>,
    pub browser_available: bool,
}

/// Query string for `/` with the given state (values are URL-encoded).
pub fn page_href(tab: ListTab, query: &str, selected: Option<&str>, preview: Option<&str>) -> String {
    let mut href = format!("/?tab={}", tab.as_str());
    if !query.trim().is_empty() {
        push_fmt!(href, "&q={}", url_encode(query.trim()));
    }
    if let Some(id) = selected.filter(|s| !s.is_empty()) {
        push_fmt!(href, "&selected={}", url_encode(id));
    }
    if let Some(id) = preview.filter(|s| !s.is_empty()) {
        push_fmt!(href, "&preview={}", url_encode(id));
    }
    href
}

fn url_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(b as char),
            b' ' => out.push('+'),
            _ => push_fmt!(out, "%{b:02X}"),
        }
    }
    out
}

fn header(v: &PageView<'_>) -> String {
    let (up, fin) = v.counts;
    let preview_href = page_href(v.tab, v.query, v.selected, v.selected);
    let analyze = match (v.selected, v.browser_available) {
        (Some(id), true) => format!(
            "<button class=\"btn secondary\" onclick=\"post('/api/analyze/{}', this, '{}')\">Live analysis</button>",
            esc(id),
            esc(&page_href(v.tab, v.query, Some(id), Some(id)))
        ),
        _ => s!(),
    };
    format!(
        r#"<div class="hero-row">
  <div>
    <h2 style="margin:0;">Match panel</h2>
    <span class="pill">{source}</span>
    <span class="match-sub">&nbsp;{up} upcoming · {fin} finished</span>
  </div>
  <div class="hero-buttons">
    <a class="btn" href="{preview_href}">Quick preview</a>
    {analyze}
    <button class="btn secondary" onclick="post('/api/refresh', this)">Refresh data</button>
  </div>
</div>"#,
        source = esc(v.source_label),
        preview_href = esc(&preview_href),
    )
}

fn options() -> &'static str {
    r#"<details class="options">
  <summary>Load JSON / options</summary>
  <div class="row">
    <label>Upload data.json <input type="file" accept=".json,application/json" onchange="upload('/api/dataset', this)"></label>
    <label>Upload analysis JSON <input type="file" accept=".json,application/json" onchange="upload('/api/preview', this)"></label>
    <button class="btn secondary" onclick="post('/api/reload', this)">Reload local data</button>
  </div>
</details>"#
}

fn hidden_state(v: &PageView<'_>) -> String {
    let mut out = s!();
    for (name, value) in [("selected", v.selected), ("preview", v.preview)] {
        if let Some(value) = value.filter(|s| !s.is_empty()) {
            push_fmt!(out, "<input type=\"hidden\" name=\"{name}\" value=\"{}\">", esc(value));
        }
    }
    out
}

fn match_list(v: &PageView<'_>) -> String {
    let mut out = s!("<div class=\"tabs\">");
    for t in ListTab::ALL {
        let class = if t == v.tab { " class=\"active\"" } else { "" };
        push_fmt!(
            out,
            "<a{class} href=\"{}\">{}</a>",
            esc(&page_href(t, v.query, v.selected, v.preview)),
            t.label()
        );
    }
    out.push_str("</div>");

    push_fmt!(
        out,
        "<form class=\"search\" method=\"get\" action=\"/\">\
         <input type=\"hidden\" name=\"tab\" value=\"{}\">\
         <input type=\"search\" name=\"q\" value=\"{}\" placeholder=\"Search by team\">\
         {}</form>",
        v.tab.as_str(),
        esc(v.query),
        hidden_state(v)
    );
    push_fmt!(out, "<p class=\"match-sub\">Showing {} matches</p>", v.matches.len());

    out.push_str("<div class=\"match-list\">");
    if v.matches.is_empty() {
        out.push_str("<div class=\"empty-card\">No matches for this list.</div>");
    }
    for m in v.matches {
        let selected = v.selected == Some(m.id.as_str());
        push_fmt!(
            out,
            "<a class=\"match-item{}\" href=\"{}\">\
             <div class=\"match-line\">{} | {} vs {}</div>\
             <div class=\"match-sub\"><span class=\"badge-ah\">AH {}</span><span class=\"badge-ou\">O/U {}</span></div>\
             </a>",
            if selected { " selected" } else { "" },
            esc(&page_href(v.tab, v.query, Some(&m.id), v.preview)),
            esc(&m.time),
            esc(&m.home_team),
            esc(&m.away_team),
            esc(&m.handicap),
            esc(&m.goal_line),
        );
    }
    out.push_str("</div>");
    out
}

const SCRIPT: &str = r#"<script>
async function post(url, el, next) {
  if (el) { el.disabled = true; }
  let ok = false;
  try {
    const r = await fetch(url, { method: 'POST' });
    ok = r.ok;
    if (!r.ok) {
      const j = await r.json().catch(() => ({}));
      alert(j.error || ('Request failed: ' + r.status));
    }
  } finally {
    if (ok && next) { location.href = next; } else { location.reload(); }
  }
}
async function upload(url, input) {
  const f = input.files && input.files[0];
  if (!f) { return; }
  const r = await fetch(url, { method: 'POST', headers: { 'Content-Type': 'application/json' }, body: await f.text() });
  if (!r.ok) {
    const j = await r.json().catch(() => ({}));
    alert(j.error || ('Upload failed: ' + r.status));
  }
  location.reload();
}
</script>"#;

pub fn render_page(v: &PageView<'_>) -> String {
    let notice = v
        .notice
        .map(|n| format!("<div class=\"notice\">{}</div>", esc(n)))
        .unwrap_or_default();
    let raw = v
        .raw_json
        .map(|j| {
            format!(
                "<details style=\"margin-top:10px;\"><summary>View analysis JSON</summary><pre class=\"raw-json\">{}</pre></details>",
                esc(j)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Match panel</title>
<style>{css}</style>
</head>
<body>
<div class="page">
{header}
{options}
{notice}
<div class="layout">
  <div>{list}</div>
  <div>{panel}{raw}</div>
</div>
</div>
{script}
</body>
</html>"#,
        css = PANEL_CSS,
        header = header(v),
        options = options(),
        list = match_list(v),
        panel = v.panel_html,
        script = SCRIPT,
    )
}
