// src/render/styles.rs
//! Stylesheet shared by the web page and the exported panel.

pub const PANEL_CSS: &str = r#"
:root {
  --bg: #eef2f9;
  --card: #ffffff;
  --primary: #2d6ce6;
  --away: #f97316;
  --muted: #5b667a;
  --chip-ah: #e8edff;
  --chip-ou: #e6f7ef;
}
body {
  margin: 0;
  font-family: -apple-system, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
  background: linear-gradient(180deg, #f7f9fd 0%, #eef2f9 100%);
  color: #0f172a;
  min-height: 100vh;
}
h1, h2, h3, h4, h5, h6 { color: #0f172a; margin-bottom: 0.35rem; }
.page { padding: 0.4rem 1.2rem 1.2rem 1.2rem; }
.panel-card {
  background: var(--card);
  border-radius: 20px;
  padding: 20px 22px;
  box-shadow: 0 18px 48px rgba(15, 23, 42, 0.08);
  border: 1px solid #dde3f0;
}
.panel-header {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: 1rem;
  flex-wrap: wrap;
}
.panel-title { font-size: 2rem; font-weight: 800; margin: 0; letter-spacing: -0.01em; }
.eyebrow { color: var(--muted); text-transform: uppercase; letter-spacing: .1em; font-size: .78rem; margin: 0 0 6px 0; }
.chips { display: flex; gap: 8px; flex-wrap: wrap; margin-top: 6px; }
.chip {
  display: inline-flex;
  align-items: center;
  gap: 6px;
  padding: 6px 11px;
  border-radius: 999px;
  font-weight: 700;
  font-size: 0.85rem;
  border: 1px solid #dbe5ff;
  background: #f5f7ff;
  color: #0f172a;
}
.chip.ah { background: var(--chip-ah); color: #1d4ed8; border-color: #c7d2fe; }
.chip.ou { background: var(--chip-ou); color: #0f9d58; border-color: #b9f2d2; }
.score-box {
  background: linear-gradient(135deg, #0f172a, #131c2e);
  color: #fff;
  border-radius: 14px;
  padding: 12px 16px;
  min-width: 160px;
  text-align: center;
  box-shadow: 0 12px 30px rgba(15, 23, 42, 0.35);
}
.score-value { font-size: 1.9rem; font-weight: 800; letter-spacing: -0.02em; }
.section-title { font-weight: 800; font-size: 1.2rem; margin: 14px 0 8px 0; display: flex; align-items: center; gap: 8px; }
.grid-3 { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 12px; }
.grid-2 { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 12px; }
.mini-card {
  background: var(--card);
  border: 1px solid #e2e8f0;
  border-radius: 14px;
  padding: 12px 14px;
  box-shadow: 0 8px 18px rgba(15, 23, 42, 0.05);
}
.mini-card h5, .mini-card h6 { margin: 0 0 6px 0; }
.mini-stat-table { width: 100%; border-collapse: collapse; }
.mini-stat-table td { padding: 3px 6px; font-size: 0.9rem; }
.mini-stat-table td:first-child { font-weight: 700; color: var(--primary); }
.mini-stat-table td:last-child { font-weight: 700; color: var(--away); text-align: right; }
.mini-stat-table td.stat-label { text-align: center; color: #6b7280; font-weight: 600; }
.home-color { color: var(--primary); }
.away-color { color: var(--away); }
.cover-ok { color: #16a34a; font-weight: 800; }
.cover-ko { color: #dc2626; font-weight: 800; }
.cover-neutral { color: #6b7280; font-weight: 700; }
.ou-over { color: #16a34a; font-weight: 800; }
.ou-under { color: #dc2626; font-weight: 800; }
.ou-push { color: #6b7280; font-weight: 700; }
.card-score { font-size: 1.1rem; font-weight: 800; margin-bottom: 4px; }
.match-line { font-weight: 700; color: #0f172a; font-size: 0.98rem; }
.match-sub { color: #475569; font-size: 0.86rem; margin-top: 2px; }
.badge-ah { background: #eef2ff; color: #1d4ed8; padding: 3px 8px; border-radius: 999px; font-weight: 700; font-size: 0.78rem; }
.badge-ou { background: #ecfdf3; color: #047857; padding: 3px 8px; border-radius: 999px; font-weight: 700; font-size: 0.78rem; margin-left: 6px; }
.empty-card { padding: 12px; border: 1px dashed #cbd5e1; border-radius: 12px; background: #f8fafc; color: #475569; }
.market-box { border: 1px dashed #cbd5e1; border-radius: 12px; padding: 12px; background: #f8fafc; }
.hero-row { display: flex; align-items: center; justify-content: space-between; gap: 1rem; flex-wrap: wrap; }
.hero-buttons { display: flex; gap: 0.6rem; flex-wrap: wrap; justify-content: flex-end; }
.btn {
  border-radius: 12px;
  font-weight: 700;
  padding: 0.65rem 1rem;
  border: 1px solid transparent;
  box-shadow: 0 10px 22px rgba(45, 108, 230, 0.25);
  background: linear-gradient(135deg, #2d6ce6, #2156ba);
  color: white;
  cursor: pointer;
  text-decoration: none;
  font-size: 0.95rem;
}
.btn:hover { filter: brightness(1.02); }
.btn.secondary { background: #ecf2ff; color: #2d6ce6; border: 1px solid #d7e3ff; box-shadow: none; }
.pill {
  display: inline-flex;
  align-items: center;
  gap: 6px;
  padding: 6px 10px;
  background: #e9edf7;
  color: #1f2a44;
  border-radius: 10px;
  font-weight: 700;
  font-size: 0.9rem;
}
.notice { margin: 8px 0; padding: 10px 12px; border-radius: 12px; background: #fff7ed; border: 1px solid #fed7aa; color: #9a3412; }
.layout { display: grid; grid-template-columns: minmax(260px, 1fr) 2.6fr; gap: 1.2rem; margin-top: 0.8rem; }
.tabs { display: flex; gap: 6px; margin-bottom: 8px; }
.tabs a { padding: 6px 10px; border-radius: 10px; text-decoration: none; color: #1f2a44; background: #e9edf7; font-weight: 700; font-size: 0.9rem; }
.tabs a.active { background: var(--primary); color: #fff; }
.search input { width: 100%; box-sizing: border-box; padding: 8px 10px; border-radius: 10px; border: 1px solid #d8e2f2; }
.match-list { max-height: calc(100vh - 200px); overflow-y: auto; padding-right: 6px; display: flex; flex-direction: column; gap: 0.5rem; }
.match-item {
  display: block;
  background: #ffffff;
  border: 1px solid #d8e2f2;
  border-radius: 16px;
  padding: 10px 12px;
  box-shadow: 0 12px 28px rgba(15, 23, 42, 0.07);
  transition: all .18s ease;
  text-decoration: none;
}
.match-item:hover { border-color: var(--primary); box-shadow: 0 14px 30px rgba(45, 108, 230, 0.20); transform: translateY(-1px); }
.match-item.selected { border: 2px solid var(--primary); box-shadow: 0 16px 36px rgba(45, 108, 230, 0.25); }
details.options { margin-top: 8px; }
details.options summary { cursor: pointer; font-weight: 700; color: #1f2a44; }
details.options .row { display: flex; gap: 1rem; flex-wrap: wrap; align-items: center; margin-top: 8px; }
pre.raw-json { background: #0f172a; color: #e2e8f0; padding: 12px; border-radius: 12px; overflow: auto; max-height: 420px; font-size: 0.8rem; }
"#;
