// src/specs/analysis.rs
//
// Head-to-head page of one match, as rendered by the browser.
//
//   span.home-name / span.away-name   team names
//   div.final-score                   score (finished matches)
//   span.match-time                   kickoff text
//   table#table_v1                    home team's recent matches
//   table#table_v2                    away team's recent matches
//   table#table_v3                    previous meetings
//
// History rows: league | date | home | score | away | AH | O/U

use crate::core::html::{inner_after_open_tag, strip_tags, table_by_id, tag_blocks, text_of_class};

pub const HOME_RECENT_TABLE: &str = "table_v1";
pub const AWAY_RECENT_TABLE: &str = "table_v2";
pub const H2H_TABLE: &str = "table_v3";

const HISTORY_COLS: usize = 7;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HistoryRow {
    pub league: String,
    pub date: String,
    pub home: String,
    pub score: String,
    pub away: String,
    pub ah: String,
    pub ou: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisPage {
    pub home_name: Option<String>,
    pub away_name: Option<String>,
    pub final_score: Option<String>,
    pub match_time: Option<String>,
    pub home_recent: Vec<HistoryRow>,
    pub away_recent: Vec<HistoryRow>,
    pub h2h: Vec<HistoryRow>,
}

impl AnalysisPage {
    /// True when the page had neither team names nor any history.
    pub fn is_empty(&self) -> bool {
        self.home_name.is_none()
            && self.away_name.is_none()
            && self.home_recent.is_empty()
            && self.away_recent.is_empty()
            && self.h2h.is_empty()
    }
}

pub fn parse_doc(html: &str) -> AnalysisPage {
    AnalysisPage {
        home_name: text_of_class(html, "span", "home-name"),
        away_name: text_of_class(html, "span", "away-name"),
        final_score: text_of_class(html, "div", "final-score"),
        match_time: text_of_class(html, "span", "match-time"),
        home_recent: history_rows(html, HOME_RECENT_TABLE),
        away_recent: history_rows(html, AWAY_RECENT_TABLE),
        h2h: history_rows(html, H2H_TABLE),
    }
}

fn history_rows(html: &str, table_id: &str) -> Vec<HistoryRow> {
    let Some(table) = table_by_id(html, table_id) else {
        logd!("analysis: {table_id} not present");
        return Vec::new();
    };

    let mut rows = Vec::new();
    for tr in tag_blocks(table, "tr") {
        let cells: Vec<String> = tag_blocks(tr, "td")
            .into_iter()
            .map(|td| strip_tags(inner_after_open_tag(td)))
            .collect();
        // header / spacer rows
        if cells.len() < HISTORY_COLS {
            continue;
        }
        let mut it = cells.into_iter();
        let mut next = || it.next().unwrap_or_default();
        let row = HistoryRow {
            league: next(),
            date: next(),
            home: next(),
            score: next(),
            away: next(),
            ah: next(),
            ou: next(),
        };
        if row.home.is_empty() || row.away.is_empty() {
            continue;
        }
        rows.push(row);
    }
    rows
}
