// src/specs/match_list.rs
//
// Fixture / result list pages. One match per `<tr id="tr1_<id>">`.
//
// Cell lookup is by class first (`time`, `home`, `score`, `away`,
// `handicap`, `goal-line`); pages that drop the classes are read
// positionally in the same order.

use chrono::NaiveDateTime;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::consts::STORE_TIME_FMT;
use crate::core::html::{attr, has_class, inner_after_open_tag, opener, strip_tags, tag_blocks};
use crate::core::sanitize::digits_after;
use crate::data::{Match, parse_datetime};

const ROW_PREFIX: &str = "tr1_";
const KICKOFF_ATTR_FMT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RawMatch {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    pub handicap: String,
    pub goal_line: String,
    /// Cell text as shown on the page.
    pub time: String,
    /// From `data-t` when present, else parsed from the cell text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_obj: Option<String>,
}

impl RawMatch {
    /// Through the same normalization as data.json entries.
    pub fn to_match(&self) -> Match {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => Match::normalize(&map),
            _ => Match::normalize(&Map::new()),
        }
    }
}

/// Discriminants are the positional column indexes.
#[derive(Clone, Copy)]
enum Col {
    Time,
    Home,
    Score,
    Away,
    Handicap,
    GoalLine,
}

impl Col {
    fn class(self) -> &'static str {
        match self {
            Col::Time => "time",
            Col::Home => "home",
            Col::Score => "score",
            Col::Away => "away",
            Col::Handicap => "handicap",
            Col::GoalLine => "goal-line",
        }
    }
}

/// Parse up to `limit` matches from a list page.
pub fn parse_doc(html: &str, limit: usize) -> Vec<RawMatch> {
    let mut out = Vec::new();
    if limit == 0 {
        return out;
    }
    for tr in tag_blocks(html, "tr") {
        let Some(id) = attr(opener(tr), "id").and_then(|v| digits_after(&v, ROW_PREFIX)) else {
            continue;
        };
        let cells = tag_blocks(tr, "td");
        if cells.is_empty() {
            continue;
        }
        let classed = cells.iter().any(|c| has_class(c, "home"));

        let cell = |col: Col| {
            if classed {
                cells.iter().copied().find(|c| has_class(c, col.class()))
            } else {
                cells.get(col as usize).copied()
            }
        };
        let text = |col: Col| cell(col).map(|c| strip_tags(inner_after_open_tag(c))).unwrap_or_default();

        let home_team = text(Col::Home);
        let away_team = text(Col::Away);
        if home_team.is_empty() || away_team.is_empty() {
            logd!("match_list: row {id} without team names, skipped");
            continue;
        }

        let time = text(Col::Time);
        let time_obj = cell(Col::Time)
            .and_then(|c| attr(opener(c), "data-t"))
            .and_then(|t| NaiveDateTime::parse_from_str(t.trim(), KICKOFF_ATTR_FMT).ok())
            .or_else(|| parse_datetime(&Value::String(time.clone())))
            .map(|dt| dt.format(STORE_TIME_FMT).to_string());

        let score = Some(text(Col::Score)).filter(|s| looks_like_score(s));

        out.push(RawMatch {
            id,
            home_team,
            away_team,
            score,
            handicap: text(Col::Handicap),
            goal_line: text(Col::GoalLine),
            time,
            time_obj,
        });
        if out.len() >= limit {
            break;
        }
    }
    out
}

/// "2-1", "0 : 0". Upcoming rows carry "-" or "vs" in the score cell.
fn looks_like_score(s: &str) -> bool {
    crate::lines::parse_score(s).is_some()
}
