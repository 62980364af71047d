// src/data.rs
//
// Match records as the viewers see them.
//
// - Match:   one normalized entry of data.json (every display field present).
// - Dataset: the two lists (upcoming / finished) a session works on.
// - match_view: tab pick → team filter → kickoff sort, borrowed from the
//   Dataset so the UI never clones rows just to draw them.
//
// Missing fields become "N/A"; unknown ones are ignored.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

use crate::config::consts::{DISPLAY_TIME_FMT, NA, STORE_TIME_FMT};
use crate::error::{PanelError, Result};

pub const UPCOMING_KEY: &str = "upcoming_matches";
pub const FINISHED_KEY: &str = "finished_matches";

/// Exact formats tried first, then the ISO-8601 family.
const EXACT_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];
const ISO_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    pub id: String,
    pub home_team: String,
    pub away_team: String,
    pub handicap: String,
    pub goal_line: String,
    pub score: Option<String>,
    pub kickoff: Option<NaiveDateTime>,
    /// Display time: "dd/mm HH:MM" when the kickoff parsed, raw text otherwise.
    pub time: String,
}

impl Match {
    pub fn normalize(entry: &Map<String, Value>) -> Self {
        let text = |key: &str| entry.get(key).and_then(value_text);

        let kickoff = entry
            .get("time_obj")
            .and_then(parse_datetime)
            .or_else(|| entry.get("time").and_then(parse_datetime));

        let time = match kickoff {
            Some(dt) => dt.format(DISPLAY_TIME_FMT).to_string(),
            None => text("time").unwrap_or_else(|| s!(NA)),
        };

        Self {
            id: text("id").unwrap_or_default(),
            home_team: text("home_team").unwrap_or_else(|| s!(NA)),
            away_team: text("away_team").unwrap_or_else(|| s!(NA)),
            handicap: text("handicap").unwrap_or_else(|| s!(NA)),
            goal_line: text("goal_line")
                .or_else(|| text("goal_line_decimal"))
                .unwrap_or_else(|| s!(NA)),
            score: text("score").filter(|s| !s.trim().is_empty()),
            kickoff,
            time,
        }
    }

    /// Two-line list label: time + teams, then the market lines.
    pub fn label(&self) -> String {
        format!(
            "{} | {} vs {}\nAH {}   /   O/U {}",
            self.time, self.home_team, self.away_team, self.handicap, self.goal_line
        )
    }

    pub fn matches_query(&self, needle_lc: &str) -> bool {
        self.home_team.to_lowercase().contains(needle_lc)
            || self.away_team.to_lowercase().contains(needle_lc)
    }

    /// Back to the data.json entry shape.
    pub fn to_raw(&self) -> Value {
        let mut m = Map::new();
        m.insert(s!("id"), Value::String(self.id.clone()));
        m.insert(s!("home_team"), Value::String(self.home_team.clone()));
        m.insert(s!("away_team"), Value::String(self.away_team.clone()));
        m.insert(s!("handicap"), Value::String(self.handicap.clone()));
        m.insert(s!("goal_line"), Value::String(self.goal_line.clone()));
        m.insert(
            s!("score"),
            self.score.clone().map(Value::String).unwrap_or(Value::Null),
        );
        m.insert(s!("time"), Value::String(self.time.clone()));
        if let Some(dt) = self.kickoff {
            m.insert(s!("time_obj"), Value::String(dt.format(STORE_TIME_FMT).to_string()));
        }
        Value::Object(m)
    }
}

/// Text for a scalar JSON value. `null` counts as missing.
pub fn value_text(v: &Value) -> Option<String> {
    match v {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Parse the date/time shapes seen in data.json. Non-strings never parse.
pub fn parse_datetime(value: &Value) -> Option<NaiveDateTime> {
    let s = value.as_str()?.trim();
    if s.is_empty() {
        return None;
    }
    for fmt in EXACT_FORMATS.iter().chain(ISO_FORMATS) {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    // Offset-carrying timestamps keep their wall-clock time.
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dataset {
    pub upcoming: Vec<Match>,
    pub finished: Vec<Match>,
}

impl Dataset {
    pub fn empty() -> Self { Self::default() }

    pub fn from_value(value: &Value) -> Self {
        let list = |key: &str| -> Vec<Match> {
            value
                .get(key)
                .and_then(Value::as_array)
                .map(|arr| arr.iter().filter_map(Value::as_object).map(Match::normalize).collect())
                .unwrap_or_default()
        };
        Self { upcoming: list(UPCOMING_KEY), finished: list(FINISHED_KEY) }
    }

    /// Parse raw data.json bytes. `what` names the source in error messages.
    pub fn from_slice(bytes: &[u8], what: &str) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes).map_err(|e| PanelError::json(what, e))?;
        if !value.is_object() {
            let e = <serde_json::Error as serde::de::Error>::custom(format!(
                "expected an object with \"{UPCOMING_KEY}\" / \"{FINISHED_KEY}\""
            ));
            return Err(PanelError::json(what, e));
        }
        Ok(Self::from_value(&value))
    }

    pub fn to_value(&self) -> Value {
        let mut m = Map::new();
        m.insert(s!(UPCOMING_KEY), Value::Array(self.upcoming.iter().map(Match::to_raw).collect()));
        m.insert(s!(FINISHED_KEY), Value::Array(self.finished.iter().map(Match::to_raw).collect()));
        Value::Object(m)
    }

    /// Upcoming first, then finished.
    pub fn all(&self) -> impl Iterator<Item = &Match> {
        self.upcoming.iter().chain(self.finished.iter())
    }

    pub fn counts(&self) -> (usize, usize) {
        (self.upcoming.len(), self.finished.len())
    }

    pub fn is_empty(&self) -> bool {
        self.upcoming.is_empty() && self.finished.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Match> {
        find_match_by_id(self.all(), id)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ListTab {
    #[default]
    Upcoming,
    Finished,
    All,
}

impl ListTab {
    pub const ALL: [ListTab; 3] = [ListTab::Upcoming, ListTab::Finished, ListTab::All];

    pub fn label(self) -> &'static str {
        match self {
            ListTab::Upcoming => "Upcoming",
            ListTab::Finished => "Finished",
            ListTab::All => "All",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ListTab::Upcoming => "upcoming",
            ListTab::Finished => "finished",
            ListTab::All => "all",
        }
    }
}

impl fmt::Display for ListTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListTab {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" | "" => Ok(ListTab::Upcoming),
            "finished" => Ok(ListTab::Finished),
            "all" => Ok(ListTab::All),
            other => Err(format!("Unknown list: {other} (upcoming|finished|all)")),
        }
    }
}

/// Case-insensitive team-name filter. Blank query keeps everything.
pub fn filter_matches<'a, I>(matches: I, query: &str) -> Vec<&'a Match>
where
    I: IntoIterator<Item = &'a Match>,
{
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return matches.into_iter().collect();
    }
    matches.into_iter().filter(|m| m.matches_query(&q)).collect()
}

/// Stable sort by kickoff; matches without a parsed kickoff go last.
pub fn sort_matches(matches: &mut [&Match]) {
    matches.sort_by_key(|m| (m.kickoff.is_none(), m.kickoff));
}

pub fn find_match_by_id<'a, I>(matches: I, id: &str) -> Option<&'a Match>
where
    I: IntoIterator<Item = &'a Match>,
{
    if id.is_empty() {
        return None;
    }
    matches.into_iter().find(|m| m.id == id)
}

/// The highlighted entry: the remembered id when it is still listed, else the first row.
pub fn effective_selection<'a>(view: &[&'a Match], selected: Option<&str>) -> Option<&'a Match> {
    selected
        .and_then(|id| view.iter().copied().find(|m| m.id == id))
        .or_else(|| view.first().copied())
}

/// The list as displayed: pick tab, filter by team, sort by kickoff.
pub fn match_view<'a>(ds: &'a Dataset, tab: ListTab, query: &str) -> Vec<&'a Match> {
    let mut out = match tab {
        ListTab::Upcoming => filter_matches(&ds.upcoming, query),
        ListTab::Finished => filter_matches(&ds.finished, query),
        ListTab::All => filter_matches(ds.all(), query),
    };
    sort_matches(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn m(v: Value) -> Match {
        Match::normalize(v.as_object().unwrap())
    }

    #[test]
    fn normalize_fills_defaults() {
        let x = m(json!({}));
        assert_eq!(x.id, "");
        assert_eq!(x.home_team, "N/A");
        assert_eq!(x.away_team, "N/A");
        assert_eq!(x.handicap, "N/A");
        assert_eq!(x.goal_line, "N/A");
        assert_eq!(x.score, None);
        assert_eq!(x.kickoff, None);
        assert_eq!(x.time, "N/A");
    }

    #[test]
    fn normalize_numeric_id_and_goal_line_fallback() {
        let x = m(json!({"id": 2696131, "goal_line_decimal": 2.5, "handicap": -0.25}));
        assert_eq!(x.id, "2696131");
        assert_eq!(x.goal_line, "2.5");
        assert_eq!(x.handicap, "-0.25");
    }

    #[test]
    fn time_obj_wins_over_time() {
        let x = m(json!({"time_obj": "2025-03-01T18:30:00", "time": "2025-03-02 10:00:00"}));
        assert_eq!(x.time, "01/03 18:30");
        let y = m(json!({"time_obj": "garbage", "time": "2025-03-02 10:00:00"}));
        assert_eq!(y.time, "02/03 10:00");
    }

    #[test]
    fn unparsable_time_is_kept_verbatim() {
        let x = m(json!({"time": "Postp."}));
        assert_eq!(x.kickoff, None);
        assert_eq!(x.time, "Postp.");
    }

    #[test]
    fn iso_variants_parse() {
        for s in [
            "2025-03-01T18:30:00.250",
            "2025-03-01T18:30",
            "2025-03-01T18:30:00+02:00",
        ] {
            let dt = parse_datetime(&json!(s)).unwrap_or_else(|| panic!("{s}"));
            assert_eq!(dt.format("%d/%m %H:%M").to_string(), "01/03 18:30");
        }
        let d = parse_datetime(&json!("2025-03-01")).unwrap();
        assert_eq!(d.format("%H:%M").to_string(), "00:00");
        assert_eq!(parse_datetime(&json!(12345)), None);
    }

    #[test]
    fn dataset_skips_non_objects_and_missing_keys() {
        let ds = Dataset::from_value(&json!({
            "upcoming_matches": [{"id": "1"}, 7, "x", null, {"id": "2"}]
        }));
        assert_eq!(ds.counts(), (2, 0));
    }

    #[test]
    fn dataset_rejects_top_level_array() {
        let err = Dataset::from_slice(b"[1,2]", "upload").unwrap_err();
        assert!(matches!(err, PanelError::Json { .. }));
    }

    #[test]
    fn filter_is_case_insensitive_and_trimmed() {
        let a = m(json!({"home_team": "Real Madrid", "away_team": "Getafe"}));
        let b = m(json!({"home_team": "Sevilla", "away_team": "Real Betis"}));
        let c = m(json!({"home_team": "Osasuna", "away_team": "Girona"}));
        let all = vec![a, b, c];
        assert_eq!(filter_matches(&all, "  REAL ").len(), 2);
        assert_eq!(filter_matches(&all, "gir").len(), 1);
        assert_eq!(filter_matches(&all, "   ").len(), 3);
    }

    #[test]
    fn sort_puts_unknown_kickoff_last_and_is_stable() {
        let late = m(json!({"id": "late", "time": "2025-03-02 10:00:00"}));
        let none1 = m(json!({"id": "n1", "time": "?"}));
        let early = m(json!({"id": "early", "time": "2025-03-01 10:00:00"}));
        let none2 = m(json!({"id": "n2"}));
        let all = vec![late, none1, early, none2];
        let mut v: Vec<&Match> = all.iter().collect();
        sort_matches(&mut v);
        let ids: Vec<&str> = v.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["early", "late", "n1", "n2"]);
    }

    #[test]
    fn label_has_two_lines() {
        let x = m(json!({
            "time": "2025-03-01 18:30:00", "home_team": "A", "away_team": "B",
            "handicap": "-0.5", "goal_line": "2.5"
        }));
        assert_eq!(x.label(), "01/03 18:30 | A vs B\nAH -0.5   /   O/U 2.5");
    }

    #[test]
    fn find_by_id_ignores_empty_id() {
        let ds = Dataset::from_value(&json!({
            "upcoming_matches": [{"home_team": "no id"}],
            "finished_matches": [{"id": 9}]
        }));
        assert!(ds.find("").is_none());
        assert_eq!(ds.find("9").map(|m| m.id.as_str()), Some("9"));
    }

    #[test]
    fn view_all_spans_both_lists() {
        let ds = Dataset::from_value(&json!({
            "upcoming_matches": [{"id": "u", "home_team": "Alpha", "time": "2025-05-01 12:00:00"}],
            "finished_matches": [{"id": "f", "home_team": "Alpha", "time": "2025-04-01 12:00:00"}]
        }));
        let v = match_view(&ds, ListTab::All, "alp");
        assert_eq!(v.iter().map(|m| m.id.as_str()).collect::<Vec<_>>(), ["f", "u"]);
        assert_eq!(match_view(&ds, ListTab::Finished, "").len(), 1);
    }

    #[test]
    fn raw_round_trip_keeps_kickoff() {
        let x = m(json!({"id": "5", "time_obj": "2025-03-01T18:30:00", "score": "1-0"}));
        let back = m(x.to_raw());
        assert_eq!(back, x);
    }

    #[test]
    fn selection_falls_back_to_first_row() {
        let ds = Dataset::from_value(&json!({
            "upcoming_matches": [{"id": "a"}, {"id": "b"}]
        }));
        let v = match_view(&ds, ListTab::Upcoming, "");
        assert_eq!(effective_selection(&v, Some("b")).map(|m| m.id.as_str()), Some("b"));
        assert_eq!(effective_selection(&v, Some("gone")).map(|m| m.id.as_str()), Some("a"));
        assert_eq!(effective_selection(&v, None).map(|m| m.id.as_str()), Some("a"));
        assert!(effective_selection(&[], Some("a")).is_none());
    }

    #[test]
    fn tab_parse() {
        assert_eq!("Finished".parse::<ListTab>(), Ok(ListTab::Finished));
        assert_eq!("".parse::<ListTab>(), Ok(ListTab::Upcoming));
        assert!("live".parse::<ListTab>().is_err());
    }
}
