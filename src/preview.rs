// src/preview.rs
//! Per-match analysis documents (`cached_previews/<id>.json`).
//!
//! The files come from the live-analysis helper, from older tooling, or from
//! a user upload, so every field is optional and scalar fields accept either
//! strings or numbers. A field with the wrong shape is dropped instead of
//! failing the whole document; the raw JSON is kept for the "view JSON" pane.
//!
//! Wire names are the historical ones (`recent_indirect_full`,
//! `comparativas_indirectas`, `localia`, ...); Rust names say what they hold.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::data::{Match, value_text};
use crate::error::{PanelError, Result};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Preview {
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub home_name: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub home_team: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub away_name: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub away_team: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub final_score: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub match_time: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub match_date: Option<String>,

    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub home_standings: Option<Standings>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub away_standings: Option<Standings>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub home_ou_stats: Option<OuStats>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub away_ou_stats: Option<OuStats>,

    #[serde(
        rename = "recent_indirect_full",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub recent: Option<RecentHistory>,

    #[serde(
        rename = "comparativas_indirectas",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub comparisons: Option<Comparisons>,

    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub simplified_html: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub market_analysis_html: Option<String>,

    /// Document as it was read (None for previews built in-process).
    #[serde(skip)]
    raw: Option<Value>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Standings {
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub ranking: Option<String>,
    #[serde(rename = "total_pj", default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub played: Option<String>,
    #[serde(rename = "total_v", default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub won: Option<String>,
    #[serde(rename = "total_e", default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub drawn: Option<String>,
    #[serde(rename = "total_d", default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub lost: Option<String>,
    #[serde(rename = "total_gf", default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub goals_for: Option<String>,
    #[serde(rename = "total_gc", default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub goals_against: Option<String>,

    /// Home-only / away-only split label (e.g. "Home"), when the source has one.
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub specific_type: Option<String>,
    #[serde(rename = "specific_pj", default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub specific_played: Option<String>,
    #[serde(rename = "specific_v", default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub specific_won: Option<String>,
    #[serde(rename = "specific_e", default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub specific_drawn: Option<String>,
    #[serde(rename = "specific_d", default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub specific_lost: Option<String>,
    #[serde(rename = "specific_gf", default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub specific_goals_for: Option<String>,
    #[serde(rename = "specific_gc", default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub specific_goals_against: Option<String>,
}

impl Standings {
    pub fn is_empty(&self) -> bool {
        [
            &self.ranking,
            &self.played,
            &self.won,
            &self.drawn,
            &self.lost,
            &self.goals_for,
            &self.goals_against,
            &self.specific_type,
            &self.specific_played,
            &self.specific_won,
            &self.specific_drawn,
            &self.specific_lost,
            &self.specific_goals_for,
            &self.specific_goals_against,
        ]
        .into_iter()
        .all(blank)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OuStats {
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub over_pct: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub under_pct: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub push_pct: Option<String>,
}

impl OuStats {
    pub fn is_empty(&self) -> bool {
        [&self.total, &self.over_pct, &self.under_pct, &self.push_pct].into_iter().all(blank)
    }

    /// Only worth showing when it counts at least one match.
    pub fn has_sample(&self) -> bool {
        matches!(self.total.as_deref().map(str::trim), Some(t) if !t.is_empty() && t != "0")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StatRow {
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub away: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentCard {
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub ah: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub ou: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub cover_status: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec", skip_serializing_if = "Vec::is_empty")]
    pub stats_rows: Vec<StatRow>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub home: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub away: Option<String>,
}

impl RecentCard {
    pub fn is_empty(&self) -> bool {
        self.stats_rows.is_empty()
            && [&self.score, &self.ah, &self.ou, &self.cover_status, &self.date, &self.home, &self.away]
                .into_iter()
                .all(blank)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecentHistory {
    /// Home team's latest home match
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub last_home: Option<RecentCard>,
    /// Away team's latest away match
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub last_away: Option<RecentCard>,
    /// Reference head-to-head
    #[serde(rename = "h2h_col3", default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub h2h: Option<RecentCard>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonCard {
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub score: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub home_team: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub away_team: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub ah: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub ou: Option<String>,
    #[serde(rename = "localia", default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub cover_status: Option<String>,
    #[serde(default, deserialize_with = "lenient_vec", skip_serializing_if = "Vec::is_empty")]
    pub stats_rows: Vec<StatRow>,
    #[serde(default, deserialize_with = "text", skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

impl ComparisonCard {
    pub fn is_empty(&self) -> bool {
        self.stats_rows.is_empty()
            && [
                &self.score,
                &self.home_team,
                &self.away_team,
                &self.ah,
                &self.ou,
                &self.venue,
                &self.cover_status,
                &self.analysis,
            ]
            .into_iter()
            .all(blank)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Comparisons {
    /// Home team vs the away team's last opponent
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub left: Option<ComparisonCard>,
    /// Away team vs the home team's last opponent
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub right: Option<ComparisonCard>,
}

impl Comparisons {
    pub fn left(&self) -> Option<&ComparisonCard> { self.left.as_ref().filter(|c| !c.is_empty()) }

    pub fn right(&self) -> Option<&ComparisonCard> { self.right.as_ref().filter(|c| !c.is_empty()) }

    pub fn is_empty(&self) -> bool { self.left().is_none() && self.right().is_none() }
}

impl RecentHistory {
    pub fn last_home(&self) -> Option<&RecentCard> { self.last_home.as_ref().filter(|c| !c.is_empty()) }

    pub fn last_away(&self) -> Option<&RecentCard> { self.last_away.as_ref().filter(|c| !c.is_empty()) }

    pub fn h2h(&self) -> Option<&RecentCard> { self.h2h.as_ref().filter(|c| !c.is_empty()) }
}

impl Preview {
    pub fn from_value(value: Value, what: &str) -> Result<Self> {
        if !value.is_object() {
            let e = <serde_json::Error as serde::de::Error>::custom("expected a JSON object");
            return Err(PanelError::json(what, e));
        }
        let mut p: Preview =
            serde_json::from_value(value.clone()).map_err(|e| PanelError::json(what, e))?;
        p.raw = Some(value);
        Ok(p)
    }

    pub fn from_slice(bytes: &[u8], what: &str) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes).map_err(|e| PanelError::json(what, e))?;
        Self::from_value(value, what)
    }

    /// JSON shown in the raw pane / served by the API.
    pub fn raw_json(&self) -> Value {
        match &self.raw {
            Some(v) => v.clone(),
            None => serde_json::to_value(self).unwrap_or(Value::Null),
        }
    }

    pub fn home_standings(&self) -> Option<&Standings> {
        self.home_standings.as_ref().filter(|s| !s.is_empty())
    }

    pub fn away_standings(&self) -> Option<&Standings> {
        self.away_standings.as_ref().filter(|s| !s.is_empty())
    }

    pub fn home_ou(&self) -> Option<&OuStats> { self.home_ou_stats.as_ref().filter(|o| !o.is_empty()) }

    pub fn away_ou(&self) -> Option<&OuStats> { self.away_ou_stats.as_ref().filter(|o| !o.is_empty()) }

    /// Blank sections (`{}` or all-null fields) count as missing.
    pub fn has_standings_data(&self) -> bool {
        self.home_standings().is_some()
            || self.away_standings().is_some()
            || self.home_ou().is_some()
            || self.away_ou().is_some()
    }

    /// Trusted market/H2H fragment, if the document carries one.
    pub fn market_html(&self) -> Option<&str> {
        self.simplified_html
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.market_analysis_html.as_deref().filter(|s| !s.is_empty()))
    }
}

/// Everything the panel header shows, with the preview taking precedence
/// over the list entry field by field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelHeader {
    pub id: String,
    pub home: String,
    pub away: String,
    pub handicap: String,
    pub goal_line: String,
    pub score: String,
    pub time: String,
}

impl PanelHeader {
    pub fn resolve(m: &Match, preview: Option<&Preview>) -> Self {
        let pick = |a: Option<&String>, b: Option<&String>| {
            a.filter(|s| !s.is_empty())
                .or_else(|| b.filter(|s| !s.is_empty()))
                .cloned()
        };
        let p = preview;
        Self {
            id: if m.id.is_empty() { s!("-") } else { m.id.clone() },
            home: pick(p.and_then(|p| p.home_name.as_ref()), p.and_then(|p| p.home_team.as_ref()))
                .unwrap_or_else(|| m.home_team.clone()),
            away: pick(p.and_then(|p| p.away_name.as_ref()), p.and_then(|p| p.away_team.as_ref()))
                .unwrap_or_else(|| m.away_team.clone()),
            handicap: m.handicap.clone(),
            goal_line: m.goal_line.clone(),
            score: pick(p.and_then(|p| p.final_score.as_ref()), m.score.as_ref())
                .unwrap_or_else(|| s!("-")),
            time: pick(p.and_then(|p| p.match_time.as_ref()), p.and_then(|p| p.match_date.as_ref()))
                .unwrap_or_else(|| m.time.clone()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoverStatus {
    Covered,
    NotCovered,
    Push,
    Other(String),
}

impl CoverStatus {
    /// `None` for blank input (no badge).
    pub fn classify(raw: &str) -> Option<Self> {
        let up = raw.trim().to_uppercase();
        if up.is_empty() {
            return None;
        }
        Some(match up.as_str() {
            "CUBIERTO" => CoverStatus::Covered,
            "NO CUBIERTO" | "NO_CUBIERTO" => CoverStatus::NotCovered,
            "PUSH" | "NULO" | "NEUTRO" => CoverStatus::Push,
            _ => CoverStatus::Other(up),
        })
    }

    /// Value written into preview files.
    pub fn wire(&self) -> &str {
        match self {
            CoverStatus::Covered => "CUBIERTO",
            CoverStatus::NotCovered => "NO CUBIERTO",
            CoverStatus::Push => "PUSH",
            CoverStatus::Other(s) => s,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CoverStatus::Covered => "COVERED",
            CoverStatus::NotCovered => "NOT COVERED",
            CoverStatus::Push => "PUSH",
            CoverStatus::Other(s) => s,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            CoverStatus::Covered => "cover-ok",
            CoverStatus::NotCovered => "cover-ko",
            CoverStatus::Push | CoverStatus::Other(_) => "cover-neutral",
        }
    }
}

/* ---------------- lenient field readers ---------------- */

fn blank(v: &Option<String>) -> bool {
    v.as_deref().is_none_or(|s| s.trim().is_empty())
}

fn text<'de, D>(d: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(v.as_ref().and_then(value_text))
}

fn lenient<'de, D, T>(d: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(v
        .filter(|v| v.as_object().is_some_and(|o| !o.is_empty()))
        .and_then(|v| serde_json::from_value(v).ok()))
}

fn lenient_vec<'de, D, T>(d: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let v = Option::<Value>::deserialize(d)?;
    Ok(match v {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|i| serde_json::from_value(i).ok())
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_match() -> Match {
        Match::normalize(
            json!({
                "id": "77", "home_team": "Lazio", "away_team": "Roma",
                "handicap": "-0.25", "goal_line": "2.5", "time": "2025-04-13 20:45:00"
            })
            .as_object()
            .unwrap(),
        )
    }

    #[test]
    fn scalars_accept_numbers_and_bad_shapes_are_dropped() {
        let p = Preview::from_value(
            json!({
                "home_standings": {"ranking": 3, "total_pj": "30"},
                "away_standings": "not an object",
                "home_ou_stats": {"total": 10, "over_pct": 60.0},
                "recent_indirect_full": {"last_home": {"score": "2-1", "stats_rows": [{"home": 5, "label": "Shots", "away": 3}, 4]}}
            }),
            "test",
        )
        .unwrap();
        let hs = p.home_standings.as_ref().unwrap();
        assert_eq!(hs.ranking.as_deref(), Some("3"));
        assert_eq!(hs.played.as_deref(), Some("30"));
        assert!(p.away_standings.is_none());
        assert_eq!(p.home_ou_stats.as_ref().unwrap().over_pct.as_deref(), Some("60.0"));
        let lh = p.recent.as_ref().unwrap().last_home.as_ref().unwrap();
        assert_eq!(lh.stats_rows.len(), 1);
        assert_eq!(lh.stats_rows[0].home.as_deref(), Some("5"));
    }

    #[test]
    fn raw_json_is_the_original_document() {
        let doc = json!({"final_score": "1-1", "custom": {"x": 1}});
        let p = Preview::from_value(doc.clone(), "t").unwrap();
        assert_eq!(p.raw_json(), doc);
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(Preview::from_slice(b"[]", "upload").is_err());
        assert!(Preview::from_slice(b"{oops", "upload").is_err());
    }

    #[test]
    fn header_prefers_preview_fields() {
        let m = sample_match();
        let p = Preview::from_value(
            json!({"home_team": "SS Lazio", "away_name": "AS Roma", "final_score": "", "match_date": "13/04"}),
            "t",
        )
        .unwrap();
        let h = PanelHeader::resolve(&m, Some(&p));
        assert_eq!(h.home, "SS Lazio");
        assert_eq!(h.away, "AS Roma");
        assert_eq!(h.score, "-");
        assert_eq!(h.time, "13/04");
        assert_eq!(h.id, "77");

        let bare = PanelHeader::resolve(&m, None);
        assert_eq!(bare.home, "Lazio");
        assert_eq!(bare.time, "13/04 20:45");
    }

    #[test]
    fn cover_classification() {
        assert_eq!(CoverStatus::classify("cubierto"), Some(CoverStatus::Covered));
        assert_eq!(CoverStatus::classify("No_Cubierto"), Some(CoverStatus::NotCovered));
        assert_eq!(CoverStatus::classify("nulo"), Some(CoverStatus::Push));
        assert_eq!(CoverStatus::classify("neutro").unwrap().label(), "PUSH");
        assert_eq!(
            CoverStatus::classify("half win"),
            Some(CoverStatus::Other(s!("HALF WIN")))
        );
        assert_eq!(CoverStatus::classify("  "), None);
    }

    #[test]
    fn ou_sample_requires_nonzero_total() {
        let mut s = OuStats::default();
        assert!(!s.has_sample());
        s.total = Some(s!("0"));
        assert!(!s.has_sample());
        s.total = Some(s!("8"));
        assert!(s.has_sample());
    }

    #[test]
    fn empty_sections_count_as_missing() {
        let p = Preview::from_value(
            json!({
                "home_standings": {},
                "away_ou_stats": {"total": null, "over_pct": ""},
                "recent_indirect_full": {"last_home": {}, "last_away": {"score": "0-2"}},
                "comparativas_indirectas": {"left": {}, "right": {"localia": null}}
            }),
            "t",
        )
        .unwrap();
        assert!(p.home_standings.is_none());
        assert!(!p.has_standings_data());
        let r = p.recent.as_ref().unwrap();
        assert!(r.last_home().is_none());
        assert_eq!(r.last_away().and_then(|c| c.score.as_deref()), Some("0-2"));
        assert!(p.comparisons.as_ref().unwrap().is_empty());

        let p = Preview::from_value(json!({"away_standings": {"ranking": 4}}), "t").unwrap();
        assert!(p.has_standings_data());
    }

    #[test]
    fn market_html_prefers_simplified() {
        let p = Preview::from_value(
            json!({"simplified_html": "", "market_analysis_html": "<b>m</b>"}),
            "t",
        )
        .unwrap();
        assert_eq!(p.market_html(), Some("<b>m</b>"));
    }
}
