// src/lines.rs
//! Asian handicap / over-under settlement for finished matches.
//!
//! Lines are quoted from the home side: `-0.5` means home gives half a goal.
//! Split lines (`0/0.5`, `-0.5/1`) are the average of both halves; a
//! quarter result (half win / half loss) settles by its sign, so only an
//! exact zero is a push.

use crate::preview::{CoverStatus, OuStats};

const EPS: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OuOutcome {
    Over,
    Under,
    Push,
}

/// "-0.5", "+1", "0/0.5", "-0.5/1", "2.5/3" → f64. Anything else → None.
pub fn parse_line(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    let mut negative = false;
    let mut sum = 0.0;
    let mut n = 0u32;
    for part in s.split('/') {
        let p = part.trim();
        let p = p.strip_prefix('+').unwrap_or(p);
        let v: f64 = p.parse().ok().filter(|v: &f64| v.is_finite())?;
        if v < 0.0 || p.starts_with('-') {
            negative = true;
        }
        sum += v.abs();
        n += 1;
    }
    if n == 0 || n > 2 {
        return None;
    }
    let mag = sum / n as f64;
    Some(if negative { -mag } else { mag })
}

/// Full-time score from "2-1", "2 - 1", "2:1" or "2-1(1-0)".
pub fn parse_score(raw: &str) -> Option<(u32, u32)> {
    let ft = raw.split('(').next()?.trim();
    let (h, a) = ft.split_once('-').or_else(|| ft.split_once(':'))?;
    Some((h.trim().parse().ok()?, a.trim().parse().ok()?))
}

/// Did `side` cover the home-quoted `line` given the final score?
pub fn cover_status(score: (u32, u32), line: f64, side: Side) -> CoverStatus {
    let (h, a) = (score.0 as f64, score.1 as f64);
    let v = match side {
        Side::Home => (h - a) + line,
        Side::Away => (a - h) - line,
    };
    if v > EPS {
        CoverStatus::Covered
    } else if v < -EPS {
        CoverStatus::NotCovered
    } else {
        CoverStatus::Push
    }
}

/// Text-level convenience: `None` when either the score or the line won't parse.
pub fn cover_from_text(score: &str, line: &str, side: Side) -> Option<CoverStatus> {
    Some(cover_status(parse_score(score)?, parse_line(line)?, side))
}

pub fn ou_outcome(score: (u32, u32), line: f64) -> OuOutcome {
    let total = (score.0 + score.1) as f64;
    if total - line > EPS {
        OuOutcome::Over
    } else if line - total > EPS {
        OuOutcome::Under
    } else {
        OuOutcome::Push
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OuTally {
    pub over: u32,
    pub under: u32,
    pub push: u32,
}

impl OuTally {
    pub fn add(&mut self, o: OuOutcome) {
        match o {
            OuOutcome::Over => self.over += 1,
            OuOutcome::Under => self.under += 1,
            OuOutcome::Push => self.push += 1,
        }
    }

    /// Tally (score, line) text pairs, skipping rows where either is unreadable.
    pub fn from_rows<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut t = Self::default();
        for (score, line) in rows {
            if let (Some(sc), Some(l)) = (parse_score(score), parse_line(line)) {
                t.add(ou_outcome(sc, l));
            }
        }
        t
    }

    pub fn total(&self) -> u32 { self.over + self.under + self.push }

    /// Percentages are rounded independently, so they may not sum to exactly 100.
    pub fn to_stats(&self) -> OuStats {
        let total = self.total();
        let pct = |n: u32| -> String {
            if total == 0 { s!("0") } else { ((n as f64 * 100.0 / total as f64).round() as u32).to_string() }
        };
        OuStats {
            total: Some(total.to_string()),
            over_pct: Some(pct(self.over)),
            under_pct: Some(pct(self.under)),
            push_pct: Some(pct(self.push)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_parse() {
        assert_eq!(parse_line("-0.5"), Some(-0.5));
        assert_eq!(parse_line("+1"), Some(1.0));
        assert_eq!(parse_line("0/0.5"), Some(0.25));
        assert_eq!(parse_line("-0.5/1"), Some(-0.75));
        assert_eq!(parse_line("0/-0.5"), Some(-0.25));
        assert_eq!(parse_line("2.5/3"), Some(2.75));
        assert_eq!(parse_line("N/A"), None);
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("1/2/3"), None);
    }

    #[test]
    fn non_finite_lines_are_rejected() {
        for raw in ["NaN", "nan", "inf", "-inf", "+Infinity", "0/NaN", "inf/0.5"] {
            assert_eq!(parse_line(raw), None, "{raw}");
        }
    }

    #[test]
    fn scores_parse() {
        assert_eq!(parse_score("2-1"), Some((2, 1)));
        assert_eq!(parse_score(" 0 - 3 "), Some((0, 3)));
        assert_eq!(parse_score("1:1"), Some((1, 1)));
        assert_eq!(parse_score("2-1(1-0)"), Some((2, 1)));
        assert_eq!(parse_score("-"), None);
        assert_eq!(parse_score("vs"), None);
    }

    #[test]
    fn home_cover() {
        // home -0.5, wins 1-0 → covered
        assert_eq!(cover_status((1, 0), -0.5, Side::Home), CoverStatus::Covered);
        // home -1, wins 1-0 → push
        assert_eq!(cover_status((1, 0), -1.0, Side::Home), CoverStatus::Push);
        // home -0.75, wins 1-0 → half win counts as covered
        assert_eq!(cover_status((1, 0), -0.75, Side::Home), CoverStatus::Covered);
        // home -0.25, draw → half loss
        assert_eq!(cover_status((0, 0), -0.25, Side::Home), CoverStatus::NotCovered);
    }

    #[test]
    fn away_cover_uses_negated_line() {
        // home -0.5 means away +0.5; draw → away covers
        assert_eq!(cover_status((1, 1), -0.5, Side::Away), CoverStatus::Covered);
        // home +1 means away -1; away wins by 1 → push
        assert_eq!(cover_status((0, 1), 1.0, Side::Away), CoverStatus::Push);
        assert_eq!(cover_from_text("2-0", "0", Side::Away), Some(CoverStatus::NotCovered));
        assert_eq!(cover_from_text("2-0", "", Side::Away), None);
    }

    #[test]
    fn over_under() {
        assert_eq!(ou_outcome((2, 1), 2.5), OuOutcome::Over);
        assert_eq!(ou_outcome((1, 1), 2.5), OuOutcome::Under);
        assert_eq!(ou_outcome((2, 1), 3.0), OuOutcome::Push);
        assert_eq!(ou_outcome((2, 1), 2.75), OuOutcome::Over);
    }

    #[test]
    fn tally_percentages() {
        let t = OuTally::from_rows([
            ("2-1", "2.5"),
            ("0-0", "2.5"),
            ("3-0", "3"),
            ("bad", "2.5"),
            ("1-2(0-1)", "2.5/3"),
        ]);
        assert_eq!(t, OuTally { over: 2, under: 1, push: 1 });
        let s = t.to_stats();
        assert_eq!(s.total.as_deref(), Some("4"));
        assert_eq!(s.over_pct.as_deref(), Some("50"));
        assert_eq!(s.under_pct.as_deref(), Some("25"));
        assert_eq!(s.push_pct.as_deref(), Some("25"));
    }
}
