// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sol-tagged Mars clock values and their representations.
//!
//! A [`SolTime`] is a sol number plus a time of day on the 24-hour Mars
//! clock.  It is produced by decomposing a real-valued sol count: the integer
//! part is the sol, and the fraction is split by successive
//! multiply–floor–subtract at bases 24, 60, 60 and 10⁶.  Every stage
//! truncates, so a component can never roll over (no `SS = 60`).
//!
//! The date-string form is `SSSSTHH:MM:SS.ffffff`; the fractional second is
//! separated by a period.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::{MarsTimeError, Result};

/// A sol number and a time of day on the Mars clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SolTime {
    pub sol: i64,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub microsecond: u32,
}

/// Local Mean Solar Time since a mission's sol origin.
pub type Lmst = SolTime;

/// Local True Solar Time, tagged with the mission sol.
pub type Ltst = SolTime;

impl SolTime {
    /// Build a validated value.
    ///
    /// `sol` must be non-negative and each component within its natural
    /// range (`0–23`, `0–59`, `0–59`, `0–999999`).
    pub fn new(sol: i64, hour: u32, minute: u32, second: u32, microsecond: u32) -> Result<Self> {
        let value = Self {
            sol,
            hour,
            minute,
            second,
            microsecond,
        };
        value.validate()?;
        Ok(value)
    }

    /// Midnight at the start of `sol`.
    pub fn start_of_sol(sol: i64) -> Result<Self> {
        Self::new(sol, 0, 0, 0, 0)
    }

    /// Check the range invariants of every component.
    pub fn validate(&self) -> Result<()> {
        if self.sol < 0 {
            return Err(MarsTimeError::invalid("sol (must be >= 0)", self.sol));
        }
        if self.hour > 23 {
            return Err(MarsTimeError::invalid("hour (0-23)", self.hour));
        }
        if self.minute > 59 {
            return Err(MarsTimeError::invalid("minute (0-59)", self.minute));
        }
        if self.second > 59 {
            return Err(MarsTimeError::invalid("second (0-59)", self.second));
        }
        if self.microsecond > 999_999 {
            return Err(MarsTimeError::invalid(
                "microsecond (0-999999)",
                self.microsecond,
            ));
        }
        Ok(())
    }

    /// Decompose a real-valued sol count, truncating at every stage.
    ///
    /// Negative counts decompose with a negative sol and a forward time of
    /// day (`-0.25` → sol `-1`, `18:00`); callers that require `sol >= 0`
    /// must [`validate`](Self::validate).
    pub fn from_sol_count(sols: f64) -> Self {
        let mut sol = sols.floor();
        let mut frac = sols - sol;
        if frac >= 1.0 {
            sol += 1.0;
            frac = 0.0;
        }
        let (hour, rest) = split(frac, 24.0, 23);
        let (minute, rest) = split(rest, 60.0, 59);
        let (second, rest) = split(rest, 60.0, 59);
        let (microsecond, _) = split(rest, 1e6, 999_999);
        Self {
            sol: sol as i64,
            hour,
            minute,
            second,
            microsecond,
        }
    }

    /// Build from a sol number and decimal hours in `[0, 24)`.
    pub fn from_hours(sol: i64, hours: f64) -> Self {
        let mut value = Self::from_sol_count(hours / 24.0);
        value.sol += sol;
        value
    }

    /// Time of day in decimal Mars hours.
    pub fn hours(&self) -> f64 {
        self.hour as f64
            + self.minute as f64 / 60.0
            + (self.second as f64 + self.microsecond as f64 / 1e6) / 3_600.0
    }

    /// Real-valued sol count (`sol + fraction of sol`).
    pub fn sol_count(&self) -> f64 {
        self.sol as f64 + self.hours() / 24.0
    }

    /// `[sol, hour, minute, second, microsecond]`.
    pub fn to_array(&self) -> [i64; 5] {
        [
            self.sol,
            self.hour as i64,
            self.minute as i64,
            self.second as i64,
            self.microsecond as i64,
        ]
    }
}

/// One multiply–floor–subtract stage, clamped to `max`.
#[inline]
fn split(frac: f64, base: f64, max: u32) -> (u32, f64) {
    let scaled = frac * base;
    let whole = scaled.floor().clamp(0.0, max as f64);
    (whole as u32, (scaled - whole).max(0.0))
}

impl fmt::Display for SolTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}T{:02}:{:02}:{:02}.{:06}",
            self.sol, self.hour, self.minute, self.second, self.microsecond
        )
    }
}

impl FromStr for SolTime {
    type Err = MarsTimeError;

    /// Parse `SSSSTHH:MM:SS[.ffffff]`, `SSSSTHH:MM`, or a bare sol number.
    ///
    /// A bare decimal sol (`265.5`) is decomposed like a sol count.
    fn from_str(input: &str) -> Result<Self> {
        let bad = || MarsTimeError::invalid("LMST string", input);
        let s = input.trim();

        let Some((sol_part, clock)) = s.split_once('T') else {
            if let Ok(sol) = s.parse::<i64>() {
                return Self::start_of_sol(sol);
            }
            let sols = s.parse::<f64>().map_err(|_| bad())?;
            if !sols.is_finite() {
                return Err(bad());
            }
            let value = Self::from_sol_count(sols);
            value.validate()?;
            return Ok(value);
        };

        let sol = sol_part.parse::<i64>().map_err(|_| bad())?;
        let fields: Vec<&str> = clock.split(':').collect();
        let (hour, minute, sec_field) = match fields.as_slice() {
            [h, m] => (*h, *m, None),
            [h, m, s] => (*h, *m, Some(*s)),
            _ => return Err(bad()),
        };
        let hour = parse_component(hour).ok_or_else(bad)?;
        let minute = parse_component(minute).ok_or_else(bad)?;
        let (second, microsecond) = match sec_field {
            None => (0, 0),
            Some(field) => {
                let (whole, frac) = match field.split_once('.') {
                    Some((w, f)) => (w, Some(f)),
                    None => (field, None),
                };
                let second = parse_component(whole).ok_or_else(bad)?;
                let micro = match frac {
                    None => 0,
                    Some(f) => parse_micros(f).ok_or_else(bad)?,
                };
                (second, micro)
            }
        };
        Self::new(sol, hour, minute, second, microsecond)
    }
}

fn parse_component(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Fractional-second digits → microseconds (extra digits are truncated).
fn parse_micros(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut padded: String = digits.chars().take(6).collect();
    while padded.len() < 6 {
        padded.push('0');
    }
    padded.parse().ok()
}

// ═══════════════════════════════════════════════════════════════════════════
// Output format
// ═══════════════════════════════════════════════════════════════════════════

/// Representation requested from a forward conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LmstFormat {
    /// Real-valued sol count (LMST) or decimal hours (LTST).
    Decimal,
    /// Structured [`SolTime`].
    Tabular,
    /// `SSSSTHH:MM:SS.ffffff`.
    #[default]
    Date,
}

impl FromStr for LmstFormat {
    type Err = MarsTimeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decimal" => Ok(Self::Decimal),
            "tabular" | "split" | "tab" => Ok(Self::Tabular),
            "date" | "date-string" | "string" => Ok(Self::Date),
            _ => Err(MarsTimeError::invalid("output format", s)),
        }
    }
}

/// Result of a forward conversion in the requested [`LmstFormat`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarsTimeValue {
    Decimal(f64),
    Tabular(SolTime),
    Date(String),
}

impl MarsTimeValue {
    /// The decimal payload, if this is a [`MarsTimeValue::Decimal`].
    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            Self::Decimal(v) => Some(*v),
            _ => None,
        }
    }

    /// The structured payload, if this is a [`MarsTimeValue::Tabular`].
    pub fn as_sol_time(&self) -> Option<SolTime> {
        match self {
            Self::Tabular(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for MarsTimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal(v) => write!(f, "{v}"),
            Self::Tabular(v) => write!(f, "{:?}", v.to_array()),
            Self::Date(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decomposes_by_truncation() {
        // 10 sols + 13h 27m 05.5s
        let frac = (13.0 * 3_600.0 + 27.0 * 60.0 + 5.5) / 86_400.0;
        let v = SolTime::from_sol_count(10.0 + frac);
        assert_eq!((v.sol, v.hour, v.minute, v.second), (10, 13, 27, 5));
        assert!((v.microsecond as i64 - 500_000).abs() <= 1);
    }

    #[test]
    fn never_rolls_over() {
        let v = SolTime::from_sol_count(3.0 - 1e-13);
        assert_eq!(v.sol, 2);
        assert_eq!((v.hour, v.minute, v.second), (23, 59, 59));
        assert!(v.microsecond <= 999_999);
    }

    #[test]
    fn negative_counts_floor() {
        let v = SolTime::from_sol_count(-0.25);
        assert_eq!((v.sol, v.hour), (-1, 18));
        assert!(v.validate().is_err());
    }

    #[test]
    fn tiny_negative_fraction_does_not_produce_24h() {
        let v = SolTime::from_sol_count(-1e-18);
        assert!(v.hour < 24);
    }

    #[test]
    fn display_uses_period_before_fraction() {
        let v = SolTime::new(265, 11, 47, 23, 564_662).unwrap();
        assert_eq!(v.to_string(), "0265T11:47:23.564662");
        let v = SolTime::new(3, 0, 0, 0, 5).unwrap();
        assert_eq!(v.to_string(), "0003T00:00:00.000005");
    }

    #[test]
    fn parses_all_string_forms() {
        let full: SolTime = "0265T11:47:23.5646".parse().unwrap();
        assert_eq!(full, SolTime::new(265, 11, 47, 23, 564_600).unwrap());

        let no_frac: SolTime = "0012T14:25:00".parse().unwrap();
        assert_eq!(no_frac, SolTime::new(12, 14, 25, 0, 0).unwrap());

        let hm: SolTime = "0012T14:25".parse().unwrap();
        assert_eq!(hm, no_frac);

        let bare: SolTime = "0042".parse().unwrap();
        assert_eq!(bare, SolTime::start_of_sol(42).unwrap());

        let decimal: SolTime = "7.5".parse().unwrap();
        assert_eq!((decimal.sol, decimal.hour, decimal.minute), (7, 12, 0));
    }

    #[test]
    fn display_parse_roundtrip() {
        let v = SolTime::new(1_021, 23, 5, 9, 12).unwrap();
        assert_eq!(v.to_string().parse::<SolTime>().unwrap(), v);
    }

    #[test]
    fn rejects_bad_strings() {
        for s in [
            "0265T11:47:23:5646623", // legacy colon before the fraction
            "0265T25:00:00",
            "0265T11:60:00",
            "-001T00:00:00",
            "xx",
            "0265T",
            "0265T1a:00",
            "0265T11:47:23.",
        ] {
            assert!(s.parse::<SolTime>().is_err(), "{s} parsed");
        }
    }

    #[test]
    fn new_validates_ranges() {
        assert!(SolTime::new(-1, 0, 0, 0, 0).is_err());
        assert!(SolTime::new(0, 24, 0, 0, 0).is_err());
        assert!(SolTime::new(0, 0, 60, 0, 0).is_err());
        assert!(SolTime::new(0, 0, 0, 60, 0).is_err());
        assert!(SolTime::new(0, 0, 0, 0, 1_000_000).is_err());
        assert!(SolTime::new(0, 23, 59, 59, 999_999).is_ok());
    }

    #[test]
    fn hours_and_sol_count() {
        let v = SolTime::new(2, 6, 30, 0, 0).unwrap();
        assert!((v.hours() - 6.5).abs() < 1e-12);
        assert!((v.sol_count() - (2.0 + 6.5 / 24.0)).abs() < 1e-12);
        let w = SolTime::from_hours(2, 6.5);
        assert_eq!((w.sol, w.hour, w.minute), (2, 6, 30));
    }

    #[test]
    fn format_tokens() {
        assert_eq!("decimal".parse::<LmstFormat>().unwrap(), LmstFormat::Decimal);
        assert_eq!("Tabular".parse::<LmstFormat>().unwrap(), LmstFormat::Tabular);
        assert_eq!("split".parse::<LmstFormat>().unwrap(), LmstFormat::Tabular);
        assert_eq!("date".parse::<LmstFormat>().unwrap(), LmstFormat::Date);
        assert!("hex".parse::<LmstFormat>().is_err());
        assert_eq!(LmstFormat::default(), LmstFormat::Date);
    }

    #[test]
    fn value_serialises_untagged() {
        let v = MarsTimeValue::Tabular(SolTime::new(1, 2, 3, 4, 5).unwrap());
        let json = serde_json::to_string(&v).unwrap();
        assert!(json.contains("\"sol\":1"));
        assert_eq!(
            serde_json::to_string(&MarsTimeValue::Date("0001T02:03:04.000005".into())).unwrap(),
            "\"0001T02:03:04.000005\""
        );
    }
}
