// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # TT − UTC offset layer
//!
//! Terrestrial Time runs ahead of UTC by `32.184 s + (TAI − UTC)`, where the
//! second term grows by one whole second at each leap-second insertion.
//! This module holds the Mars24 table of those steps (eq. A-4) as a single
//! sorted `(JD(UTC) breakpoint, TT − UTC seconds)` table.
//!
//! ## Semantics
//! * Each bucket is closed on the low end and open on the high end:
//!   `breakpoint[i] <= jd < breakpoint[i+1]` yields `offset[i]`.
//! * Below the first breakpoint the first offset is returned; at or beyond
//!   the last breakpoint the last offset is returned.
//! * The first row (JD 0, 0 s) is the Mars24 floor: dates before the 1972
//!   introduction of leap seconds get no TT correction at all.
//!
//! ## Quick Example
//! ```rust
//! use marstime::utc_to_tt_offset;
//!
//! // 2018-11-26 (InSight landing): 37 leap seconds + 32.184 s.
//! let dt = utc_to_tt_offset(2_458_449.3);
//! assert_eq!(dt.value(), 69.184);
//! ```

use qtty::Seconds;

/// Number of rows in [`TT_OFFSET_TABLE`].
const ROWS: usize = 29;

/// `(JD(UTC) of 00:00 UTC on the day the step takes effect, TT − UTC in s)`.
///
/// Historical leap-second introductions; not re-derivable from a formula.
#[rustfmt::skip]
const TT_OFFSET_TABLE: [(f64, f64); ROWS] = [
    (        0.0,  0.0  ),
    (2_441_317.5, 42.184), // 1972-01-01
    (2_441_499.5, 43.184), // 1972-07-01
    (2_441_683.5, 44.184), // 1973-01-01
    (2_442_048.5, 45.184), // 1974-01-01
    (2_442_413.5, 46.184), // 1975-01-01
    (2_442_778.5, 47.184), // 1976-01-01
    (2_443_144.5, 48.184), // 1977-01-01
    (2_443_509.5, 49.184), // 1978-01-01
    (2_443_874.5, 50.184), // 1979-01-01
    (2_444_239.5, 51.184), // 1980-01-01
    (2_444_786.5, 52.184), // 1981-07-01
    (2_445_151.5, 53.184), // 1982-07-01
    (2_445_516.5, 54.184), // 1983-07-01
    (2_446_247.5, 55.184), // 1985-07-01
    (2_447_161.5, 56.184), // 1988-01-01
    (2_447_892.5, 57.184), // 1990-01-01
    (2_448_257.5, 58.184), // 1991-01-01
    (2_448_804.5, 59.184), // 1992-07-01
    (2_449_169.5, 60.184), // 1993-07-01
    (2_449_534.5, 61.184), // 1994-07-01
    (2_450_083.5, 62.184), // 1996-01-01
    (2_450_630.5, 63.184), // 1997-07-01
    (2_451_179.5, 64.184), // 1999-01-01
    (2_453_736.5, 65.184), // 2006-01-01
    (2_454_832.5, 66.184), // 2009-01-01
    (2_456_109.5, 67.184), // 2012-07-01
    (2_457_204.5, 68.184), // 2015-07-01
    (2_457_754.5, 69.184), // 2017-01-01
];

/// The breakpoint table, sorted by Julian day.
#[inline]
pub fn tt_offset_table() -> &'static [(f64, f64)] {
    &TT_OFFSET_TABLE
}

/// Returns **TT − UTC** in seconds for a Julian Day on the UTC axis.
///
/// Clamped to the first/last table entry outside the tabulated range.
#[inline]
pub fn utc_to_tt_offset(jd_utc: f64) -> Seconds {
    let row = TT_OFFSET_TABLE
        .partition_point(|&(jd, _)| jd <= jd_utc)
        .saturating_sub(1);
    Seconds::new(TT_OFFSET_TABLE[row].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_non_decreasing() {
        for pair in TT_OFFSET_TABLE.windows(2) {
            assert!(pair[0].0 < pair[1].0, "breakpoints out of order");
            assert!(pair[0].1 <= pair[1].1, "offset decreases");
        }
    }

    #[test]
    fn step_function_is_non_decreasing_over_sweep() {
        let mut prev = utc_to_tt_offset(-1.0e6).value();
        let mut jd = 2_440_000.0;
        while jd < 2_462_000.0 {
            let cur = utc_to_tt_offset(jd).value();
            assert!(cur >= prev, "offset dropped at JD {jd}");
            prev = cur;
            jd += 7.25;
        }
    }

    #[test]
    fn below_first_breakpoint_is_minimum() {
        assert_eq!(utc_to_tt_offset(-5.0e5).value(), 0.0);
        assert_eq!(utc_to_tt_offset(0.0).value(), 0.0);
        assert_eq!(utc_to_tt_offset(2_441_317.499).value(), 0.0);
        assert_eq!(utc_to_tt_offset(f64::NAN).value(), 0.0);
    }

    #[test]
    fn above_last_breakpoint_is_maximum() {
        assert_eq!(utc_to_tt_offset(2_457_754.5).value(), 69.184);
        assert_eq!(utc_to_tt_offset(2_470_000.0).value(), 69.184);
        assert_eq!(utc_to_tt_offset(1.0e9).value(), 69.184);
    }

    #[test]
    fn buckets_are_closed_low_open_high() {
        // 1999-01-01 step: 63.184 just before, 64.184 exactly at it.
        assert_eq!(utc_to_tt_offset(2_451_179.499_999).value(), 63.184);
        assert_eq!(utc_to_tt_offset(2_451_179.5).value(), 64.184);
        assert_eq!(utc_to_tt_offset(2_451_545.0).value(), 64.184);
    }

    #[test]
    fn first_leap_era_value() {
        assert_eq!(utc_to_tt_offset(2_441_317.5).value(), 42.184);
        assert_eq!(utc_to_tt_offset(2_441_400.0).value(), 42.184);
    }

    #[test]
    fn public_table_matches_lookup() {
        for &(jd, offset) in tt_offset_table() {
            assert_eq!(utc_to_tt_offset(jd).value(), offset);
        }
    }
}
