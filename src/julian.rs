// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian-day arithmetic (Mars24 steps A-1 to A-6).
//!
//! ```text
//! UTC instant ─A-2→ JD(UTC) ─A-5→ JD(TT) ─A-6→ ΔJ2000(TT)
//! ```
//!
//! The free functions work on plain `f64` day counts; the same chain is
//! available on typed instants through
//! [`Time::from_utc`](crate::Time::from_utc) and [`Time::to`](crate::Time::to).

use chrono::{DateTime, Utc};
use qtty::*;

use super::instant::UNIX_EPOCH_JD;
use super::scales::J2000_EPOCH_JD;
use super::tt_offset::utc_to_tt_offset;

/// Milliseconds in one Earth day.
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Julian Day on the UTC axis: `2440587.5 + ms_since_unix_epoch / 86 400 000`.
///
/// Uses the full microsecond resolution of the instant.
#[inline]
pub fn julian_day_utc(datetime: DateTime<Utc>) -> f64 {
    let millis = datetime.timestamp_micros() as f64 / 1_000.0;
    UNIX_EPOCH_JD + millis / MILLIS_PER_DAY
}

/// Julian Day on the TT axis: `jd_utc + (TT − UTC) / 86400`.
#[inline]
pub fn julian_day_tt(jd_utc: f64) -> f64 {
    jd_utc + utc_to_tt_offset(jd_utc).to::<Day>().value()
}

/// Days since J2000.0: `jd_tt − 2451545.0`.
#[inline]
pub fn j2000_offset_tt(jd_tt: f64) -> f64 {
    jd_tt - J2000_EPOCH_JD.value()
}
