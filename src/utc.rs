// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Parsing and formatting of UTC timestamps.
//!
//! Accepted inputs, all interpreted as UTC:
//!
//! | Form | Example |
//! |------|---------|
//! | RFC 3339 with offset | `2019-08-26T11:47:23.5646+00:00` |
//! | ISO-8601, optional `Z` | `2019-08-26T11:47:23.564662Z` |
//! | Day-of-year (mission files) | `2018-330T05:10:50.3356` |
//! | Calendar date only | `2019-08-26` (midnight) |

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::error::{MarsTimeError, Result};

const DATETIME_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%jT%H:%M:%S%.f",
    "%Y-%j %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%jT%H:%M",
];

/// Parse a UTC timestamp in any of the accepted forms.
pub fn parse_utc(input: &str) -> Result<DateTime<Utc>> {
    let s = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = s.strip_suffix('Z').unwrap_or(s);
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(naive, fmt) {
            return Ok(dt.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(naive, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt.and_utc());
        }
    }

    Err(MarsTimeError::invalid("UTC timestamp", input))
}

/// ISO-8601 with microseconds and a `Z` suffix.
pub fn format_utc(datetime: &DateTime<Utc>) -> String {
    datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string()
}

/// Day-of-year form used by mission configuration files.
pub fn format_utc_doy(datetime: &DateTime<Utc>) -> String {
    datetime.format("%Y-%jT%H:%M:%S%.6f").to_string()
}
