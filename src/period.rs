// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time intervals.
//!
//! [`Interval<T>`] is a half-open range `[start, end)` over any
//! [`TimeInstant`].  The UTC form, [`UtcPeriod`], is what the converter hands
//! out for sol spans; [`UtcPeriod::samples`] turns one into an evenly spaced
//! series of instants for tabulating LMST against UTC.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use std::fmt;

use super::error::{MarsTimeError, Result};
use super::instant::TimeInstant;

/// Most instants [`UtcPeriod::samples`] will produce.
pub const MAX_SAMPLES: usize = 1_000_000;

/// A half-open time interval `[start, end)`.
///
/// # Examples
///
/// ```
/// use marstime::{Interval, Time, JD};
/// use qtty::Days;
///
/// let period = Interval::new(Time::<JD>::new(2_451_545.0), Time::<JD>::new(2_451_546.5));
/// assert_eq!(period.duration(), Days::new(1.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Interval<T: TimeInstant> {
    pub start: T,
    pub end: T,
}

/// UTC interval.
pub type UtcPeriod = Interval<DateTime<Utc>>;

impl<T: TimeInstant> Interval<T> {
    pub fn new(start: T, end: T) -> Self {
        Interval { start, end }
    }

    /// `end - start`.
    pub fn duration(&self) -> T::Duration {
        self.end.difference(&self.start)
    }

    /// `start <= t < end`.
    pub fn contains(&self, t: &T) -> bool {
        self.start <= *t && *t < self.end
    }

    /// Overlap of two intervals.
    ///
    /// Intervals that only touch (one ends where the other starts) do not
    /// overlap and give `None`.
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        let start = if self.start >= other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end <= other.end {
            self.end
        } else {
            other.end
        };

        if start < end {
            Some(Self::new(start, end))
        } else {
            None
        }
    }
}

impl<T: TimeInstant + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

impl Interval<DateTime<Utc>> {
    /// Duration in SI seconds, with microsecond resolution.
    pub fn duration_seconds(&self) -> f64 {
        let d = self.duration();
        match d.num_microseconds() {
            Some(us) => us as f64 / 1e6,
            None => d.num_seconds() as f64,
        }
    }

    /// Duration in Earth days.
    pub fn duration_days(&self) -> f64 {
        self.duration_seconds() / 86_400.0
    }

    /// Instants `start, start + step, …` strictly before `end`.
    ///
    /// Sampling stops early if the next instant is beyond chrono's range.
    ///
    /// # Errors
    /// [`MarsTimeError::InvalidInput`] if `step` is not positive or the
    /// series would hold more than [`MAX_SAMPLES`] instants.
    pub fn samples(&self, step: Duration) -> Result<Vec<DateTime<Utc>>> {
        if step <= Duration::zero() {
            return Err(MarsTimeError::invalid("sampling step", format!("{step}")));
        }
        let mut out = Vec::new();
        let mut next = Some(self.start);
        while let Some(t) = next.filter(|t| *t < self.end) {
            if out.len() == MAX_SAMPLES {
                return Err(MarsTimeError::invalid(
                    "sampling step (too many samples)",
                    format!("{step}"),
                ));
            }
            out.push(t);
            next = t.checked_add_signed(step);
        }
        Ok(out)
    }
}
