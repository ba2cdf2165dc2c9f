// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Mars solar time
//!
//! Composes the [orbital model](crate::orbit) into the Mars clocks of
//! Mars24 steps C-2 to C-4:
//!
//! * **MSD** — Mars Solar Date, a continuous sol count (`MSD = 0` at the Mars
//!   calendar origin, 1873-12-29).
//! * **MTC** — Coordinated Mars Time, `24 × MSD` hours (left unwrapped so it
//!   can be inverted; wrap with [`mean_solar_time`]).
//! * **LMST** — Local Mean Solar Time at a planetographic longitude.
//! * **LTST** — Local True Solar Time, LMST corrected by the equation of time.
//!
//! Longitudes follow the Mars24 LMST formula: the longitude (degrees, 0–360)
//! is subtracted from MTC at 1 hour per 15°.
//!
//! ## Quick Example
//! ```rust
//! use marstime::{solar, Time, J2000};
//!
//! let t = Time::<J2000>::new(6_903.7);
//! let lmst = solar::local_mean_solar_time(224.03, t);
//! assert!((0.0..24.0).contains(&lmst));
//! ```

use super::instant::Time;
use super::orbit::{equation_of_time, wrap};
use super::scales::J2000;

/// Length of a mean solar day on Mars in Earth days.
pub const SOL_RATIO: f64 = 1.027491252;

/// Length of a mean solar day on Mars in SI seconds.
pub const SOL_SECONDS: f64 = 86_400.0 * SOL_RATIO;

/// Allison's normalisation, keeping MSD positive after 1873.
const KNORM: f64 = 44_796.0;

/// Allison's correction, placing MSD 0 at the Mars calendar origin.
const K: f64 = 0.000_962_6;

/// J2000 TT offset of the first Mars-midnight after J2000 (2000-01-06).
const MIDNIGHT_OFFSET: f64 = 4.5;

/// Hours of LMST per degree of longitude.
const HOURS_PER_DEGREE: f64 = 24.0 / 360.0;

/// Mars Solar Date (C-2).
#[inline]
pub fn mars_solar_date(t: Time<J2000>) -> f64 {
    (t.value() - MIDNIGHT_OFFSET) / SOL_RATIO + KNORM - K
}

/// Coordinated Mars Time in hours, not wrapped (C-2, ×24).
#[inline]
pub fn coordinated_mars_time(t: Time<J2000>) -> f64 {
    24.0 * mars_solar_date(t)
}

/// Mean solar time at the Mars prime meridian, hours in `[0, 24)`.
#[inline]
pub fn mean_solar_time(t: Time<J2000>) -> f64 {
    wrap(coordinated_mars_time(t), 24.0)
}

/// Local Mean Solar Time in hours, `[0, 24)` (C-3).
#[inline]
pub fn local_mean_solar_time(longitude: f64, t: Time<J2000>) -> f64 {
    wrap(mean_solar_time(t) - longitude * HOURS_PER_DEGREE, 24.0)
}

/// Local True Solar Time in hours, `[0, 24)` (C-4).
#[inline]
pub fn local_true_solar_time(longitude: f64, t: Time<J2000>) -> f64 {
    wrap(
        local_mean_solar_time(longitude, t) + equation_of_time(t) / 15.0,
        24.0,
    )
}

/// Inverse of [`mars_solar_date`].
#[inline]
pub fn j2000_from_msd(msd: f64) -> Time<J2000> {
    Time::new((msd + K - KNORM) * SOL_RATIO + MIDNIGHT_OFFSET)
}

/// Inverse of [`coordinated_mars_time`] (MTC in unwrapped hours).
#[inline]
pub fn j2000_from_mtc(mtc_hours: f64) -> Time<J2000> {
    j2000_from_msd(mtc_hours / 24.0)
}
