// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Mars orbital model
//!
//! Orbital position of Mars after Allison & McEwen (2000), as used by the
//! Mars24 algorithm (steps B-1 to B-5 and C-1).  Every function takes the
//! day count since J2000.0 on the TT axis and is pure and total.
//!
//! | Step | Function | Unit |
//! |------|----------|------|
//! | B-1 | [`mars_mean_anomaly`] | degrees, `[0, 360)` |
//! | B-2 | [`alpha_fms`] | degrees, `[0, 360)` |
//! | B-3 | [`alpha_perturbs`] | degrees |
//! | B-4 | [`equation_of_center`] | degrees |
//! | B-5 | [`areocentric_solar_longitude`] | degrees, `[0, 360)` |
//! | C-1 | [`equation_of_time`] | degrees (÷15 → hours) |
//!
//! ## References
//! * Allison & McEwen (2000), Planet. Space Sci. 48, 215–235
//! * NASA GISS Mars24 Sunclock, "Algorithm and Worked Examples"

use super::instant::Time;
use super::scales::J2000;

/// One periodic term of the planetary perturbation series (AM2000 eq. 18).
#[derive(Debug, Clone, Copy)]
struct Perturbation {
    /// Amplitude, degrees.
    amplitude: f64,
    /// Period, Julian years.
    tau: f64,
    /// Phase, degrees.
    phi: f64,
}

#[rustfmt::skip]
const PERTURBATIONS: [Perturbation; 7] = [
    Perturbation { amplitude: 0.0071, tau:  2.2353, phi:  49.409 },
    Perturbation { amplitude: 0.0057, tau:  2.7543, phi: 168.173 },
    Perturbation { amplitude: 0.0039, tau:  1.1177, phi: 191.837 },
    Perturbation { amplitude: 0.0037, tau: 15.7866, phi:  21.736 },
    Perturbation { amplitude: 0.0021, tau:  2.1354, phi:  15.704 },
    Perturbation { amplitude: 0.0020, tau:  2.4694, phi:  95.528 },
    Perturbation { amplitude: 0.0018, tau: 32.8493, phi:  49.095 },
];

/// Mean daily motion of the Earth, degrees per day.
const EARTH_MEAN_MOTION: f64 = 0.985626;

/// `x mod modulus` in `[0, modulus)`.
///
/// `f64::rem_euclid` can round up to `modulus` itself for tiny negative `x`.
#[inline]
pub(crate) fn wrap(x: f64, modulus: f64) -> f64 {
    let r = x.rem_euclid(modulus);
    if r >= modulus {
        0.0
    } else {
        r
    }
}

/// Mars mean anomaly `M` in degrees (B-1).
#[inline]
pub fn mars_mean_anomaly(t: Time<J2000>) -> f64 {
    wrap(19.3871 + 0.52402073 * t.value(), 360.0)
}

/// Angle of the Fictional Mean Sun `αFMS` in degrees (B-2).
#[inline]
pub fn alpha_fms(t: Time<J2000>) -> f64 {
    wrap(270.3871 + 0.524038496 * t.value(), 360.0)
}

/// Sum of the seven planetary perturbation terms (B-3), in degrees.
pub fn alpha_perturbs(t: Time<J2000>) -> f64 {
    let d = t.value();
    PERTURBATIONS
        .iter()
        .map(|p| p.amplitude * ((EARTH_MEAN_MOTION * d / p.tau) + p.phi).to_radians().cos())
        .sum()
}

/// Equation of center `ν − M` in degrees (B-4), perturbations included.
pub fn equation_of_center(t: Time<J2000>) -> f64 {
    let m = mars_mean_anomaly(t).to_radians();
    (10.691 + 3.0e-7 * t.value()) * m.sin()
        + 0.6230 * (2.0 * m).sin()
        + 0.0500 * (3.0 * m).sin()
        + 0.0050 * (4.0 * m).sin()
        + 0.0005 * (5.0 * m).sin()
        + alpha_perturbs(t)
}

/// Areocentric solar longitude `Ls` in degrees, wrapped into `[0, 360)` (B-5).
#[inline]
pub fn areocentric_solar_longitude(t: Time<J2000>) -> f64 {
    wrap(alpha_fms(t) + equation_of_center(t), 360.0)
}

/// Equation of time in degrees of arc (C-1).
///
/// Divide by 15 for hours, or see [`equation_of_time_minutes`].
pub fn equation_of_time(t: Time<J2000>) -> f64 {
    let ls = areocentric_solar_longitude(t).to_radians();
    2.861 * (2.0 * ls).sin() - 0.071 * (4.0 * ls).sin() + 0.002 * (6.0 * ls).sin()
        - equation_of_center(t)
}

/// Equation of time in minutes of time (4 minutes per degree).
#[inline]
pub fn equation_of_time_minutes(t: Time<J2000>) -> f64 {
    equation_of_time(t) * 4.0
}
