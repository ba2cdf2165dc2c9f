// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Position of the Sun in the sky of a Mars surface site (Mars24 D-5, D-6).
//!
//! The hour angle is taken from Local True Solar Time, positive before local
//! noon, so the azimuth comes out clockwise from north.

use serde::Serialize;

use super::instant::Time;
use super::orbit::{areocentric_solar_longitude, wrap};
use super::scales::J2000;
use super::solar::local_true_solar_time;

/// Sine of Mars's obliquity (25.19°).
const SIN_OBLIQUITY: f64 = 0.42565;

/// Elevation and azimuth of the Sun, degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SunPosition {
    /// Angle above the horizon, `[-90, 90]`.
    pub elevation: f64,
    /// Clockwise from north, `[0, 360)`.
    pub azimuth: f64,
}

/// Planetographic solar declination in degrees for a given `Ls` (degrees).
#[inline]
pub fn solar_declination(ls: f64) -> f64 {
    let ls = ls.to_radians();
    (SIN_OBLIQUITY * ls.sin()).asin().to_degrees() + 0.25 * ls.sin()
}

/// Sun angles from site latitude, declination (degrees) and LTST (hours).
pub fn sun_angles(latitude: f64, declination: f64, ltst: f64) -> SunPosition {
    let phi = latitude.to_radians();
    let delta = declination.to_radians();
    let h = (15.0 * (12.0 - ltst)).to_radians();

    let cos_z = (delta.sin() * phi.sin() + delta.cos() * phi.cos() * h.cos()).clamp(-1.0, 1.0);
    let elevation = 90.0 - cos_z.acos().to_degrees();

    let azimuth = h
        .sin()
        .atan2(phi.cos() * delta.tan() - phi.sin() * h.cos())
        .to_degrees();

    SunPosition {
        elevation,
        azimuth: wrap(azimuth, 360.0),
    }
}

/// Sun angles at a site for a J2000 TT offset.
pub fn sun_position(latitude: f64, longitude: f64, t: Time<J2000>) -> SunPosition {
    let declination = solar_declination(areocentric_solar_longitude(t));
    sun_angles(latitude, declination, local_true_solar_time(longitude, t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declination_at_solstices_and_equinox() {
        assert!(solar_declination(0.0).abs() < 1e-12);
        assert!((solar_declination(90.0) - 25.4418).abs() < 1e-3);
        assert!((solar_declination(270.0) + 25.4418).abs() < 1e-3);
    }

    #[test]
    fn overhead_sun_at_noon() {
        let p = sun_angles(10.0, 10.0, 12.0);
        assert!((p.elevation - 90.0).abs() < 1e-5);
    }

    #[test]
    fn equinox_sunrise_and_sunset_on_equator() {
        let morning = sun_angles(0.0, 0.0, 6.0);
        assert!(morning.elevation.abs() < 1e-9);
        assert!((morning.azimuth - 90.0).abs() < 1e-9);

        let evening = sun_angles(0.0, 0.0, 18.0);
        assert!(evening.elevation.abs() < 1e-9);
        assert!((evening.azimuth - 270.0).abs() < 1e-9);
    }

    #[test]
    fn noon_sun_is_south_of_northern_site() {
        let p = sun_angles(30.0, -5.0, 12.0);
        assert!((p.azimuth - 180.0).abs() < 1e-9);
        assert!((p.elevation - 55.0).abs() < 1e-9);
    }

    #[test]
    fn midnight_sun_is_below_horizon() {
        let p = sun_angles(4.5, -20.0, 0.0);
        assert!(p.elevation < -60.0);
    }

    #[test]
    fn position_is_always_in_range() {
        let mut d = 6_900.0;
        while d < 6_910.0 {
            let p = sun_position(4.502384, 224.03, Time::new(d));
            assert!((-90.0..=90.0).contains(&p.elevation));
            assert!((0.0..360.0).contains(&p.azimuth));
            d += 0.013;
        }
    }
}
