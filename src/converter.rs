// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # UTC ↔ Mars time for one mission
//!
//! [`MarsTimeConverter`] borrows a [`MissionConfig`] and exposes every
//! conversion of the crate for that site.
//!
//! ## Forward (UTC → LMST)
//!
//! The sol count is the UTC time elapsed since the mission's sol origin, in
//! units of one mean sol (`86400 × 1.027491252` s), plus the origin's sol
//! number.  It is exact and strictly increasing in UTC.
//!
//! ## Inverse (LMST → UTC)
//!
//! The first estimate follows the Mars24 chain backwards: the origin's MTC
//! advanced by the requested number of sols, turned into a J2000 TT offset
//! and then into UTC through the tabulated TT−UTC offset.  That estimate is
//! pushed through the forward conversion and corrected by the residual until
//! it lands within [`TOLERANCE_SECONDS`], for at most [`MAX_ITERATIONS`]
//! rounds.  Running out of rounds is reported as
//! [`MarsTimeError::ConvergenceFailure`].
//!
//! ## Quick Example
//! ```rust
//! use marstime::{LmstFormat, MarsTimeConverter, MissionConfig};
//!
//! let insight = MissionConfig::insight();
//! let conv = MarsTimeConverter::new(&insight);
//!
//! let lmst = conv.utc_str_to_lmst("2018-330T05:10:50.3356Z", LmstFormat::Date).unwrap();
//! assert_eq!(lmst.to_string(), "0000T00:00:00.000000");
//! ```

use chrono::{DateTime, Duration, Utc};
use log::{debug, warn};
use serde::Serialize;
use std::fmt;

use super::error::{MarsTimeError, Result};
use super::instant::Time;
use super::julian::julian_day_utc;
use super::lmst::{Lmst, LmstFormat, Ltst, MarsTimeValue, SolTime};
use super::mission::MissionConfig;
use super::orbit::{
    alpha_fms, alpha_perturbs, areocentric_solar_longitude, equation_of_center, equation_of_time,
    equation_of_time_minutes, mars_mean_anomaly,
};
use super::period::{Interval, UtcPeriod};
use super::scales::{J2000, JD};
use super::solar::{
    coordinated_mars_time, j2000_from_mtc, local_mean_solar_time, local_true_solar_time,
    mars_solar_date, mean_solar_time, SOL_SECONDS,
};
use super::sun::{solar_declination, sun_position, SunPosition};
use super::tt_offset::utc_to_tt_offset;
use super::utc::{format_utc, parse_utc};

/// Refinement rounds allowed for LMST → UTC.
pub const MAX_ITERATIONS: usize = 4;

/// Largest accepted LMST → UTC residual, SI seconds.
pub const TOLERANCE_SECONDS: f64 = 0.5;

const MICROS_PER_SECOND: f64 = 1e6;

/// Conversions anchored to one mission.
#[derive(Debug, Clone, Copy)]
pub struct MarsTimeConverter<'a> {
    mission: &'a MissionConfig,
}

impl<'a> MarsTimeConverter<'a> {
    pub fn new(mission: &'a MissionConfig) -> Self {
        Self { mission }
    }

    pub fn mission(&self) -> &'a MissionConfig {
        self.mission
    }

    // ── Forward ───────────────────────────────────────────────────────

    /// Real-valued sol count at `utc` (integer part = sol).
    ///
    /// # Errors
    /// [`MarsTimeError::InvalidInput`] if `utc` precedes the sol origin.
    pub fn sol_count(&self, utc: DateTime<Utc>) -> Result<f64> {
        if utc < self.mission.origin_date() {
            return Err(MarsTimeError::invalid(
                "UTC instant (before the sol origin)",
                utc,
            ));
        }
        self.elapsed_sols(utc)
    }

    /// Mission sol number at `utc`.
    pub fn get_sol(&self, utc: DateTime<Utc>) -> Result<i64> {
        Ok(self.lmst(utc)?.sol)
    }

    /// Structured LMST at `utc`.
    pub fn lmst(&self, utc: DateTime<Utc>) -> Result<Lmst> {
        Ok(SolTime::from_sol_count(self.sol_count(utc)?))
    }

    /// LMST at `utc` (now if `None`) in the requested representation.
    pub fn utc_to_lmst(
        &self,
        utc: Option<DateTime<Utc>>,
        format: LmstFormat,
    ) -> Result<MarsTimeValue> {
        let utc = utc.unwrap_or_else(Utc::now);
        let sols = self.sol_count(utc)?;
        Ok(match format {
            LmstFormat::Decimal => MarsTimeValue::Decimal(sols),
            LmstFormat::Tabular => MarsTimeValue::Tabular(SolTime::from_sol_count(sols)),
            LmstFormat::Date => MarsTimeValue::Date(SolTime::from_sol_count(sols).to_string()),
        })
    }

    /// [`utc_to_lmst`](Self::utc_to_lmst) from a UTC string.
    pub fn utc_str_to_lmst(&self, utc: &str, format: LmstFormat) -> Result<MarsTimeValue> {
        self.utc_to_lmst(Some(parse_utc(utc)?), format)
    }

    /// Element-wise [`utc_to_lmst`](Self::utc_to_lmst); stops at the first error.
    pub fn utc_to_lmst_series(
        &self,
        utcs: &[DateTime<Utc>],
        format: LmstFormat,
    ) -> Result<Vec<MarsTimeValue>> {
        utcs.iter()
            .map(|t| self.utc_to_lmst(Some(*t), format))
            .collect()
    }

    // ── Inverse ───────────────────────────────────────────────────────

    /// UTC instant of an LMST value.
    ///
    /// # Errors
    /// * [`MarsTimeError::InvalidInput`] for out-of-range components or a sol
    ///   before the mission's origin sol.
    /// * [`MarsTimeError::ConvergenceFailure`] if refinement runs out of rounds.
    pub fn lmst_to_utc(&self, lmst: &Lmst) -> Result<DateTime<Utc>> {
        self.refine(lmst, MAX_ITERATIONS).map(|(utc, _)| utc)
    }

    /// Inverse conversion allowing at most `max_iterations` corrections.
    ///
    /// Also returns how many corrections were applied.
    pub(crate) fn refine(
        &self,
        lmst: &Lmst,
        max_iterations: usize,
    ) -> Result<(DateTime<Utc>, usize)> {
        lmst.validate()?;
        if lmst.sol < self.mission.sol_origin_ref() {
            return Err(MarsTimeError::invalid(
                "sol (before the mission origin sol)",
                lmst.sol,
            ));
        }
        let target = lmst.sol_count();
        let mut estimate = self.first_estimate(target)?;

        let mut residual = f64::NAN;
        for iteration in 0..=max_iterations {
            residual = (target - self.elapsed_sols(estimate)?) * SOL_SECONDS;
            debug!(
                "{}: LMST {lmst} round {iteration}: {estimate}, residual {residual:.6} s",
                self.mission.name()
            );
            if residual.abs() <= TOLERANCE_SECONDS {
                return Ok((estimate, iteration));
            }
            if iteration == max_iterations {
                break;
            }
            estimate = shift(estimate, residual)?;
        }

        warn!(
            "{}: LMST {lmst} did not converge (residual {residual:.6} s)",
            self.mission.name()
        );
        Err(MarsTimeError::ConvergenceFailure {
            iterations: max_iterations,
            residual_seconds: residual,
        })
    }

    /// [`lmst_to_utc`](Self::lmst_to_utc) from individual components.
    pub fn lmst_parts_to_utc(
        &self,
        sol: i64,
        hour: u32,
        minute: u32,
        second: u32,
        microsecond: u32,
    ) -> Result<DateTime<Utc>> {
        self.lmst_to_utc(&SolTime::new(sol, hour, minute, second, microsecond)?)
    }

    /// [`lmst_to_utc`](Self::lmst_to_utc) from an LMST string.
    pub fn lmst_str_to_utc(&self, lmst: &str) -> Result<DateTime<Utc>> {
        self.lmst_to_utc(&lmst.parse()?)
    }

    /// Mars24 backward chain: origin MTC + sols → ΔJ2000(TT) → UTC.
    fn first_estimate(&self, target: f64) -> Result<DateTime<Utc>> {
        let origin = Time::<J2000>::from_utc(self.mission.origin_date());
        let sols = target - self.mission.sol_origin_ref() as f64;
        let t = j2000_from_mtc(coordinated_mars_time(origin) + 24.0 * sols);
        t.to_utc()
            .ok_or_else(|| MarsTimeError::invalid("LMST (outside the UTC range)", target))
    }

    /// Sol count without the before-origin check.
    fn elapsed_sols(&self, utc: DateTime<Utc>) -> Result<f64> {
        let micros = (utc - self.mission.origin_date())
            .num_microseconds()
            .ok_or_else(|| MarsTimeError::invalid("UTC instant (out of range)", utc))?;
        Ok(micros as f64 / MICROS_PER_SECOND / SOL_SECONDS + self.mission.sol_origin_ref() as f64)
    }

    /// UTC span `[start of sol, start of sol + 1)`.
    pub fn sol_span(&self, sol: i64) -> Result<UtcPeriod> {
        let start = self.lmst_to_utc(&SolTime::start_of_sol(sol)?)?;
        let end = self.lmst_to_utc(&SolTime::start_of_sol(sol + 1)?)?;
        Ok(Interval::new(start, end))
    }

    /// Every sol overlapping `period`, each clipped to it.
    ///
    /// The part of `period` before the sol origin is ignored.
    pub fn sols_within(&self, period: &UtcPeriod) -> Result<Vec<(i64, UtcPeriod)>> {
        let origin = self.mission.origin_date();
        if period.end <= origin {
            return Ok(Vec::new());
        }
        let first = self.get_sol(period.start.max(origin))?;
        let mut out = Vec::new();
        let mut sol = first;
        loop {
            let span = self.sol_span(sol)?;
            if span.start >= period.end {
                break;
            }
            if let Some(clipped) = span.intersection(period) {
                out.push((sol, clipped));
            }
            sol += 1;
        }
        Ok(out)
    }

    // ── Solar quantities ──────────────────────────────────────────────

    /// LTST at `utc` (now if `None`).
    ///
    /// `Decimal` gives the astronomical LTST in hours, `[0, 24)`.  The other
    /// formats give [`ltst`](Self::ltst).
    ///
    /// # Errors
    /// [`MarsTimeError::InvalidInput`] if `utc` precedes the sol origin.
    pub fn utc_to_ltst(
        &self,
        utc: Option<DateTime<Utc>>,
        format: LmstFormat,
    ) -> Result<MarsTimeValue> {
        let utc = utc.unwrap_or_else(Utc::now);
        let ltst = self.ltst(utc)?;
        Ok(match format {
            LmstFormat::Decimal => MarsTimeValue::Decimal(local_true_solar_time(
                self.mission.longitude(),
                Time::from_utc(utc),
            )),
            LmstFormat::Tabular => MarsTimeValue::Tabular(ltst),
            LmstFormat::Date => MarsTimeValue::Date(ltst.to_string()),
        })
    }

    /// Sol-tagged LTST at `utc`.
    ///
    /// The mission clock advanced by the equation of time, so the sol moves
    /// back (or forward) by one when the true Sun has not yet reached (or has
    /// already passed) the mission's midnight.
    pub fn ltst(&self, utc: DateTime<Utc>) -> Result<Ltst> {
        let sols = self.sol_count(utc)?;
        let eot = equation_of_time(Time::<J2000>::from_utc(utc));
        Ok(SolTime::from_sol_count(sols + eot / 360.0))
    }

    /// Areocentric solar longitude `Ls`, degrees.
    pub fn utc_to_ls(&self, utc: DateTime<Utc>) -> f64 {
        areocentric_solar_longitude(Time::from_utc(utc))
    }

    /// Mars Solar Date.
    pub fn utc_to_msd(&self, utc: DateTime<Utc>) -> f64 {
        mars_solar_date(Time::from_utc(utc))
    }

    /// Coordinated Mars Time, hours in `[0, 24)`.
    pub fn utc_to_mtc(&self, utc: DateTime<Utc>) -> f64 {
        mean_solar_time(Time::from_utc(utc))
    }

    /// Equation of time in minutes of time.
    pub fn utc_to_eot(&self, utc: DateTime<Utc>) -> f64 {
        equation_of_time_minutes(Time::from_utc(utc))
    }

    /// Planetographic solar declination, degrees.
    pub fn solar_declination(&self, utc: DateTime<Utc>) -> f64 {
        solar_declination(self.utc_to_ls(utc))
    }

    /// Sun elevation and azimuth at the landing site.
    pub fn sun_position(&self, utc: DateTime<Utc>) -> SunPosition {
        sun_position(
            self.mission.latitude(),
            self.mission.longitude(),
            Time::from_utc(utc),
        )
    }

    pub fn solar_elevation(&self, utc: DateTime<Utc>) -> f64 {
        self.sun_position(utc).elevation
    }

    pub fn solar_azimuth(&self, utc: DateTime<Utc>) -> f64 {
        self.sun_position(utc).azimuth
    }

    /// Every intermediate quantity of the conversion chain at `utc`.
    pub fn report(&self, utc: DateTime<Utc>) -> Result<ConversionReport> {
        let jd_utc = julian_day_utc(utc);
        let t = Time::<J2000>::from_utc(utc);
        let jd_tt = t.to::<JD>().value();
        let longitude = self.mission.longitude();
        let sol_count = self.sol_count(utc)?;
        let lmst = SolTime::from_sol_count(sol_count);

        Ok(ConversionReport {
            mission: self.mission.name().to_string(),
            utc,
            jd_utc,
            tt_offset_seconds: utc_to_tt_offset(jd_utc).value(),
            jd_tt,
            j2000_offset: t.value(),
            mean_anomaly: mars_mean_anomaly(t),
            alpha_fms: alpha_fms(t),
            alpha_perturbs: alpha_perturbs(t),
            equation_of_center: equation_of_center(t),
            ls: areocentric_solar_longitude(t),
            eot_degrees: equation_of_time(t),
            eot_minutes: equation_of_time_minutes(t),
            msd: mars_solar_date(t),
            mtc_hours: mean_solar_time(t),
            lmst_hours: local_mean_solar_time(longitude, t),
            ltst_hours: local_true_solar_time(longitude, t),
            sol_count,
            lmst,
            ltst: self.ltst(utc)?,
            solar_declination: solar_declination(areocentric_solar_longitude(t)),
            sun: sun_position(self.mission.latitude(), longitude, t),
            utc_roundtrip: self.lmst_to_utc(&lmst)?,
        })
    }
}

/// Move `t` by a signed number of seconds, at microsecond resolution.
fn shift(t: DateTime<Utc>, seconds: f64) -> Result<DateTime<Utc>> {
    let micros = (seconds * MICROS_PER_SECOND).round();
    if !micros.is_finite() || micros.abs() >= i64::MAX as f64 {
        return Err(MarsTimeError::invalid("time correction (s)", seconds));
    }
    t.checked_add_signed(Duration::microseconds(micros as i64))
        .ok_or_else(|| MarsTimeError::invalid("time correction (s)", seconds))
}

/// Snapshot of one forward conversion with all intermediate values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionReport {
    pub mission: String,
    pub utc: DateTime<Utc>,
    pub jd_utc: f64,
    pub tt_offset_seconds: f64,
    pub jd_tt: f64,
    pub j2000_offset: f64,
    pub mean_anomaly: f64,
    pub alpha_fms: f64,
    pub alpha_perturbs: f64,
    pub equation_of_center: f64,
    pub ls: f64,
    pub eot_degrees: f64,
    pub eot_minutes: f64,
    pub msd: f64,
    pub mtc_hours: f64,
    pub lmst_hours: f64,
    pub ltst_hours: f64,
    pub sol_count: f64,
    pub lmst: Lmst,
    pub ltst: Ltst,
    pub solar_declination: f64,
    pub sun: SunPosition,
    pub utc_roundtrip: DateTime<Utc>,
}

impl fmt::Display for ConversionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mission              : {}", self.mission)?;
        writeln!(f, "UTC                  : {}", format_utc(&self.utc))?;
        writeln!(f, "JD(UTC)              : {:.8}", self.jd_utc)?;
        writeln!(f, "TT - UTC             : {} s", self.tt_offset_seconds)?;
        writeln!(f, "JD(TT)               : {:.8}", self.jd_tt)?;
        writeln!(f, "ΔJ2000(TT)           : {:.8}", self.j2000_offset)?;
        writeln!(f, "Mean anomaly         : {:.6}°", self.mean_anomaly)?;
        writeln!(f, "αFMS                 : {:.6}°", self.alpha_fms)?;
        writeln!(f, "Perturbations        : {:.6}°", self.alpha_perturbs)?;
        writeln!(f, "Equation of center   : {:.6}°", self.equation_of_center)?;
        writeln!(f, "Ls                   : {:.6}°", self.ls)?;
        writeln!(
            f,
            "EOT                  : {:.6}° ({:.4} min)",
            self.eot_degrees, self.eot_minutes
        )?;
        writeln!(f, "MSD                  : {:.6}", self.msd)?;
        writeln!(f, "MTC                  : {:.6} h", self.mtc_hours)?;
        writeln!(f, "LMST (site)          : {:.6} h", self.lmst_hours)?;
        writeln!(f, "LTST (site)          : {:.6} h", self.ltst_hours)?;
        writeln!(f, "Sol count            : {:.8}", self.sol_count)?;
        writeln!(f, "LMST                 : {}", self.lmst)?;
        writeln!(f, "LTST                 : {}", self.ltst)?;
        writeln!(f, "Solar declination    : {:.4}°", self.solar_declination)?;
        writeln!(
            f,
            "Sun                  : elevation {:.4}°, azimuth {:.4}°",
            self.sun.elevation, self.sun.azimuth
        )?;
        write!(
            f,
            "UTC from LMST        : {}",
            format_utc(&self.utc_roundtrip)
        )
    }
}
