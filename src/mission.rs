// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Immutable per-mission configuration.
//!
//! A [`MissionConfig`] anchors LMST for one lander: the site longitude sets the
//! local clock, and the sol origin is the UTC instant defined to be Sol
//! `sol_origin_ref`, 00:00:00 LMST.  The origin is normally a local midnight
//! shortly before landing, not the landing itself, so that sol boundaries and
//! time-of-day never disagree.
//!
//! Values are validated once, at construction, and never change afterwards;
//! any number of missions can be used side by side.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::error::{MarsTimeError, Result};
use super::utc::parse_utc;

/// A landed mission: site, longitude, latitude, landing and sol-origin dates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MissionConfig {
    name: String,
    landing_site: Option<String>,
    longitude: f64,
    latitude: f64,
    landing_date: DateTime<Utc>,
    origin_date: DateTime<Utc>,
    sol_origin_ref: i64,
}

impl MissionConfig {
    /// Build and validate a mission.
    ///
    /// # Errors
    /// [`MarsTimeError::Configuration`] when the name is empty, the longitude
    /// is outside `[0, 360)`, or the latitude is outside `[-90, 90]`.
    pub fn new(
        name: impl Into<String>,
        longitude: f64,
        latitude: f64,
        landing_date: DateTime<Utc>,
        origin_date: DateTime<Utc>,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MarsTimeError::config(name, "mission name is empty"));
        }
        if !longitude.is_finite() || !(0.0..360.0).contains(&longitude) {
            return Err(MarsTimeError::config(
                name,
                format!("longitude {longitude} is outside [0, 360)"),
            ));
        }
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(MarsTimeError::config(
                name,
                format!("latitude {latitude} is outside [-90, 90]"),
            ));
        }
        Ok(Self {
            name,
            landing_site: None,
            longitude,
            latitude,
            landing_date,
            origin_date,
            sol_origin_ref: 0,
        })
    }

    /// Like [`new`](Self::new), with dates given as UTC strings.
    ///
    /// Unparseable dates are reported as [`MarsTimeError::Configuration`].
    pub fn from_strings(
        name: impl Into<String>,
        longitude: f64,
        latitude: f64,
        landing_date: &str,
        origin_date: &str,
    ) -> Result<Self> {
        let name = name.into();
        let landing = parse_date(&name, "landing_date", landing_date)?;
        let origin = parse_date(&name, "solorigin", origin_date)?;
        Self::new(name, longitude, latitude, landing, origin)
    }

    /// Attach a human-readable landing site.
    pub fn with_landing_site(mut self, site: impl Into<String>) -> Self {
        self.landing_site = Some(site.into());
        self
    }

    /// Number the origin sol (defaults to 0).
    pub fn with_sol_origin_ref(mut self, sol: i64) -> Result<Self> {
        if sol < 0 {
            return Err(MarsTimeError::config(
                self.name,
                format!("sol_origin_ref {sol} is negative"),
            ));
        }
        self.sol_origin_ref = sol;
        Ok(self)
    }

    /// NASA InSight, Elysium Planitia.
    pub fn insight() -> Self {
        let at = |micros: i64| DateTime::<Utc>::UNIX_EPOCH + Duration::microseconds(micros);
        Self {
            name: "InSight".to_string(),
            landing_site: Some("Elysium Planitia".to_string()),
            longitude: 224.03,
            latitude: 4.502384,
            // 2018-330T19:44:52.444
            landing_date: at(1_543_261_492_444_000),
            // 2018-330T05:10:50.3356
            origin_date: at(1_543_209_050_335_600),
            sol_origin_ref: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn landing_site(&self) -> Option<&str> {
        self.landing_site.as_deref()
    }

    /// Site longitude, degrees in `[0, 360)`.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Planetographic site latitude, degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn landing_date(&self) -> DateTime<Utc> {
        self.landing_date
    }

    /// UTC instant of Sol [`sol_origin_ref`](Self::sol_origin_ref), 00:00 LMST.
    pub fn origin_date(&self) -> DateTime<Utc> {
        self.origin_date
    }

    pub fn sol_origin_ref(&self) -> i64 {
        self.sol_origin_ref
    }
}

pub(crate) fn parse_date(mission: &str, field: &str, value: &str) -> Result<DateTime<Utc>> {
    parse_utc(value).map_err(|_| {
        MarsTimeError::config(mission, format!("{field} '{value}' is not a UTC timestamp"))
    })
}
