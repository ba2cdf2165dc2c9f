// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Mars local time for landed missions.
//!
//! Converts between UTC and the Mars clocks of the Mars24 algorithm (Allison
//! & McEwen 2000): Local Mean Solar Time (LMST), Local True Solar Time
//! (LTST), Mars Solar Date (MSD), Coordinated Mars Time (MTC), areocentric
//! solar longitude (Ls), the equation of time (EOT), and the Sun's elevation
//! and azimuth over a site.
//!
//! # Core types
//!
//! - [`MissionConfig`] — immutable site + sol-origin record for one lander.
//! - [`MarsTimeConverter`] — every conversion for one mission, UTC ↔ LMST
//!   included.
//! - [`Lmst`] / [`SolTime`] — sol number plus Mars clock time, printed as
//!   `SSSSTHH:MM:SS.ffffff`.
//! - [`Time<S>`] — instant on a typed [`TimeScale`] (`JD`, `UTC`, `J2000`).
//! - [`Interval<T>`] / [`UtcPeriod`] — sol spans and sampled series.
//!
//! # Conversion chain
//!
//! ```text
//! UTC ─► JD(UTC) ─► JD(TT) ─► ΔJ2000(TT) ─► M, αFMS, ν−M ─► Ls, EOT
//!                                        └─► MSD, MTC ─► LMST, LTST ─► Sun angles
//! ```
//!
//! The orbital and solar layers are plain functions of `Time<J2000>` in
//! [`orbit`], [`solar`] and [`sun`]; the mission-bound LMST clock lives in
//! [`MarsTimeConverter`].
//!
//! # Example
//!
//! ```rust
//! use marstime::{LmstFormat, MarsTimeConverter, MissionConfig};
//!
//! let insight = MissionConfig::insight();
//! let conv = MarsTimeConverter::new(&insight);
//!
//! let utc = conv.lmst_str_to_utc("0265T12:00:00").unwrap();
//! let lmst = conv.utc_to_lmst(Some(utc), LmstFormat::Tabular).unwrap();
//! assert_eq!(lmst.as_sol_time().unwrap().sol, 265);
//! ```

pub mod config;
mod converter;
mod error;
pub(crate) mod instant;
mod julian;
mod lmst;
mod mission;
pub mod orbit;
mod period;
pub(crate) mod scales;
pub mod solar;
pub mod sun;
mod tt_offset;
pub mod utc;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use config::{load_mission, load_missions, MissionCatalog};
pub use converter::{ConversionReport, MarsTimeConverter, MAX_ITERATIONS, TOLERANCE_SECONDS};
pub use error::{MarsTimeError, Result};
pub use instant::{Time, TimeInstant, TimeScale};
pub use julian::{j2000_offset_tt, julian_day_tt, julian_day_utc};
pub use lmst::{Lmst, LmstFormat, Ltst, MarsTimeValue, SolTime};
pub use mission::MissionConfig;
pub use period::{Interval, UtcPeriod, MAX_SAMPLES};
pub use scales::{J2000, JD, UTC};
pub use solar::{SOL_RATIO, SOL_SECONDS};
pub use sun::SunPosition;
pub use tt_offset::{tt_offset_table, utc_to_tt_offset};
pub use utc::parse_utc;

/// Julian Date on the TT axis.
pub type JulianDate = Time<JD>;

/// Days since J2000.0 on the TT axis.
pub type J2000Offset = Time<J2000>;
