// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error taxonomy for Mars time conversions.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`InvalidInput`](MarsTimeError::InvalidInput) | malformed UTC/LMST strings, out-of-range components, unknown format tokens |
//! | [`Configuration`](MarsTimeError::Configuration) | mission records that fail validation at load time |
//! | [`ConvergenceFailure`](MarsTimeError::ConvergenceFailure) | the LMST → UTC refinement loop |
//!
//! Every variant carries the offending value so the failure can be
//! diagnosed without re-running the conversion.

use thiserror::Error;

/// Errors produced by this crate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MarsTimeError {
    /// A caller-supplied value is malformed or outside its domain.
    #[error("invalid {what}: {value}")]
    InvalidInput { what: &'static str, value: String },

    /// A mission record is incomplete or inconsistent.
    #[error("invalid configuration for mission '{mission}': {reason}")]
    Configuration { mission: String, reason: String },

    /// LMST → UTC refinement did not reach its tolerance.
    #[error(
        "LMST to UTC refinement did not converge after {iterations} iterations \
         (residual {residual_seconds:.6} s)"
    )]
    ConvergenceFailure {
        iterations: usize,
        residual_seconds: f64,
    },
}

impl MarsTimeError {
    pub(crate) fn invalid(what: &'static str, value: impl ToString) -> Self {
        Self::InvalidInput {
            what,
            value: value.to_string(),
        }
    }

    pub(crate) fn config(mission: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            mission: mission.into(),
            reason: reason.into(),
        }
    }
}

/// `Result` alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MarsTimeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_offending_value() {
        let err = MarsTimeError::invalid("UTC timestamp", "not-a-date");
        assert_eq!(err.to_string(), "invalid UTC timestamp: not-a-date");

        let err = MarsTimeError::config("InSight", "longitude 400 outside [0, 360)");
        assert!(err.to_string().contains("InSight"));
        assert!(err.to_string().contains("400"));
    }

    #[test]
    fn convergence_failure_reports_residual() {
        let err = MarsTimeError::ConvergenceFailure {
            iterations: 4,
            residual_seconds: 1.25,
        };
        let msg = err.to_string();
        assert!(msg.contains("4 iterations"));
        assert!(msg.contains("1.250000"));
    }
}
