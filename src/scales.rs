// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies a specific time scale and encodes how
//! values in that scale relate to the canonical **Julian Date in TT**.
//!
//! | Marker | Description | Relation to JD(TT) |
//! |--------|-------------|--------------------|
//! | [`JD`] | Julian Date on the TT axis | identity |
//! | [`UTC`] | Julian Date on the UTC axis | `+ (TT − UTC)` from the offset table |
//! | [`J2000`] | Days since J2000.0 (TT) | `+ 2 451 545.0` |

use super::instant::TimeScale;
use super::tt_offset::utc_to_tt_offset;
use qtty::{Day, Days};

/// Julian Date — the identity scale.
///
/// `to_jd_tt(v) = v`, i.e. the quantity *is* a Julian Day number on TT.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt
    }
}

/// Days elapsed since the J2000.0 epoch on the TT axis (Mars24 eq. A-6).
///
/// This is the argument of every Mars orbital formula in [`crate::orbit`]
/// and [`crate::solar`].
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct J2000;

/// JD(TT) of the J2000.0 epoch.
pub(crate) const J2000_EPOCH_JD: Days = Days::new(2_451_545.0);

impl TimeScale for J2000 {
    const LABEL: &'static str = "ΔJ2000(TT)";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value + J2000_EPOCH_JD
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt - J2000_EPOCH_JD
    }
}

/// Julian Date on the **UTC** axis.
///
/// The conversion to JD(TT) adds the piecewise-constant TT−UTC offset of
/// [`utc_to_tt_offset`].  The inverse is a short fixed-point iteration: the
/// offset is a step function, so two passes settle on the right step except
/// within the offset itself of a breakpoint.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UTC;

impl TimeScale for UTC {
    const LABEL: &'static str = "JD(UTC)";

    #[inline]
    fn to_jd_tt(utc_value: Days) -> Days {
        utc_value + utc_to_tt_offset(utc_value.value()).to::<Day>()
    }

    #[inline]
    fn from_jd_tt(jd_tt: Days) -> Days {
        let mut utc = jd_tt;
        for _ in 0..3 {
            utc = jd_tt - utc_to_tt_offset(utc.value()).to::<Day>();
        }
        utc
    }
}

/// Generate pairwise `From<Time<A>> for Time<B>` implementations.
macro_rules! impl_time_conversions {
    ($single:ty) => {};

    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<super::instant::Time<$first>> for super::instant::Time<$rest> {
                #[inline]
                fn from(t: super::instant::Time<$first>) -> Self {
                    t.to::<$rest>()
                }
            }

            impl From<super::instant::Time<$rest>> for super::instant::Time<$first> {
                #[inline]
                fn from(t: super::instant::Time<$rest>) -> Self {
                    t.to::<$first>()
                }
            }
        )+

        impl_time_conversions!($($rest),+);
    };
}

impl_time_conversions!(JD, UTC, J2000);
