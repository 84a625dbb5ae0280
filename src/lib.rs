//! Roots, powers, logarithms, exponentials and trigonometric functions of arbitrary precision decimal numbers.
//!
//! Numbers are `bigdecimal::BigDecimal` values. Every operation takes the precision of the result either as
//! an order of magnitude (OOM), where `-1` selects the resolution `0.1`, `0` selects units, and `1` selects tens,
//! or as a number of decimal places, which is the negated OOM. The result is rounded using one of the
//! rounding modes of `RoundingMode`.
//!
//! Functions which need mathematical constants or factorials take a constants cache `Consts`.
//! The cache only grows in precision, so it is worth creating it once and reusing it.
//! `Context` bundles the cache with the default precision, rounding mode, and power radix.
//!
//! ## Examples
//!
//! ```
//! use oom_math::{Consts, RoundingMode, root, sin};
//! use bigdecimal::BigDecimal;
//! use num_bigint::BigInt;
//!
//! let mut cc = Consts::new().unwrap();
//!
//! let r = root(&BigDecimal::from(8), &BigInt::from(3), 64, 10, RoundingMode::HalfUp).unwrap();
//! assert_eq!(r, BigDecimal::from(2));
//!
//! let s = sin(&BigDecimal::from(0), 10, RoundingMode::HalfUp, &mut cc).unwrap();
//! assert_eq!(s, BigDecimal::from(0));
//! ```
//!
//! Operations log through `tracing`. The crate never installs a subscriber.

#![deny(clippy::suspicious)]

mod common;
mod ctx;
mod defs;
mod ops;

pub use crate::defs::Error;
pub use crate::defs::Oom;
pub use crate::defs::RoundingMode;
pub use crate::defs::DEFAULT_DP;
pub use crate::defs::DEFAULT_POWER_RADIX;
pub use crate::defs::DEFAULT_RM;
pub use crate::defs::LOG_MAX_ITERATIONS;
pub use crate::defs::NEWTON_MAX_ITERATIONS;
pub use crate::defs::POWER_RADIX_MAX;
pub use crate::defs::POWER_RADIX_MIN;
pub use crate::defs::ROOT_BISECT_ITERATIONS;
pub use crate::defs::SERIES_MAX_TERMS;

pub use crate::ctx::Config;
pub use crate::ctx::Context;

pub use crate::ops::consts::Consts;

pub use crate::ops::acos;
pub use crate::ops::acos_with;
pub use crate::ops::asin;
pub use crate::ops::asin_with;
pub use crate::ops::atan;
pub use crate::ops::atan_with;
pub use crate::ops::cos;
pub use crate::ops::divide;
pub use crate::ops::exp;
pub use crate::ops::floor_significant_digit;
pub use crate::ops::ln;
pub use crate::ops::log;
pub use crate::ops::log10;
pub use crate::ops::log2;
pub use crate::ops::multiply;
pub use crate::ops::multiply_prior_round;
pub use crate::ops::oom_lsd;
pub use crate::ops::oom_msd;
pub use crate::ops::pow;
pub use crate::ops::power_test_above;
pub use crate::ops::power_test_below;
pub use crate::ops::powi;
pub use crate::ops::root;
pub use crate::ops::round;
pub use crate::ops::round_dp;
pub use crate::ops::series_run;
pub use crate::ops::sin;
pub use crate::ops::tan;
pub use crate::ops::AsinPrimitive;
pub use crate::ops::PolycoeffGen;
pub use crate::ops::TaylorAsin;
