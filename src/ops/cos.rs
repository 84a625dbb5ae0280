//! Cosine.

use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::ops::consts::Consts;
use crate::ops::round::round_dp;
use crate::ops::series::series_run;
use crate::ops::series::AlternatingPolycoeffGen;
use crate::ops::trig::trig_eval;
use crate::ops::trig::TrigSeries;
use crate::ops::trig::TRIG_GUARD_DIGITS;
use bigdecimal::BigDecimal;
use num_traits::One;
use num_traits::Zero;

/// Computes the cosine of `x`. The result has `dp` decimal places and is rounded using the rounding mode `rm`.
/// This function requires constants cache `cc` for computing the result.
///
/// ## Errors
///
///  - RoundingNecessary: `rm` is `Unnecessary` and the result can't be represented with `dp` decimal places.
pub fn cos(x: &BigDecimal, dp: i64, rm: RoundingMode, cc: &mut Consts) -> Result<BigDecimal, Error> {
    if x.is_zero() {
        return round_dp(&BigDecimal::one(), dp, rm);
    }

    let ret = trig_eval(&x.abs(), TrigSeries::Cos, dp.max(0) + TRIG_GUARD_DIGITS, cc)?;

    round_dp(&ret, dp, rm)
}

/// cosine using series, |x| <= π/4, result has dp_w decimal places.
pub(super) fn cos_series(x: &BigDecimal, dp_w: i64, cc: &mut Consts) -> Result<BigDecimal, Error> {
    // cos:  1 - x^2/2! + x^4/4! - x^6/6! + ...
    let x_step = round_dp(&(x * x), dp_w, RoundingMode::HalfEven)?; // x^2

    let mut polycoeff_gen = AlternatingPolycoeffGen::cos();
    series_run(BigDecimal::one(), x_step.clone(), &x_step, &mut polycoeff_gen, -dp_w, cc)
}
