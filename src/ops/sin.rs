//! Sine.

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
use num_traits::Signed;
use num_traits::Zero;

/// Computes the sine of `x`. The result has `dp` decimal places and is rounded using the rounding mode `rm`.
/// This function requires constants cache `cc` for computing the result.
///
/// ## Errors
///
///  - RoundingNecessary: `rm` is `Unnecessary` and the result can't be represented with `dp` decimal places.
pub fn sin(x: &BigDecimal, dp: i64, rm: RoundingMode, cc: &mut Consts) -> Result<BigDecimal, Error> {
    if x.is_zero() {
        return round_dp(x, dp, rm);
    }

    if x.is_negative() {
        return Ok(-sin(&x.abs(), dp, rm.invert(), cc)?);
    }

    let ret = trig_eval(x, TrigSeries::Sin, dp.max(0) + TRIG_GUARD_DIGITS, cc)?;

    round_dp(&ret, dp, rm)
}

/// sine using series, |x| <= π/4, result has dp_w decimal places.
pub(super) fn sin_series(x: &BigDecimal, dp_w: i64, cc: &mut Consts) -> Result<BigDecimal, Error> {
    // sin:  x - x^3/3! + x^5/5! - x^7/7! + ...
    let oom = -dp_w;
    let x_step = round_dp(&(x * x), dp_w, RoundingMode::HalfEven)?; // x^2
    let x_first = round_dp(&(x * &x_step), dp_w, RoundingMode::HalfEven)?; // x^3

    let mut polycoeff_gen = AlternatingPolycoeffGen::sin();
    series_run(x.clone(), x_first, &x_step, &mut polycoeff_gen, oom, cc)
}
