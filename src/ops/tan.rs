//! Tangent.

use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::ops::consts::Consts;
use crate::ops::muldiv::divide;
use crate::ops::round::oom_msd;
use crate::ops::round::round_dp;
use crate::ops::trig::trig_eval;
use crate::ops::trig::TrigSeries;
use bigdecimal::BigDecimal;
use num_traits::Signed;
use num_traits::Zero;

// Decimal places of sine and cosine computed beyond the requested ones.
const TAN_GUARD_DIGITS: i64 = 10;

/// Computes the tangent of `x`. The result has `dp` decimal places and is rounded using the rounding mode `rm`.
/// This function requires constants cache `cc` for computing the result.
///
/// ## Errors
///
///  - Undefined: the cosine of `x` rounds to zero.
///  - RoundingNecessary: `rm` is `Unnecessary` and the result can't be represented with `dp` decimal places.
pub fn tan(x: &BigDecimal, dp: i64, rm: RoundingMode, cc: &mut Consts) -> Result<BigDecimal, Error> {
    if x.is_zero() {
        return round_dp(x, dp, rm);
    }

    if x.is_negative() {
        return Ok(-tan(&x.abs(), dp, rm.invert(), cc)?);
    }

    let dp_w = dp.max(0) + TAN_GUARD_DIGITS;
    let c = trig_eval(x, TrigSeries::Cos, dp_w, cc)?;

    if round_dp(&c, dp_w, RoundingMode::HalfEven)?.is_zero() {
        return Err(Error::Undefined);
    }

    // the relative error of a small cosine is large: the error of tan is about err(cos) / cos^2.
    let msd = oom_msd(&c);
    let (s, c) = if msd < -2 {
        let dp_w = dp_w - 2 * msd;
        let c = trig_eval(x, TrigSeries::Cos, dp_w, cc)?;
        (trig_eval(x, TrigSeries::Sin, dp_w, cc)?, c)
    } else {
        (trig_eval(x, TrigSeries::Sin, dp_w, cc)?, c)
    };

    divide(&s, &c, -dp, rm)
}
