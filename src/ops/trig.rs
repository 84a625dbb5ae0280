//! Argument reduction and evaluation of trigonometric series.

use crate::defs::Error;
use crate::defs::RoundingMode;
use crate::ops::consts::Consts;
use crate::ops::cos::cos_series;
use crate::ops::muldiv::divide;
use crate::ops::round::oom_msd;
use crate::ops::round::round_dp;
use crate::ops::sin::sin_series;
use bigdecimal::BigDecimal;

/// Decimal places computed beyond the requested ones by sine and cosine.
pub(crate) const TRIG_GUARD_DIGITS: i64 = 5;

/// Series used to evaluate the reduced argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TrigSeries {
    Sin,
    Cos,
}

impl TrigSeries {
    fn complement(self) -> Self {
        match self {
            TrigSeries::Sin => TrigSeries::Cos,
            TrigSeries::Cos => TrigSeries::Sin,
        }
    }
}

/// Argument in [0, π/4], the series to evaluate it with, and the sign of the result.
pub(crate) struct ReducedArg {
    pub arg: BigDecimal,
    pub series: TrigSeries,
    pub negative: bool,
}

/// Reduces non-negative `x` for computing `f(x)`: first by 2π, then using the symmetries around π, π/2 and π/4.
pub(crate) fn reduce_trig_arg(x: &BigDecimal, f: TrigSeries, dp_w: i64, cc: &mut Consts) -> Result<ReducedArg, Error> {
    // error of 2π is multiplied by the number of periods.
    let dp_p = dp_w + oom_msd(x).max(0) + 2;

    let two_pi = cc.two_pi(dp_p, RoundingMode::HalfEven)?;
    let mut r = if *x >= two_pi {
        let k = divide(x, &two_pi, 0, RoundingMode::Floor)?;
        x - k * &two_pi
    } else {
        x.clone()
    };

    let pi = cc.pi(dp_p, RoundingMode::HalfEven)?;
    let half_pi = cc.half_pi(dp_p, RoundingMode::HalfEven)?;
    let quarter_pi = cc.quarter_pi(dp_p, RoundingMode::HalfEven)?;

    let mut series = f;
    let mut negative = false;

    // sin(r + π) = -sin(r), cos(r + π) = -cos(r)
    if r >= pi {
        r -= &pi;
        negative = !negative;
    }

    // sin(π - r) = sin(r), cos(π - r) = -cos(r)
    if r > half_pi {
        r = &pi - r;
        if series == TrigSeries::Cos {
            negative = !negative;
        }
    }

    // sin(π/2 - r) = cos(r), cos(π/2 - r) = sin(r)
    if r > quarter_pi {
        r = &half_pi - r;
        series = series.complement();
    }

    Ok(ReducedArg {
        arg: round_dp(&r, dp_w + 2, RoundingMode::HalfEven)?,
        series,
        negative,
    })
}

/// Computes `f(x)` for non-negative `x` with `dp_w` decimal places, not rounded.
pub(crate) fn trig_eval(x: &BigDecimal, f: TrigSeries, dp_w: i64, cc: &mut Consts) -> Result<BigDecimal, Error> {
    let red = reduce_trig_arg(x, f, dp_w, cc)?;

    let v = match red.series {
        TrigSeries::Sin => sin_series(&red.arg, dp_w, cc)?,
        TrigSeries::Cos => cos_series(&red.arg, dp_w, cc)?,
    };

    Ok(if red.negative { -v } else { v })
}
