//! Operations on decimal numbers.

mod round;
mod muldiv;
mod pow;
mod powtest;
mod root;
mod log;
mod exp;
mod series;
pub mod consts;
mod trig;
mod sin;
mod cos;
mod tan;
mod asin;
mod acos;
mod atan;

pub use self::acos::acos;
pub use self::acos::acos_with;
pub use self::asin::asin;
pub use self::asin::asin_with;
pub use self::asin::AsinPrimitive;
pub use self::asin::TaylorAsin;
pub use self::atan::atan;
pub use self::atan::atan_with;
pub use self::cos::cos;
pub use self::exp::exp;
pub use self::log::ln;
pub use self::log::log;
pub use self::log::log10;
pub use self::log::log2;
pub use self::muldiv::divide;
pub use self::muldiv::multiply;
pub use self::muldiv::multiply_prior_round;
pub use self::pow::pow;
pub use self::pow::powi;
pub use self::powtest::power_test_above;
pub use self::powtest::power_test_below;
pub use self::root::root;
pub use self::round::floor_significant_digit;
pub use self::round::oom_lsd;
pub use self::round::oom_msd;
pub use self::round::round;
pub use self::round::round_dp;
pub use self::series::series_run;
pub use self::series::PolycoeffGen;
pub use self::sin::sin;
pub use self::tan::tan;

pub(crate) use self::pow::clamp_radix;
