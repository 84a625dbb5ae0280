//! Static constants.

use bigdecimal::BigDecimal;
use lazy_static::lazy_static;

lazy_static! {
    pub static ref ONE: BigDecimal = BigDecimal::from(1);
    pub static ref ASIN_REDUCTION_THRES: BigDecimal = BigDecimal::new(7.into(), 1);
}
