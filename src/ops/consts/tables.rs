//! Factorials and powers of two.

use num_bigint::BigInt;
use num_traits::One;

/// Table of values `f(0), f(1), ...` where every value is derived from the previous one.
/// The table only grows.
pub struct IntTable {
    vals: Vec<BigInt>,
    step: fn(usize, &BigInt) -> BigInt,
}

impl IntTable {
    fn new(step: fn(usize, &BigInt) -> BigInt) -> Self {
        IntTable {
            vals: vec![BigInt::one()],
            step,
        }
    }

    /// Factorials: n!
    pub fn factorials() -> Self {
        Self::new(|n, prev| prev * n)
    }

    /// Powers of two: 2^n
    pub fn powers_of_two() -> Self {
        Self::new(|_, prev| prev << 1)
    }

    /// Returns the n-th value, extending the table if needed.
    pub fn get(&mut self, n: usize) -> &BigInt {
        if n >= self.vals.len() {
            tracing::trace!(from = self.len(), to = n + 1, "extending table");
            self.vals.reserve(n + 1 - self.vals.len());
            for i in self.vals.len()..=n {
                let next = (self.step)(i, &self.vals[i - 1]);
                self.vals.push(next);
            }
        }

        &self.vals[n]
    }

    /// Number of computed values.
    pub fn len(&self) -> usize {
        self.vals.len()
    }
}
