//! Won-denominated amounts and the shipping quote rule.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Orders at or above this subtotal ship free.
pub const FREE_SHIPPING_THRESHOLD: Won = Won::new(30_000);

/// Flat shipping fee below the free-shipping threshold.
pub const FLAT_SHIPPING_FEE: Won = Won::new(3_000);

/// An amount in Korean won.
///
/// KRW has no minor unit, so amounts are plain integers. The wire form
/// is a bare JSON number, matching what the commerce API sends for
/// `price`, `salePrice` and order totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Won(i64);

impl Won {
    /// Zero won.
    pub const ZERO: Self = Self(0);

    /// Create an amount from a raw won value.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Get the underlying i64 value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// Saturating addition.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    /// Saturating multiplication by a quantity.
    #[must_use]
    pub const fn saturating_mul(self, quantity: i64) -> Self {
        Self(self.0.saturating_mul(quantity))
    }
}

impl fmt::Display for Won {
    /// Formats with thousands separators and the won suffix, e.g. `29,800원`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let negative = self.0 < 0;
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i).is_multiple_of(3) {
                grouped.push(',');
            }
            grouped.push(c);
        }
        if negative {
            write!(f, "-{grouped}원")
        } else {
            write!(f, "{grouped}원")
        }
    }
}

impl From<i64> for Won {
    fn from(amount: i64) -> Self {
        Self(amount)
    }
}

impl From<Won> for i64 {
    fn from(amount: Won) -> Self {
        amount.0
    }
}

/// Shipping fee for a cart with the given item subtotal.
///
/// An empty cart ships nothing and pays nothing; otherwise the flat fee
/// applies until the subtotal reaches the free-shipping threshold.
#[must_use]
pub const fn shipping_fee(items_total: Won) -> Won {
    if items_total.0 == 0 || items_total.0 >= FREE_SHIPPING_THRESHOLD.0 {
        Won::ZERO
    } else {
        FLAT_SHIPPING_FEE
    }
}
