//! Order lifecycle status.

use serde::{Deserialize, Serialize};

/// Error returned when a string is not a recognized order status.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid order status: {0}")]
pub struct ParseOrderStatusError(pub String);

/// Order lifecycle status as reported by the commerce API.
///
/// The wire form is SCREAMING_SNAKE_CASE (`"PENDING"`, `"PAID"`, ...).
/// Parsing is case-insensitive and accepts the double-L `CANCELLED`
/// spelling that older admin clients sent; the canonical serialized
/// form is always `CANCELED`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
    Paid,
    Shipped,
    Delivered,
    Canceled,
    Refunded,
}

impl OrderStatus {
    /// Every status, in lifecycle order. Useful for filter menus and
    /// for zero-filling count summaries.
    pub const ALL: [Self; 6] = [
        Self::Pending,
        Self::Paid,
        Self::Shipped,
        Self::Delivered,
        Self::Canceled,
        Self::Refunded,
    ];

    /// The canonical wire form of this status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::Shipped => "SHIPPED",
            Self::Delivered => "DELIVERED",
            Self::Canceled => "CANCELED",
            Self::Refunded => "REFUNDED",
        }
    }

    /// Human-readable label for back-office screens.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "입금대기",
            Self::Paid => "결제완료",
            Self::Shipped => "배송중",
            Self::Delivered => "배송완료",
            Self::Canceled => "취소",
            Self::Refunded => "환불",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = ParseOrderStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "PAID" => Ok(Self::Paid),
            "SHIPPED" => Ok(Self::Shipped),
            "DELIVERED" => Ok(Self::Delivered),
            "CANCELED" | "CANCELLED" => Ok(Self::Canceled),
            "REFUNDED" => Ok(Self::Refunded),
            _ => Err(ParseOrderStatusError(s.to_owned())),
        }
    }
}
