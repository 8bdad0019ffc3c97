//! Opaque order number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A human-facing order number issued by the commerce API.
///
/// Order numbers are opaque strings (e.g. `"ORD-20250114-0042"`), not
/// database IDs. The gateway never inspects the format; it only carries
/// the value through query results and builds upstream paths from it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct OrderNo(String);

impl OrderNo {
    /// Wrap a raw order number string.
    #[must_use]
    pub fn new(order_no: impl Into<String>) -> Self {
        Self(order_no.into())
    }

    /// Returns the order number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `OrderNo` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns the order number percent-encoded for use as a URL path
    /// segment. Order numbers normally contain only safe characters,
    /// but the value originates upstream and is not trusted.
    #[must_use]
    pub fn path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl fmt::Display for OrderNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OrderNo {
    fn from(order_no: String) -> Self {
        Self(order_no)
    }
}

impl From<&str> for OrderNo {
    fn from(order_no: &str) -> Self {
        Self(order_no.to_owned())
    }
}

impl AsRef<str> for OrderNo {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
