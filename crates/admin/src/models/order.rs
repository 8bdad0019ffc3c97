//! Admin order list payload and mutation forms.

use std::collections::BTreeMap;

use posy_core::OrderStatus;
use serde::{Deserialize, Serialize};

/// The upstream `/admin/orders` response body.
///
/// Order rows stay untyped JSON values so fields the gateway does not know
/// about survive re-serialization. The summary is normalized before it
/// reaches the client: see [`OrdersPayload::normalized`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersPayload {
    pub orders: Vec<serde_json::Value>,
    #[serde(default)]
    pub summary: BTreeMap<String, i64>,
}

impl OrdersPayload {
    /// Normalize the status-count summary.
    ///
    /// Every known status appears with a zero default, counts under alias
    /// spellings (e.g. `CANCELLED`) fold into the canonical key, and
    /// unknown keys pass through untouched.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let mut summary: BTreeMap<String, i64> = OrderStatus::ALL
            .iter()
            .map(|status| (status.as_str().to_string(), 0))
            .collect();

        for (key, count) in std::mem::take(&mut self.summary) {
            match key.parse::<OrderStatus>() {
                Ok(status) => {
                    *summary.entry(status.as_str().to_string()).or_insert(0) += count;
                }
                Err(_) => {
                    summary.insert(key, count);
                }
            }
        }

        self.summary = summary;
        self
    }
}

/// Body of a status-change request.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusForm {
    pub status: String,
}

/// Body of a shipment-registration request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingForm {
    pub courier: String,
    pub tracking_no: String,
    #[serde(default = "default_auto_ship")]
    pub auto_ship: bool,
}

const fn default_auto_ship() -> bool {
    true
}

impl ShippingForm {
    /// Trim the text fields and reject blank ones.
    ///
    /// # Errors
    ///
    /// Returns a message naming the missing field.
    pub fn normalized(&self) -> Result<Self, &'static str> {
        let courier = self.courier.trim();
        let tracking_no = self.tracking_no.trim();

        if courier.is_empty() {
            return Err("courier is required");
        }
        if tracking_no.is_empty() {
            return Err("trackingNo is required");
        }

        Ok(Self {
            courier: courier.to_string(),
            tracking_no: tracking_no.to_string(),
            auto_ship: self.auto_ship,
        })
    }
}
