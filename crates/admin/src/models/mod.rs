//! Transient view-models for the admin order surface.

mod order;

pub use order::{OrdersPayload, ShippingForm, StatusForm};
