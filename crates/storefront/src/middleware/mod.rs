//! HTTP middleware for the storefront gateway.

pub mod request_id;
