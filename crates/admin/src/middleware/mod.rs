//! HTTP middleware for the admin gateway.

pub mod request_id;
