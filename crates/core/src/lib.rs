//! Posy Core - Shared types library.
//!
//! This crate provides common types used across the Posy components:
//! - `storefront` - Customer-facing gateway in front of the commerce API
//! - `admin` - Back-office gateway for order management
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Every
//! authoritative entity lives in the upstream commerce API; what is shared
//! here is the vocabulary both gateways speak: order statuses, type-safe
//! IDs, order numbers, and won-denominated amounts.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, order numbers, amounts, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
