//! Transient view-models deserialized from upstream JSON.
//!
//! Nothing here is stored; the upstream commerce API owns all state.

mod cart;

pub use cart::{CartItem, CartPayload, CheckoutSummary};
