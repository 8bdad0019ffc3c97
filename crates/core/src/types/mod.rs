//! Shared newtype wrappers and enums.

mod id;
mod order_no;
mod price;
mod status;

pub use id::{CartItemId, OrderId, ProductId, UserId};
pub use order_no::OrderNo;
pub use price::{FLAT_SHIPPING_FEE, FREE_SHIPPING_THRESHOLD, Won, shipping_fee};
pub use status::{OrderStatus, ParseOrderStatusError};
