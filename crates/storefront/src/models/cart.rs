//! Cart payloads and the server-computed checkout summary.

use posy_core::{CartItemId, ProductId, Won, shipping_fee};
use serde::{Deserialize, Serialize};

/// A cart line as the upstream commerce API reports it.
///
/// The upstream serves snake_case field names, so the struct fields map
/// onto the wire shape directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub cart_item_id: CartItemId,
    pub quantity: i64,
    pub product_id: ProductId,
    pub name: String,
    pub price: Won,
    pub sale_price: Option<Won>,
    pub stock: i64,
    pub thumbnail_url: Option<String>,
}

impl CartItem {
    /// The effective unit price: sale price when present, list price otherwise.
    #[must_use]
    pub fn unit_price(&self) -> Won {
        self.sale_price.unwrap_or(self.price)
    }

    /// The line total for this item.
    #[must_use]
    pub fn line_total(&self) -> Won {
        self.unit_price().saturating_mul(self.quantity)
    }
}

/// The upstream `/cart` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartPayload {
    pub items: Vec<CartItem>,
}

/// Totals for the checkout page, computed gateway-side from the cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSummary {
    pub item_count: i64,
    pub items_total: Won,
    pub shipping_fee: Won,
    pub grand_total: Won,
}

impl CheckoutSummary {
    /// Compute totals from the cart lines using the shipping quote rule.
    #[must_use]
    pub fn from_items(items: &[CartItem]) -> Self {
        let item_count = items.iter().map(|item| item.quantity).sum();
        let items_total = items
            .iter()
            .fold(Won::ZERO, |total, item| total.saturating_add(item.line_total()));
        let fee = shipping_fee(items_total);

        Self {
            item_count,
            items_total,
            shipping_fee: fee,
            grand_total: items_total.saturating_add(fee),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(quantity: i64, price: i64, sale_price: Option<i64>) -> CartItem {
        CartItem {
            cart_item_id: CartItemId::new(1),
            quantity,
            product_id: ProductId::new(10),
            name: "테스트 상품".to_string(),
            price: Won::new(price),
            sale_price: sale_price.map(Won::new),
            stock: 99,
            thumbnail_url: None,
        }
    }

    #[test]
    fn test_unit_price_prefers_sale_price() {
        assert_eq!(item(1, 12_000, Some(9_900)).unit_price(), Won::new(9_900));
        assert_eq!(item(1, 12_000, None).unit_price(), Won::new(12_000));
    }

    #[test]
    fn test_summary_below_free_shipping() {
        // 2 x 9,900 = 19,800 subtotal, flat fee applies
        let summary = CheckoutSummary::from_items(&[item(2, 12_000, Some(9_900)), item(1, 0, None)]);
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.items_total, Won::new(19_800));
        assert_eq!(summary.shipping_fee, Won::new(3_000));
        assert_eq!(summary.grand_total, Won::new(22_800));
    }

    #[test]
    fn test_summary_free_shipping_threshold() {
        let summary = CheckoutSummary::from_items(&[item(3, 10_000, None)]);
        assert_eq!(summary.items_total, Won::new(30_000));
        assert_eq!(summary.shipping_fee, Won::ZERO);
        assert_eq!(summary.grand_total, Won::new(30_000));
    }

    #[test]
    fn test_summary_empty_cart() {
        let summary = CheckoutSummary::from_items(&[]);
        assert_eq!(summary.item_count, 0);
        assert_eq!(summary.items_total, Won::ZERO);
        assert_eq!(summary.shipping_fee, Won::ZERO);
        assert_eq!(summary.grand_total, Won::ZERO);
    }

    #[test]
    fn test_cart_item_matches_upstream_wire_shape() {
        // Field names exactly as the upstream /cart endpoint serves them
        let json = r#"{
            "cart_item_id": 5,
            "quantity": 2,
            "product_id": 7,
            "name": "수국 화분",
            "price": 15000,
            "sale_price": null,
            "stock": 3,
            "thumbnail_url": "https://cdn.posy.shop/p/7.jpg"
        }"#;

        let item: CartItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.cart_item_id, CartItemId::new(5));
        assert_eq!(item.line_total(), Won::new(30_000));
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let summary = CheckoutSummary::from_items(&[item(1, 5_000, None)]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["itemCount"], 1);
        assert_eq!(json["itemsTotal"], 5_000);
        assert_eq!(json["shippingFee"], 3_000);
        assert_eq!(json["grandTotal"], 8_000);
    }
}
