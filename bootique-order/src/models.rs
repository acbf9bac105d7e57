use parking_lot::RwLock;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What a client asks to put in a basket.
///
/// Carries no price. The catalog price is attached on the server through
/// [`OrderItemRequest::priced_at`]; a `price` field sent by the client is ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: String,
    pub quantity: i32,
}

impl OrderItemRequest {
    pub fn new(product_id: impl Into<String>, quantity: i32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }

    /// Snapshot the catalog price into an order item.
    pub fn priced_at(self, list_price: Decimal) -> OrderItem {
        OrderItem::new(self.product_id, self.quantity, list_price)
    }
}

/// Product, quantity and captured price of one line in a basket.
///
/// The price is fixed when the item is created and never follows later
/// catalog changes. Quantity is not validated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderItem {
    product_id: String,
    quantity: i32,
    price: Decimal,
}

impl OrderItem {
    pub fn new(product_id: impl Into<String>, quantity: i32, price: Decimal) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
            price,
        }
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    /// price * quantity
    pub fn total_price(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

// Wire form carries the line total as well.
impl Serialize for OrderItem {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Wire<'a> {
            product_id: &'a str,
            quantity: i32,
            price: Decimal,
            total_price: Decimal,
        }

        Wire {
            product_id: &self.product_id,
            quantity: self.quantity,
            price: self.price,
            total_price: self.total_price(),
        }
        .serialize(serializer)
    }
}

/// One session's basket. Items are appended, never merged or removed.
///
/// Safe to share between threads: appends take the write guard and every read
/// works on the state as of a single read guard.
#[derive(Debug, Default)]
pub struct Basket {
    items: RwLock<Vec<OrderItem>>,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_order_item(&self, item: OrderItem) {
        self.items.write().push(item);
    }

    /// Copy of the items in insertion order.
    pub fn order_items(&self) -> Vec<OrderItem> {
        self.items.read().clone()
    }

    /// Sum of every line's total, recomputed on each call. Zero when empty.
    pub fn total_price(&self) -> Decimal {
        sum_totals(&self.items.read())
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Items and total taken under the same guard.
    pub fn snapshot(&self) -> BasketSnapshot {
        let items = self.items.read();
        BasketSnapshot {
            total_price: sum_totals(&items),
            order_items: items.clone(),
        }
    }
}

fn sum_totals(items: &[OrderItem]) -> Decimal {
    items.iter().map(OrderItem::total_price).sum()
}

/// Point-in-time view of a basket, as returned to clients.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BasketSnapshot {
    pub order_items: Vec<OrderItem>,
    pub total_price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_basket_total_is_zero() {
        let basket = Basket::new();

        assert!(basket.is_empty());
        assert_eq!(basket.total_price(), Decimal::ZERO);
        assert!(basket.order_items().is_empty());
    }

    #[test]
    fn test_total_is_exact_sum() {
        let basket = Basket::new();
        basket.add_order_item(OrderItem::new("1", 2, dec!(989.99)));
        basket.add_order_item(OrderItem::new("3", 3, dec!(19.95)));
        basket.add_order_item(OrderItem::new("4", 1, dec!(6.95)));

        // 1979.98 + 59.85 + 6.95
        assert_eq!(basket.total_price(), dec!(2046.78));
    }

    #[test]
    fn test_decimal_has_no_float_drift() {
        let basket = Basket::new();
        for _ in 0..10 {
            basket.add_order_item(OrderItem::new("x", 1, dec!(0.10)));
        }

        assert_eq!(basket.total_price(), dec!(1.00));
    }

    #[test]
    fn test_same_product_is_not_merged() {
        let basket = Basket::new();
        let price = dec!(699.99);
        basket.add_order_item(OrderItem::new("2", 1, price));
        basket.add_order_item(OrderItem::new("2", 3, price));

        let items = basket.order_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity(), 1);
        assert_eq!(items[1].quantity(), 3);
        assert_eq!(basket.total_price(), price * dec!(4));
    }

    #[test]
    fn test_order_items_is_a_detached_copy() {
        let basket = Basket::new();
        basket.add_order_item(OrderItem::new("1", 1, dec!(1)));

        let mut items = basket.order_items();
        items.clear();

        assert_eq!(basket.len(), 1);
    }

    #[test]
    fn test_total_reflects_later_additions() {
        let basket = Basket::new();
        basket.add_order_item(OrderItem::new("1", 1, dec!(5)));
        assert_eq!(basket.total_price(), dec!(5));

        basket.add_order_item(OrderItem::new("1", 1, dec!(5)));
        assert_eq!(basket.total_price(), dec!(10));
    }

    #[test]
    fn test_quantity_is_not_validated() {
        // Zero and negative quantities are stored as given.
        let zero = OrderItem::new("1", 0, dec!(989.99));
        let negative = OrderItem::new("1", -2, dec!(989.99));

        assert_eq!(zero.total_price(), Decimal::ZERO);
        assert_eq!(negative.total_price(), dec!(-1979.98));

        let basket = Basket::new();
        basket.add_order_item(OrderItem::new("1", 3, dec!(10)));
        basket.add_order_item(OrderItem::new("1", -1, dec!(10)));
        assert_eq!(basket.total_price(), dec!(20));
    }

    #[test]
    fn test_order_item_equality_is_by_value() {
        assert_eq!(OrderItem::new("1", 2, dec!(989.99)), OrderItem::new("1", 2, dec!(989.99)));
        assert_ne!(OrderItem::new("1", 2, dec!(989.99)), OrderItem::new("1", 2, dec!(989.98)));
        assert_ne!(OrderItem::new("1", 2, dec!(1)), OrderItem::new("1", 3, dec!(1)));
        assert_ne!(OrderItem::new("1", 2, dec!(1)), OrderItem::new("2", 2, dec!(1)));
    }

    #[test]
    fn test_request_ignores_client_price() {
        let request: OrderItemRequest =
            serde_json::from_str(r#"{"productId":"1","quantity":2,"price":"0.01"}"#).unwrap();
        assert_eq!(request, OrderItemRequest::new("1", 2));

        let item = request.priced_at(dec!(989.99));
        assert_eq!(item, OrderItem::new("1", 2, dec!(989.99)));
        assert_eq!(item.total_price(), dec!(1979.98));
    }

    #[test]
    fn test_snapshot_json_shape() {
        let basket = Basket::new();
        basket.add_order_item(OrderItem::new("1", 2, dec!(989.99)));

        let json = serde_json::to_value(basket.snapshot()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "orderItems": [
                    { "productId": "1", "quantity": 2, "price": "989.99", "totalPrice": "1979.98" }
                ],
                "totalPrice": "1979.98"
            })
        );
    }

    #[test]
    fn test_empty_snapshot_json_shape() {
        let json = serde_json::to_value(Basket::new().snapshot()).unwrap();

        assert_eq!(json, serde_json::json!({ "orderItems": [], "totalPrice": "0" }));
    }
}
