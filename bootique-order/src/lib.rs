pub mod models;
pub mod store;

pub use models::{Basket, BasketSnapshot, OrderItem, OrderItemRequest};
pub use store::BasketStore;
