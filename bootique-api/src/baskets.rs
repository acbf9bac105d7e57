use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use bootique_order::{BasketSnapshot, OrderItemRequest};
use tracing::{debug, warn};

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/baskets/{id}", get(get_basket))
        .route("/baskets/{id}/items", post(add_to_basket))
}

/// GET /baskets/{id}
/// An unknown id yields a new, empty basket.
async fn get_basket(State(state): State<AppState>, Path(id): Path<String>) -> Json<BasketSnapshot> {
    Json(state.baskets.get_basket_by_id(&id).snapshot())
}

/// POST /baskets/{id}/items
/// Prices the item from the catalog and appends it to the session's basket.
async fn add_to_basket(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<OrderItemRequest>,
) -> Result<Json<BasketSnapshot>, AppError> {
    let Some(product) = state.products.get_product_by_id(&req.product_id) else {
        warn!(basket_id = %id, product_id = %req.product_id, "Unknown product");
        return Err(AppError::NotFound(format!("Product not found: {}", req.product_id)));
    };

    let item = req.priced_at(product.list_price);
    debug!(
        basket_id = %id,
        product_id = item.product_id(),
        quantity = item.quantity(),
        price = %item.price(),
        "Adding item to basket"
    );

    let basket = state.baskets.get_basket_by_id(&id);
    basket.add_order_item(item);

    Ok(Json(basket.snapshot()))
}
