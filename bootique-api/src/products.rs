use axum::{extract::State, routing::get, Json, Router};
use bootique_catalog::Product;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products))
        .route("/products", get(list_products))
}

/// GET / and GET /products
async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.products.list_products().to_vec())
}
