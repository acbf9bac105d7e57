use std::sync::Arc;

use bootique_catalog::ProductStore;
use bootique_order::BasketStore;

/// Shared by every handler. Built once in `main` and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ProductStore>,
    pub baskets: Arc<BasketStore>,
}

impl AppState {
    pub fn new(products: ProductStore, baskets: BasketStore) -> Self {
        Self {
            products: Arc::new(products),
            baskets: Arc::new(baskets),
        }
    }
}
