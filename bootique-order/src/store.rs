use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

use crate::models::Basket;

/// Keeps one basket per session key for the life of the process.
///
/// Baskets are created on first reference and never evicted.
#[derive(Debug, Default)]
pub struct BasketStore {
    baskets: RwLock<HashMap<String, Arc<Basket>>>,
}

impl BasketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the basket for `id`, creating it if this is the first reference.
    ///
    /// Creation happens inside the write guard through `entry`, so racing callers
    /// on a new key all receive the same basket.
    pub fn get_basket_by_id(&self, id: &str) -> Arc<Basket> {
        if let Some(basket) = self.baskets.read().get(id) {
            return Arc::clone(basket);
        }

        let mut baskets = self.baskets.write();
        let basket = baskets.entry(id.to_owned()).or_insert_with(|| {
            debug!(basket_id = %id, "Creating basket");
            Arc::new(Basket::new())
        });
        Arc::clone(basket)
    }

    /// Number of baskets created so far.
    pub fn len(&self) -> usize {
        self.baskets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.baskets.read().is_empty()
    }
}
