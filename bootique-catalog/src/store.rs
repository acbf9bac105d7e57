use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::product::{CatalogError, Product};

/// In-memory product catalog, fixed once constructed.
///
/// Products keep the order they were seeded in. Lookups by id go through
/// an index into that list.
#[derive(Debug, Clone)]
pub struct ProductStore {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl ProductStore {
    /// Build a catalog from a seed list, rejecting duplicate ids and negative prices.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(products.len());

        for (position, product) in products.iter().enumerate() {
            if product.list_price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice {
                    id: product.id.clone(),
                    price: product.list_price,
                });
            }
            if index.insert(product.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
        }

        debug!("Catalog seeded with {} products", products.len());
        Ok(Self { products, index })
    }

    /// The reference catalog used when no seed is configured.
    pub fn seeded() -> Self {
        let products = default_products();
        let index = products
            .iter()
            .enumerate()
            .map(|(position, product)| (product.id.clone(), position))
            .collect();
        Self { products, index }
    }

    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    /// `None` when no product has this id.
    pub fn get_product_by_id(&self, id: &str) -> Option<&Product> {
        self.index.get(id).map(|&position| &self.products[position])
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::seeded()
    }
}

pub fn default_products() -> Vec<Product> {
    vec![
        Product::new("1", "iPhone X", "Apple", Decimal::new(98999, 2)),
        Product::new("2", "Galaxy S8", "Samsung", Decimal::new(69999, 2)),
        Product::new("3", "3310", "Nokia", Decimal::new(1995, 2)),
        Product::new("4", "Kermit", "KPN", Decimal::new(695, 2)),
    ]
}
