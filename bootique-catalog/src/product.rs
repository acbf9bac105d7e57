use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product that can be bought.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub title: String,
    pub brand: String,
    pub list_price: Decimal,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        brand: impl Into<String>,
        list_price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            brand: brand.into(),
            list_price,
        }
    }
}

/// Catalog construction errors
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    #[error("Product {id} has a negative list price: {price}")]
    NegativePrice { id: String, price: Decimal },
}
