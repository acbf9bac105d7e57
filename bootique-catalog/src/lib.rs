pub mod product;
pub mod store;

pub use product::{CatalogError, Product};
pub use store::ProductStore;
