use bootique_catalog::{store::default_products, CatalogError, Product, ProductStore};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    pub port: u16,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Products the catalog is seeded with at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    #[serde(default = "default_seed")]
    pub products: Vec<ProductSeed>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { products: default_seed() }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ProductSeed {
    pub id: String,
    pub title: String,
    pub brand: String,
    pub list_price: Decimal,
}

impl From<ProductSeed> for Product {
    fn from(seed: ProductSeed) -> Self {
        Product::new(seed.id, seed.title, seed.brand, seed.list_price)
    }
}

impl From<Product> for ProductSeed {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            brand: product.brand,
            list_price: product.list_price,
        }
    }
}

fn default_seed() -> Vec<ProductSeed> {
    default_products().into_iter().map(ProductSeed::from).collect()
}

impl CatalogConfig {
    pub fn into_store(self) -> Result<ProductStore, CatalogError> {
        ProductStore::from_products(self.products.into_iter().map(Product::from).collect())
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        tracing::debug!("Loading configuration for run mode {}", run_mode);

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. BOOTIQUE__SERVER__PORT=9090
            .add_source(config::Environment::with_prefix("BOOTIQUE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
