use std::env;
use std::path::PathBuf;

/// Location of the JSON catalog used to seed and snapshot the products
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub products_file: PathBuf,
}

impl StorageConfig {
    /// Environment variables:
    /// - PRODUCTS_FILE: Path of the catalog file (default: "products.json")
    pub fn from_env() -> Self {
        let products_file = env::var("PRODUCTS_FILE").unwrap_or_else(|_| "products.json".to_string());

        Self {
            products_file: PathBuf::from(products_file),
        }
    }
}
