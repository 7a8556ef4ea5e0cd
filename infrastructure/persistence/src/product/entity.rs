use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;

/// Product record as stored in the JSON catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductEntity {
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    #[serde(default)]
    pub is_published: bool,
    pub expiration: String,
    pub price: f64,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product {
            id: self.id,
            name: self.name,
            quantity: self.quantity,
            code_value: self.code_value,
            is_published: self.is_published,
            expiration: self.expiration,
            price: self.price,
        }
    }

    pub fn from_domain(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            quantity: product.quantity,
            code_value: product.code_value.clone(),
            is_published: product.is_published,
            expiration: product.expiration.clone(),
            price: product.price,
        }
    }
}
