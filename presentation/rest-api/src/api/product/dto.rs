use poem_openapi::Object;

use business::domain::product::model::{Product, ProductId, ProductsConsumer};
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::use_cases::update::UpdateProductParams;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    #[oai(validator(min_length = 1))]
    pub name: String,
    /// Units in stock
    pub quantity: i64,
    /// Unique product code (cannot be empty)
    #[oai(validator(min_length = 1))]
    pub code_value: String,
    /// Whether the product is visible to consumers
    #[oai(default)]
    pub is_published: bool,
    /// Expiration date as DD/MM/YYYY
    #[oai(validator(min_length = 1))]
    pub expiration: String,
    /// Unit price
    pub price: f64,
}

impl From<CreateProductRequest> for CreateProductParams {
    fn from(body: CreateProductRequest) -> Self {
        Self {
            name: body.name,
            quantity: body.quantity,
            code_value: body.code_value,
            is_published: body.is_published,
            expiration: body.expiration,
            price: body.price,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Product name (cannot be empty)
    #[oai(validator(min_length = 1))]
    pub name: String,
    /// Units in stock
    pub quantity: i64,
    /// Unique product code (cannot be empty)
    #[oai(validator(min_length = 1))]
    pub code_value: String,
    /// Whether the product is visible to consumers
    #[oai(default)]
    pub is_published: bool,
    /// Expiration date as DD/MM/YYYY
    #[oai(validator(min_length = 1))]
    pub expiration: String,
    /// Unit price
    pub price: f64,
}

impl UpdateProductRequest {
    pub fn into_params(self, id: ProductId) -> UpdateProductParams {
        UpdateProductParams {
            id,
            name: self.name,
            quantity: self.quantity,
            code_value: self.code_value,
            is_published: self.is_published,
            expiration: self.expiration,
            price: self.price,
        }
    }
}

/// Partial update. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Object)]
pub struct PatchProductRequest {
    #[oai(validator(min_length = 1))]
    pub name: Option<String>,
    pub quantity: Option<i64>,
    #[oai(validator(min_length = 1))]
    pub code_value: Option<String>,
    pub is_published: Option<bool>,
    #[oai(validator(min_length = 1))]
    pub expiration: Option<String>,
    pub price: Option<f64>,
}

impl PatchProductRequest {
    /// Overlays the present fields on `current`.
    pub fn merge_into(self, current: Product) -> UpdateProductParams {
        UpdateProductParams {
            id: current.id,
            name: self.name.unwrap_or(current.name),
            quantity: self.quantity.unwrap_or(current.quantity),
            code_value: self.code_value.unwrap_or(current.code_value),
            is_published: self.is_published.unwrap_or(current.is_published),
            expiration: self.expiration.unwrap_or(current.expiration),
            price: self.price.unwrap_or(current.price),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: i64,
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    pub is_published: bool,
    /// Expiration date as DD/MM/YYYY
    pub expiration: String,
    pub price: f64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            quantity: product.quantity,
            code_value: product.code_value,
            is_published: product.is_published,
            expiration: product.expiration,
            price: product.price,
        }
    }
}

/// Published products found for a consumer and the marked up total.
#[derive(Debug, Clone, Object)]
pub struct ProductsConsumerResponse {
    pub products: Vec<ProductResponse>,
    pub total_price: f64,
}

impl From<ProductsConsumer> for ProductsConsumerResponse {
    fn from(consumer: ProductsConsumer) -> Self {
        Self {
            products: consumer.products.into_iter().map(Into::into).collect(),
            total_price: consumer.total_price,
        }
    }
}
