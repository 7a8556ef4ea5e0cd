/// Identifier assigned by storage when a product is created.
pub type ProductId = i64;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    pub is_published: bool,
    pub expiration: String,
    pub price: f64,
}

/// Product data supplied by a caller before storage assigns an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProductProps {
    pub name: String,
    pub quantity: i64,
    pub code_value: String,
    pub is_published: bool,
    pub expiration: String,
    pub price: f64,
}

impl NewProductProps {
    /// Attaches the identifier chosen by storage.
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
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

impl Product {
    /// Returns true when this product holds `code_value` and is not the product being checked.
    pub fn conflicts_with(&self, code_value: &str, candidate: Option<ProductId>) -> bool {
        self.code_value == code_value && Some(self.id) != candidate
    }
}

/// Published products matched by a consumer price request, with the marked up total.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductsConsumer {
    pub products: Vec<Product>,
    pub total_price: f64,
}
