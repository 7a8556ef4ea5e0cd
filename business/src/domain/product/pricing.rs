use super::model::{Product, ProductsConsumer};

/// Markup for fewer than ten matched products.
pub const SMALL_ORDER_MARKUP: f64 = 1.21;
/// Markup from ten up to and including twenty matched products.
pub const MEDIUM_ORDER_MARKUP: f64 = 1.17;
/// Markup above twenty matched products.
pub const LARGE_ORDER_MARKUP: f64 = 1.15;

const SMALL_ORDER_LIMIT: usize = 10;
const MEDIUM_ORDER_LIMIT: usize = 20;

/// Returns the markup applied to a consumer total for `count` matched products.
///
/// Business rules:
/// - fewer than 10 -> 1.21
/// - 10 to 20 inclusive -> 1.17
/// - more than 20 -> 1.15
pub fn markup_rate(count: usize) -> f64 {
    if count < SMALL_ORDER_LIMIT {
        SMALL_ORDER_MARKUP
    } else if count <= MEDIUM_ORDER_LIMIT {
        MEDIUM_ORDER_MARKUP
    } else {
        LARGE_ORDER_MARKUP
    }
}

impl ProductsConsumer {
    /// Sums the matched prices and applies the tier chosen by the final match count.
    pub fn from_matches(products: Vec<Product>) -> Self {
        let subtotal: f64 = products.iter().map(|p| p.price).sum();
        let total_price = subtotal * markup_rate(products.len());
        Self {
            products,
            total_price,
        }
    }
}
