//! Domain Models
//!
//! The product record served by the external catalog API and the fixed set of
//! category filters the shop offers. Prices use `rust_decimal`, never `f64`.
//!
//! Records arrive as untyped JSON; [`decode_products`] is the only way in. It
//! checks shape and types only: a payload missing a field or carrying the
//! wrong type fails with [`StoreError::Schema`], while well-typed records are
//! passed through as the API sent them.

use std::collections::HashSet;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use crate::routes;

/// Product identifier, as issued by the catalog API
///
/// The API has been seen returning both numeric and string ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Number(u64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

/// A sellable item
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Product {
    /// Unique id, used as list key and detail route parameter
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Price, currency unit unspecified by the API
    pub price: Decimal,

    /// Free-text category label (may be empty)
    pub category: String,

    /// Image URLs, first one is the thumbnail
    pub images: Vec<String>,
}

impl Product {
    /// First image, if any
    pub fn thumbnail(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Client route of the product detail page
    pub fn detail_path(&self) -> String {
        routes::product_path(&self.id)
    }

    /// Price as shown on cards, e.g. `$40`
    pub fn price_label(&self) -> String {
        format_price(self.price)
    }
}

#[cfg(test)]
impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            category: String::new(),
            images: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub fn with_images<I, S>(mut self, images: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.images = images.into_iter().map(Into::into).collect();
        self
    }
}

/// Render a price with a dollar prefix and no trailing zeros
pub fn format_price(price: Decimal) -> String {
    format!("${}", price.normalize())
}

/// Category filter offered by the shop
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    /// Sentinel: no filtering
    #[default]
    All,
    Men,
    Women,
    Unisex,
    Accessories,
}

impl CategoryFilter {
    /// Filters in display order
    pub const ALL: [Self; 5] = [Self::All, Self::Men, Self::Women, Self::Unisex, Self::Accessories];

    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Men => "Men",
            Self::Women => "Women",
            Self::Unisex => "Unisex",
            Self::Accessories => "Accessories",
        }
    }

    /// Whether a product with this category label passes the filter
    pub fn matches(self, category: &str) -> bool {
        match self {
            Self::All => true,
            other => category.eq_ignore_ascii_case(other.label()),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Wire shape of a product record
#[derive(Debug, Deserialize)]
struct RawProduct {
    id: ProductId,
    name: String,
    price: Decimal,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    images: Option<Vec<String>>,
}

impl From<RawProduct> for Product {
    fn from(raw: RawProduct) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            price: raw.price,
            category: raw.category.unwrap_or_default(),
            images: raw.images.unwrap_or_default(),
        }
    }
}

/// Validate a JSON payload as a list of products, keeping API order
pub fn decode_products(value: serde_json::Value) -> Result<Vec<Product>> {
    let raw: Vec<RawProduct> = serde_json::from_value(value)
        .map_err(|e| StoreError::Schema(e.to_string()))?;

    let products: Vec<Product> = raw.into_iter().map(Product::from).collect();

    let mut seen = HashSet::new();
    for product in &products {
        if !seen.insert(&product.id) {
            tracing::warn!(id = %product.id, "duplicate product id in catalog response");
        }
    }

    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_decode_minimal_record() {
        let products = decode_products(json!([
            {"id": 1, "name": "Tee", "price": 40, "category": "Men", "images": ["a.jpg"]}
        ]))
        .unwrap();

        assert_eq!(products.len(), 1);
        let tee = &products[0];
        assert_eq!(tee.id, ProductId::Number(1));
        assert_eq!(tee.price, dec!(40));
        assert_eq!(tee.thumbnail(), Some("a.jpg"));
        assert_eq!(tee.detail_path(), "/product/1");
    }

    #[test]
    fn test_optional_fields_default() {
        let products = decode_products(json!([
            {"id": "cap-7", "name": "Cap", "price": 19.5, "category": null}
        ]))
        .unwrap();

        assert_eq!(products[0].category, "");
        assert!(products[0].images.is_empty());
        assert_eq!(products[0].thumbnail(), None);
        assert_eq!(products[0].price_label(), "$19.5");
    }

    #[test]
    fn test_missing_name_is_schema_error() {
        let err = decode_products(json!([{"id": 2, "price": 10}])).unwrap_err();
        assert!(matches!(err, StoreError::Schema(_)));
    }

    #[test]
    fn test_unusual_records_kept_alongside_valid_ones() {
        let products = decode_products(json!([
            {"id": 1, "name": "Tee", "price": 40, "category": "Men", "images": ["a.jpg"]},
            {"id": 2, "name": "", "price": 10, "category": "Men"},
            {"id": 3, "name": "Refund", "price": -5}
        ]))
        .unwrap();

        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Tee", "", "Refund"]);
        assert_eq!(products[2].price_label(), "$-5");
    }

    #[test]
    fn test_mistyped_price_is_schema_error() {
        let err = decode_products(json!([{"id": 3, "name": "Hoodie", "price": "free"}])).unwrap_err();
        assert!(matches!(err, StoreError::Schema(_)));
    }

    #[test]
    fn test_non_array_rejected() {
        let err = decode_products(json!({"products": []})).unwrap_err();
        assert!(matches!(err, StoreError::Schema(_)));
    }

    #[test]
    fn test_duplicate_ids_tolerated() {
        let products = decode_products(json!([
            {"id": 1, "name": "Tee", "price": 40},
            {"id": 1, "name": "Tee (restock)", "price": 40}
        ]))
        .unwrap();
        assert_eq!(products.len(), 2);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(dec!(40)), "$40");
        assert_eq!(format_price(dec!(39.50)), "$39.5");
        assert_eq!(format_price(dec!(0)), "$0");
    }

    #[test]
    fn test_filter_matches_case_insensitively() {
        assert!(CategoryFilter::Men.matches("men"));
        assert!(CategoryFilter::Men.matches("MEN"));
        assert!(!CategoryFilter::Men.matches("Women"));
        assert!(!CategoryFilter::Accessories.matches(""));
        assert!(CategoryFilter::Accessories.matches("aCCessories"));
        assert!(CategoryFilter::All.matches(""));
        assert!(CategoryFilter::All.matches("anything"));
    }

}
