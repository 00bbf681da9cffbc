//! Catalog View
//!
//! State behind the shop grid and the landing page's featured drops.
//!
//! ```text
//!   Loading ──apply(Ok | Err)──▶ Loaded(products)
//!                                     │
//!                         set_filter  ▼
//!                              visible() / cards()
//! ```
//!
//! A failed fetch settles into an empty `Loaded` collection. The shop shows
//! the same empty grid it would show for a category with no products.

use tokio_util::sync::CancellationToken;

use crate::api::ProductSource;
use crate::error::Result;
use crate::model::{CategoryFilter, Product};

/// Fetch lifecycle of the catalog
#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum CatalogState {
    /// Nothing received yet
    #[default]
    Loading,

    /// Collection as returned by the API, in API order
    Loaded(Vec<Product>),
}

/// Product collection plus the selected category
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CatalogView {
    state: CatalogState,
    filter: CategoryFilter,
}

impl CatalogView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Settle the view with a fetch result
    ///
    /// Errors never reach the view: they are logged and become an empty
    /// collection.
    pub fn apply(&mut self, result: Result<Vec<Product>>) {
        let products = result.unwrap_or_else(|e| {
            if e.is_fetch_failure() {
                tracing::warn!(error = %e, "catalog fetch failed, showing empty collection");
            } else {
                tracing::warn!(error = %e, "catalog payload unreadable, showing empty collection");
            }
            Vec::new()
        });
        tracing::debug!(count = products.len(), "catalog loaded");
        self.state = CatalogState::Loaded(products);
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    pub const fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub const fn is_loading(&self) -> bool {
        matches!(self.state, CatalogState::Loading)
    }

    /// Base collection; empty while loading
    pub fn products(&self) -> &[Product] {
        match &self.state {
            CatalogState::Loading => &[],
            CatalogState::Loaded(products) => products,
        }
    }

    /// Products passing the current filter, in collection order
    pub fn visible(&self) -> Vec<&Product> {
        filter_products(self.products(), self.filter).collect()
    }

    /// Visible products as cards
    pub fn cards(&self) -> Vec<ProductCard> {
        self.visible().into_iter().map(ProductCard::from).collect()
    }

    /// First `count` products of the unfiltered collection
    pub fn featured(&self, count: usize) -> Vec<ProductCard> {
        self.products()
            .iter()
            .take(count)
            .map(ProductCard::from)
            .collect()
    }
}

/// Products whose category passes `filter`
pub fn filter_products(
    products: &[Product],
    filter: CategoryFilter,
) -> impl Iterator<Item = &Product> {
    products.iter().filter(move |p| filter.matches(&p.category))
}

/// Everything a tile needs to render one product
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductCard {
    /// Stable list key
    pub key: String,
    pub name: String,
    /// Formatted price, e.g. `$40`
    pub price: String,
    pub category: String,
    pub thumbnail: Option<String>,
    /// Detail route, e.g. `/product/1`
    pub href: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            key: product.id.to_string(),
            name: product.name.clone(),
            price: product.price_label(),
            category: product.category.clone(),
            thumbnail: product.thumbnail().map(str::to_string),
            href: product.detail_path(),
        }
    }
}

/// Fetch the catalog for a view that may be torn down mid-flight
///
/// Returns `None` once `cancel` fires, so the caller never writes into a
/// view that is gone.
pub async fn load_scoped<S>(source: &S, cancel: &CancellationToken) -> Option<Result<Vec<Product>>>
where
    S: ProductSource + ?Sized,
{
    let result = tokio::select! {
        biased;
        () = cancel.cancelled() => return None,
        result = source.fetch_products() => result,
    };

    if cancel.is_cancelled() {
        tracing::debug!(source = source.name(), "view torn down, discarding catalog");
        return None;
    }

    Some(result)
}
