//! # ctrlz-core
//!
//! Framework-free building blocks of the CTRL-Z storefront.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       Page shell                            │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────┐  │
//! │  │   Routes    │  │  MenuState  │  │     AccountTab      │  │
//! │  └─────────────┘  └─────────────┘  └─────────────────────┘  │
//! │  ┌───────────────────────────────────────────────────────┐  │
//! │  │  CatalogView ── ProductCard     (filter + render)     │  │
//! │  └──────────────────────────┬────────────────────────────┘  │
//! │                 ┌───────────┴──────────┐                    │
//! │                 │  ProductSource       │                    │
//! │                 │  (Strategy)          │                    │
//! │                 └──────────────────────┘                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here depends on a UI framework, so the catalog rules and the
//! shell state machines are tested natively and reused by the Leptos
//! front-end as-is.

pub mod api;
pub mod brand;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod routes;
pub mod shell;

pub use api::{HttpProductSource, ProductSource};
pub use catalog::{CatalogView, ProductCard, load_scoped};
pub use config::ApiConfig;
pub use error::{Result, StoreError};
pub use model::{CategoryFilter, Product, ProductId};
pub use routes::Page;
pub use shell::{AccountTab, MenuState};

/// Path of the product listing endpoint, relative to the API base
pub const PRODUCTS_PATH: &str = "/api/products";
