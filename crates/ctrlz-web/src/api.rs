//! API Client

use ctrlz_core::{ApiConfig, CatalogView, HttpProductSource, load_scoped};
use leptos::prelude::*;
use tokio_util::sync::CancellationToken;

/// Product source for the current page, falling back to its origin when no
/// backend URL was baked in
pub fn product_source() -> HttpProductSource {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();

    HttpProductSource::new(ApiConfig::from_build_env().or_origin(&origin))
}

/// Fetch the catalog into `catalog` once for the calling view
///
/// Must be called while the view is being built: the fetch is cancelled when
/// that view's owner is cleaned up, and a late result is dropped.
pub fn load_catalog(catalog: RwSignal<CatalogView>) {
    let cancel = CancellationToken::new();
    on_cleanup({
        let cancel = cancel.clone();
        move || cancel.cancel()
    });

    leptos::task::spawn_local(async move {
        let source = product_source();
        if let Some(result) = load_scoped(&source, &cancel).await {
            catalog.update(|view| view.apply(result));
        }
    });
}
