//! Shop Page

use ctrlz_core::CatalogView;
use leptos::prelude::*;

use crate::api;
use crate::components::{CategoryPills, ProductGrid};

#[component]
pub fn ShopPage() -> impl IntoView {
    let catalog = RwSignal::new(CatalogView::new());
    api::load_catalog(catalog);
    let cards = Memo::new(move |_| catalog.with(CatalogView::cards));
    let busy = move || catalog.with(CatalogView::is_loading).to_string();

    view! {
        <main class="page shop" aria-busy=busy>
            <div class="container">
                <div class="shop-header">
                    <h2>"Shop"</h2>
                    <CategoryPills catalog=catalog />
                </div>
                <ProductGrid cards=cards layout="grid-shop" />
            </div>
        </main>
    }
}
