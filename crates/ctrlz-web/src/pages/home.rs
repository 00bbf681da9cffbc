//! Home Page

use ctrlz_core::{CatalogView, Page, brand};
use leptos::prelude::*;

use crate::api;
use crate::components::{GlitchCta, Marquee, ProductGrid};

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = RwSignal::new(CatalogView::new());
    api::load_catalog(catalog);
    let featured = Memo::new(move |_| catalog.with(|c| c.featured(brand::FEATURED_COUNT)));

    view! {
        <main class="page home">
            <Hero />
            <section class="container featured">
                <h3>"Featured Drops"</h3>
                <ProductGrid cards=featured layout="grid-featured" />
            </section>
        </main>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-backdrop" />
            <div class="hero-shade" />
            <div class="container hero-content">
                <div>
                    <h1 class="rise">"CTRL"<span class="accent">"-Z"</span></h1>
                    <p class="tagline rise rise-1">{brand::TAGLINE}</p>
                    <div class="cta rise rise-2">
                        <GlitchCta href=Page::Shop.path()>"Shop Now"</GlitchCta>
                        <a href=format!("{}#story", Page::About.path()) class="learn-more">
                            "Learn more" <span aria-hidden="true">"›"</span>
                        </a>
                    </div>
                </div>
            </div>
            <div class="hero-marquee">
                <Marquee />
            </div>
        </section>
    }
}
