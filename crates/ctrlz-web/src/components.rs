//! UI Components

use chrono::Datelike;
use ctrlz_core::{CatalogView, CategoryFilter, MenuState, Page, ProductCard, brand};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Submit handler for placeholder forms: nothing is sent anywhere
pub fn inert_submit(ev: SubmitEvent) {
    ev.prevent_default();
}

/// Fixed top bar with the mobile menu toggle
#[component]
pub fn Navbar() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());

    view! {
        <header class="navbar">
            <div class="navbar-inner">
                <a href=Page::Home.path() class="logo">
                    <span class="logo-ctrl">"CTRL"</span>
                    <span class="accent">"-Z"</span>
                    <span class="logo-ghost" aria-hidden="true">{brand::NAME}</span>
                </a>

                <nav class="nav-links">
                    {Page::NAV
                        .into_iter()
                        .map(|page| view! { <a href=page.path()>{page.nav_label()}</a> })
                        .collect_view()}
                    <span class="icon" aria-label="Search">"⌕"</span>
                    <span class="icon" aria-label="Bag">"⛉"</span>
                </nav>

                <button
                    class="menu-toggle"
                    aria-label=move || menu.get().button_label()
                    aria-expanded=move || menu.get().is_open().to_string()
                    on:click=move |_| menu.update(|m| *m = m.toggle())
                >
                    {move || if menu.get().is_open() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu.get().is_open()>
                <nav class="mobile-nav">
                    {Page::NAV
                        .into_iter()
                        .map(|page| {
                            view! {
                                <a href=page.path() on:click=move |_| menu.update(|m| *m = m.close())>
                                    {page.nav_label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </Show>
        </header>
    }
}

/// Call-to-action with the glitch sweep; a link when `href` is given,
/// otherwise a submit button
#[component]
pub fn GlitchCta(children: Children, #[prop(optional)] href: Option<&'static str>) -> impl IntoView {
    let inner = view! {
        <span class="glitch-label">{children()}</span>
        <span class="glitch-fill" />
        <span class="glitch-sweep" />
    };

    match href {
        Some(href) => view! { <a class="glitch-cta" href=href>{inner}</a> }.into_any(),
        None => view! { <button class="glitch-cta" type="submit">{inner}</button> }.into_any(),
    }
}

/// Scrolling brand strip
#[component]
pub fn Marquee() -> impl IntoView {
    view! {
        <div class="marquee">
            <div class="marquee-track">
                {brand::marquee_laps()
                    .map(|lap| view! { <span class="marquee-lap">{lap}</span> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Product tile
#[component]
pub fn ProductTile(card: ProductCard) -> impl IntoView {
    let ProductCard { name, price, category, thumbnail, href, .. } = card;

    view! {
        <article class="product-card">
            <div class="product-media">
                <img src=thumbnail alt=name.clone() loading="lazy" />
                <div class="product-glow" />
            </div>
            <div class="product-body">
                <div class="product-heading">
                    <h3 class="product-name">{name}</h3>
                    <span class="product-price">{price}</span>
                </div>
                <p class="product-category">{category}</p>
                <a href=href class="product-link">
                    "View" <span aria-hidden="true">"›"</span>
                </a>
            </div>
        </article>
    }
}

/// Grid of product tiles
#[component]
pub fn ProductGrid(
    #[prop(into)] cards: Signal<Vec<ProductCard>>,
    /// Extra class picking the column layout
    layout: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("grid {layout}")>
            <For
                each=move || cards.get()
                key=|card| card.key.clone()
                children=|card| view! { <ProductTile card=card /> }
            />
        </div>
    }
}

/// Category filter pills for the shop
#[component]
pub fn CategoryPills(catalog: RwSignal<CatalogView>) -> impl IntoView {
    view! {
        <div class="pills">
            {CategoryFilter::ALL
                .into_iter()
                .map(|filter| {
                    view! {
                        <button
                            class="pill"
                            class:active=move || catalog.with(|c| c.filter() == filter)
                            on:click=move |_| catalog.update(|c| c.set_filter(filter))
                        >
                            {filter.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="footer">
            <div class="footer-inner">
                <div>{brand::copyright(year)}</div>
                <div class="footer-links">
                    <a href="#">"Privacy"</a>
                    <a href="#">"Terms"</a>
                    <a href=Page::Contact.path()>"Contact"</a>
                </div>
            </div>
        </footer>
    }
}
