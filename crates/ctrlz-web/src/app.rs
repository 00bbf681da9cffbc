//! Main App Component

use ctrlz_core::Page;
use ctrlz_core::brand::colors;
use leptos::prelude::*;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{Footer, Navbar};
use crate::pages::{AboutPage, AccountPage, ContactPage, HomePage, ShopPage};

/// Brand palette exposed to the stylesheet as custom properties
fn palette_style() -> String {
    format!(
        "--ctrlz-bg:{};--ctrlz-gray:{};--ctrlz-neon:{};--ctrlz-crimson:{};--ctrlz-white:{}",
        colors::BG,
        colors::GRAY,
        colors::NEON,
        colors::CRIMSON,
        colors::WHITE,
    )
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="layout" style=palette_style()>
                <Navbar />
                <Routes fallback=|| view! {
                    <main class="page not-found">
                        <p>"Page not found"</p>
                    </main>
                }>
                    <Route path=StaticSegment(Page::Home.segment()) view=HomePage />
                    <Route path=StaticSegment(Page::Shop.segment()) view=ShopPage />
                    <Route path=StaticSegment(Page::About.segment()) view=AboutPage />
                    <Route path=StaticSegment(Page::Contact.segment()) view=ContactPage />
                    <Route path=StaticSegment(Page::Account.segment()) view=AccountPage />
                </Routes>
                <Footer />
            </div>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_style_declares_every_color() {
        let style = palette_style();
        assert_eq!(style.matches("--ctrlz-").count(), 5);
        assert!(style.contains("--ctrlz-neon:#00FFFF"));
    }
}
