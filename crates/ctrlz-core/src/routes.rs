//! Route Table
//!
//! The five pages of the storefront plus the product detail link target.
//! The detail page itself is not implemented; links to it resolve to the
//! not-found view.

use crate::model::ProductId;

const PRODUCT_PREFIX: &str = "/product/";

/// Top-level pages
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Shop,
    About,
    Contact,
    Account,
}

impl Page {
    /// Every routed page
    pub const ALL: [Self; 5] = [Self::Home, Self::Shop, Self::About, Self::Contact, Self::Account];

    /// Pages listed in the navigation bar, in order
    pub const NAV: [Self; 4] = [Self::Shop, Self::About, Self::Account, Self::Contact];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Shop => "/shop",
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::Account => "/account",
        }
    }

    /// Path without the leading slash, as the router matches it
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Home => "",
            Self::Shop => "shop",
            Self::About => "about",
            Self::Contact => "contact",
            Self::Account => "account",
        }
    }

    /// Link text in the navigation bar
    pub const fn nav_label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Shop => "Shop",
            Self::About => "About",
            Self::Contact => "Support",
            Self::Account => "Account",
        }
    }

    /// Resolve an exact path to a page; trailing slashes are ignored
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|page| page.path() == normalized)
    }
}

/// Detail route for a product
pub fn product_path(id: &ProductId) -> String {
    format!("{PRODUCT_PREFIX}{id}")
}

/// Whether the front-end router owns this path
///
/// Used by the static host to decide between serving `index.html` and a 404.
pub fn is_client_route(path: &str) -> bool {
    if Page::from_path(path).is_some() {
        return true;
    }
    path.strip_prefix(PRODUCT_PREFIX)
        .map(|rest| rest.trim_end_matches('/'))
        .is_some_and(|id| !id.is_empty() && !id.contains('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = Page::ALL.iter().map(|p| p.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Page::ALL.len());
    }

    #[test]
    fn test_round_trip_paths() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
        assert_eq!(Page::from_path("/shop/"), Some(Page::Shop));
        assert_eq!(Page::from_path(""), Some(Page::Home));
        assert_eq!(Page::from_path("/checkout"), None);
    }

    #[test]
    fn test_segment_matches_path() {
        for page in Page::ALL {
            assert_eq!(format!("/{}", page.segment()), page.path());
        }
    }

    #[test]
    fn test_contact_is_labelled_support() {
        assert_eq!(Page::Contact.nav_label(), "Support");
        assert!(!Page::NAV.contains(&Page::Home));
    }

    #[test]
    fn test_product_routes() {
        assert_eq!(product_path(&ProductId::Number(1)), "/product/1");
        assert_eq!(product_path(&ProductId::Text("cap-7".into())), "/product/cap-7");
        assert!(is_client_route("/product/1"));
        assert!(is_client_route("/product/cap-7/"));
        assert!(!is_client_route("/product/"));
        assert!(!is_client_route("/product/1/reviews"));
    }

    #[test]
    fn test_assets_are_not_client_routes() {
        assert!(is_client_route("/"));
        assert!(is_client_route("/account"));
        assert!(!is_client_route("/favicon.ico"));
        assert!(!is_client_route("/ctrlz-web_bg.wasm"));
    }
}
