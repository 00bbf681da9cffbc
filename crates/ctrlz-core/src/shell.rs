//! Shell UI State
//!
//! Two-state machines for the page shell. Each replaces a loose boolean so
//! every reachable state has a name and a defined set of transitions.

/// Mobile navigation panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// Menu button pressed
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// A link in the panel was followed
    #[must_use]
    pub const fn close(self) -> Self {
        Self::Closed
    }

    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Accessible label for the toggle button
    pub const fn button_label(self) -> &'static str {
        match self {
            Self::Closed => "Open menu",
            Self::Open => "Close menu",
        }
    }
}

/// Login / signup selector on the account page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccountTab {
    #[default]
    Login,
    Signup,
}

impl AccountTab {
    pub const ALL: [Self; 2] = [Self::Login, Self::Signup];

    /// Tab caption
    pub const fn label(self) -> &'static str {
        match self {
            Self::Login => "LOGIN",
            Self::Signup => "SIGNUP",
        }
    }

    /// Caption of the form's submit button
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Signup => "Create Account",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        assert_eq!(MenuState::default(), MenuState::Closed);
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_double_toggle_restores_closed() {
        let menu = MenuState::default().toggle();
        assert!(menu.is_open());
        assert_eq!(menu.toggle(), MenuState::Closed);
    }

    #[test]
    fn test_close_is_idempotent() {
        assert_eq!(MenuState::Open.close(), MenuState::Closed);
        assert_eq!(MenuState::Closed.close(), MenuState::Closed);
    }

    #[test]
    fn test_account_tab_labels() {
        assert_eq!(AccountTab::default(), AccountTab::Login);
        assert_eq!(AccountTab::Login.submit_label(), "Login");
        assert_eq!(AccountTab::Signup.submit_label(), "Create Account");
        let labels: Vec<_> = AccountTab::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["LOGIN", "SIGNUP"]);
    }
}
