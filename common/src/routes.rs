//! Client-side routes and the layout rules attached to them.

use std::fmt;

/// Paths that render without the navigation bar and footer.
pub const HIDE_LAYOUT_ROUTES: [&str; 9] = [
    "/UserLogin",
    "/admin-login",
    "/partner-Dash",
    "/Associate-Dash",
    "/epc-dashboard",
    "/assoceproflle",
    "/epcprofile",
    "/UserProfile",
    "/UserForm",
];

/// Paths that render without the floating back button.
pub const HIDE_BACK_BUTTON_ROUTES: [&str; 3] = ["/", "/UserLogin", "/admin-login"];

pub fn hides_layout(path: &str) -> bool {
    HIDE_LAYOUT_ROUTES.contains(&path)
}

pub fn hides_back_button(path: &str) -> bool {
    HIDE_BACK_BUTTON_ROUTES.contains(&path)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    ChooseAccountType,
    PartnerRegistration,
    Login,
    AdminLogin,
    AdminDashboard,
    ConsumerProfile,
    PartnerDashboard,
    AssociateDashboard,
    AssociateProfile,
    NotFound(String),
}

impl Route {
    const TABLE: [(Route, &'static str); 10] = [
        (Route::Home, "/"),
        (Route::ChooseAccountType, "/choose-account-type"),
        (Route::PartnerRegistration, "/energy-partner"),
        (Route::Login, "/UserLogin"),
        (Route::AdminLogin, "/admin-login"),
        (Route::AdminDashboard, "/admin-data"),
        (Route::ConsumerProfile, "/UserProfile"),
        (Route::PartnerDashboard, "/partner-dash"),
        (Route::AssociateDashboard, "/Associate-Dash"),
        (Route::AssociateProfile, "/assoceproflle"),
    ];

    /// Exact, case-sensitive match; a trailing slash is ignored.
    pub fn from_path(path: &str) -> Route {
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        Self::TABLE
            .iter()
            .find(|(_, p)| *p == trimmed)
            .map(|(route, _)| route.clone())
            .unwrap_or_else(|| Route::NotFound(path.to_string()))
    }

    pub fn path(&self) -> &str {
        match self {
            Route::NotFound(path) => path.as_str(),
            known => Self::TABLE
                .iter()
                .find(|(route, _)| route == known)
                .map(|(_, p)| *p)
                .unwrap_or("/"),
        }
    }

    pub fn shows_layout(&self) -> bool {
        !hides_layout(self.path())
    }

    pub fn shows_back_button(&self) -> bool {
        !hides_back_button(self.path())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for (route, path) in Route::TABLE {
            assert_eq!(Route::from_path(path), route);
            assert_eq!(route.path(), path);
        }
        assert_eq!(Route::from_path("/admin-data/"), Route::AdminDashboard);
        assert_eq!(
            Route::from_path("/nowhere"),
            Route::NotFound("/nowhere".to_string())
        );
    }

    #[test]
    fn login_pages_have_no_chrome() {
        assert!(!Route::Login.shows_layout());
        assert!(!Route::Login.shows_back_button());
        assert!(!Route::AdminLogin.shows_back_button());
        assert!(!Route::Home.shows_back_button());
        assert!(Route::Home.shows_layout());
        assert!(Route::AdminDashboard.shows_layout());
        assert!(Route::AdminDashboard.shows_back_button());
    }

    #[test]
    fn route_lists_match_exactly() {
        assert!(hides_layout("/partner-Dash"));
        assert!(!hides_layout("/partner-dash"));
        assert!(Route::PartnerDashboard.shows_layout());
    }
}
