//! Login gateway roles and the sign-in/sign-out texts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::Endpoint;
use crate::requests::LoginRequest;
use crate::routes::Route;

pub const LOGIN_FAILED: &str = "Invalid Email or Password";
pub const LOGOUT_FAILED: &str = "Logout failed!";
pub const LOGOUT_SUCCEEDED: &str = "Logged out successfully";
pub const DEMO_PASSWORD: &str = "demo123";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginRole {
    #[default]
    Consumer,
    Partner,
    Associate,
}

impl LoginRole {
    pub const ALL: [LoginRole; 3] = [LoginRole::Consumer, LoginRole::Partner, LoginRole::Associate];

    pub fn as_str(self) -> &'static str {
        match self {
            LoginRole::Consumer => "consumer",
            LoginRole::Partner => "partner",
            LoginRole::Associate => "associate",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            LoginRole::Consumer => "Consumer Login",
            LoginRole::Partner => "Partner Login",
            LoginRole::Associate => "Associate Login",
        }
    }

    pub fn endpoint(self) -> Endpoint {
        match self {
            LoginRole::Consumer => Endpoint::ConsumerLogin,
            LoginRole::Partner => Endpoint::PartnerLogin,
            LoginRole::Associate => Endpoint::AssociateLogin,
        }
    }

    /// Where a successful login lands.
    pub fn home(self) -> Route {
        match self {
            LoginRole::Consumer => Route::ConsumerProfile,
            LoginRole::Partner => Route::PartnerDashboard,
            LoginRole::Associate => Route::AssociateDashboard,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            LoginRole::Consumer => "Login Successful",
            LoginRole::Partner => "Partner Login Successful",
            LoginRole::Associate => "Associate Login Successful",
        }
    }

    /// Quick-login credentials of the demo account for this role.
    pub fn demo_credentials(self) -> LoginRequest {
        let email = match self {
            LoginRole::Consumer => "consumer@example.com",
            LoginRole::Partner => "partner@newra.com",
            LoginRole::Associate => "associate@newra.com",
        };
        LoginRequest {
            email: email.to_string(),
            password: DEMO_PASSWORD.to_string(),
        }
    }
}

impl fmt::Display for LoginRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoginRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LoginRole::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("unknown login role: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumer_is_the_default_role() {
        assert_eq!(LoginRole::default(), LoginRole::Consumer);
        assert_eq!(LoginRole::default().home().path(), "/UserProfile");
    }

    #[test]
    fn roles_route_to_their_dashboards() {
        assert_eq!(LoginRole::Partner.home().path(), "/partner-dash");
        assert_eq!(LoginRole::Associate.home().path(), "/Associate-Dash");
        assert_eq!(LoginRole::Associate.endpoint(), Endpoint::AssociateLogin);
    }

    #[test]
    fn demo_accounts_share_a_password() {
        for role in LoginRole::ALL {
            let demo = role.demo_credentials();
            assert_eq!(demo.password, DEMO_PASSWORD);
            assert!(demo.email.contains('@'));
        }
        assert_eq!("partner".parse(), Ok(LoginRole::Partner));
        assert!("admin".parse::<LoginRole>().is_err());
    }
}
