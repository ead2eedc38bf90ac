//! REST endpoints called by the client, resolved against the configured base URL.

use crate::config::ClientConfig;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    RegisterPartner,
    MsedclSubstations,
    MsetclSubstations,
    AdminPartners,
    AdminAssociates,
    AdminConsumers,
    AdminSignOut,
    ConsumerLogin,
    PartnerLogin,
    AssociateLogin,
    AssociateProfile(String),
    AssociateOnboard(String),
    AssociateLogout,
}

impl Endpoint {
    /// Path below the API base URL.
    pub fn path(&self) -> String {
        match self {
            Endpoint::RegisterPartner => "/partner/register".to_string(),
            Endpoint::MsedclSubstations => "/substations/msedcl".to_string(),
            Endpoint::MsetclSubstations => "/substations/msetcl".to_string(),
            Endpoint::AdminPartners => "/admin/partners".to_string(),
            Endpoint::AdminAssociates => "/admin/associates".to_string(),
            Endpoint::AdminConsumers => "/admin/customers".to_string(),
            Endpoint::AdminSignOut => "/admin/signout".to_string(),
            Endpoint::ConsumerLogin => "/user/login".to_string(),
            Endpoint::PartnerLogin => "/partner/login".to_string(),
            Endpoint::AssociateLogin => "/associate/login".to_string(),
            Endpoint::AssociateProfile(id) => format!("/associate/profile/{}", id),
            Endpoint::AssociateOnboard(id) => format!("/associate/onboard/{}", id),
            Endpoint::AssociateLogout => "/associate/logout".to_string(),
        }
    }

    pub fn url(&self, config: &ClientConfig) -> String {
        format!("{}{}", config.api_base_url.trim_end_matches('/'), self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_without_double_slashes() {
        let config = ClientConfig {
            api_base_url: "https://api.example.com/v1/".to_string(),
            ..ClientConfig::default()
        };
        assert_eq!(
            Endpoint::AssociateOnboard("a1".to_string()).url(&config),
            "https://api.example.com/v1/associate/onboard/a1"
        );
        assert_eq!(
            Endpoint::AdminSignOut.url(&ClientConfig::default()),
            "/api/admin/signout"
        );
    }
}
