use common::config::ClientConfig;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PartnerRegistrationProps {
    /// Endpoint base and toast timing.
    pub config: ClientConfig,
}
