use common::config::ClientConfig;
use yew::Properties;

#[derive(Properties, PartialEq)]
pub struct OnboardingProps {
    pub config: ClientConfig,
}
