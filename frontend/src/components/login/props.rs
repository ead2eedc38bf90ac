use common::config::ClientConfig;
use yew::Properties;

#[derive(Properties, PartialEq)]
pub struct LoginProps {
    pub config: ClientConfig,
}
