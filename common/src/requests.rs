use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of every login endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Answer of a login endpoint. Only the consumer login fills both fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LoginResponse {
    pub data: Value,
    pub token: Option<String>,
}

/// Body of the associate onboarding endpoint. `consumers` carries the
/// roster as a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardConsumersRequest {
    pub onboard_type: String,
    pub consumers: String,
}

/// Error body some endpoints send back; `message` is shown to the user.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorResponse {
    pub message: Option<String>,
}
