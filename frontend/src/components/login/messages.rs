use common::auth::LoginRole;
use serde_json::Value;

pub enum Msg {
    SelectRole(LoginRole),
    SetEmail(String),
    SetPassword(String),
    TogglePassword,
    QuickLogin(LoginRole),
    Submit,
    Finished(LoginRole, Result<Value, String>),
}
