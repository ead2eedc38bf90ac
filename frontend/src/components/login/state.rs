use common::auth::LoginRole;
use common::requests::LoginRequest;

#[derive(Default)]
pub struct LoginPage {
    pub role: LoginRole,
    pub credentials: LoginRequest,
    pub show_password: bool,
    pub submitting: bool,
}
