use super::ApiClient;
use crate::domain::ClientError;
use crate::models::{HomeModules, LoginRequest, LoginResponse, Role};

impl ApiClient {
    /// POST /auth/login
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError> {
        tracing::info!("Login attempt for user: {}", username);
        let payload = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.post_json("/auth/login", &payload, "Login failed").await
    }

    /// GET /admin/home or /user/home, depending on the role
    pub async fn home_modules(&self, role: Role) -> Result<HomeModules, ClientError> {
        let path = match role {
            Role::Admin => "/admin/home",
            Role::User => "/user/home",
        };
        self.get_json(path, "Unable to load dashboard").await
    }
}
