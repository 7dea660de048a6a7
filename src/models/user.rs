use serde::{Deserialize, Serialize};

use super::auth::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserMode {
    #[default]
    New,
    Existing,
}

/// Body of `/maintenance/user-management`. Empty optional fields go out as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManageUser {
    pub mode: UserMode,
    pub name: String,
    pub username: String,
    pub password: Option<String>,
    pub role: Role,
    pub membership_number: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserSaved {
    pub message: String,
    pub user_id: i32,
}
