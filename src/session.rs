//! Persistent client session: access token, role and the return awaiting
//! fine payment. Stored as JSON in the profile's cache directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::domain::ClientError;
use crate::models::{Role, TokenClaims};

/// Return validated by the backend, waiting for the fine step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingReturn {
    pub transaction_id: i32,
    pub fine: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: Option<String>,
    pub role: Option<Role>,
    pub username: Option<String>,
    pub pending_return: Option<PendingReturn>,
}

/// Which home page a session lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dashboard {
    Admin,
    User,
}

impl Dashboard {
    /// Only an explicit admin role gets the admin dashboard
    pub fn for_role(role: Option<Role>) -> Self {
        match role {
            Some(Role::Admin) => Dashboard::Admin,
            _ => Dashboard::User,
        }
    }

    pub fn page(&self) -> &'static str {
        match self {
            Dashboard::Admin => "admin_home",
            Dashboard::User => "user_home",
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Dashboard::Admin => Role::Admin,
            Dashboard::User => Role::User,
        }
    }
}

impl Session {
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::for_role(self.role)
    }

    /// Token to attach to requests. Fails when there is none or it has expired.
    pub fn require_token(&self, now: DateTime<Utc>) -> Result<&str, ClientError> {
        let token = self.token.as_deref().ok_or(ClientError::NotLoggedIn)?;

        // Tokens we cannot decode are left for the backend to judge.
        if let Ok(claims) = decode_claims(token) {
            if claims.exp <= now.timestamp() {
                return Err(ClientError::SessionExpired);
            }
        }
        Ok(token)
    }
}

/// Read the token's claims without verifying its signature. The client never
/// holds the signing secret; this is only used to read `exp` and `role`.
pub fn decode_claims(token: &str) -> Result<TokenClaims, ClientError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;

    decode::<TokenClaims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| ClientError::Decode(format!("Invalid access token: {}", e)))
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored session; a missing file is an empty session
    pub fn load(&self) -> Result<Session, ClientError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                ClientError::Storage(format!("{}: {}", self.path.display(), e))
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Session::default()),
            Err(e) => Err(ClientError::Storage(format!(
                "{}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    pub fn save(&self, session: &Session) -> Result<(), ClientError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ClientError::Storage(format!("{}: {}", parent.display(), e)))?;
        }
        let content = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, content)
            .map_err(|e| ClientError::Storage(format!("{}: {}", self.path.display(), e)))?;
        tracing::debug!("Session saved to {:?}", self.path);
        Ok(())
    }

    pub fn clear(&self) -> Result<(), ClientError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::Storage(format!(
                "{}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}
