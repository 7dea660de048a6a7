//! Client error types
//!
//! Every fallible operation in the crate returns a `ClientError`. The
//! `Validation` and `Api` variants display their bare message, which is what
//! the desk shows to the operator.

use std::fmt;

#[derive(Debug)]
pub enum ClientError {
    /// A local form check failed; nothing was sent
    Validation(String),
    /// The backend answered with a non-success status
    Api { status: u16, detail: String },
    /// The request could not be sent or timed out
    Transport(String),
    /// The response body was not the expected JSON
    Decode(String),
    /// No token stored for an operation that needs one
    NotLoggedIn,
    /// The stored token is past its expiry
    SessionExpired,
    /// Session file could not be read or written
    Storage(String),
    /// Invalid configuration value
    Config(String),
}

impl ClientError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ClientError::Validation(msg.into())
    }

    /// HTTP status for `Api` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the backend rejected the credentials or token
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401))
    }

    /// Follow-up line for the operator, if the error has an obvious remedy
    pub fn hint(&self) -> Option<&'static str> {
        if self.is_unauthorized() {
            Some("Run `library-desk login` again to refresh the session.")
        } else {
            None
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Validation(msg) => write!(f, "{}", msg),
            ClientError::Api { detail, .. } => write!(f, "{}", detail),
            ClientError::Transport(msg) => write!(f, "Request failed: {}", msg),
            ClientError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
            ClientError::NotLoggedIn => write!(f, "Not logged in. Run `library-desk login` first."),
            ClientError::SessionExpired => {
                write!(f, "Session expired. Run `library-desk login` again.")
            }
            ClientError::Storage(msg) => write!(f, "Session storage error: {}", msg),
            ClientError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Decode(e.to_string())
        } else {
            ClientError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Decode(e.to_string())
    }
}

impl From<csv::Error> for ClientError {
    fn from(e: csv::Error) -> Self {
        ClientError::Storage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_and_validation_display_bare_message() {
        let err = ClientError::Api {
            status: 400,
            detail: "Duplicate serial number".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate serial number");
        assert_eq!(err.status(), Some(400));

        let err = ClientError::validation("All fields are mandatory.");
        assert_eq!(err.to_string(), "All fields are mandatory.");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn unauthorized_only_for_401() {
        let err = ClientError::Api {
            status: 401,
            detail: "Invalid credentials".to_string(),
        };
        assert!(err.is_unauthorized());
        assert!(!ClientError::NotLoggedIn.is_unauthorized());
    }

    #[test]
    fn rejected_token_suggests_login() {
        let err = ClientError::Api {
            status: 401,
            detail: "Invalid token".to_string(),
        };
        assert!(err.hint().unwrap().contains("login"));

        let err = ClientError::Api {
            status: 400,
            detail: "Book not available".to_string(),
        };
        assert_eq!(err.hint(), None);
        assert_eq!(ClientError::validation("x").hint(), None);
    }
}
