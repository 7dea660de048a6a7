//! Services Layer
//!
//! One function per desk action. Each validates its form, calls the backend
//! and returns what the operator should see. The CLI is a thin shell over
//! these functions.

pub mod auth_service;
pub mod maintenance_service;
pub mod report_service;
pub mod transaction_service;

use std::fmt;

use chrono::{NaiveDate, Utc};

use crate::api::ApiClient;
use crate::config::Config;
use crate::domain::ClientError;
use crate::session::{Session, SessionStore};
use crate::views::Table;

/// Shared context for every service: the HTTP client and the session store
#[derive(Clone, Debug)]
pub struct Desk {
    client: ApiClient,
    store: SessionStore,
    today: Option<NaiveDate>,
}

impl Desk {
    pub fn new(client: ApiClient, store: SessionStore) -> Self {
        Self {
            client,
            store,
            today: None,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        Ok(Self::new(
            ApiClient::from_config(config)?,
            SessionStore::new(config.session_file.clone()),
        ))
    }

    /// Pin the date used as "today" by the date checks
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// The calendar date in UTC unless pinned
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(|| Utc::now().date_naive())
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn session(&self) -> Result<Session, ClientError> {
        self.store.load()
    }

    /// Client without credentials (login, status)
    pub fn anonymous(&self) -> &ApiClient {
        &self.client
    }

    /// Client carrying the stored bearer token
    pub fn authorized(&self) -> Result<ApiClient, ClientError> {
        let session = self.store.load()?;
        let token = session.require_token(Utc::now())?;
        Ok(self.client.clone().with_token(token))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Table(Table),
    Lines(Vec<String>),
}

/// Rendered page content plus the message line shown under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub view: View,
    pub message: Option<String>,
}

impl Listing {
    pub fn table(table: Table) -> Self {
        Self {
            view: View::Table(table),
            message: None,
        }
    }

    pub fn lines(lines: Vec<String>) -> Self {
        Self {
            view: View::Lines(lines),
            message: None,
        }
    }

    /// Attach `message` when the listing has no entries
    pub fn or_empty_message(mut self, message: &str) -> Self {
        if self.is_empty() {
            self.message = Some(message.to_string());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        match &self.view {
            View::Table(t) => t.is_empty(),
            View::Lines(l) => l.is_empty(),
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match &self.view {
            View::Table(t) => Some(t),
            View::Lines(_) => None,
        }
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.view {
            View::Table(t) => write!(f, "{}", t)?,
            View::Lines(lines) => {
                for line in lines {
                    writeln!(f, "{}", line)?;
                }
            }
        }
        if let Some(message) = &self.message {
            writeln!(f, "{}", message)?;
        }
        Ok(())
    }
}
