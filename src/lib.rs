//! Library Desk: client for the library management backend.
//!
//! Forms are validated locally, sent through the typed [`api::ApiClient`],
//! and the JSON answers are rendered as text tables by [`views`]. The session
//! token lives in a small JSON file managed by [`session`].

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod forms;
pub mod models;
pub mod services;
pub mod session;
pub mod validation;
pub mod views;

pub use domain::ClientError;
