//! Wire types matching the backend's JSON verbatim.

pub mod auth;
pub mod book;
pub mod membership;
pub mod report;
pub mod transaction;
pub mod user;

use serde::Deserialize;

pub use auth::{HomeModules, LoginRequest, LoginResponse, Role, TokenClaims};
pub use book::{AvailableBook, BookCreated, BookSearch, BookUpdate, MediaType, NewBook};
pub use membership::{
    Membership, MembershipAction, MembershipCreated, MembershipDuration, MembershipUpdate,
    NewMembership,
};
pub use report::{
    FineRow, FineStatus, IssueStatus, IssuedBookRow, ReturnedBookRow, UserTransactionRow,
};
pub use transaction::{
    ActiveIssue, FinePayment, IssueReceipt, IssueRequest, OverdueReturn, ReturnAssessment,
    ReturnRequest,
};
pub use user::{ManageUser, UserMode, UserSaved};

/// Plain acknowledgement: `{"message": "..."}`
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}
