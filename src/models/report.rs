use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueStatus {
    Issued,
    Returned,
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueStatus::Issued => f.write_str("Issued"),
            IssueStatus::Returned => f.write_str("Returned"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FineStatus {
    #[serde(rename = "Fine Pending")]
    FinePending,
    Clear,
}

impl fmt::Display for FineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FineStatus::FinePending => f.write_str("Fine Pending"),
            FineStatus::Clear => f.write_str("Clear"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedBookRow {
    pub transaction_id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: IssueStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnedBookRow {
    pub transaction_id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub issue_date: NaiveDate,
    pub return_date: NaiveDate,
    #[serde(default)]
    pub fine_paid: i64,
    pub status: IssueStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FineRow {
    pub transaction_id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    #[serde(default)]
    pub fine: i64,
    #[serde(default)]
    pub fine_paid: i64,
    pub status: FineStatus,
}

impl FineRow {
    /// Amount still owed on this transaction
    pub fn outstanding(&self) -> i64 {
        (self.fine - self.fine_paid).max(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserTransactionRow {
    pub transaction_id: i32,
    pub book_id: i32,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub status: IssueStatus,
}
