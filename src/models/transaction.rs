use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IssueRequest {
    pub user_id: i32,
    pub book_id: i32,
    pub issue_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueReceipt {
    pub message: String,
    pub transaction_id: i32,
    pub book_name: String,
    pub author: String,
    pub issue_date: NaiveDate,
    /// Due date agreed at issue time
    pub return_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnRequest {
    pub transaction_id: i32,
    pub serial_no: String,
    pub return_date: NaiveDate,
}

/// Response of the return step: the backend has computed the fine but the
/// book is not checked in until the fine step completes.
#[derive(Debug, Clone, Deserialize)]
pub struct ReturnAssessment {
    pub message: String,
    pub transaction_id: i32,
    pub book_name: String,
    pub author: String,
    pub issue_date: NaiveDate,
    pub return_date: NaiveDate,
    pub selected_return_date: NaiveDate,
    pub fine: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinePayment {
    pub transaction_id: i32,
    pub fine_paid: bool,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveIssue {
    pub transaction_id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverdueReturn {
    pub transaction_id: i32,
    pub user_id: i32,
    pub book_id: i32,
    pub due_date: NaiveDate,
    pub days_late: i64,
    pub fine: i64,
}
