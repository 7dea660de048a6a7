//! Text rendering of backend responses: one table or list per page.

pub mod export;
pub mod table;

use chrono::NaiveDate;

use crate::models::{
    ActiveIssue, AvailableBook, FineRow, IssuedBookRow, Membership, OverdueReturn,
    ReturnedBookRow, UserTransactionRow,
};

pub use table::Table;

fn date_or_dash(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
}

pub fn books_table(books: &[AvailableBook]) -> Table {
    let mut table = Table::new(["ID", "Book", "Author", "Serial No", "Type"]);
    for book in books {
        table.push_row([
            book.id.to_string(),
            book.title.clone(),
            book.author.clone(),
            book.serial_no.clone(),
            book.media_type.to_string(),
        ]);
    }
    table
}

pub fn issued_table(rows: &[IssuedBookRow]) -> Table {
    let mut table = Table::new(["Transaction", "User", "Book", "Issue", "Due", "Status"]);
    for r in rows {
        table.push_row([
            r.transaction_id.to_string(),
            r.user_id.to_string(),
            r.book_id.to_string(),
            r.issue_date.to_string(),
            r.due_date.to_string(),
            r.status.to_string(),
        ]);
    }
    table
}

pub fn returned_table(rows: &[ReturnedBookRow]) -> Table {
    let mut table = Table::new([
        "Transaction",
        "User",
        "Book",
        "Issue",
        "Returned",
        "Fine Paid",
        "Status",
    ]);
    for r in rows {
        table.push_row([
            r.transaction_id.to_string(),
            r.user_id.to_string(),
            r.book_id.to_string(),
            r.issue_date.to_string(),
            r.return_date.to_string(),
            r.fine_paid.to_string(),
            r.status.to_string(),
        ]);
    }
    table
}

pub fn fine_table(rows: &[FineRow]) -> Table {
    let mut table = Table::new([
        "Transaction ID",
        "User ID",
        "Book ID",
        "Due Date",
        "Return Date",
        "Fine",
        "Paid",
        "Status",
    ]);
    for t in rows {
        table.push_row([
            t.transaction_id.to_string(),
            t.user_id.to_string(),
            t.book_id.to_string(),
            t.due_date.to_string(),
            date_or_dash(t.return_date),
            t.fine.to_string(),
            t.fine_paid.to_string(),
            t.status.to_string(),
        ]);
    }
    table
}

pub fn overdue_table(rows: &[OverdueReturn]) -> Table {
    let mut table = Table::new([
        "Transaction",
        "User",
        "Book",
        "Due Date",
        "Days Late",
        "Fine",
    ]);
    for t in rows {
        table.push_row([
            t.transaction_id.to_string(),
            t.user_id.to_string(),
            t.book_id.to_string(),
            t.due_date.to_string(),
            t.days_late.to_string(),
            t.fine.to_string(),
        ]);
    }
    table
}

pub fn user_transactions_table(rows: &[UserTransactionRow]) -> Table {
    let mut table = Table::new(["Transaction", "Book", "Issue", "Due", "Returned", "Status"]);
    for t in rows {
        table.push_row([
            t.transaction_id.to_string(),
            t.book_id.to_string(),
            t.issue_date.to_string(),
            t.due_date.to_string(),
            date_or_dash(t.return_date),
            t.status.to_string(),
        ]);
    }
    table
}

/// "name - type - number" per membership
pub fn membership_lines(memberships: &[Membership]) -> Vec<String> {
    memberships
        .iter()
        .map(|m| format!("{} - {} - {}", m.name, m.membership_type, m.membership_number))
        .collect()
}

pub fn active_issue_lines(issues: &[ActiveIssue]) -> Vec<String> {
    issues
        .iter()
        .map(|t| {
            format!(
                "Txn {} | User {} | Book {} | Due {}",
                t.transaction_id, t.user_id, t.book_id, t.due_date
            )
        })
        .collect()
}
