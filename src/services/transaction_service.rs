//! Issue and return workflows.
//!
//! Returning a book takes two steps: `return_book` asks the backend to check
//! the serial number and compute the fine, then `pay_fine` settles the fine
//! and checks the book back in. The transaction between the two steps is kept
//! in the session as the pending return.

use super::{Desk, Listing};
use crate::domain::ClientError;
use crate::forms::{FineForm, IssueForm, ReturnForm, SearchForm};
use crate::session::PendingReturn;
use crate::views;

pub const NO_BOOKS_FOUND: &str = "No books found.";
pub const NO_ACTIVE_ISSUES: &str = "No active issues found.";
pub const NO_OVERDUE_RETURNS: &str = "No overdue returns found.";

pub async fn search_available_books(
    desk: &Desk,
    form: &SearchForm,
) -> Result<Listing, ClientError> {
    let search = form.validate()?;
    let books = desk.authorized()?.search_available_books(&search).await?;
    tracing::debug!("{} available books match", books.len());
    Ok(Listing::table(views::books_table(&books)).or_empty_message(NO_BOOKS_FOUND))
}

pub async fn issue_book(desk: &Desk, form: &IssueForm) -> Result<String, ClientError> {
    let request = form.validate(desk.today())?;
    let receipt = desk.authorized()?.issue_book(&request).await?;
    tracing::info!(
        "Issued book {} to user {} (txn {}, due {})",
        request.book_id,
        request.user_id,
        receipt.transaction_id,
        receipt.return_date
    );
    Ok(format!(
        "Book issued successfully. Transaction ID: {}",
        receipt.transaction_id
    ))
}

/// First return step: validate and record the pending return with its fine
pub async fn return_book(desk: &Desk, form: &ReturnForm) -> Result<String, ClientError> {
    let request = form.validate(desk.today())?;
    let client = desk.authorized()?;
    let assessment = client.return_book(&request).await?;

    let mut session = desk.session()?;
    session.pending_return = Some(PendingReturn {
        transaction_id: assessment.transaction_id,
        fine: assessment.fine,
    });
    desk.store().save(&session)?;

    tracing::info!(
        "Return validated for txn {} (fine {})",
        assessment.transaction_id,
        assessment.fine
    );
    Ok(format!(
        "Validated. Proceed to Pay Fine page. Fine: {}",
        assessment.fine
    ))
}

/// Second return step: settle the fine of the pending return
pub async fn pay_fine(desk: &Desk, form: &FineForm) -> Result<String, ClientError> {
    let mut session = desk.session()?;
    let payment = form.validate(session.pending_return)?;
    let ack = desk.authorized()?.pay_fine(&payment).await?;

    session.pending_return = None;
    desk.store().save(&session)?;

    tracing::info!("Transaction {} closed", payment.transaction_id);
    Ok(ack.message)
}

pub async fn load_active_issues(desk: &Desk) -> Result<Listing, ClientError> {
    let issues = desk.authorized()?.active_issues().await?;
    Ok(Listing::lines(views::active_issue_lines(&issues)).or_empty_message(NO_ACTIVE_ISSUES))
}

pub async fn load_overdue_returns(desk: &Desk) -> Result<Listing, ClientError> {
    let overdue = desk.authorized()?.overdue_returns().await?;
    Ok(Listing::table(views::overdue_table(&overdue)).or_empty_message(NO_OVERDUE_RETURNS))
}
