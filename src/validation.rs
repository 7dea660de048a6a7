//! Field-level checks shared by the forms.

use chrono::{Days, NaiveDate};

use crate::domain::ClientError;

/// Longest loan the desk will request, in days from the issue date
pub const MAX_LOAN_DAYS: u64 = 15;

pub const ISSUE_IN_PAST: &str = "Issue date cannot be lesser than today.";
pub const RETURN_OUT_OF_WINDOW: &str = "Return date must be between issue date and 15 days ahead.";

/// Trim a raw input; blank becomes `None`
pub fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

pub fn opt_non_blank(raw: Option<&str>) -> Option<String> {
    raw.and_then(non_blank)
}

/// True when every value is non-blank
pub fn all_present(values: &[&str]) -> bool {
    values.iter().all(|v| !v.trim().is_empty())
}

/// Check every value is non-blank, failing with `message` otherwise
pub fn require_all(values: &[&str], message: &str) -> Result<(), ClientError> {
    if all_present(values) {
        Ok(())
    } else {
        Err(ClientError::validation(message))
    }
}

pub fn parse_id(raw: &str, field: &str) -> Result<i32, ClientError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ClientError::validation(format!("{} must be a number.", field)))
}

pub fn parse_date(raw: &str, field: &str) -> Result<NaiveDate, ClientError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        ClientError::validation(format!("{} must be a date (YYYY-MM-DD).", field))
    })
}

/// Latest return date allowed for a loan issued on `issue_date`.
/// Fails when the window runs past the last representable date.
pub fn max_return_date(issue_date: NaiveDate) -> Result<NaiveDate, ClientError> {
    issue_date
        .checked_add_days(Days::new(MAX_LOAN_DAYS))
        .ok_or_else(|| ClientError::validation(RETURN_OUT_OF_WINDOW))
}

/// Issue must not be before `today`; return must fall within
/// `[issue_date, issue_date + MAX_LOAN_DAYS]`.
pub fn check_issue_window(
    issue_date: NaiveDate,
    return_date: NaiveDate,
    today: NaiveDate,
) -> Result<(), ClientError> {
    if issue_date < today {
        return Err(ClientError::validation(ISSUE_IN_PAST));
    }
    if return_date > max_return_date(issue_date)? || return_date < issue_date {
        return Err(ClientError::validation(RETURN_OUT_OF_WINDOW));
    }
    Ok(())
}
