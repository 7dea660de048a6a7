//! Raw form input and its conversion into request bodies.
//!
//! Each form holds values as typed by the operator. `validate` trims them,
//! applies defaults and runs the desk's local checks; the first failing check
//! decides the message.

use chrono::NaiveDate;

use crate::domain::ClientError;
use crate::models::{
    BookSearch, BookUpdate, FinePayment, IssueRequest, ManageUser, MediaType, MembershipAction,
    MembershipDuration, MembershipUpdate, NewBook, NewMembership, ReturnRequest, Role, UserMode,
};
use crate::session::PendingReturn;
use crate::validation::{
    check_issue_window, max_return_date, non_blank, opt_non_blank, parse_date, parse_id,
    require_all,
};

pub const ALL_FIELDS_MANDATORY: &str = "All fields are mandatory.";
pub const MEMBERSHIP_NUMBER_MANDATORY: &str = "Membership number is mandatory.";
pub const NAME_AND_USERNAME_MANDATORY: &str = "Name and username are mandatory.";
pub const PASSWORD_MANDATORY: &str = "Password is mandatory for new user.";
pub const SEARCH_CRITERIA_MISSING: &str = "Enter book name or select type before search.";
pub const ISSUE_FIELDS_MISSING: &str = "Please complete all mandatory fields and select a book.";
pub const RETURN_FIELDS_MISSING: &str =
    "Transaction ID, serial number and return date are mandatory.";
pub const NO_PENDING_RETURN: &str = "No return transaction found. Use Return Book first.";

const DEFAULT_CATEGORY: &str = "general";

#[derive(Debug, Clone, Default)]
pub struct BookForm {
    pub media_type: Option<MediaType>,
    pub title: String,
    pub author: String,
    pub serial_no: String,
    pub category: String,
}

impl BookForm {
    pub fn validate(&self) -> Result<NewBook, ClientError> {
        require_all(
            &[self.title.as_str(), self.author.as_str(), self.serial_no.as_str()],
            ALL_FIELDS_MANDATORY,
        )?;

        Ok(NewBook {
            media_type: self.media_type.unwrap_or_default(),
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            serial_no: self.serial_no.trim().to_string(),
            category: non_blank(&self.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        })
    }
}

#[derive(Debug, Clone)]
pub struct BookUpdateForm {
    pub book_id: String,
    pub media_type: Option<MediaType>,
    pub title: String,
    pub author: String,
    pub serial_no: String,
    pub category: String,
    pub available: bool,
}

impl Default for BookUpdateForm {
    fn default() -> Self {
        Self {
            book_id: String::new(),
            media_type: None,
            title: String::new(),
            author: String::new(),
            serial_no: String::new(),
            category: String::new(),
            available: true,
        }
    }
}

impl BookUpdateForm {
    pub fn validate(&self) -> Result<BookUpdate, ClientError> {
        require_all(
            &[
                self.book_id.as_str(),
                self.title.as_str(),
                self.author.as_str(),
                self.serial_no.as_str(),
            ],
            ALL_FIELDS_MANDATORY,
        )?;

        Ok(BookUpdate {
            book_id: parse_id(&self.book_id, "Book ID")?,
            media_type: self.media_type.unwrap_or_default(),
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            serial_no: self.serial_no.trim().to_string(),
            category: non_blank(&self.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            available: self.available,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct MembershipForm {
    pub name: String,
    pub duration: Option<MembershipDuration>,
}

impl MembershipForm {
    pub fn validate(&self) -> Result<NewMembership, ClientError> {
        let member_name =
            non_blank(&self.name).ok_or_else(|| ClientError::validation(ALL_FIELDS_MANDATORY))?;
        Ok(NewMembership {
            member_name,
            duration_months: self.duration.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct MembershipUpdateForm {
    pub membership_number: String,
    pub action: Option<MembershipAction>,
    pub extension: Option<MembershipDuration>,
}

impl MembershipUpdateForm {
    pub fn validate(&self) -> Result<MembershipUpdate, ClientError> {
        let membership_number = non_blank(&self.membership_number)
            .ok_or_else(|| ClientError::validation(MEMBERSHIP_NUMBER_MANDATORY))?;
        Ok(MembershipUpdate {
            membership_number,
            action: self.action.unwrap_or_default(),
            extension_months: self.extension.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct UserForm {
    pub mode: Option<UserMode>,
    pub name: String,
    pub username: String,
    pub password: String,
    pub role: Option<Role>,
    pub membership_number: Option<String>,
}

impl UserForm {
    pub fn validate(&self) -> Result<ManageUser, ClientError> {
        let mode = self.mode.unwrap_or_default();
        require_all(
            &[self.name.as_str(), self.username.as_str()],
            NAME_AND_USERNAME_MANDATORY,
        )?;

        let password = non_blank(&self.password);
        if mode == UserMode::New && password.is_none() {
            return Err(ClientError::validation(PASSWORD_MANDATORY));
        }

        Ok(ManageUser {
            mode,
            name: self.name.trim().to_string(),
            username: self.username.trim().to_string(),
            password,
            role: self.role.unwrap_or_default(),
            membership_number: opt_non_blank(self.membership_number.as_deref()),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    pub title: Option<String>,
    pub media_type: Option<MediaType>,
}

impl SearchForm {
    pub fn validate(&self) -> Result<BookSearch, ClientError> {
        let title = opt_non_blank(self.title.as_deref());
        if title.is_none() && self.media_type.is_none() {
            return Err(ClientError::validation(SEARCH_CRITERIA_MISSING));
        }
        Ok(BookSearch {
            title,
            media_type: self.media_type,
        })
    }
}

/// Issue form. Dates left as `None` take the page defaults: issue today,
/// return at the end of the loan window.
#[derive(Debug, Clone, Default)]
pub struct IssueForm {
    pub book_id: Option<String>,
    pub user_id: String,
    pub issue_date: Option<String>,
    pub return_date: Option<String>,
    pub remarks: String,
}

impl IssueForm {
    pub fn validate(&self, today: NaiveDate) -> Result<IssueRequest, ClientError> {
        let book_id = self.book_id.as_deref().unwrap_or("");
        let issue_raw = self.issue_date.as_deref();
        let return_raw = self.return_date.as_deref();

        let mut required = vec![book_id, self.user_id.as_str()];
        required.extend(issue_raw);
        required.extend(return_raw);
        require_all(&required, ISSUE_FIELDS_MISSING)?;

        let user_id = parse_id(&self.user_id, "User ID")?;
        let book_id = parse_id(book_id, "Book ID")?;
        let issue_date = match issue_raw {
            Some(raw) => parse_date(raw, "Issue date")?,
            None => today,
        };
        let return_date = match return_raw {
            Some(raw) => parse_date(raw, "Return date")?,
            None => max_return_date(issue_date)?,
        };

        check_issue_window(issue_date, return_date, today)?;

        Ok(IssueRequest {
            user_id,
            book_id,
            issue_date,
            return_date: Some(return_date),
            remarks: non_blank(&self.remarks),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ReturnForm {
    pub transaction_id: String,
    pub serial_no: String,
    /// `None` means today
    pub return_date: Option<String>,
}

impl ReturnForm {
    pub fn validate(&self, today: NaiveDate) -> Result<ReturnRequest, ClientError> {
        let mut required = vec![self.transaction_id.as_str(), self.serial_no.as_str()];
        required.extend(self.return_date.as_deref());
        require_all(&required, RETURN_FIELDS_MISSING)?;

        Ok(ReturnRequest {
            transaction_id: parse_id(&self.transaction_id, "Transaction ID")?,
            serial_no: self.serial_no.trim().to_string(),
            return_date: match self.return_date.as_deref() {
                Some(raw) => parse_date(raw, "Return date")?,
                None => today,
            },
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct FineForm {
    pub fine_paid: bool,
    pub remarks: String,
}

impl FineForm {
    /// The fine step settles the return recorded by the previous step
    pub fn validate(&self, pending: Option<PendingReturn>) -> Result<FinePayment, ClientError> {
        let pending = pending.ok_or_else(|| ClientError::validation(NO_PENDING_RETURN))?;
        Ok(FinePayment {
            transaction_id: pending.transaction_id,
            fine_paid: self.fine_paid,
            remarks: non_blank(&self.remarks),
        })
    }
}
