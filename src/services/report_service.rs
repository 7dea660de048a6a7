use std::fmt;

use futures::try_join;

use super::transaction_service::NO_OVERDUE_RETURNS;
use super::{Desk, Listing};
use crate::domain::ClientError;
use crate::models::{FineRow, IssueStatus, IssuedBookRow, OverdueReturn};
use crate::validation::parse_id;
use crate::views;

pub async fn load_issued_report(desk: &Desk) -> Result<Listing, ClientError> {
    let rows = desk.authorized()?.issued_books_report().await?;
    Ok(Listing::table(views::issued_table(&rows)))
}

pub async fn load_returned_report(desk: &Desk) -> Result<Listing, ClientError> {
    let rows = desk.authorized()?.returned_books_report().await?;
    Ok(Listing::table(views::returned_table(&rows)))
}

pub async fn load_fine_report(desk: &Desk) -> Result<Listing, ClientError> {
    let rows = desk.authorized()?.fine_report().await?;
    Ok(Listing::table(views::fine_table(&rows)))
}

pub async fn load_overdue_report(desk: &Desk) -> Result<Listing, ClientError> {
    let rows = desk.authorized()?.overdue_report().await?;
    Ok(Listing::table(views::overdue_table(&rows)).or_empty_message(NO_OVERDUE_RETURNS))
}

pub async fn load_user_transactions(desk: &Desk, user_id: &str) -> Result<Listing, ClientError> {
    let user_id = parse_id(user_id, "User ID")?;
    let rows = desk
        .authorized()?
        .user_transactions_report(user_id)
        .await?;
    Ok(Listing::table(views::user_transactions_table(&rows)))
}

/// Headline figures across the issued, overdue and fine reports
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overview {
    pub total_transactions: usize,
    pub currently_issued: usize,
    pub overdue: usize,
    pub overdue_fines: i64,
    pub fines_pending: usize,
    pub outstanding_fines: i64,
}

impl Overview {
    pub fn from_reports(issued: &[IssuedBookRow], overdue: &[OverdueReturn], fines: &[FineRow]) -> Self {
        Self {
            total_transactions: issued.len(),
            currently_issued: issued
                .iter()
                .filter(|r| r.status == IssueStatus::Issued)
                .count(),
            overdue: overdue.len(),
            overdue_fines: overdue.iter().map(|o| o.fine).sum(),
            fines_pending: fines.iter().filter(|f| f.outstanding() > 0).count(),
            outstanding_fines: fines.iter().map(FineRow::outstanding).sum(),
        }
    }
}

impl fmt::Display for Overview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Transactions:       {}", self.total_transactions)?;
        writeln!(f, "Currently issued:   {}", self.currently_issued)?;
        writeln!(f, "Overdue:            {}", self.overdue)?;
        writeln!(f, "Accruing fines:     {}", self.overdue_fines)?;
        writeln!(f, "Fines pending:      {}", self.fines_pending)?;
        writeln!(f, "Outstanding fines:  {}", self.outstanding_fines)
    }
}

/// Fetch the three reports together and summarise them
pub async fn load_overview(desk: &Desk) -> Result<Overview, ClientError> {
    let client = desk.authorized()?;
    let (issued, overdue, fines) = try_join!(
        client.issued_books_report(),
        client.overdue_report(),
        client.fine_report()
    )?;
    Ok(Overview::from_reports(&issued, &overdue, &fines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FineStatus;
    use chrono::NaiveDate;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
    }

    #[test]
    fn overview_counts_open_loans_and_unpaid_fines() {
        let issued = vec![
            IssuedBookRow {
                transaction_id: 1,
                user_id: 1,
                book_id: 1,
                issue_date: d(1),
                due_date: d(16),
                status: IssueStatus::Issued,
            },
            IssuedBookRow {
                transaction_id: 2,
                user_id: 1,
                book_id: 2,
                issue_date: d(1),
                due_date: d(5),
                status: IssueStatus::Returned,
            },
        ];
        let overdue = vec![OverdueReturn {
            transaction_id: 1,
            user_id: 1,
            book_id: 1,
            due_date: d(16),
            days_late: 3,
            fine: 30,
        }];
        let fines = vec![
            FineRow {
                transaction_id: 2,
                user_id: 1,
                book_id: 2,
                due_date: d(5),
                return_date: Some(d(7)),
                fine: 20,
                fine_paid: 20,
                status: FineStatus::Clear,
            },
            FineRow {
                transaction_id: 3,
                user_id: 2,
                book_id: 3,
                due_date: d(5),
                return_date: None,
                fine: 50,
                fine_paid: 0,
                status: FineStatus::FinePending,
            },
        ];

        let overview = Overview::from_reports(&issued, &overdue, &fines);
        assert_eq!(overview.total_transactions, 2);
        assert_eq!(overview.currently_issued, 1);
        assert_eq!(overview.overdue, 1);
        assert_eq!(overview.overdue_fines, 30);
        assert_eq!(overview.fines_pending, 1);
        assert_eq!(overview.outstanding_fines, 50);
    }
}
