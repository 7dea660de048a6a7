use super::ApiClient;
use super::transactions::OVERDUE_FALLBACK;
use crate::domain::ClientError;
use crate::models::{FineRow, IssuedBookRow, OverdueReturn, ReturnedBookRow, UserTransactionRow};

impl ApiClient {
    /// GET /reports/issued-books
    pub async fn issued_books_report(&self) -> Result<Vec<IssuedBookRow>, ClientError> {
        self.get_json(
            "/reports/issued-books",
            "Unable to load issued books report",
        )
        .await
    }

    /// GET /reports/returned-books
    pub async fn returned_books_report(&self) -> Result<Vec<ReturnedBookRow>, ClientError> {
        self.get_json(
            "/reports/returned-books",
            "Unable to load returned books report",
        )
        .await
    }

    /// GET /reports/fine-report
    pub async fn fine_report(&self) -> Result<Vec<FineRow>, ClientError> {
        self.get_json("/reports/fine-report", "Unable to load fine report")
            .await
    }

    /// GET /reports/overdue-returns
    pub async fn overdue_report(&self) -> Result<Vec<OverdueReturn>, ClientError> {
        self.get_json("/reports/overdue-returns", OVERDUE_FALLBACK)
            .await
    }

    /// GET /reports/user-transactions/{user_id}
    pub async fn user_transactions_report(
        &self,
        user_id: i32,
    ) -> Result<Vec<UserTransactionRow>, ClientError> {
        self.get_json(
            &format!("/reports/user-transactions/{}", user_id),
            "Unable to load user transactions",
        )
        .await
    }
}
