use super::ApiClient;
use crate::domain::ClientError;
use crate::models::{
    ActiveIssue, ApiMessage, AvailableBook, BookSearch, FinePayment, IssueReceipt, IssueRequest,
    OverdueReturn, ReturnAssessment, ReturnRequest,
};

pub(crate) const OVERDUE_FALLBACK: &str = "Unable to load overdue returns";

impl ApiClient {
    /// GET /transactions/book-available?title=..&media_type=..
    pub async fn search_available_books(
        &self,
        search: &BookSearch,
    ) -> Result<Vec<AvailableBook>, ClientError> {
        self.get_json_with_query(
            "/transactions/book-available",
            search,
            "Unable to fetch books",
        )
        .await
    }

    /// POST /transactions/issue-book
    pub async fn issue_book(&self, request: &IssueRequest) -> Result<IssueReceipt, ClientError> {
        self.post_json("/transactions/issue-book", request, "Issue failed")
            .await
    }

    /// POST /transactions/return-book
    ///
    /// Validates the return and computes the fine; the book stays issued
    /// until `pay_fine` completes the return.
    pub async fn return_book(
        &self,
        request: &ReturnRequest,
    ) -> Result<ReturnAssessment, ClientError> {
        self.post_json(
            "/transactions/return-book",
            request,
            "Return validation failed",
        )
        .await
    }

    /// POST /transactions/pay-fine
    pub async fn pay_fine(&self, payment: &FinePayment) -> Result<ApiMessage, ClientError> {
        self.post_json("/transactions/pay-fine", payment, "Payment failed")
            .await
    }

    /// GET /transactions/active-issues
    pub async fn active_issues(&self) -> Result<Vec<ActiveIssue>, ClientError> {
        self.get_json(
            "/transactions/active-issues",
            "Unable to load active issues",
        )
        .await
    }

    /// GET /transactions/overdue-returns
    pub async fn overdue_returns(&self) -> Result<Vec<OverdueReturn>, ClientError> {
        self.get_json("/transactions/overdue-returns", OVERDUE_FALLBACK)
            .await
    }
}
