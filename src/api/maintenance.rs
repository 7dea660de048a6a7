use super::ApiClient;
use crate::domain::ClientError;
use crate::models::{
    ApiMessage, BookCreated, BookUpdate, ManageUser, Membership, MembershipCreated,
    MembershipUpdate, NewBook, NewMembership, UserSaved,
};

impl ApiClient {
    /// POST /maintenance/add-book
    pub async fn add_book(&self, book: &NewBook) -> Result<BookCreated, ClientError> {
        self.post_json("/maintenance/add-book", book, "Add book failed")
            .await
    }

    /// PUT /maintenance/update-book
    pub async fn update_book(&self, book: &BookUpdate) -> Result<ApiMessage, ClientError> {
        self.put_json("/maintenance/update-book", book, "Update book failed")
            .await
    }

    /// POST /maintenance/add-membership
    pub async fn add_membership(
        &self,
        membership: &NewMembership,
    ) -> Result<MembershipCreated, ClientError> {
        self.post_json(
            "/maintenance/add-membership",
            membership,
            "Add membership failed",
        )
        .await
    }

    /// PUT /maintenance/update-membership
    pub async fn update_membership(
        &self,
        update: &MembershipUpdate,
    ) -> Result<ApiMessage, ClientError> {
        self.put_json(
            "/maintenance/update-membership",
            update,
            "Update membership failed",
        )
        .await
    }

    /// GET /maintenance/memberships
    pub async fn list_memberships(&self) -> Result<Vec<Membership>, ClientError> {
        self.get_json("/maintenance/memberships", "Unable to load memberships")
            .await
    }

    /// POST /maintenance/user-management
    pub async fn manage_user(&self, user: &ManageUser) -> Result<UserSaved, ClientError> {
        self.post_json(
            "/maintenance/user-management",
            user,
            "User management failed",
        )
        .await
    }
}
