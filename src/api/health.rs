use serde::Deserialize;

use super::ApiClient;
use crate::domain::ClientError;

#[derive(Debug, Clone, Deserialize)]
pub struct BackendStatus {
    pub status: String,
}

impl ApiClient {
    /// GET / - backend liveness message
    pub async fn backend_status(&self) -> Result<BackendStatus, ClientError> {
        self.get_json("/", "Backend unreachable").await
    }
}
