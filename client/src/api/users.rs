use tokio_util::sync::CancellationToken;

use super::ApiClient;
use crate::error::ApiError;
use crate::http::ApiRequest;
use crate::types::Me;

impl ApiClient {
    /// Current user profile, including the MindPoints balance.
    pub async fn me(&self, cancel: &CancellationToken) -> Result<Me, ApiError> {
        let request = ApiRequest::get(self.url("/api/v1/users/me")).bearer(self.bearer());
        self.transport.send_json(request, cancel).await
    }
}
