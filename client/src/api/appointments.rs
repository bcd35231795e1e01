use tokio_util::sync::CancellationToken;

use super::ApiClient;
use crate::error::ApiError;
use crate::http::ApiRequest;
use crate::types::MyAppointmentItem;

impl ApiClient {
    pub async fn my_appointments(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<MyAppointmentItem>, ApiError> {
        let request = ApiRequest::get(self.url("/api/v1/appointments/my")).bearer(self.bearer());
        self.transport.send_json(request, cancel).await
    }

    pub async fn my_draft_appointments(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<MyAppointmentItem>, ApiError> {
        let request =
            ApiRequest::get(self.url("/api/v1/appointments/my/drafts")).bearer(self.bearer());
        self.transport.send_json(request, cancel).await
    }
}
