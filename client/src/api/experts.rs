//! Expert discovery and the draft-booking call.

use chrono::{DateTime, Utc};
use tokio_util::sync::CancellationToken;

use super::ApiClient;
use crate::error::ApiError;
use crate::http::ApiRequest;
use crate::types::{
    AppointmentDraft, AvailabilitySlot, CreateDraftRequest, ExpertCard, ExpertDetail,
    ExpertFilterOptions, ExpertQuery, PageResponse,
};
use crate::url::Query;

impl ApiClient {
    pub async fn list_experts(
        &self,
        query: &ExpertQuery,
        cancel: &CancellationToken,
    ) -> Result<PageResponse<ExpertCard>, ApiError> {
        let url = self.url_with("/api/v1/experts", &query.to_query());
        self.transport
            .send_json(ApiRequest::get(url), cancel)
            .await
    }

    pub async fn expert_detail(
        &self,
        expert_id: i64,
        cancel: &CancellationToken,
    ) -> Result<ExpertDetail, ApiError> {
        let url = self.url(&format!("/api/v1/experts/{expert_id}"));
        self.transport
            .send_json(ApiRequest::get(url), cancel)
            .await
    }

    pub async fn expert_availability(
        &self,
        expert_id: i64,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
        cancel: &CancellationToken,
    ) -> Result<Vec<AvailabilitySlot>, ApiError> {
        let query = Query::new()
            .opt("from", from.map(|t| t.to_rfc3339()))
            .opt("to", to.map(|t| t.to_rfc3339()));
        let url = self.url_with(&format!("/api/v1/experts/{expert_id}/availability"), &query);
        self.transport
            .send_json(ApiRequest::get(url), cancel)
            .await
    }

    pub async fn expert_filter_options(
        &self,
        cancel: &CancellationToken,
    ) -> Result<ExpertFilterOptions, ApiError> {
        let url = self.url("/api/v1/experts/filters");
        self.transport
            .send_json(ApiRequest::get(url), cancel)
            .await
    }

    /// Create a draft appointment from an availability slot. The slot id is
    /// the sole input; pricing and status are backend-owned.
    pub async fn book_appointment(
        &self,
        expert_id: i64,
        availability_id: i64,
        cancel: &CancellationToken,
    ) -> Result<AppointmentDraft, ApiError> {
        let url = self.url(&format!("/api/v1/experts/{expert_id}/appointments"));
        let body = CreateDraftRequest { availability_id };
        let request = ApiRequest::post(url).bearer(self.bearer()).json(&body)?;
        self.transport.send_json(request, cancel).await
    }
}
