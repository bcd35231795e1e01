//! Auth endpoints. Login and register are the only session writers.

use tokio_util::sync::CancellationToken;

use super::ApiClient;
use crate::error::ApiError;
use crate::http::ApiRequest;
use crate::types::{AuthResponse, LoginRequest, RegisterRequest};

impl ApiClient {
    pub async fn register(
        &self,
        body: &RegisterRequest,
        cancel: &CancellationToken,
    ) -> Result<AuthResponse, ApiError> {
        let request = ApiRequest::post(self.url("/api/v1/auth/register")).json(body)?;
        let auth: AuthResponse = self.transport.send_json(request, cancel).await?;
        self.session.set(&auth.access_token);
        Ok(auth)
    }

    pub async fn login(
        &self,
        body: &LoginRequest,
        cancel: &CancellationToken,
    ) -> Result<AuthResponse, ApiError> {
        let request = ApiRequest::post(self.url("/api/v1/auth/login")).json(body)?;
        let auth: AuthResponse = self.transport.send_json(request, cancel).await?;
        self.session.set(&auth.access_token);
        Ok(auth)
    }

    /// Purely client-side: drops the stored token. The backend keeps no
    /// session state to invalidate.
    pub fn logout(&self) {
        self.session.clear();
    }
}
