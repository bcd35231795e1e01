//! Checkout endpoints: options, the appointment snapshot, payment
//! initiation and the post-payment confirmation read.

use tokio_util::sync::CancellationToken;

use super::ApiClient;
use crate::error::ApiError;
use crate::http::ApiRequest;
use crate::types::{
    AppointmentCheckout, AppointmentConfirmation, CheckoutOptions, InitiatePaymentRequest,
    PaymentInitiation,
};

impl ApiClient {
    /// Platform/service/payment-method catalogs. Public: also shown to
    /// signed-out visitors.
    pub async fn checkout_options(
        &self,
        cancel: &CancellationToken,
    ) -> Result<CheckoutOptions, ApiError> {
        let url = self.url("/api/v1/checkout/options");
        self.transport
            .send_json(ApiRequest::get(url), cancel)
            .await
    }

    pub async fn appointment_checkout(
        &self,
        appt_id: i64,
        cancel: &CancellationToken,
    ) -> Result<AppointmentCheckout, ApiError> {
        let url = self.url(&format!("/api/v1/checkout/appointments/{appt_id}/checkout"));
        let request = ApiRequest::get(url).bearer(self.bearer());
        self.transport.send_json(request, cancel).await
    }

    pub async fn appointment_confirmation(
        &self,
        appt_id: i64,
        cancel: &CancellationToken,
    ) -> Result<AppointmentConfirmation, ApiError> {
        let url = self.url(&format!(
            "/api/v1/checkout/appointments/{appt_id}/confirmation"
        ));
        let request = ApiRequest::get(url).bearer(self.bearer());
        self.transport.send_json(request, cancel).await
    }

    pub async fn pay_appointment(
        &self,
        appt_id: i64,
        body: &InitiatePaymentRequest,
        cancel: &CancellationToken,
    ) -> Result<PaymentInitiation, ApiError> {
        let url = self.url(&format!("/api/v1/checkout/appointments/{appt_id}/payments"));
        let request = ApiRequest::post(url).bearer(self.bearer()).json(body)?;
        self.transport.send_json(request, cancel).await
    }
}
