//! Membership-plan endpoints. Purchase follows the same gateway-redirect
//! contract as appointment payments.

use tokio_util::sync::CancellationToken;

use super::ApiClient;
use crate::error::ApiError;
use crate::http::ApiRequest;
use crate::types::{
    MySubscription, PaymentInitiation, SubscriptionConfirmation, SubscriptionPaymentRequest,
    SubscriptionPlan,
};
use crate::url::Query;

impl ApiClient {
    pub async fn subscription_plans(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<SubscriptionPlan>, ApiError> {
        let url = self.url("/api/v1/subscriptions/plans");
        self.transport
            .send_json(ApiRequest::get(url), cancel)
            .await
    }

    /// The caller's active subscription; 404 when there is none.
    pub async fn my_subscription(
        &self,
        cancel: &CancellationToken,
    ) -> Result<MySubscription, ApiError> {
        let request =
            ApiRequest::get(self.url("/api/v1/subscriptions/my")).bearer(self.bearer());
        self.transport.send_json(request, cancel).await
    }

    /// 409 means "already subscribed" and is surfaced as such by the
    /// subscriptions page.
    pub async fn pay_subscription(
        &self,
        sub_id: i64,
        method_key: &str,
        cancel: &CancellationToken,
    ) -> Result<PaymentInitiation, ApiError> {
        let url = self.url(&format!("/api/v1/subscriptions/{sub_id}/payments"));
        let body = SubscriptionPaymentRequest {
            method_key: method_key.to_string(),
        };
        let request = ApiRequest::post(url).bearer(self.bearer()).json(&body)?;
        self.transport.send_json(request, cancel).await
    }

    pub async fn subscription_confirmation(
        &self,
        payment_id: i64,
        cancel: &CancellationToken,
    ) -> Result<SubscriptionConfirmation, ApiError> {
        let query = Query::new().push("paymentId", payment_id);
        let url = self.url_with("/api/v1/subscriptions/confirmation", &query);
        let request = ApiRequest::get(url).bearer(self.bearer());
        self.transport.send_json(request, cancel).await
    }
}
