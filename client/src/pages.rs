//! Page-level data controllers.
//!
//! Each controller composes [`Resource`] with the API façade the way the
//! pages of the product do: fetch on mount/parameter change, cancel the
//! previous fetch, map errors to the user-facing Vietnamese strings. There
//! is deliberately no debounce on search input; a new keystroke simply
//! cancels the previous request.

use tokio_util::sync::CancellationToken;

use crate::api::ApiClient;
use crate::checkout::PaymentWindow;
use crate::error::ApiError;
use crate::resource::{Resource, ResourceState};
use crate::types::{
    BlogCategory, BlogPostListItem, BlogQuery, ExpertCard, ExpertFilterOptions, ExpertQuery,
    MyAppointmentItem, MySubscription, PageResponse, PaymentInitiation, SubscriptionPlan,
};

/// User-facing error strings, collected in one place.
pub mod messages {
    use crate::error::ApiError;

    pub const GENERIC_LOAD: &str = "Đã có lỗi xảy ra. Vui lòng thử lại.";
    pub const BOOKING_FAILED: &str = "Đặt lịch thất bại. Vui lòng đăng nhập và thử lại.";
    pub const APPOINTMENTS_LOGIN: &str = "Bạn cần đăng nhập để xem lịch hẹn.";
    pub const SUBSCRIPTION_LOGIN: &str = "Bạn cần đăng nhập để mua gói.";
    pub const SUBSCRIPTION_OWNED: &str = "Bạn đã có gói thành viên hiện tại.";
    pub const PAYMENT_FAILED: &str = "Không thể tạo thanh toán. Vui lòng thử lại.";

    /// Message for a failed subscription purchase. 401 and 409 get their
    /// own wording; everything else collapses into the generic one.
    pub fn subscription_purchase(err: &ApiError) -> &'static str {
        match err.status() {
            Some(401) => SUBSCRIPTION_LOGIN,
            Some(409) => SUBSCRIPTION_OWNED,
            _ => PAYMENT_FAILED,
        }
    }
}

// ---------------------------------------------------------------------------
// Experts
// ---------------------------------------------------------------------------

/// Expert list: filter options plus a re-searchable paginated list.
pub struct ExpertsPage {
    api: ApiClient,
    pub filter_options: Resource<ExpertFilterOptions>,
    pub experts: Resource<PageResponse<ExpertCard>>,
}

impl ExpertsPage {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            filter_options: Resource::new(),
            experts: Resource::new(),
        }
    }

    pub async fn load_filter_options(&self) {
        let api = self.api.clone();
        self.filter_options
            .load(|scope| async move { api.expert_filter_options(&scope).await })
            .await;
    }

    /// Fetch the list for the given filters, cancelling whatever search
    /// was still in flight. Later calls always win.
    pub async fn search(&self, query: ExpertQuery) {
        let api = self.api.clone();
        self.experts
            .load(|scope| async move { api.list_experts(&query, &scope).await })
            .await;
    }

    pub fn unmount(&self) {
        self.filter_options.abort();
        self.experts.abort();
    }
}

// ---------------------------------------------------------------------------
// My appointments
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentsView {
    pub upcoming: Vec<MyAppointmentItem>,
    pub drafts: Vec<MyAppointmentItem>,
}

/// What the appointments page renders.
#[derive(Debug, Clone, PartialEq)]
pub enum AppointmentsPageState {
    Loading,
    /// 401: a login prompt next to empty lists, never the error banner.
    LoginRequired(&'static str),
    Error(&'static str),
    Ready(AppointmentsView),
}

pub struct AppointmentsPage {
    api: ApiClient,
    data: Resource<AppointmentsView>,
}

impl AppointmentsPage {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            data: Resource::new(),
        }
    }

    /// Fetch upcoming and draft appointments together.
    pub async fn refresh(&self) {
        let api = self.api.clone();
        self.data
            .load(|scope| async move {
                let (upcoming, drafts) = tokio::try_join!(
                    api.my_appointments(&scope),
                    api.my_draft_appointments(&scope),
                )?;
                Ok(AppointmentsView { upcoming, drafts })
            })
            .await;
    }

    pub fn view(&self) -> AppointmentsPageState {
        match self.data.state() {
            ResourceState::Idle | ResourceState::Loading => AppointmentsPageState::Loading,
            ResourceState::Ready(view) => AppointmentsPageState::Ready(view),
            ResourceState::Failed(err) if err.status() == Some(401) => {
                AppointmentsPageState::LoginRequired(messages::APPOINTMENTS_LOGIN)
            }
            ResourceState::Failed(_) => AppointmentsPageState::Error(messages::GENERIC_LOAD),
        }
    }

    pub fn unmount(&self) {
        self.data.abort();
    }
}

// ---------------------------------------------------------------------------
// Subscriptions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionsView {
    pub plans: Vec<SubscriptionPlan>,
    /// `None` when the user has no active plan (or is signed out); that
    /// is a normal state, not an error.
    pub current: Option<MySubscription>,
}

pub struct SubscriptionsPage {
    api: ApiClient,
    pub data: Resource<SubscriptionsView>,
}

impl SubscriptionsPage {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            data: Resource::new(),
        }
    }

    pub async fn refresh(&self) {
        let api = self.api.clone();
        self.data
            .load(|scope| async move {
                let plans = api.subscription_plans(&scope).await?;
                let current = match api.my_subscription(&scope).await {
                    Ok(subscription) => Some(subscription),
                    Err(err) if err.is_aborted() => return Err(err),
                    Err(_) => None,
                };
                Ok(SubscriptionsView { plans, current })
            })
            .await;
    }

    /// Purchase a plan with the two-phase gateway-window protocol. On
    /// success the caller navigates to the result page with the payment
    /// id; on failure map the error with
    /// [`messages::subscription_purchase`] (aborted errors are dropped
    /// silently instead).
    pub async fn buy<W: PaymentWindow>(
        &self,
        sub_id: i64,
        method_key: &str,
        window: &mut W,
        cancel: &CancellationToken,
    ) -> Result<PaymentInitiation, ApiError> {
        window.open_placeholder();
        match self.api.pay_subscription(sub_id, method_key, cancel).await {
            Ok(initiation) => {
                match initiation
                    .redirect_url
                    .as_deref()
                    .filter(|url| !url.is_empty())
                {
                    Some(url) => window.navigate(url),
                    None => window.close(),
                }
                Ok(initiation)
            }
            Err(err) => {
                window.close();
                Err(err)
            }
        }
    }

    pub fn unmount(&self) {
        self.data.abort();
    }
}

// ---------------------------------------------------------------------------
// Blog
// ---------------------------------------------------------------------------

pub struct BlogPage {
    api: ApiClient,
    pub categories: Resource<Vec<BlogCategory>>,
    pub posts: Resource<PageResponse<BlogPostListItem>>,
}

impl BlogPage {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            categories: Resource::new(),
            posts: Resource::new(),
        }
    }

    pub async fn load_categories(&self) {
        let api = self.api.clone();
        self.categories
            .load(|scope| async move { api.blog_categories(&scope).await })
            .await;
    }

    pub async fn search(&self, query: BlogQuery) {
        let api = self.api.clone();
        self.posts
            .load(|scope| async move { api.blog_posts(&query, &scope).await })
            .await;
    }

    pub fn unmount(&self) {
        self.categories.abort();
        self.posts.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> ApiError {
        ApiError::Http {
            status,
            details: None,
        }
    }

    #[test]
    fn subscription_purchase_messages_are_status_specific() {
        assert_eq!(
            messages::subscription_purchase(&http(401)),
            messages::SUBSCRIPTION_LOGIN
        );
        assert_eq!(
            messages::subscription_purchase(&http(409)),
            messages::SUBSCRIPTION_OWNED
        );
        assert_eq!(
            messages::subscription_purchase(&http(500)),
            messages::PAYMENT_FAILED
        );
        assert_ne!(messages::SUBSCRIPTION_OWNED, messages::PAYMENT_FAILED);
    }

    #[test]
    fn transport_errors_get_the_generic_payment_message() {
        let err = ApiError::Transport("connection refused".into());
        assert_eq!(messages::subscription_purchase(&err), messages::PAYMENT_FAILED);
    }
}
