//! Wire DTOs for the MindWell backend.
//!
//! # Design
//! Everything here mirrors the backend's JSON contract (camelCase names,
//! numeric ids, ISO-8601 timestamps) and is a transient value: fetched,
//! displayed, discarded. Status fields stay plain strings because their
//! lifecycle is backend-owned; the client only renders and reacts to what
//! it was given. The mock-server crate defines its own copies, so the
//! integration tests catch schema drift between the two.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::url::Query;

/// Common envelope for paginated list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

// ---------------------------------------------------------------------------
// Experts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageOption {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpecializationOption {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpertCard {
    pub expert_id: i64,
    pub full_name: String,
    pub title: String,
    pub hourly_rate: i64,
    pub is_verified: bool,
    pub gender: String,
    pub avg_rating: f64,
    pub review_count: u32,
    pub languages: Vec<LanguageOption>,
    pub specializations: Vec<SpecializationOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpertDetail {
    #[serde(flatten)]
    pub card: ExpertCard,
    pub experience_years: Option<u32>,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
}

/// Expert-scoped bookable time interval; its id is the sole key used to
/// create a draft appointment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySlot {
    pub availability_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpertFilterOptions {
    pub languages: Vec<LanguageOption>,
    pub specializations: Vec<SpecializationOption>,
    pub genders: Vec<String>,
}

/// Filter/pagination parameters for the expert list.
#[derive(Debug, Clone, Default)]
pub struct ExpertQuery {
    pub q: Option<String>,
    pub specialization_ids: Vec<i64>,
    pub language_codes: Vec<String>,
    pub gender: Option<String>,
    pub verified: Option<bool>,
    pub min_rate: Option<i64>,
    pub max_rate: Option<i64>,
    pub available_from: Option<DateTime<Utc>>,
    pub available_to: Option<DateTime<Utc>>,
    pub page: Option<u32>,
    pub size: Option<u32>,
    /// `"field,direction"` directives, e.g. `"avgRating,desc"`.
    pub sort: Vec<String>,
}

impl ExpertQuery {
    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .opt("q", self.q.as_deref())
            .list("specializationIds", &self.specialization_ids)
            .list("languageCodes", &self.language_codes)
            .opt("gender", self.gender.as_deref())
            .opt("verified", self.verified)
            .opt("minRate", self.min_rate)
            .opt("maxRate", self.max_rate)
            .opt("availableFrom", self.available_from.map(|t| t.to_rfc3339()))
            .opt("availableTo", self.available_to.map(|t| t.to_rfc3339()))
            .opt("page", self.page)
            .opt("size", self.size)
            .list("sort", &self.sort)
    }
}

// ---------------------------------------------------------------------------
// Auth & users
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// Always `"Bearer"` today.
    pub token_type: String,
    pub access_token: String,
    pub user_id: i64,
    pub email: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Me {
    pub user_id: i64,
    pub email: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub mindpoints_balance: i64,
}

// ---------------------------------------------------------------------------
// Booking & checkout
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDraftRequest {
    pub availability_id: i64,
}

/// Appointment as returned by draft creation (`status = "draft"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDraft {
    pub appt_id: i64,
    pub expert_id: i64,
    pub user_id: i64,
    pub availability_id: i64,
    pub start_time: DateTime<Utc>,
    pub status: String,
    pub total_amount_points: i64,
    pub service_type: Option<String>,
    pub platform_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MeetingPlatformOption {
    pub platform_id: i64,
    pub platform_key: String,
    pub display_name: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodOption {
    pub method_key: String,
    pub display_name: String,
    pub badge_label: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutOptions {
    pub platforms: Vec<MeetingPlatformOption>,
    pub service_types: Vec<String>,
    pub payment_methods: Vec<PaymentMethodOption>,
}

/// Point-in-time read of one appointment's payable state, re-fetched on
/// every checkout load. No staleness guarantee beyond "freshest at fetch".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentCheckout {
    pub appt_id: i64,
    pub expert_id: i64,
    pub expert_name: String,
    pub expert_title: String,
    pub platform_id: Option<i64>,
    pub platform_name: Option<String>,
    pub service_type: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_amount_points: i64,
    pub user_mindpoints_balance: i64,
    pub contact_full_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentConfirmation {
    pub appt_id: i64,
    pub status: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub platform_name: Option<String>,
    pub meeting_join_url: Option<String>,
    pub contact_email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct InitiatePaymentRequest {
    /// `"mindpoints"` or a gateway key (`"momo"`, `"zalopay"`, ...).
    pub method_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_phone: Option<String>,
}

/// Backend-issued payment handle. A present `redirect_url` means an
/// external gateway must finish the payment; absence means it completed
/// synchronously.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInitiation {
    pub payment_id: i64,
    pub status: String,
    pub redirect_url: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MyAppointmentItem {
    pub appt_id: i64,
    pub expert_id: i64,
    pub expert_name: String,
    pub expert_title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
    pub service_type: Option<String>,
    pub platform_id: Option<i64>,
    pub platform_name: Option<String>,
    pub total_amount_points: Option<i64>,
    pub payment_id: Option<i64>,
    pub payment_status: Option<String>,
    pub meeting_join_url: Option<String>,
}

// ---------------------------------------------------------------------------
// Blog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogCategory {
    pub category_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogAuthor {
    pub expert_id: i64,
    pub full_name: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostListItem {
    pub post_id: i64,
    pub slug: Option<String>,
    pub title: String,
    pub excerpt: String,
    pub cover_image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub reading_minutes: u32,
    pub author: BlogAuthor,
    pub categories: Vec<BlogCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostDetail {
    pub post_id: i64,
    pub slug: Option<String>,
    pub title: String,
    pub content: String,
    /// `"markdown"` or `"html"`; rendering is out of scope here.
    pub content_format: String,
    pub cover_image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub reading_minutes: u32,
    pub author: BlogAuthor,
    pub categories: Vec<BlogCategory>,
}

/// Filter/pagination parameters for the blog post list.
#[derive(Debug, Clone, Default)]
pub struct BlogQuery {
    pub q: Option<String>,
    pub category_id: Option<i64>,
    pub page: Option<u32>,
    pub size: Option<u32>,
    pub sort: Vec<String>,
}

impl BlogQuery {
    pub(crate) fn to_query(&self) -> Query {
        Query::new()
            .opt("q", self.q.as_deref())
            .opt("categoryId", self.category_id)
            .push("page", self.page.unwrap_or(0))
            .push("size", self.size.unwrap_or(9))
            .list("sort", &self.sort)
    }
}

// ---------------------------------------------------------------------------
// Subscriptions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub sub_id: i64,
    pub name: String,
    pub price_points: i64,
    pub duration_days: u32,
    pub perks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MySubscription {
    pub sub_id: i64,
    pub plan_name: String,
    pub status: String,
    pub started_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPaymentRequest {
    pub method_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionConfirmation {
    pub payment_id: i64,
    pub sub_id: i64,
    pub status: String,
    pub plan_name: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_response_uses_camel_case() {
        let raw = r#"{
            "items": [],
            "page": 0,
            "size": 12,
            "totalItems": 0,
            "totalPages": 0,
            "hasNext": false,
            "hasPrevious": false
        }"#;
        let page: PageResponse<ExpertCard> = serde_json::from_str(raw).unwrap();
        assert_eq!(page.size, 12);
        assert!(!page.has_next);
    }

    #[test]
    fn expert_detail_flattens_card_fields() {
        let raw = r#"{
            "expertId": 7,
            "fullName": "Nguyễn Thị Mai",
            "title": "Chuyên gia tâm lý",
            "hourlyRate": 200,
            "isVerified": true,
            "gender": "female",
            "avgRating": 4.8,
            "reviewCount": 56,
            "languages": [{"code": "vi", "name": "Tiếng Việt"}],
            "specializations": [{"id": 1, "name": "Lo âu"}],
            "bio": "12 năm kinh nghiệm."
        }"#;
        let detail: ExpertDetail = serde_json::from_str(raw).unwrap();
        assert_eq!(detail.card.expert_id, 7);
        assert_eq!(detail.bio.as_deref(), Some("12 năm kinh nghiệm."));
        assert!(detail.experience_years.is_none());
    }

    #[test]
    fn payment_request_omits_absent_fields() {
        let req = InitiatePaymentRequest {
            method_key: "mindpoints".into(),
            platform_id: Some(1),
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["methodKey"], "mindpoints");
        assert_eq!(json["platformId"], 1);
        assert!(json.get("contactEmail").is_none());
    }

    #[test]
    fn expert_query_serializes_lists_and_drops_absent() {
        let query = ExpertQuery {
            specialization_ids: vec![1, 2],
            sort: vec!["avgRating,desc".into()],
            page: Some(0),
            ..Default::default()
        };
        let url = crate::url::build_url("", "/api/v1/experts", &query.to_query());
        assert_eq!(
            url,
            "/api/v1/experts?specializationIds=1,2&page=0&sort=avgRating,desc"
        );
    }

    #[test]
    fn blog_query_applies_default_page_and_size() {
        let url = crate::url::build_url("", "/api/v1/blog/posts", &BlogQuery::default().to_query());
        assert_eq!(url, "/api/v1/blog/posts?page=0&size=9");
    }
}
