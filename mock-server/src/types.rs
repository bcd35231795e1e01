//! Wire types for the mock backend.
//!
//! Defined independently from the client crate on purpose: the integration
//! tests catch any schema drift between the two sides.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
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

/// Slice `items` into the common paginated envelope.
pub fn paginate<T: Clone>(items: &[T], page: u32, size: u32) -> PageResponse<T> {
    let size = size.max(1);
    let total_items = items.len() as u64;
    let total_pages = items.len().div_ceil(size as usize) as u32;
    let start = (page as usize) * (size as usize);
    let slice = if start >= items.len() {
        &items[0..0]
    } else {
        &items[start..(start + size as usize).min(items.len())]
    };
    PageResponse {
        items: slice.to_vec(),
        page,
        size,
        total_items,
        total_pages,
        has_next: page + 1 < total_pages,
        has_previous: page > 0 && total_pages > 0,
    }
}

// --- experts ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageOption {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecializationOption {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
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

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertDetail {
    #[serde(flatten)]
    pub card: ExpertCard,
    pub experience_years: Option<u32>,
    pub bio: Option<String>,
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySlot {
    pub availability_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpertFilterOptions {
    pub languages: Vec<LanguageOption>,
    pub specializations: Vec<SpecializationOption>,
    pub genders: Vec<String>,
}

// --- auth & users ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token_type: String,
    pub access_token: String,
    pub user_id: i64,
    pub email: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Me {
    pub user_id: i64,
    pub email: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub mindpoints_balance: i64,
}

// --- booking & checkout ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDraftRequest {
    pub availability_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
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

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingPlatformOption {
    pub platform_id: i64,
    pub platform_key: String,
    pub display_name: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodOption {
    pub method_key: String,
    pub display_name: String,
    pub badge_label: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutOptions {
    pub platforms: Vec<MeetingPlatformOption>,
    pub service_types: Vec<String>,
    pub payment_methods: Vec<PaymentMethodOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
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

#[derive(Debug, Clone, Serialize, Deserialize)]
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

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitiatePaymentRequest {
    pub method_key: String,
    #[serde(default)]
    pub platform_id: Option<i64>,
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub contact_full_name: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInitiation {
    pub payment_id: i64,
    pub status: String,
    pub redirect_url: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
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

// --- blog ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogCategory {
    pub category_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogAuthor {
    pub expert_id: i64,
    pub full_name: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
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

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostDetail {
    pub post_id: i64,
    pub slug: Option<String>,
    pub title: String,
    pub content: String,
    pub content_format: String,
    pub cover_image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub reading_minutes: u32,
    pub author: BlogAuthor,
    pub categories: Vec<BlogCategory>,
}

// --- subscriptions ---

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub sub_id: i64,
    pub name: String,
    pub price_points: i64,
    pub duration_days: u32,
    pub perks: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MySubscription {
    pub sub_id: i64,
    pub plan_name: String,
    pub status: String,
    pub started_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPaymentRequest {
    pub method_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionConfirmation {
    pub payment_id: i64,
    pub sub_id: i64,
    pub status: String,
    pub plan_name: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}
