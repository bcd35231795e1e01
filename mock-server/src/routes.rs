//! Route handlers. Behavior mirrors the real backend's observable
//! contract: bearer auth on protected routes, the paginated envelope on
//! list routes, 409 on double-booking and double-subscription, gateway
//! redirect URLs for non-MindPoints payments.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Duration, Utc};
use serde::Deserialize;

use crate::state::{
    AppState, Account, AppointmentRecord, PaymentRecord, PaymentTarget, SubscriptionRecord,
    STARTING_BALANCE,
};
use crate::types::*;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/auth/register", post(register))
        .route("/api/v1/auth/login", post(login))
        .route("/api/v1/users/me", get(me))
        .route("/api/v1/experts", get(list_experts))
        .route("/api/v1/experts/filters", get(filter_options))
        .route("/api/v1/experts/{expert_id}", get(expert_detail))
        .route("/api/v1/experts/{expert_id}/availability", get(availability))
        .route(
            "/api/v1/experts/{expert_id}/appointments",
            post(book_appointment),
        )
        .route("/api/v1/checkout/options", get(checkout_options))
        .route(
            "/api/v1/checkout/appointments/{appt_id}/checkout",
            get(appointment_checkout),
        )
        .route(
            "/api/v1/checkout/appointments/{appt_id}/confirmation",
            get(appointment_confirmation),
        )
        .route(
            "/api/v1/checkout/appointments/{appt_id}/payments",
            post(pay_appointment),
        )
        .route("/api/v1/appointments/my", get(my_appointments))
        .route("/api/v1/appointments/my/drafts", get(my_draft_appointments))
        .route("/api/v1/blog/categories", get(blog_categories))
        .route("/api/v1/blog/posts", get(blog_posts))
        .route("/api/v1/blog/posts/{post_id}", get(blog_post_detail))
        .route("/api/v1/blog/posts/{post_id}/related", get(related_posts))
        .route("/api/v1/subscriptions/plans", get(subscription_plans))
        .route("/api/v1/subscriptions/my", get(my_subscription))
        .route(
            "/api/v1/subscriptions/confirmation",
            get(subscription_confirmation),
        )
        .route("/api/v1/subscriptions/{sub_id}/payments", post(pay_subscription))
        .route("/api/v1/_test/slow", get(slow))
        .route(
            "/api/v1/_test/confirmation-failures/{appt_id}",
            post(force_confirmation_failure),
        )
        .with_state(state)
}

/// Resolve the bearer token to `(user_id, email)`.
async fn auth(state: &AppState, headers: &HeaderMap) -> Result<(i64, String), StatusCode> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or(StatusCode::UNAUTHORIZED)?;
    state
        .tokens
        .read()
        .await
        .get(token)
        .cloned()
        .ok_or(StatusCode::UNAUTHORIZED)
}

// --- auth ---

async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, StatusCode> {
    let mut accounts = state.accounts.write().await;
    if accounts.contains_key(&req.email) {
        return Err(StatusCode::CONFLICT);
    }
    let user_id = state.next_id();
    accounts.insert(
        req.email.clone(),
        Account {
            user_id,
            password: req.password,
            full_name: req.full_name.clone(),
            phone_number: req.phone_number,
            mindpoints_balance: STARTING_BALANCE,
        },
    );
    drop(accounts);

    let token = format!("mock-token-{}", state.next_id());
    state
        .tokens
        .write()
        .await
        .insert(token.clone(), (user_id, req.email.clone()));
    Ok(Json(AuthResponse {
        token_type: "Bearer".to_string(),
        access_token: token,
        user_id,
        email: req.email,
        full_name: req.full_name,
    }))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, StatusCode> {
    let accounts = state.accounts.read().await;
    let account = accounts.get(&req.email).ok_or(StatusCode::UNAUTHORIZED)?;
    if account.password != req.password {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let (user_id, full_name) = (account.user_id, account.full_name.clone());
    drop(accounts);

    let token = format!("mock-token-{}", state.next_id());
    state
        .tokens
        .write()
        .await
        .insert(token.clone(), (user_id, req.email.clone()));
    Ok(Json(AuthResponse {
        token_type: "Bearer".to_string(),
        access_token: token,
        user_id,
        email: req.email,
        full_name,
    }))
}

async fn me(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Me>, StatusCode> {
    let (user_id, email) = auth(&state, &headers).await?;
    let accounts = state.accounts.read().await;
    let account = accounts.get(&email).ok_or(StatusCode::UNAUTHORIZED)?;
    Ok(Json(Me {
        user_id,
        email,
        full_name: account.full_name.clone(),
        phone_number: account.phone_number.clone(),
        mindpoints_balance: account.mindpoints_balance,
    }))
}

// --- experts ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExpertListParams {
    q: Option<String>,
    specialization_ids: Option<String>,
    gender: Option<String>,
    verified: Option<bool>,
    min_rate: Option<i64>,
    max_rate: Option<i64>,
    page: Option<u32>,
    size: Option<u32>,
}

async fn list_experts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExpertListParams>,
) -> Json<PageResponse<ExpertCard>> {
    let wanted_specs: Vec<i64> = params
        .specialization_ids
        .as_deref()
        .map(|raw| raw.split(',').filter_map(|id| id.trim().parse().ok()).collect())
        .unwrap_or_default();

    let cards: Vec<ExpertCard> = state
        .experts
        .iter()
        .map(|seed| seed.detail.card.clone())
        .filter(|card| {
            if let Some(q) = &params.q {
                let q = q.to_lowercase();
                if !card.full_name.to_lowercase().contains(&q)
                    && !card.title.to_lowercase().contains(&q)
                {
                    return false;
                }
            }
            if !wanted_specs.is_empty()
                && !card.specializations.iter().any(|s| wanted_specs.contains(&s.id))
            {
                return false;
            }
            if let Some(gender) = &params.gender {
                if &card.gender != gender {
                    return false;
                }
            }
            if let Some(verified) = params.verified {
                if card.is_verified != verified {
                    return false;
                }
            }
            if let Some(min) = params.min_rate {
                if card.hourly_rate < min {
                    return false;
                }
            }
            if let Some(max) = params.max_rate {
                if card.hourly_rate > max {
                    return false;
                }
            }
            true
        })
        .collect();

    Json(paginate(&cards, params.page.unwrap_or(0), params.size.unwrap_or(12)))
}

async fn filter_options(State(state): State<Arc<AppState>>) -> Json<ExpertFilterOptions> {
    let mut languages: Vec<LanguageOption> = Vec::new();
    let mut specializations: Vec<SpecializationOption> = Vec::new();
    for seed in &state.experts {
        for language in &seed.detail.card.languages {
            if !languages.iter().any(|l| l.code == language.code) {
                languages.push(language.clone());
            }
        }
        for specialization in &seed.detail.card.specializations {
            if !specializations.iter().any(|s| s.id == specialization.id) {
                specializations.push(specialization.clone());
            }
        }
    }
    Json(ExpertFilterOptions {
        languages,
        specializations,
        genders: vec!["female".to_string(), "male".to_string(), "other".to_string()],
    })
}

async fn expert_detail(
    State(state): State<Arc<AppState>>,
    Path(expert_id): Path<i64>,
) -> Result<Json<ExpertDetail>, StatusCode> {
    state
        .expert(expert_id)
        .map(|seed| Json(seed.detail.clone()))
        .ok_or(StatusCode::NOT_FOUND)
}

async fn availability(
    State(state): State<Arc<AppState>>,
    Path(expert_id): Path<i64>,
) -> Result<Json<Vec<AvailabilitySlot>>, StatusCode> {
    if state.expert(expert_id).is_none() {
        return Err(StatusCode::NOT_FOUND);
    }
    let slots = state.slots.read().await;
    Ok(Json(
        slots
            .iter()
            .filter(|slot| slot.expert_id == expert_id && !slot.booked)
            .map(|slot| AvailabilitySlot {
                availability_id: slot.availability_id,
                start_time: slot.start_time,
                end_time: slot.end_time,
            })
            .collect(),
    ))
}

async fn book_appointment(
    State(state): State<Arc<AppState>>,
    Path(expert_id): Path<i64>,
    headers: HeaderMap,
    Json(req): Json<CreateDraftRequest>,
) -> Result<(StatusCode, Json<AppointmentDraft>), StatusCode> {
    let (user_id, _) = auth(&state, &headers).await?;
    let expert = state.expert(expert_id).ok_or(StatusCode::NOT_FOUND)?;

    let mut slots = state.slots.write().await;
    let slot = slots
        .iter_mut()
        .find(|slot| slot.expert_id == expert_id && slot.availability_id == req.availability_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if slot.booked {
        return Err(StatusCode::CONFLICT);
    }
    slot.booked = true;
    let (start_time, end_time) = (slot.start_time, slot.end_time);
    drop(slots);

    let appt_id = state.next_id();
    let record = AppointmentRecord {
        appt_id,
        expert_id,
        user_id,
        availability_id: req.availability_id,
        start_time,
        end_time,
        status: "draft".to_string(),
        total_amount_points: expert.detail.card.hourly_rate,
        service_type: None,
        platform_id: None,
        contact_full_name: None,
        contact_email: None,
        contact_phone: None,
        payment_id: None,
        payment_status: None,
    };
    let draft = AppointmentDraft {
        appt_id,
        expert_id,
        user_id,
        availability_id: req.availability_id,
        start_time,
        status: record.status.clone(),
        total_amount_points: record.total_amount_points,
        service_type: None,
        platform_id: None,
    };
    state.appointments.write().await.insert(appt_id, record);
    Ok((StatusCode::CREATED, Json(draft)))
}

// --- checkout ---

async fn checkout_options(State(state): State<Arc<AppState>>) -> Json<CheckoutOptions> {
    Json(CheckoutOptions {
        platforms: state.platforms.clone(),
        service_types: vec!["video".to_string(), "chat".to_string(), "voice".to_string()],
        payment_methods: state.payment_methods.clone(),
    })
}

fn platform_name(state: &AppState, platform_id: Option<i64>) -> Option<String> {
    platform_id.and_then(|id| {
        state
            .platforms
            .iter()
            .find(|p| p.platform_id == id)
            .map(|p| p.display_name.clone())
    })
}

async fn appointment_checkout(
    State(state): State<Arc<AppState>>,
    Path(appt_id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<AppointmentCheckout>, StatusCode> {
    let (user_id, email) = auth(&state, &headers).await?;
    let appointments = state.appointments.read().await;
    let record = appointments
        .get(&appt_id)
        .filter(|record| record.user_id == user_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    let expert = state
        .expert(record.expert_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    let accounts = state.accounts.read().await;
    let account = accounts.get(&email).ok_or(StatusCode::UNAUTHORIZED)?;

    Ok(Json(AppointmentCheckout {
        appt_id,
        expert_id: record.expert_id,
        expert_name: expert.detail.card.full_name.clone(),
        expert_title: expert.detail.card.title.clone(),
        platform_id: record.platform_id,
        platform_name: platform_name(&state, record.platform_id),
        service_type: record.service_type.clone(),
        start_time: record.start_time,
        end_time: record.end_time,
        total_amount_points: record.total_amount_points,
        user_mindpoints_balance: account.mindpoints_balance,
        contact_full_name: Some(account.full_name.clone()),
        contact_email: Some(email.clone()),
        contact_phone: account.phone_number.clone(),
        status: record.status.clone(),
    }))
}

async fn pay_appointment(
    State(state): State<Arc<AppState>>,
    Path(appt_id): Path<i64>,
    headers: HeaderMap,
    Json(req): Json<InitiatePaymentRequest>,
) -> Result<Json<PaymentInitiation>, StatusCode> {
    let (user_id, email) = auth(&state, &headers).await?;

    let mut appointments = state.appointments.write().await;
    let record = appointments
        .get_mut(&appt_id)
        .filter(|record| record.user_id == user_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if record.status != "draft" {
        return Err(StatusCode::CONFLICT);
    }

    record.platform_id = req.platform_id.or(record.platform_id);
    record.service_type = req.service_type.or(record.service_type.take());
    record.contact_full_name = req.contact_full_name.or(record.contact_full_name.take());
    record.contact_email = req.contact_email.or(record.contact_email.take());
    record.contact_phone = req.contact_phone.or(record.contact_phone.take());

    let payment_id = state.next_id();
    let initiation = if req.method_key == "mindpoints" {
        let mut accounts = state.accounts.write().await;
        let account = accounts.get_mut(&email).ok_or(StatusCode::UNAUTHORIZED)?;
        if account.mindpoints_balance < record.total_amount_points {
            return Err(StatusCode::PAYMENT_REQUIRED);
        }
        account.mindpoints_balance -= record.total_amount_points;
        record.status = "paid".to_string();
        record.payment_status = Some("paid".to_string());
        PaymentInitiation {
            payment_id,
            status: "paid".to_string(),
            redirect_url: None,
            message: None,
        }
    } else {
        record.payment_status = Some("pending".to_string());
        PaymentInitiation {
            payment_id,
            status: "pending".to_string(),
            redirect_url: Some(format!("https://pay.gateway.test/checkout/{payment_id}")),
            message: None,
        }
    };
    record.payment_id = Some(payment_id);
    drop(appointments);

    state.payments.write().await.insert(
        payment_id,
        PaymentRecord {
            payment_id,
            user_id,
            target: PaymentTarget::Appointment(appt_id),
            status: initiation.status.clone(),
        },
    );
    Ok(Json(initiation))
}

async fn appointment_confirmation(
    State(state): State<Arc<AppState>>,
    Path(appt_id): Path<i64>,
    headers: HeaderMap,
) -> Result<Json<AppointmentConfirmation>, StatusCode> {
    let (user_id, _) = auth(&state, &headers).await?;
    if state.confirmation_failures.read().await.contains(&appt_id) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let appointments = state.appointments.read().await;
    let record = appointments
        .get(&appt_id)
        .filter(|record| record.user_id == user_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if record.status != "paid" {
        return Err(StatusCode::CONFLICT);
    }
    Ok(Json(AppointmentConfirmation {
        appt_id,
        status: record.status.clone(),
        start_time: record.start_time,
        end_time: record.end_time,
        platform_name: platform_name(&state, record.platform_id),
        meeting_join_url: Some(format!("https://meet.mindwell.vn/appt-{appt_id}")),
        contact_email: record.contact_email.clone(),
    }))
}

// --- appointments ---

fn appointment_item(state: &AppState, record: &AppointmentRecord) -> MyAppointmentItem {
    let expert = state.expert(record.expert_id);
    MyAppointmentItem {
        appt_id: record.appt_id,
        expert_id: record.expert_id,
        expert_name: expert
            .map(|e| e.detail.card.full_name.clone())
            .unwrap_or_default(),
        expert_title: expert
            .map(|e| e.detail.card.title.clone())
            .unwrap_or_default(),
        start_time: record.start_time,
        end_time: record.end_time,
        status: record.status.clone(),
        service_type: record.service_type.clone(),
        platform_id: record.platform_id,
        platform_name: platform_name(state, record.platform_id),
        total_amount_points: Some(record.total_amount_points),
        payment_id: record.payment_id,
        payment_status: record.payment_status.clone(),
        meeting_join_url: (record.status == "paid")
            .then(|| format!("https://meet.mindwell.vn/appt-{}", record.appt_id)),
    }
}

async fn my_appointments(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<MyAppointmentItem>>, StatusCode> {
    let (user_id, _) = auth(&state, &headers).await?;
    let appointments = state.appointments.read().await;
    Ok(Json(
        appointments
            .values()
            .filter(|record| record.user_id == user_id && record.status != "draft")
            .map(|record| appointment_item(&state, record))
            .collect(),
    ))
}

async fn my_draft_appointments(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<Vec<MyAppointmentItem>>, StatusCode> {
    let (user_id, _) = auth(&state, &headers).await?;
    let appointments = state.appointments.read().await;
    Ok(Json(
        appointments
            .values()
            .filter(|record| record.user_id == user_id && record.status == "draft")
            .map(|record| appointment_item(&state, record))
            .collect(),
    ))
}

// --- blog ---

async fn blog_categories(State(state): State<Arc<AppState>>) -> Json<Vec<BlogCategory>> {
    Json(state.categories.clone())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlogListParams {
    q: Option<String>,
    category_id: Option<i64>,
    page: Option<u32>,
    size: Option<u32>,
}

fn post_list_item(post: &BlogPostDetail) -> BlogPostListItem {
    BlogPostListItem {
        post_id: post.post_id,
        slug: post.slug.clone(),
        title: post.title.clone(),
        excerpt: post.content.chars().take(120).collect(),
        cover_image_url: post.cover_image_url.clone(),
        published_at: post.published_at,
        reading_minutes: post.reading_minutes,
        author: post.author.clone(),
        categories: post.categories.clone(),
    }
}

async fn blog_posts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BlogListParams>,
) -> Json<PageResponse<BlogPostListItem>> {
    let items: Vec<BlogPostListItem> = state
        .posts
        .iter()
        .filter(|post| {
            if let Some(q) = &params.q {
                if !post.title.to_lowercase().contains(&q.to_lowercase()) {
                    return false;
                }
            }
            if let Some(category_id) = params.category_id {
                if !post.categories.iter().any(|c| c.category_id == category_id) {
                    return false;
                }
            }
            true
        })
        .map(post_list_item)
        .collect();
    Json(paginate(&items, params.page.unwrap_or(0), params.size.unwrap_or(9)))
}

async fn blog_post_detail(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
) -> Result<Json<BlogPostDetail>, StatusCode> {
    state
        .posts
        .iter()
        .find(|post| post.post_id == post_id)
        .map(|post| Json(post.clone()))
        .ok_or(StatusCode::NOT_FOUND)
}

#[derive(Debug, Deserialize)]
struct RelatedParams {
    limit: Option<usize>,
}

async fn related_posts(
    State(state): State<Arc<AppState>>,
    Path(post_id): Path<i64>,
    Query(params): Query<RelatedParams>,
) -> Result<Json<Vec<BlogPostListItem>>, StatusCode> {
    let post = state
        .posts
        .iter()
        .find(|post| post.post_id == post_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    let related = state
        .posts
        .iter()
        .filter(|candidate| {
            candidate.post_id != post_id
                && candidate.categories.iter().any(|c| {
                    post.categories.iter().any(|pc| pc.category_id == c.category_id)
                })
        })
        .take(params.limit.unwrap_or(3))
        .map(post_list_item)
        .collect();
    Ok(Json(related))
}

// --- subscriptions ---

async fn subscription_plans(State(state): State<Arc<AppState>>) -> Json<Vec<SubscriptionPlan>> {
    Json(state.plans.clone())
}

async fn my_subscription(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<MySubscription>, StatusCode> {
    let (user_id, _) = auth(&state, &headers).await?;
    let subscriptions = state.subscriptions.read().await;
    subscriptions
        .get(&user_id)
        .map(|record| {
            Json(MySubscription {
                sub_id: record.sub_id,
                plan_name: record.plan_name.clone(),
                status: record.status.clone(),
                started_at: record.started_at,
                expires_at: record.expires_at,
            })
        })
        .ok_or(StatusCode::NOT_FOUND)
}

async fn pay_subscription(
    State(state): State<Arc<AppState>>,
    Path(sub_id): Path<i64>,
    headers: HeaderMap,
    Json(req): Json<SubscriptionPaymentRequest>,
) -> Result<Json<PaymentInitiation>, StatusCode> {
    let (user_id, email) = auth(&state, &headers).await?;
    // Test hook: simulate a gateway-side failure.
    if req.method_key == "faulty-gateway" {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let plan = state
        .plans
        .iter()
        .find(|plan| plan.sub_id == sub_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    if state.subscriptions.read().await.contains_key(&user_id) {
        return Err(StatusCode::CONFLICT);
    }

    let payment_id = state.next_id();
    let initiation = if req.method_key == "mindpoints" {
        let mut accounts = state.accounts.write().await;
        let account = accounts.get_mut(&email).ok_or(StatusCode::UNAUTHORIZED)?;
        if account.mindpoints_balance < plan.price_points {
            return Err(StatusCode::PAYMENT_REQUIRED);
        }
        account.mindpoints_balance -= plan.price_points;
        drop(accounts);

        let now = Utc::now();
        state.subscriptions.write().await.insert(
            user_id,
            SubscriptionRecord {
                sub_id,
                user_id,
                plan_name: plan.name.clone(),
                status: "active".to_string(),
                started_at: now,
                expires_at: now + Duration::days(i64::from(plan.duration_days)),
            },
        );
        PaymentInitiation {
            payment_id,
            status: "paid".to_string(),
            redirect_url: None,
            message: None,
        }
    } else {
        PaymentInitiation {
            payment_id,
            status: "pending".to_string(),
            redirect_url: Some(format!("https://pay.gateway.test/subscription/{payment_id}")),
            message: None,
        }
    };

    state.payments.write().await.insert(
        payment_id,
        PaymentRecord {
            payment_id,
            user_id,
            target: PaymentTarget::Subscription(sub_id),
            status: initiation.status.clone(),
        },
    );
    Ok(Json(initiation))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfirmationParams {
    payment_id: i64,
}

async fn subscription_confirmation(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ConfirmationParams>,
    headers: HeaderMap,
) -> Result<Json<SubscriptionConfirmation>, StatusCode> {
    let (user_id, _) = auth(&state, &headers).await?;
    let payments = state.payments.read().await;
    let payment = payments
        .get(&params.payment_id)
        .filter(|payment| payment.user_id == user_id)
        .ok_or(StatusCode::NOT_FOUND)?;
    let sub_id = match payment.target {
        PaymentTarget::Subscription(sub_id) => sub_id,
        PaymentTarget::Appointment(_) => return Err(StatusCode::NOT_FOUND),
    };
    let subscriptions = state.subscriptions.read().await;
    let record = subscriptions.get(&user_id).filter(|r| r.sub_id == sub_id);
    Ok(Json(SubscriptionConfirmation {
        payment_id: params.payment_id,
        sub_id,
        status: payment.status.clone(),
        plan_name: record.map(|r| r.plan_name.clone()),
        expires_at: record.map(|r| r.expires_at),
    }))
}

// --- test hooks ---

/// Never answers within any sane client timeout.
async fn slow() -> StatusCode {
    tokio::time::sleep(std::time::Duration::from_secs(60)).await;
    StatusCode::NO_CONTENT
}

async fn force_confirmation_failure(
    State(state): State<Arc<AppState>>,
    Path(appt_id): Path<i64>,
) -> StatusCode {
    state.confirmation_failures.write().await.insert(appt_id);
    StatusCode::NO_CONTENT
}
