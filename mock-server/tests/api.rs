use axum::http::{self, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use mindwell_mock_server::app;
use mindwell_mock_server::types::{
    AppointmentConfirmation, AppointmentDraft, AuthResponse, ExpertCard, ExpertDetail, Me,
    MyAppointmentItem, PageResponse, PaymentInitiation,
};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str, token: Option<&str>) -> Request<String> {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header(http::header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(String::new()).unwrap()
}

fn auth_json_request(method: &str, uri: &str, token: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .header(http::header::AUTHORIZATION, format!("Bearer {token}"))
        .body(body.to_string())
        .unwrap()
}

async fn register(app: &Router, email: &str) -> String {
    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/v1/auth/register",
            &format!(r#"{{"email":"{email}","password":"secret","fullName":"Test User"}}"#),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let auth: AuthResponse = body_json(resp).await;
    auth.access_token
}

async fn book(app: &Router, token: &str, expert_id: i64, availability_id: i64) -> AppointmentDraft {
    let resp = app
        .clone()
        .oneshot(auth_json_request(
            "POST",
            &format!("/api/v1/experts/{expert_id}/appointments"),
            token,
            &format!(r#"{{"availabilityId":{availability_id}}}"#),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    body_json(resp).await
}

// --- auth ---

#[tokio::test]
async fn register_then_me_returns_profile() {
    let app = app();
    let token = register(&app, "mai@example.com").await;

    let resp = app
        .oneshot(get_request("/api/v1/users/me", Some(&token)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let me: Me = body_json(resp).await;
    assert_eq!(me.email, "mai@example.com");
    assert_eq!(me.full_name, "Test User");
    assert_eq!(me.mindpoints_balance, 1000);
}

#[tokio::test]
async fn register_duplicate_email_returns_409() {
    let app = app();
    register(&app, "dup@example.com").await;

    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/v1/auth/register",
            r#"{"email":"dup@example.com","password":"other","fullName":"Other"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn login_wrong_password_returns_401() {
    let app = app();
    register(&app, "login@example.com").await;

    let resp = app
        .oneshot(json_request(
            "POST",
            "/api/v1/auth/login",
            r#"{"email":"login@example.com","password":"wrong"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_without_token_returns_401() {
    let app = app();
    let resp = app
        .oneshot(get_request("/api/v1/users/me", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// --- experts ---

#[tokio::test]
async fn experts_list_paginates() {
    let app = app();
    let resp = app
        .oneshot(get_request("/api/v1/experts?page=0&size=2", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageResponse<ExpertCard> = body_json(resp).await;
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_items, 3);
    assert_eq!(page.total_pages, 2);
    assert!(page.has_next);
    assert!(!page.has_previous);
}

#[tokio::test]
async fn experts_list_filters_by_specialization() {
    let app = app();
    let resp = app
        .oneshot(get_request("/api/v1/experts?specializationIds=3,4", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageResponse<ExpertCard> = body_json(resp).await;
    let ids: Vec<i64> = page.items.iter().map(|e| e.expert_id).collect();
    assert_eq!(ids, vec![8, 9]);
}

#[tokio::test]
async fn expert_detail_flattens_card() {
    let app = app();
    let resp = app
        .oneshot(get_request("/api/v1/experts/7", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let detail: ExpertDetail = body_json(resp).await;
    assert_eq!(detail.card.expert_id, 7);
    assert_eq!(detail.card.full_name, "Nguyễn Thị Mai");
    assert!(detail.bio.is_some());
}

#[tokio::test]
async fn expert_detail_unknown_returns_404() {
    let app = app();
    let resp = app
        .oneshot(get_request("/api/v1/experts/999", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- booking ---

#[tokio::test]
async fn booking_creates_draft_priced_at_hourly_rate() {
    let app = app();
    let token = register(&app, "booker@example.com").await;
    let draft = book(&app, &token, 7, 41).await;

    assert_eq!(draft.expert_id, 7);
    assert_eq!(draft.status, "draft");
    assert_eq!(draft.total_amount_points, 200);
}

#[tokio::test]
async fn double_booking_same_slot_returns_409() {
    let app = app();
    let token = register(&app, "first@example.com").await;
    book(&app, &token, 7, 41).await;

    let other = register(&app, "second@example.com").await;
    let resp = app
        .oneshot(auth_json_request(
            "POST",
            "/api/v1/experts/7/appointments",
            &other,
            r#"{"availabilityId":41}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn booked_slot_disappears_from_availability() {
    let app = app();
    let token = register(&app, "slots@example.com").await;
    book(&app, &token, 7, 41).await;

    let resp = app
        .oneshot(get_request("/api/v1/experts/7/availability", None))
        .await
        .unwrap();
    let slots: Vec<serde_json::Value> = body_json(resp).await;
    assert_eq!(slots.len(), 2);
    assert!(slots.iter().all(|s| s["availabilityId"] != 41));
}

// --- payments ---

#[tokio::test]
async fn mindpoints_payment_settles_without_redirect() {
    let app = app();
    let token = register(&app, "points@example.com").await;
    let draft = book(&app, &token, 7, 41).await;

    let resp = app
        .clone()
        .oneshot(auth_json_request(
            "POST",
            &format!("/api/v1/checkout/appointments/{}/payments", draft.appt_id),
            &token,
            r#"{"methodKey":"mindpoints","platformId":1,"contactFullName":"Test User","contactEmail":"points@example.com"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let payment: PaymentInitiation = body_json(resp).await;
    assert_eq!(payment.status, "paid");
    assert!(payment.redirect_url.is_none());

    // 1000 starting balance minus the 200-point session.
    let resp = app
        .clone()
        .oneshot(get_request("/api/v1/users/me", Some(&token)))
        .await
        .unwrap();
    let me: Me = body_json(resp).await;
    assert_eq!(me.mindpoints_balance, 800);

    let resp = app
        .oneshot(get_request(
            &format!("/api/v1/checkout/appointments/{}/confirmation", draft.appt_id),
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let confirmation: AppointmentConfirmation = body_json(resp).await;
    assert_eq!(confirmation.status, "paid");
    assert!(confirmation.meeting_join_url.is_some());
    assert_eq!(confirmation.platform_name.as_deref(), Some("Google Meet"));
}

#[tokio::test]
async fn gateway_payment_returns_redirect_url() {
    let app = app();
    let token = register(&app, "momo@example.com").await;
    let draft = book(&app, &token, 8, 44).await;

    let resp = app
        .oneshot(auth_json_request(
            "POST",
            &format!("/api/v1/checkout/appointments/{}/payments", draft.appt_id),
            &token,
            r#"{"methodKey":"momo","platformId":2}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let payment: PaymentInitiation = body_json(resp).await;
    assert_eq!(payment.status, "pending");
    assert!(payment.redirect_url.is_some());
}

#[tokio::test]
async fn confirmation_before_payment_returns_409() {
    let app = app();
    let token = register(&app, "early@example.com").await;
    let draft = book(&app, &token, 7, 42).await;

    let resp = app
        .oneshot(get_request(
            &format!("/api/v1/checkout/appointments/{}/confirmation", draft.appt_id),
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn forced_confirmation_failure_returns_500() {
    let app = app();
    let token = register(&app, "flaky@example.com").await;
    let draft = book(&app, &token, 7, 43).await;

    let resp = app
        .clone()
        .oneshot(auth_json_request(
            "POST",
            &format!("/api/v1/checkout/appointments/{}/payments", draft.appt_id),
            &token,
            r#"{"methodKey":"mindpoints"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(json_request(
            "POST",
            &format!("/api/v1/_test/confirmation-failures/{}", draft.appt_id),
            "",
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .oneshot(get_request(
            &format!("/api/v1/checkout/appointments/{}/confirmation", draft.appt_id),
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// --- appointments ---

#[tokio::test]
async fn drafts_and_paid_appointments_are_split() {
    let app = app();
    let token = register(&app, "split@example.com").await;
    let paid = book(&app, &token, 7, 41).await;
    let draft = book(&app, &token, 7, 42).await;

    let resp = app
        .clone()
        .oneshot(auth_json_request(
            "POST",
            &format!("/api/v1/checkout/appointments/{}/payments", paid.appt_id),
            &token,
            r#"{"methodKey":"mindpoints"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(get_request("/api/v1/appointments/my", Some(&token)))
        .await
        .unwrap();
    let mine: Vec<MyAppointmentItem> = body_json(resp).await;
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].appt_id, paid.appt_id);
    assert_eq!(mine[0].expert_name, "Nguyễn Thị Mai");

    let resp = app
        .oneshot(get_request("/api/v1/appointments/my/drafts", Some(&token)))
        .await
        .unwrap();
    let drafts: Vec<MyAppointmentItem> = body_json(resp).await;
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].appt_id, draft.appt_id);
}

// --- subscriptions ---

#[tokio::test]
async fn my_subscription_without_purchase_returns_404() {
    let app = app();
    let token = register(&app, "nosub@example.com").await;
    let resp = app
        .oneshot(get_request("/api/v1/subscriptions/my", Some(&token)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn second_subscription_purchase_returns_409() {
    let app = app();
    let token = register(&app, "sub@example.com").await;

    let resp = app
        .clone()
        .oneshot(auth_json_request(
            "POST",
            "/api/v1/subscriptions/1/payments",
            &token,
            r#"{"methodKey":"mindpoints"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let payment: PaymentInitiation = body_json(resp).await;
    assert_eq!(payment.status, "paid");

    let resp = app
        .clone()
        .oneshot(get_request(
            &format!(
                "/api/v1/subscriptions/confirmation?paymentId={}",
                payment.payment_id
            ),
            Some(&token),
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let confirmation: serde_json::Value = body_json(resp).await;
    assert_eq!(confirmation["planName"], "Premium");

    let resp = app
        .oneshot(auth_json_request(
            "POST",
            "/api/v1/subscriptions/2/payments",
            &token,
            r#"{"methodKey":"mindpoints"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn faulty_gateway_method_returns_500() {
    let app = app();
    let token = register(&app, "faulty@example.com").await;
    let resp = app
        .oneshot(auth_json_request(
            "POST",
            "/api/v1/subscriptions/1/payments",
            &token,
            r#"{"methodKey":"faulty-gateway"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// --- blog ---

#[tokio::test]
async fn blog_posts_filter_by_category() {
    let app = app();
    let resp = app
        .oneshot(get_request("/api/v1/blog/posts?categoryId=1", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let page: PageResponse<serde_json::Value> = body_json(resp).await;
    assert_eq!(page.total_items, 2);
    assert_eq!(page.size, 9);
}

#[tokio::test]
async fn related_posts_share_a_category() {
    let app = app();
    let resp = app
        .oneshot(get_request("/api/v1/blog/posts/101/related?limit=5", None))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let related: Vec<serde_json::Value> = body_json(resp).await;
    assert_eq!(related.len(), 1);
    assert_eq!(related[0]["postId"], 103);
}
