//! In-memory state: seeded catalogs plus per-test mutable records.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::types::*;

pub const STARTING_BALANCE: i64 = 1_000;

#[derive(Debug, Clone)]
pub struct ExpertSeed {
    pub detail: ExpertDetail,
}

#[derive(Debug, Clone)]
pub struct Slot {
    pub availability_id: i64,
    pub expert_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub booked: bool,
}

#[derive(Debug, Clone)]
pub struct Account {
    pub user_id: i64,
    pub password: String,
    pub full_name: String,
    pub phone_number: Option<String>,
    pub mindpoints_balance: i64,
}

#[derive(Debug, Clone)]
pub struct AppointmentRecord {
    pub appt_id: i64,
    pub expert_id: i64,
    pub user_id: i64,
    pub availability_id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: String,
    pub total_amount_points: i64,
    pub service_type: Option<String>,
    pub platform_id: Option<i64>,
    pub contact_full_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub payment_id: Option<i64>,
    pub payment_status: Option<String>,
}

#[derive(Debug, Clone)]
pub enum PaymentTarget {
    Appointment(i64),
    Subscription(i64),
}

#[derive(Debug, Clone)]
pub struct PaymentRecord {
    pub payment_id: i64,
    pub user_id: i64,
    pub target: PaymentTarget,
    pub status: String,
}

#[derive(Debug, Clone)]
pub struct SubscriptionRecord {
    pub sub_id: i64,
    pub user_id: i64,
    pub plan_name: String,
    pub status: String,
    pub started_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

pub struct AppState {
    pub experts: Vec<ExpertSeed>,
    pub plans: Vec<SubscriptionPlan>,
    pub categories: Vec<BlogCategory>,
    pub posts: Vec<BlogPostDetail>,
    pub platforms: Vec<MeetingPlatformOption>,
    pub payment_methods: Vec<PaymentMethodOption>,

    pub slots: RwLock<Vec<Slot>>,
    /// email -> account
    pub accounts: RwLock<HashMap<String, Account>>,
    /// bearer token -> (user id, email)
    pub tokens: RwLock<HashMap<String, (i64, String)>>,
    pub appointments: RwLock<HashMap<i64, AppointmentRecord>>,
    pub payments: RwLock<HashMap<i64, PaymentRecord>>,
    /// user id -> active subscription
    pub subscriptions: RwLock<HashMap<i64, SubscriptionRecord>>,
    /// appointment ids whose confirmation endpoint answers 500 (test hook)
    pub confirmation_failures: RwLock<HashSet<i64>>,

    next_id: AtomicI64,
}

impl AppState {
    pub fn seeded() -> Self {
        let now = Utc::now();
        Self {
            experts: seed_experts(),
            plans: seed_plans(),
            categories: seed_categories(),
            posts: seed_posts(now),
            platforms: seed_platforms(),
            payment_methods: seed_payment_methods(),
            slots: RwLock::new(seed_slots(now)),
            accounts: RwLock::new(HashMap::new()),
            tokens: RwLock::new(HashMap::new()),
            appointments: RwLock::new(HashMap::new()),
            payments: RwLock::new(HashMap::new()),
            subscriptions: RwLock::new(HashMap::new()),
            confirmation_failures: RwLock::new(HashSet::new()),
            next_id: AtomicI64::new(1_000),
        }
    }

    pub fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    pub fn expert(&self, expert_id: i64) -> Option<&ExpertSeed> {
        self.experts
            .iter()
            .find(|e| e.detail.card.expert_id == expert_id)
    }
}

fn lang(code: &str, name: &str) -> LanguageOption {
    LanguageOption {
        code: code.to_string(),
        name: name.to_string(),
    }
}

fn spec(id: i64, name: &str) -> SpecializationOption {
    SpecializationOption {
        id,
        name: name.to_string(),
    }
}

fn expert(
    expert_id: i64,
    full_name: &str,
    title: &str,
    hourly_rate: i64,
    gender: &str,
    avg_rating: f64,
    review_count: u32,
    specializations: Vec<SpecializationOption>,
    bio: &str,
) -> ExpertSeed {
    ExpertSeed {
        detail: ExpertDetail {
            card: ExpertCard {
                expert_id,
                full_name: full_name.to_string(),
                title: title.to_string(),
                hourly_rate,
                is_verified: true,
                gender: gender.to_string(),
                avg_rating,
                review_count,
                languages: vec![lang("vi", "Tiếng Việt"), lang("en", "English")],
                specializations,
            },
            experience_years: Some(10),
            bio: Some(bio.to_string()),
            profile_image_url: None,
        },
    }
}

fn seed_experts() -> Vec<ExpertSeed> {
    vec![
        expert(
            7,
            "Nguyễn Thị Mai",
            "Chuyên gia tâm lý lâm sàng",
            200,
            "female",
            4.8,
            56,
            vec![spec(1, "Lo âu"), spec(2, "Trầm cảm")],
            "12 năm kinh nghiệm trị liệu nhận thức hành vi.",
        ),
        expert(
            8,
            "Lê Minh Tuấn",
            "Chuyên gia trị liệu gia đình",
            150,
            "male",
            4.6,
            34,
            vec![spec(3, "Hôn nhân & gia đình")],
            "Đồng hành cùng các cặp đôi và gia đình trẻ.",
        ),
        expert(
            9,
            "Phạm Hồng Anh",
            "Chuyên gia tâm lý học đường",
            120,
            "female",
            4.9,
            71,
            vec![spec(1, "Lo âu"), spec(4, "Tâm lý học đường")],
            "Chuyên hỗ trợ học sinh, sinh viên và phụ huynh.",
        ),
    ]
}

fn seed_slots(now: DateTime<Utc>) -> Vec<Slot> {
    let mut slots = Vec::new();
    let mut slot = |availability_id: i64, expert_id: i64, days: i64, hour: i64| {
        let start = now + Duration::days(days) + Duration::hours(hour);
        slots.push(Slot {
            availability_id,
            expert_id,
            start_time: start,
            end_time: start + Duration::hours(1),
            booked: false,
        });
    };
    slot(41, 7, 1, 0);
    slot(42, 7, 2, 0);
    slot(43, 7, 3, 0);
    slot(44, 8, 1, 2);
    slot(45, 8, 2, 2);
    slot(46, 9, 1, 4);
    slots
}

fn seed_platforms() -> Vec<MeetingPlatformOption> {
    let platform = |platform_id, platform_key: &str, display_name: &str| MeetingPlatformOption {
        platform_id,
        platform_key: platform_key.to_string(),
        display_name: display_name.to_string(),
        is_active: true,
    };
    vec![
        platform(1, "google_meet", "Google Meet"),
        platform(2, "zoom", "Zoom"),
        platform(3, "teams", "Microsoft Teams"),
    ]
}

fn seed_payment_methods() -> Vec<PaymentMethodOption> {
    vec![
        PaymentMethodOption {
            method_key: "mindpoints".to_string(),
            display_name: "Ví MindPoints".to_string(),
            badge_label: Some("Không mất phí".to_string()),
            is_active: true,
        },
        PaymentMethodOption {
            method_key: "momo".to_string(),
            display_name: "Ví MoMo".to_string(),
            badge_label: None,
            is_active: true,
        },
        PaymentMethodOption {
            method_key: "zalopay".to_string(),
            display_name: "ZaloPay".to_string(),
            badge_label: None,
            is_active: true,
        },
    ]
}

fn seed_plans() -> Vec<SubscriptionPlan> {
    vec![
        SubscriptionPlan {
            sub_id: 1,
            name: "Premium".to_string(),
            price_points: 300,
            duration_days: 30,
            perks: vec![
                "Giảm 10% phí tư vấn".to_string(),
                "Ưu tiên đặt lịch".to_string(),
            ],
        },
        SubscriptionPlan {
            sub_id: 2,
            name: "Platinum".to_string(),
            price_points: 800,
            duration_days: 90,
            perks: vec![
                "Giảm 20% phí tư vấn".to_string(),
                "1 buổi tư vấn miễn phí mỗi quý".to_string(),
            ],
        },
    ]
}

fn seed_categories() -> Vec<BlogCategory> {
    vec![
        BlogCategory {
            category_id: 1,
            name: "Sức khỏe tinh thần".to_string(),
        },
        BlogCategory {
            category_id: 2,
            name: "Thiền và chánh niệm".to_string(),
        },
    ]
}

fn seed_posts(now: DateTime<Utc>) -> Vec<BlogPostDetail> {
    let author = BlogAuthor {
        expert_id: 7,
        full_name: "Nguyễn Thị Mai".to_string(),
        title: "Chuyên gia tâm lý lâm sàng".to_string(),
    };
    let category = |id: usize, categories: &[BlogCategory]| vec![categories[id].clone()];
    let categories = seed_categories();
    let post = |post_id: i64, title: &str, days_ago: i64, cat: usize| BlogPostDetail {
        post_id,
        slug: Some(format!("bai-viet-{post_id}")),
        title: title.to_string(),
        content: format!("# {title}\n\nNội dung bài viết."),
        content_format: "markdown".to_string(),
        cover_image_url: None,
        published_at: now - Duration::days(days_ago),
        reading_minutes: 6,
        author: author.clone(),
        categories: category(cat, &categories),
    };
    vec![
        post(101, "Hiểu về rối loạn lo âu", 3, 0),
        post(102, "Thiền 10 phút mỗi ngày", 7, 1),
        post(103, "Khi nào nên tìm đến chuyên gia?", 12, 0),
    ]
}
