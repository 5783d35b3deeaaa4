use uuid::Uuid;

use mindcare_core::error::CoreError;
use mindcare_core::models::article::{Article, ArticleDraft, ArticleKind, ArticleStatus};
use mindcare_core::models::chat::{sort_chronological, ChatMessage};
use mindcare_core::models::consultation::{Consultation, ConsultationStatus};
use mindcare_core::models::mood::{average_recent_mood, MoodEntry, MoodLevel, RECENT_WINDOW};
use mindcare_core::models::user::{AccountStatus, Role, User};

fn patient() -> User {
    User::register("Budi", "budi@example.com", Some("budi88".to_string()), Role::Patient)
}

fn doctor() -> User {
    User::register("dr. Sari", "sari@example.com", None, Role::Doctor)
}

fn active_doctor() -> User {
    let mut doc = doctor();
    doc.set_status(AccountStatus::Active).unwrap();
    doc
}

fn confirmed_consultation() -> Consultation {
    let mut consultation = Consultation::book(&patient(), &active_doctor(), "Cemas").unwrap();
    consultation.confirm().unwrap();
    consultation
}

#[test]
fn doctors_start_pending_and_others_active() {
    assert_eq!(doctor().status, AccountStatus::Pending);
    assert_eq!(patient().status, AccountStatus::Active);
    assert_eq!(
        AccountStatus::initial_for(Role::Admin),
        AccountStatus::Active
    );
}

#[test]
fn admin_approves_doctor() {
    let mut doc = doctor();
    assert!(!doc.is_bookable_doctor());
    doc.set_status(AccountStatus::Active).unwrap();
    assert!(doc.is_bookable_doctor());
}

#[test]
fn admin_accounts_cannot_be_deactivated() {
    let mut admin = User::register("Root", "root@example.com", None, Role::Admin);
    assert!(matches!(
        admin.set_status(AccountStatus::Inactive),
        Err(CoreError::AdminProtected)
    ));
    assert_eq!(admin.status, AccountStatus::Active);
}

#[test]
fn display_name_prefers_username() {
    assert_eq!(patient().display_name(), "budi88");
    assert_eq!(doctor().display_name(), "dr. Sari");

    let mut anonymous = patient();
    anonymous.username = None;
    anonymous.name = String::new();
    assert_eq!(anonymous.display_name(), "budi@example.com");
    anonymous.email = String::new();
    assert_eq!(anonymous.display_name(), "Unknown User");
}

#[test]
fn booking_starts_pending_with_patient_display_name() {
    let consultation = Consultation::book(&patient(), &active_doctor(), "Sulit tidur").unwrap();
    assert_eq!(consultation.status, ConsultationStatus::Pending);
    assert_eq!(consultation.patient_name, "budi88");
    assert_eq!(consultation.doctor_name, "dr. Sari");
}

#[test]
fn pending_doctor_cannot_be_booked() {
    let err = Consultation::book(&patient(), &doctor(), "Cemas").unwrap_err();
    assert_eq!(err.to_string(), "dr. Sari cannot accept consultations");

    let mut inactive = active_doctor();
    inactive.set_status(AccountStatus::Inactive).unwrap();
    assert!(matches!(
        Consultation::book(&patient(), &inactive, "Cemas"),
        Err(CoreError::NotPermitted { .. })
    ));
}

#[test]
fn only_doctors_can_be_booked() {
    assert!(matches!(
        Consultation::book(&patient(), &patient(), "Cemas"),
        Err(CoreError::NotPermitted { action, .. }) if action == "accept consultations"
    ));
}

#[test]
fn only_patients_can_book() {
    let err = Consultation::book(&active_doctor(), &active_doctor(), "Cemas").unwrap_err();
    assert_eq!(err.to_string(), "dr. Sari cannot book a consultation");
}

#[test]
fn booking_requires_a_complaint() {
    assert!(matches!(
        Consultation::book(&patient(), &active_doctor(), "   "),
        Err(CoreError::MissingField(field)) if field == "complaint"
    ));
}

#[test]
fn consultation_is_decided_once() {
    let mut consultation = Consultation::book(&patient(), &active_doctor(), "Cemas").unwrap();
    consultation.confirm().unwrap();
    assert_eq!(consultation.status, ConsultationStatus::Confirmed);

    let err = consultation.reject().unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot move consultation from confirmed to rejected"
    );
    assert_eq!(consultation.status, ConsultationStatus::Confirmed);
}

#[test]
fn chat_message_is_trimmed_and_non_empty() {
    let consultation = confirmed_consultation();
    let sender = Uuid::new_v4();
    let msg = ChatMessage::new(&consultation, sender, "Budi", "  Halo dok  ").unwrap();
    assert_eq!(msg.message, "Halo dok");
    assert_eq!(msg.consultation_id, consultation.id);
    assert!(ChatMessage::new(&consultation, sender, "Budi", " \n ").is_err());
}

#[test]
fn chat_requires_a_confirmed_consultation() {
    let mut consultation = Consultation::book(&patient(), &active_doctor(), "Cemas").unwrap();
    assert!(matches!(
        ChatMessage::new(&consultation, Uuid::new_v4(), "Budi", "Halo"),
        Err(CoreError::ChatClosed(id)) if id == consultation.id
    ));

    consultation.reject().unwrap();
    assert!(ChatMessage::new(&consultation, Uuid::new_v4(), "Budi", "Halo").is_err());
}

#[test]
fn chat_messages_sort_oldest_first() {
    let consultation = confirmed_consultation();
    let sender = Uuid::new_v4();
    let mut first = ChatMessage::new(&consultation, sender, "A", "pertama").unwrap();
    let mut second = ChatMessage::new(&consultation, sender, "B", "kedua").unwrap();
    first.timestamp = "2025-01-01T10:00:00Z".parse().unwrap();
    second.timestamp = "2025-01-01T10:05:00Z".parse().unwrap();

    let mut messages = vec![second, first];
    sort_chronological(&mut messages);
    assert_eq!(messages[0].message, "pertama");
    assert_eq!(messages[1].message, "kedua");
}

#[test]
fn mood_level_bounds() {
    assert!(MoodLevel::new(0).is_err());
    assert!(MoodLevel::new(6).is_err());
    assert_eq!(MoodLevel::new(1).unwrap().label(), "Sangat Sedih");
    assert_eq!(MoodLevel::new(5).unwrap().label(), "Sangat Senang");
    assert!(serde_json::from_str::<MoodLevel>("9").is_err());
}

#[test]
fn average_uses_newest_seven_entries() {
    let user = Uuid::new_v4();
    let moods = [5, 4, 4, 3, 5, 4, 4, 1, 1];
    let entries: Vec<_> = moods
        .iter()
        .map(|&m| MoodEntry::record(user, MoodLevel::new(m).unwrap(), ""))
        .collect();

    // (5+4+4+3+5+4+4) / 7 = 4.142…
    assert_eq!(average_recent_mood(&entries, RECENT_WINDOW), 4.1);
    assert_eq!(average_recent_mood(&entries[..2], RECENT_WINDOW), 4.5);
    assert_eq!(average_recent_mood(&[], RECENT_WINDOW), 0.0);
}

#[test]
fn publishing_requires_title_excerpt_and_content() {
    let draft = ArticleDraft {
        title: "Mengelola Cemas".to_string(),
        excerpt: String::new(),
        content: "Isi".to_string(),
        category: "anxiety".to_string(),
        read_time_minutes: 5,
        video_url: None,
    };
    assert!(matches!(
        Article::publish(draft, Uuid::new_v4(), "dr. Sari"),
        Err(CoreError::MissingField(field)) if field == "excerpt"
    ));
}

#[test]
fn published_article_kind_and_read_time() {
    let draft = ArticleDraft {
        title: "Tidur Sehat".to_string(),
        excerpt: "Ringkasan".to_string(),
        content: "Isi lengkap".to_string(),
        category: "sleep".to_string(),
        read_time_minutes: 7,
        video_url: Some("https://video.example/tidur".to_string()),
    };
    let article = Article::publish(draft, Uuid::new_v4(), "dr. Sari").unwrap();
    assert_eq!(article.status, ArticleStatus::Published);
    assert_eq!(article.kind(), ArticleKind::Video);
    assert_eq!(article.read_time_label(), "7 menit");

    let mut text = article.clone();
    text.video_url = None;
    assert_eq!(text.kind(), ArticleKind::Text);
}

#[test]
fn user_round_trips_with_snake_case_enums() {
    let json = serde_json::to_value(doctor()).unwrap();
    assert_eq!(json["role"], "doctor");
    assert_eq!(json["status"], "pending");
}
