use uuid::Uuid;

use mindcare_core::documents;

#[test]
fn messages_nest_under_their_consultation() {
    let consultation = Uuid::new_v4();
    let message = Uuid::new_v4();
    assert_eq!(
        documents::chat_message(consultation, message),
        format!("consultations/{consultation}/messages/{message}")
    );
}

#[test]
fn top_level_collections() {
    let id = Uuid::new_v4();
    assert_eq!(documents::user(id), format!("users/{id}"));
    assert_eq!(documents::mood_entry(id), format!("moodEntries/{id}"));
    assert_eq!(documents::article(id), format!("articles/{id}"));
    assert_eq!(documents::assessment(id), format!("assessments/{id}"));
    assert_eq!(documents::consultation(id), format!("consultations/{id}"));
}
