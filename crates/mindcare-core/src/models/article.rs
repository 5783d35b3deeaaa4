use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Educational content published by a doctor.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub read_time_minutes: u32,
    pub author_id: Uuid,
    pub author_name: String,
    pub video_url: Option<String>,
    pub status: ArticleStatus,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ArticleStatus {
    Draft,
    Published,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ArticleKind {
    Text,
    Video,
}

/// Fields a doctor fills in when publishing.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ArticleDraft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub read_time_minutes: u32,
    #[serde(default)]
    pub video_url: Option<String>,
}

impl Article {
    pub fn publish(draft: ArticleDraft, author_id: Uuid, author_name: &str) -> Result<Self, CoreError> {
        for (field, value) in [
            ("title", &draft.title),
            ("excerpt", &draft.excerpt),
            ("content", &draft.content),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::MissingField(field.to_string()));
            }
        }

        let now = jiff::Timestamp::now();
        Ok(Article {
            id: Uuid::new_v4(),
            title: draft.title,
            excerpt: draft.excerpt,
            content: draft.content,
            category: draft.category,
            read_time_minutes: draft.read_time_minutes,
            author_id,
            author_name: author_name.to_string(),
            video_url: draft.video_url.filter(|u| !u.trim().is_empty()),
            status: ArticleStatus::Published,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn kind(&self) -> ArticleKind {
        if self.video_url.is_some() {
            ArticleKind::Video
        } else {
            ArticleKind::Text
        }
    }

    pub fn read_time_label(&self) -> String {
        format!("{} menit", self.read_time_minutes)
    }
}
