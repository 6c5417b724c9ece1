// src/message.rs
use serde::{Deserialize, Serialize};

use crate::rules::Topic;
use crate::services::session_manager::{Message, SessionContext, Theme};

#[derive(Deserialize)]
pub struct ChatRequest {
    pub session_id: Option<String>,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub topic: Topic,
    pub reply: String,
}

#[derive(Serialize, Deserialize)]
pub struct SessionOpened {
    pub session_id: String,
    pub theme: Theme,
    pub welcome: String,
}

#[derive(Serialize)]
pub struct Transcript {
    pub session_id: String,
    pub messages: Vec<Message>,
}

#[derive(Deserialize)]
pub struct ThemeUpdate {
    pub theme: Theme,
}

#[derive(Serialize)]
pub struct ContextResponse {
    pub session_id: String,
    #[serde(flatten)]
    pub context: SessionContext,
}

#[derive(Deserialize)]
pub struct ExamSearchQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

#[derive(Deserialize)]
pub struct RecommendationQuery {
    pub goal: String,
}
