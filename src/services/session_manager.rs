// src/services/session_manager.rs
use std::{
    collections::HashMap,
    fmt::Debug,
    sync::Arc,
    time::{Duration, Instant},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize)]
pub struct Message {
    pub id: Uuid,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Per-session presentation context. Lives and dies with the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SessionContext {
    pub theme: Theme,
}

#[derive(Clone, Debug)]
pub struct Session {
    pub id: String,
    pub messages: Vec<Message>,
    pub context: SessionContext,
    pub last_active: Instant,
}

impl Session {
    pub fn new(id: impl Into<String>) -> Self {
        let now = Instant::now();
        Self {
            id: id.into(),
            messages: Vec::new(),
            context: SessionContext::default(),
            last_active: now,
        }
    }
}

#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<RwLock<HashMap<String, Session>>>,
    ttl: Duration,
}

impl Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl SessionManager {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    // Create a fresh session and return its id.
    pub async fn create_session(&self) -> String {
        let id = Uuid::new_v4().to_string();
        let session = Session::new(id.clone());

        let mut guard = self.inner.write().await;
        guard.insert(id.clone(), session);
        id
    }

    /// Ensure there's a session with this id. Returns true if it was created.
    pub async fn ensure_session(&self, id: &str) -> bool {
        {
            let guard = self.inner.read().await;
            if guard.contains_key(id) {
                return false;
            }
        }
        let mut guard = self.inner.write().await;
        if guard.contains_key(id) {
            return false;
        }
        guard.insert(id.to_string(), Session::new(id));
        true
    }

    // Append a message to a session's history and touch last_active.
    pub async fn append_message(
        &self,
        session_id: &str,
        role: MessageRole,
        content: impl Into<String>,
    ) -> usize {
        let mut guard = self.inner.write().await;
        let entry = guard
            .entry(session_id.to_string())
            .or_insert_with(|| Session::new(session_id));
        entry.messages.push(Message {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            created_at: Utc::now(),
        });
        entry.last_active = Instant::now();
        entry.messages.len()
    }

    /// Get a copy of the session history
    pub async fn get_history(&self, session_id: &str) -> Option<Vec<Message>> {
        let guard = self.inner.read().await;
        guard.get(session_id).map(|s| s.messages.clone())
    }

    pub async fn get_context(&self, session_id: &str) -> Option<SessionContext> {
        let guard = self.inner.read().await;
        guard.get(session_id).map(|s| s.context)
    }

    /// Update the theme of an existing session. Unknown ids are left alone.
    pub async fn set_theme(&self, session_id: &str, theme: Theme) -> Option<SessionContext> {
        let mut guard = self.inner.write().await;
        let session = guard.get_mut(session_id)?;
        session.context.theme = theme;
        session.last_active = Instant::now();
        Some(session.context)
    }

    /// Remove a session by id
    pub async fn remove_session(&self, session_id: &str) -> bool {
        let mut guard = self.inner.write().await;
        guard.remove(session_id).is_some()
    }

    /// Remove sessions idle longer than ttl. Returns number removed.
    pub async fn purge_expired(&self) -> usize {
        let mut guard = self.inner.write().await;
        let now = Instant::now();
        let before = guard.len();
        guard.retain(|_, s| now.duration_since(s.last_active) < self.ttl);
        before - guard.len()
    }

    /// Number of sessions
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// List session ids
    pub async fn list_session_ids(&self) -> Vec<String> {
        let guard = self.inner.read().await;
        guard.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn basic_session_flow() {
        let mgr = SessionManager::new(Duration::from_secs(60));
        let sid = mgr.create_session().await;
        assert!(!sid.is_empty());
        let len = mgr.append_message(&sid, MessageRole::User, "hello").await;
        assert_eq!(len, 1);
        let history = mgr.get_history(&sid).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].role, MessageRole::User);
        assert!(mgr.remove_session(&sid).await);
    }

    #[tokio::test]
    async fn theme_defaults_to_system() {
        let mgr = SessionManager::new(Duration::from_secs(60));
        let sid = mgr.create_session().await;
        assert_eq!(mgr.get_context(&sid).await.unwrap().theme, Theme::System);
        assert!(mgr.set_theme("missing", Theme::Dark).await.is_none());
    }
}
