// src/state.rs
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::AppConfig;
use crate::services::chatbot::{ResponseSelector, Selection};
use crate::services::metrics_manager::MetricsManager;
use crate::services::notifications::{HttpSink, NotificationSink, StubSink};
use crate::services::pricing::PriceCatalog;
use crate::services::session_manager::{MessageRole, SessionManager};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub sessions: SessionManager,
    pub metrics: MetricsManager,
    pub selector: ResponseSelector,
    pub catalog: PriceCatalog,
    pub sink: Arc<dyn NotificationSink>,
    pub admin_key: String,
    rng: Mutex<StdRng>,
}

impl AppState {
    pub fn new(session_ttl: Duration) -> Self {
        Self {
            sessions: SessionManager::new(session_ttl),
            metrics: MetricsManager::new(),
            selector: ResponseSelector::new(),
            catalog: PriceCatalog::new(),
            sink: Arc::new(StubSink::new(Duration::from_millis(1000))),
            admin_key: AppConfig::default().admin_key,
            rng: Mutex::new(StdRng::from_os_rng()),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        let sink: Arc<dyn NotificationSink> = match &config.notify_url {
            Some(url) => Arc::new(HttpSink::new(url.clone())),
            None => Arc::new(StubSink::new(config.notify_delay)),
        };

        let state = Self::new(config.session_ttl)
            .with_sink(sink)
            .with_admin_key(config.admin_key.clone());
        match config.chat_seed {
            Some(seed) => state.with_seed(seed),
            None => state,
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn with_admin_key(mut self, key: impl Into<String>) -> Self {
        self.admin_key = key.into();
        self
    }

    /// Runs the selector against the shared RNG.
    pub fn select_reply(&self, input: &str) -> Option<Selection> {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        self.selector.select(input, &mut *rng)
    }

    /// New session seeded with the assistant's welcome message.
    pub async fn open_session(&self) -> String {
        let id = self.sessions.create_session().await;
        self.sessions
            .append_message(&id, MessageRole::Assistant, self.selector.welcome())
            .await;
        id
    }
}
