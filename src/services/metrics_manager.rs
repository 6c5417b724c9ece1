use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::rules::Topic;

#[derive(Debug, Default, Clone, Serialize)]
pub struct SubmissionCounts {
    pub ok: u64,
    pub failed: u64,
}

#[derive(Debug, Default, Clone, Serialize)]
pub struct MetricsData {
    pub topic_usage: HashMap<String, u64>,
    pub quotes_computed: u64,
    pub quote_errors: u64,
    pub submissions: HashMap<String, SubmissionCounts>,
}

#[derive(Debug, Clone)]
pub struct MetricsManager {
    inner: Arc<RwLock<MetricsData>>,
}

impl Default for MetricsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsManager {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MetricsData::default())),
        }
    }

    pub async fn increment_topic(&self, topic: Topic) {
        let mut data = self.inner.write().await;
        *data.topic_usage.entry(topic.to_string()).or_insert(0) += 1;
    }

    pub async fn record_quote(&self, ok: bool) {
        let mut data = self.inner.write().await;
        if ok {
            data.quotes_computed += 1;
        } else {
            data.quote_errors += 1;
        }
    }

    pub async fn record_submission(&self, form: &str, ok: bool) {
        let mut data = self.inner.write().await;
        let counts = data.submissions.entry(form.to_string()).or_default();
        if ok {
            counts.ok += 1;
        } else {
            counts.failed += 1;
        }
    }

    pub async fn get_metrics(&self) -> MetricsData {
        self.inner.read().await.clone()
    }
}
