// src/services/notifications.rs
//! Lead-capture delivery. Handlers only see the `NotificationSink` trait;
//! the concrete sink is picked from configuration at startup.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub const CONTACT_SENT: &str = "Your message has been sent successfully!";
pub const EXAM_SCHEDULED: &str =
    "Your exam has been scheduled! We will contact you within 24 hours to confirm your appointment.";
pub const INFO_REQUESTED: &str =
    "Thank you for your interest! We will send you detailed information within 24 hours.";

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Notification transport failed: {0}")]
    Transport(String),

    #[error("Notification service returned status {status}")]
    Service { status: u16 },

    #[error("Notification service rejected the submission: {0}")]
    Rejected(String),
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        SubmissionError::Transport(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_number: Option<String>,
}

impl SubmissionReceipt {
    fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            confirmation_number: None,
        }
    }
}

/// Names of required fields that are blank.
fn missing(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing(&[
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("email", self.email.as_str()),
            ("subject", self.subject.as_str()),
            ("message", self.message.as_str()),
        ])
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExamBooking {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub exam_type: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub special_requirements: String,
}

impl ExamBooking {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing(&[
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("examType", self.exam_type.as_str()),
            ("preferredDate", self.preferred_date.as_str()),
            ("preferredTime", self.preferred_time.as_str()),
        ])
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InfoRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub interest: String,
    pub message: String,
}

impl InfoRequest {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        missing(&[
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("email", self.email.as_str()),
            ("interest", self.interest.as_str()),
        ])
    }
}

#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn send_contact_message(
        &self,
        msg: &ContactMessage,
    ) -> Result<SubmissionReceipt, SubmissionError>;

    async fn schedule_exam(
        &self,
        booking: &ExamBooking,
    ) -> Result<SubmissionReceipt, SubmissionError>;

    async fn request_info(&self, req: &InfoRequest) -> Result<SubmissionReceipt, SubmissionError>;
}

/// Opaque booking token, e.g. `EXAM-1F3A9C2B7D10`.
pub fn confirmation_number() -> String {
    let id = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("EXAM-{}", &id[..12])
}

/// Waits `delay`, logs the payload and answers with the canned receipts.
#[derive(Debug, Clone)]
pub struct StubSink {
    delay: Duration,
    fail: bool,
}

impl StubSink {
    pub fn new(delay: Duration) -> Self {
        Self { delay, fail: false }
    }

    /// Always fails with `Transport` after the delay.
    pub fn failing(delay: Duration) -> Self {
        Self { delay, fail: true }
    }

    async fn settle(&self) -> Result<(), SubmissionError> {
        tokio::time::sleep(self.delay).await;
        if self.fail {
            return Err(SubmissionError::Transport("stub sink configured to fail".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl NotificationSink for StubSink {
    async fn send_contact_message(
        &self,
        msg: &ContactMessage,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        self.settle().await?;
        tracing::info!(
            to = "info@theprospercenter.com",
            from = %msg.email,
            subject = %format!("Contact Form: {}", msg.subject),
            "email sent"
        );
        Ok(SubmissionReceipt::ok(CONTACT_SENT))
    }

    async fn schedule_exam(
        &self,
        booking: &ExamBooking,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        self.settle().await?;
        let confirmation = confirmation_number();
        tracing::info!(
            exam = %booking.exam_type,
            date = %booking.preferred_date,
            time = %booking.preferred_time,
            confirmation = %confirmation,
            "exam scheduled"
        );
        Ok(SubmissionReceipt {
            confirmation_number: Some(confirmation),
            ..SubmissionReceipt::ok(EXAM_SCHEDULED)
        })
    }

    async fn request_info(&self, req: &InfoRequest) -> Result<SubmissionReceipt, SubmissionError> {
        self.settle().await?;
        tracing::info!(interest = %req.interest, from = %req.email, "information request");
        Ok(SubmissionReceipt::ok(INFO_REQUESTED))
    }
}

/// Forwards submissions as JSON to a remote notification service.
#[derive(Debug, Clone)]
pub struct HttpSink {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSink {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    async fn post<T: Serialize + Sync>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        let url = format!("{}/{}", self.base_url, path);
        let resp = self.client.post(&url).json(body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "notification service error");
            return Err(SubmissionError::Service { status: status.as_u16() });
        }

        let receipt: SubmissionReceipt = resp.json().await?;
        if !receipt.success {
            return Err(SubmissionError::Rejected(receipt.message));
        }
        Ok(receipt)
    }
}

#[async_trait]
impl NotificationSink for HttpSink {
    async fn send_contact_message(
        &self,
        msg: &ContactMessage,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        self.post("contact", msg).await
    }

    async fn schedule_exam(
        &self,
        booking: &ExamBooking,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        self.post("schedule", booking).await
    }

    async fn request_info(&self, req: &InfoRequest) -> Result<SubmissionReceipt, SubmissionError> {
        self.post("info", req).await
    }
}
