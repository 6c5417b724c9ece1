use std::time::{Duration, Instant};

use axum::{Json, Router, http::StatusCode, routing::post};
use prosper_center::services::notifications::{
    CONTACT_SENT, ContactMessage, EXAM_SCHEDULED, ExamBooking, HttpSink, INFO_REQUESTED,
    InfoRequest, NotificationSink, StubSink, SubmissionError, SubmissionReceipt,
};
use serde_json::{Value, json};

fn booking() -> ExamBooking {
    ExamBooking {
        first_name: "John".into(),
        last_name: "Doe".into(),
        email: "john@example.com".into(),
        phone: "(555) 123-4567".into(),
        exam_type: "Series 7".into(),
        preferred_date: "2026-11-02".into(),
        preferred_time: "9:00 AM".into(),
        special_requirements: String::new(),
    }
}

fn contact() -> ContactMessage {
    ContactMessage {
        first_name: "John".into(),
        last_name: "Doe".into(),
        email: "john@example.com".into(),
        subject: "General Inquiry".into(),
        message: "Do you have parking?".into(),
    }
}

/// Spawns a fake notification service on an ephemeral port.
async fn spawn_service(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_stub_waits_and_answers() {
    let sink = StubSink::new(Duration::from_millis(30));

    let started = Instant::now();
    let receipt = sink.send_contact_message(&contact()).await.unwrap();
    assert!(started.elapsed() >= Duration::from_millis(30));
    assert!(receipt.success);
    assert_eq!(receipt.message, CONTACT_SENT);
    assert!(receipt.confirmation_number.is_none());

    let receipt = sink.request_info(&InfoRequest::default()).await.unwrap();
    assert_eq!(receipt.message, INFO_REQUESTED);
}

#[tokio::test]
async fn test_stub_schedule_returns_unique_confirmation() {
    let sink = StubSink::new(Duration::ZERO);
    let a = sink.schedule_exam(&booking()).await.unwrap();
    let b = sink.schedule_exam(&booking()).await.unwrap();

    assert_eq!(a.message, EXAM_SCHEDULED);
    let (a, b) = (a.confirmation_number.unwrap(), b.confirmation_number.unwrap());
    assert!(a.starts_with("EXAM-"));
    assert_ne!(a, b);
}

#[tokio::test]
async fn test_failing_stub_reports_transport_error() {
    let sink = StubSink::failing(Duration::ZERO);
    let err = sink.schedule_exam(&booking()).await.unwrap_err();
    assert!(matches!(err, SubmissionError::Transport(_)));
}

#[tokio::test]
async fn test_http_sink_posts_camel_case_payload() {
    let app = Router::new().route(
        "/schedule",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["examType"], "Series 7");
            assert_eq!(body["preferredTime"], "9:00 AM");
            Json(json!({
                "success": true,
                "message": "booked",
                "confirmationNumber": "EXAM-REMOTE1"
            }))
        }),
    );
    let base = spawn_service(app).await;

    let sink = HttpSink::new(format!("{base}/"));
    let receipt = sink.schedule_exam(&booking()).await.unwrap();
    assert_eq!(
        receipt,
        SubmissionReceipt {
            success: true,
            message: "booked".into(),
            confirmation_number: Some("EXAM-REMOTE1".into()),
        }
    );
}

#[tokio::test]
async fn test_http_sink_maps_failures() {
    let app = Router::new()
        .route("/contact", post(|| async { StatusCode::SERVICE_UNAVAILABLE }))
        .route(
            "/info",
            post(|| async { Json(json!({ "success": false, "message": "mailbox full" })) }),
        );
    let base = spawn_service(app).await;
    let sink = HttpSink::new(base);

    let err = sink.send_contact_message(&contact()).await.unwrap_err();
    assert!(matches!(err, SubmissionError::Service { status: 503 }));

    let err = sink.request_info(&InfoRequest::default()).await.unwrap_err();
    assert!(matches!(err, SubmissionError::Rejected(msg) if msg == "mailbox full"));
}

#[tokio::test]
async fn test_http_sink_unreachable_is_transport_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let sink = HttpSink::new(format!("http://{addr}"));
    let err = sink.send_contact_message(&contact()).await.unwrap_err();
    assert!(matches!(err, SubmissionError::Transport(_)));
}
