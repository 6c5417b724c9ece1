use axum::{Json, extract::State};

use crate::{
    error::AppError,
    services::notifications::{
        ContactMessage, ExamBooking, InfoRequest, SubmissionError, SubmissionReceipt,
    },
    state::SharedState,
};

fn require(form: &str, missing: Vec<&'static str>) -> Result<(), AppError> {
    if missing.is_empty() {
        return Ok(());
    }
    Err(AppError::BadRequest(format!(
        "{form}: missing required fields: {}",
        missing.join(", ")
    )))
}

async fn finish(
    state: &SharedState,
    form: &str,
    result: Result<SubmissionReceipt, SubmissionError>,
) -> Result<Json<SubmissionReceipt>, AppError> {
    state.metrics.record_submission(form, result.is_ok()).await;
    let receipt = result?;
    tracing::info!(form = %form, "submission accepted");
    Ok(Json(receipt))
}

pub async fn contact_handler(
    State(state): State<SharedState>,
    Json(form): Json<ContactMessage>,
) -> Result<Json<SubmissionReceipt>, AppError> {
    require("contact", form.missing_fields())?;
    let result = state.sink.send_contact_message(&form).await;
    finish(&state, "contact", result).await
}

pub async fn schedule_handler(
    State(state): State<SharedState>,
    Json(form): Json<ExamBooking>,
) -> Result<Json<SubmissionReceipt>, AppError> {
    require("schedule", form.missing_fields())?;
    let result = state.sink.schedule_exam(&form).await;
    finish(&state, "schedule", result).await
}

pub async fn info_handler(
    State(state): State<SharedState>,
    Json(form): Json<InfoRequest>,
) -> Result<Json<SubmissionReceipt>, AppError> {
    require("info", form.missing_fields())?;
    let result = state.sink.request_info(&form).await;
    finish(&state, "info", result).await
}
