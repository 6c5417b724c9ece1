use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    error::AppError,
    message::{
        ChatRequest, ChatResponse, ContextResponse, SessionOpened, ThemeUpdate, Transcript,
    },
    services::session_manager::MessageRole,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    // Blank input is a no-op: nothing is classified or recorded.
    let Some(selection) = state.select_reply(&payload.message) else {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    };

    let session_id = match &payload.session_id {
        Some(s) if !s.trim().is_empty() => {
            if state.sessions.ensure_session(s).await {
                state
                    .sessions
                    .append_message(s, MessageRole::Assistant, state.selector.welcome())
                    .await;
            }
            s.clone()
        }
        _ => state.open_session().await,
    };

    state
        .sessions
        .append_message(&session_id, MessageRole::User, payload.message.trim())
        .await;
    state
        .sessions
        .append_message(&session_id, MessageRole::Assistant, selection.reply)
        .await;
    state.metrics.increment_topic(selection.topic).await;

    Ok(Json(ChatResponse {
        session_id,
        topic: selection.topic,
        reply: selection.reply.to_string(),
    }))
}

pub async fn open_session_handler(
    State(state): State<SharedState>,
) -> (StatusCode, Json<SessionOpened>) {
    let session_id = state.open_session().await;
    let theme = state
        .sessions
        .get_context(&session_id)
        .await
        .unwrap_or_default()
        .theme;

    (
        StatusCode::CREATED,
        Json(SessionOpened {
            session_id,
            theme,
            welcome: state.selector.welcome().to_string(),
        }),
    )
}

pub async fn history_handler(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Result<Json<Transcript>, AppError> {
    let messages = state
        .sessions
        .get_history(&session_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Unknown session: {session_id}")))?;

    Ok(Json(Transcript { session_id, messages }))
}

pub async fn theme_handler(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
    Json(update): Json<ThemeUpdate>,
) -> Result<Json<ContextResponse>, AppError> {
    let context = state
        .sessions
        .set_theme(&session_id, update.theme)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Unknown session: {session_id}")))?;

    Ok(Json(ContextResponse { session_id, context }))
}

pub async fn close_session_handler(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove_session(&session_id).await {
        tracing::debug!(%session_id, "session closed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Unknown session: {session_id}")))
    }
}
