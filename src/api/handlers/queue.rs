//! Queue endpoint handlers: admit, status, list, peek, call, clear.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{
    AdmitRequest, CallNextRequest, CallNextResponse, EntryDto, MessageResponse, NextResponse,
    StatusResponse, StudentDto,
};
use crate::api::extract::ApiJson;
use crate::app_state::AppState;
use crate::error::{BoardError, ErrorResponse};

/// `POST /api/queue/add` — Admit an examinee into the waiting queue.
///
/// # Errors
///
/// Returns [`BoardError::StoreUnavailable`] when the store cannot accept
/// the write.
#[utoipa::path(
    post,
    path = "/api/queue/add",
    tag = "Queue",
    summary = "Admit an examinee",
    description = "Appends a new waiting entry with the current sign-in time. Duplicate card numbers are allowed and represent re-entry.",
    request_body = AdmitRequest,
    responses(
        (status = 200, description = "Examinee admitted", body = MessageResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 500, description = "Queue store unavailable", body = ErrorResponse),
    )
)]
pub async fn admit(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AdmitRequest>,
) -> Result<impl IntoResponse, BoardError> {
    state.queue_service.admit(&req.id_card_number, &req.name).await?;
    Ok(Json(MessageResponse::new("examinee added to queue")))
}

/// `GET /api/queue/status` — Current examinee plus the waiting prefix.
#[utoipa::path(
    get,
    path = "/api/queue/status",
    tag = "Queue",
    summary = "Queue status for displays",
    description = "Returns the most recently called examinee's name and the oldest-first waiting list, truncated to 15 entries.",
    responses(
        (status = 200, description = "Status snapshot", body = StatusResponse),
    )
)]
pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    let status = state.queue_service.status().await;
    Json(StatusResponse::from(status))
}

/// `GET /api/queue/list` — Every entry, oldest sign-in first.
#[utoipa::path(
    get,
    path = "/api/queue/list",
    tag = "Queue",
    summary = "Full queue listing",
    description = "Returns every queue entry ordered by sign-in time ascending, with no truncation.",
    responses(
        (status = 200, description = "All entries", body = Vec<EntryDto>),
    )
)]
pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    let entries: Vec<EntryDto> = state
        .queue_service
        .list()
        .await
        .into_iter()
        .map(EntryDto::from)
        .collect();
    Json(entries)
}

/// `GET /api/queue/next` — The oldest waiting examinee, read-only.
#[utoipa::path(
    get,
    path = "/api/queue/next",
    tag = "Queue",
    summary = "Peek the next examinee",
    description = "Returns the oldest waiting examinee without mutating anything, or a null student when nobody is waiting.",
    responses(
        (status = 200, description = "Next examinee or null", body = NextResponse),
    )
)]
pub async fn peek_next(State(state): State<AppState>) -> impl IntoResponse {
    let student = state.queue_service.peek_next().await.map(StudentDto::from);
    Json(NextResponse { student })
}

/// `POST /api/queue/notify` — Call the oldest waiting examinee to a seat.
///
/// # Errors
///
/// Returns [`BoardError::RoomNotFound`] when no room matches the seat
/// label; the seat assignment is rolled back.
#[utoipa::path(
    post,
    path = "/api/queue/notify",
    tag = "Queue",
    summary = "Call the next examinee",
    description = "Atomically assigns the oldest waiting examinee to the given seat and updates that room's occupant. A missing room rolls the assignment back.",
    request_body = CallNextRequest,
    responses(
        (status = 200, description = "Examinee called, or nobody waiting", body = CallNextResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 404, description = "No room matches the seat", body = ErrorResponse),
    )
)]
pub async fn call_next(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CallNextRequest>,
) -> Result<impl IntoResponse, BoardError> {
    let response = match state.queue_service.call_next(&req.seat_number).await? {
        Some(called) => CallNextResponse {
            message: format!("examinee called to seat {}", req.seat_number),
            student: Some(StudentDto::from(called)),
        },
        None => CallNextResponse {
            message: "no one waiting".to_string(),
            student: None,
        },
    };
    Ok(Json(response))
}

/// `POST /api/queue/clear` — Remove every entry and reset the sequence.
#[utoipa::path(
    post,
    path = "/api/queue/clear",
    tag = "Queue",
    summary = "Clear the queue",
    description = "Irreversibly removes every queue entry and resets the id sequence to 1. Rooms are untouched.",
    responses(
        (status = 200, description = "Queue cleared", body = MessageResponse),
    )
)]
pub async fn clear(State(state): State<AppState>) -> impl IntoResponse {
    state.queue_service.clear_all().await;
    Json(MessageResponse::new("queue cleared, sequence reset"))
}

/// Queue routes, mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/queue/add", post(admit))
        .route("/queue/status", get(status))
        .route("/queue/list", get(list))
        .route("/queue/next", get(peek_next))
        .route("/queue/notify", post(call_next))
        .route("/queue/clear", post(clear))
}
