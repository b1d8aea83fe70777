//! Room endpoint handlers: add, list, batch delete.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{AddRoomRequest, DeleteRoomsRequest, MessageResponse, RoomDto};
use crate::api::extract::ApiJson;
use crate::app_state::AppState;
use crate::error::{BoardError, ErrorResponse};

/// `POST /api/exam_rooms/add` — Add a room.
///
/// # Errors
///
/// Returns [`BoardError::DuplicateRoom`] if the label already exists.
#[utoipa::path(
    post,
    path = "/api/exam_rooms/add",
    tag = "Rooms",
    summary = "Add an exam room",
    description = "Creates a room with the given unique label and no occupant. Labels are matched case-sensitively.",
    request_body = AddRoomRequest,
    responses(
        (status = 200, description = "Room added", body = MessageResponse),
        (status = 400, description = "Duplicate label or malformed body", body = ErrorResponse),
    )
)]
pub async fn add_room(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<AddRoomRequest>,
) -> Result<impl IntoResponse, BoardError> {
    state.room_service.add_room(&req.room_info).await?;
    Ok(Json(MessageResponse::new("room added")))
}

/// `GET /api/exam_rooms` — List all rooms with their occupants.
#[utoipa::path(
    get,
    path = "/api/exam_rooms",
    tag = "Rooms",
    summary = "List exam rooms",
    description = "Returns every room in insertion order together with its current occupant projection.",
    responses(
        (status = 200, description = "All rooms", body = Vec<RoomDto>),
    )
)]
pub async fn list_rooms(State(state): State<AppState>) -> impl IntoResponse {
    let rooms: Vec<RoomDto> = state
        .room_service
        .list_rooms()
        .await
        .into_iter()
        .map(RoomDto::from)
        .collect();
    Json(rooms)
}

/// `POST /api/exam_rooms/delete` — Delete rooms in one batch.
///
/// # Errors
///
/// Returns [`BoardError::EmptySelection`] if no rooms were selected.
#[utoipa::path(
    post,
    path = "/api/exam_rooms/delete",
    tag = "Rooms",
    summary = "Delete exam rooms",
    description = "Deletes every listed room in one batch. Unknown labels are silently ignored; an empty selection is rejected.",
    request_body = DeleteRoomsRequest,
    responses(
        (status = 200, description = "Rooms deleted", body = MessageResponse),
        (status = 400, description = "Empty selection or malformed body", body = ErrorResponse),
    )
)]
pub async fn delete_rooms(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<DeleteRoomsRequest>,
) -> Result<impl IntoResponse, BoardError> {
    state.room_service.delete_rooms(&req.rooms).await?;
    Ok(Json(MessageResponse::new("rooms deleted")))
}

/// Room routes, mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/exam_rooms/add", post(add_room))
        .route("/exam_rooms", get(list_rooms))
        .route("/exam_rooms/delete", post(delete_rooms))
}
