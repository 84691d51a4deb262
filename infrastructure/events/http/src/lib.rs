pub mod auth;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
};
use common_errors::AppError;
use events_command_handlers::{
    AttendEventHandler, CreateCommentHandler, CreateEventHandler,
    DeleteEventHandler, UpdateEventHandler,
};
use events_commands::{
    AttendEventCommand, CreateCommentCommand, CreateEventCommand,
    DeleteEventCommand, UpdateEventCommand,
};
use events_queries::{GetEventQuery, ListEventsQuery};
use events_query_handlers::{GetEventQueryHandler, ListEventsQueryHandler};
use events_responses::{
    AttendEventResponse, CreateCommentResponse, DeleteEventResponse,
    EventDetailResponse, EventMutationResponse, EventResponse,
};
use serde::Deserialize;
use sql_connection::SqlConnect;
use tracing::instrument;
use utoipa::{IntoParams, ToSchema};

pub use crate::auth::CurrentUser;

#[derive(Clone)]
pub struct EventServices {
    pub create_event: CreateEventHandler,
    pub update_event: UpdateEventHandler,
    pub delete_event: DeleteEventHandler,
    pub create_comment: CreateCommentHandler,
    pub attend_event: AttendEventHandler,

    pub get_event: GetEventQueryHandler,
    pub list_events: ListEventsQueryHandler,
}

impl EventServices {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            create_event: CreateEventHandler::new(db.clone()),
            update_event: UpdateEventHandler::new(db.clone()),
            delete_event: DeleteEventHandler::new(db.clone()),
            create_comment: CreateCommentHandler::new(db.clone()),
            attend_event: AttendEventHandler::new(db.clone()),
            get_event: GetEventQueryHandler::new(db.clone()),
            list_events: ListEventsQueryHandler::new(db),
        }
    }
}

pub struct EventHandlers;

impl EventHandlers {
    pub fn routes() -> Router<EventServices> {
        Router::new()
            .route("/events", get(list_events))
            .route("/event", post(create_event))
            .route("/event/{id}", get(get_event))
            .route("/event/{id}", put(update_event))
            .route("/event/{id}", delete(delete_event))
            .route("/event/{id}/comments", post(create_comment))
            .route("/event/{id}/attend", post(attend_event))
    }
}

#[derive(Debug, Deserialize, ToSchema, IntoParams)]
pub struct ListEventsParams {
    pub category: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    pub page: Option<u64>,
}

#[utoipa::path(
    get,
    path = "/events",
    params(
        ListEventsParams
    ),
    responses(
        (status = 200, description = "List of events, newest first", body = Vec<EventResponse>),
        (status = 401, description = "Missing or invalid identity", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn list_events(
    State(services): State<EventServices>, _user: CurrentUser,
    Query(params): Query<ListEventsParams>,
) -> Result<Json<Vec<EventResponse>>, AppError> {
    let limit = params.limit.unwrap_or(100).min(1000);
    let offset = params
        .offset
        .or_else(|| {
            params.page.map(|p| if p > 0 { (p - 1) * limit } else { 0 })
        })
        .unwrap_or(0);

    let query = ListEventsQuery {
        category: params.category,
        limit: Some(limit),
        offset: Some(offset),
    };
    let events = services.list_events.execute(query).await?;
    Ok(Json(events))
}

#[utoipa::path(
    post,
    path = "/event",
    request_body = CreateEventCommand,
    responses(
        (status = 201, description = "Event created successfully", body = EventMutationResponse),
        (status = 401, description = "Missing or invalid identity", body = common_errors::ApiErrorResponse),
        (status = 422, description = "Validation error", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn create_event(
    State(services): State<EventServices>, user: CurrentUser,
    Json(mut command): Json<CreateEventCommand>,
) -> Result<(StatusCode, Json<EventMutationResponse>), AppError> {
    command.creator_id = user.0;
    let result = services.create_event.execute(command).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

#[utoipa::path(
    get,
    path = "/event/{id}",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event detail with comments and attendance", body = EventDetailResponse),
        (status = 401, description = "Missing or invalid identity", body = common_errors::ApiErrorResponse),
        (status = 404, description = "Event not found", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn get_event(
    State(services): State<EventServices>, user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<EventDetailResponse>, AppError> {
    let query = GetEventQuery {
        event_id: id,
        viewer: user.0,
    };
    let detail = services.get_event.execute(query).await?;
    Ok(Json(detail))
}

#[utoipa::path(
    put,
    path = "/event/{id}",
    request_body = UpdateEventCommand,
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event updated successfully", body = EventMutationResponse),
        (status = 401, description = "Missing or invalid identity", body = common_errors::ApiErrorResponse),
        (status = 404, description = "Event not found", body = common_errors::ApiErrorResponse),
        (status = 422, description = "Validation error", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn update_event(
    State(services): State<EventServices>, _user: CurrentUser,
    Path(id): Path<i64>, Json(mut command): Json<UpdateEventCommand>,
) -> Result<Json<EventMutationResponse>, AppError> {
    command.event_id = id;
    let result = services.update_event.execute(command).await?;
    Ok(Json(result))
}

#[utoipa::path(
    delete,
    path = "/event/{id}",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event deleted successfully", body = DeleteEventResponse),
        (status = 401, description = "Missing or invalid identity", body = common_errors::ApiErrorResponse),
        (status = 404, description = "Event not found", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn delete_event(
    State(services): State<EventServices>, _user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<DeleteEventResponse>, AppError> {
    let command = DeleteEventCommand { event_id: id };
    let result = services.delete_event.execute(command).await?;
    Ok(Json(result))
}

#[utoipa::path(
    post,
    path = "/event/{id}/comments",
    request_body = CreateCommentCommand,
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 201, description = "Comment created successfully", body = CreateCommentResponse),
        (status = 401, description = "Missing or invalid identity", body = common_errors::ApiErrorResponse),
        (status = 404, description = "Event not found", body = common_errors::ApiErrorResponse),
        (status = 422, description = "Validation error", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "comments"
)]
#[instrument(skip_all)]
pub async fn create_comment(
    State(services): State<EventServices>, user: CurrentUser,
    Path(id): Path<i64>, Json(mut command): Json<CreateCommentCommand>,
) -> Result<(StatusCode, Json<CreateCommentResponse>), AppError> {
    command.event_id = id;
    command.author_id = user.0;
    let result = services.create_comment.execute(command).await?;
    Ok((StatusCode::CREATED, Json(result)))
}

#[utoipa::path(
    post,
    path = "/event/{id}/attend",
    params(
        ("id" = i64, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Attendance registered (idempotent)", body = AttendEventResponse),
        (status = 401, description = "Missing or invalid identity", body = common_errors::ApiErrorResponse),
        (status = 404, description = "Event not found", body = common_errors::ApiErrorResponse),
        (status = 500, description = "Internal server error", body = common_errors::ApiErrorResponse)
    ),
    tag = "events"
)]
#[instrument(skip_all)]
pub async fn attend_event(
    State(services): State<EventServices>, user: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<AttendEventResponse>, AppError> {
    let command = AttendEventCommand {
        event_id: id,
        user_id: user.0,
    };
    let result = services.attend_event.execute(command).await?;
    Ok(Json(result))
}
