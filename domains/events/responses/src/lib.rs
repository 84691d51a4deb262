use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub id: i64,
    pub category: String,
    pub name: String,
    pub details: String,
    pub venue: String,
    pub time: NaiveTime,
    pub date: NaiveDate,
    #[serde(rename = "creatorId")]
    pub creator_id: Uuid,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<events_models::Event> for EventResponse {
    fn from(event: events_models::Event) -> Self {
        Self {
            id: event.id,
            category: event.category,
            name: event.name,
            details: event.details,
            venue: event.venue,
            time: event.time,
            date: event.date,
            creator_id: event.creator_id,
            created_at: event.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub id: i64,
    #[serde(rename = "eventId")]
    pub event_id: i64,
    pub body: String,
    #[serde(rename = "createdBy")]
    pub created_by: Uuid,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<events_models::Comment> for CommentResponse {
    fn from(comment: events_models::Comment) -> Self {
        Self {
            id: comment.id,
            event_id: comment.event_id,
            body: comment.body,
            created_by: comment.created_by,
            created_at: comment.created_at,
        }
    }
}

/// Everything the detail page needs: the event, its comments, who is
/// attending, and whether the viewer is among them.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EventDetailResponse {
    pub event: EventResponse,
    pub comments: Vec<CommentResponse>,
    pub attendees: Vec<Uuid>,
    pub attending: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EventMutationResponse {
    pub event: EventResponse,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteEventResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateCommentResponse {
    pub comment: CommentResponse,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AttendEventResponse {
    #[serde(rename = "eventId")]
    pub event_id: i64,
    #[serde(rename = "alreadyAttending")]
    pub already_attending: bool,
    pub message: String,
}
