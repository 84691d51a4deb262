use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// The creator is the authenticated caller, never client-supplied.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateEventCommand {
    #[serde(skip)]
    pub creator_id: Uuid,
    pub category: String,
    pub name: String,
    pub details: String,
    pub venue: String,
    pub time: NaiveTime,
    pub date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateEventCommand {
    #[serde(skip)]
    pub event_id: i64,
    pub category: Option<String>,
    pub name: Option<String>,
    pub details: Option<String>,
    pub venue: Option<String>,
    pub time: Option<NaiveTime>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteEventCommand {
    pub event_id: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateCommentCommand {
    #[serde(skip)]
    pub event_id: i64,
    #[serde(skip)]
    pub author_id: Uuid,
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AttendEventCommand {
    pub event_id: i64,
    pub user_id: Uuid,
}
