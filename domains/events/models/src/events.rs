use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use utoipa::ToSchema;
use uuid::Uuid;

/// A scheduled happening: what, where, when, and who created it.
/// Attendees live in the `event_attendees` association table, keyed by
/// `(event_id, user_id)` so a user can appear at most once per event.
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    TypedBuilder,
    ToSchema,
)]
pub struct Event {
    #[builder(default)]
    pub id: i64,
    pub category: String,
    pub name: String,
    pub details: String,
    pub venue: String,
    pub time: NaiveTime,
    pub date: NaiveDate,
    pub creator_id: Uuid,
    #[builder(default = Utc::now())]
    pub created_at: DateTime<Utc>,
}
