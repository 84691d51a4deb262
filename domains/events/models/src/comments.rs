use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use utoipa::ToSchema;
use uuid::Uuid;

/// A user-authored note on an event. Comments are append-only: there is
/// no edit or delete workflow.
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
pub struct Comment {
    #[builder(default)]
    pub id: i64,
    pub event_id: i64,
    pub body: String,
    pub created_by: Uuid,
    #[builder(default = Utc::now())]
    pub created_at: DateTime<Utc>,
}
