use serde::Deserialize;
use uuid::Uuid;

/// Detail view: the event plus its comments and attendee set, with the
/// attendance flag computed for `viewer`.
#[derive(Debug, Deserialize)]
pub struct GetEventQuery {
    pub event_id: i64,
    pub viewer: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct ListEventsQuery {
    pub category: Option<String>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}
