use events_errors::EventError;
use sql_connection::SqlConnect;
use tokio_postgres::error::SqlState;
use tracing::instrument;
use uuid::Uuid;

/// Membership in an event's attendee set. The composite primary key on
/// `(event_id, user_id)` makes duplicates structurally impossible.
#[derive(Clone)]
pub struct AttendanceDao {
    db: SqlConnect,
}

impl AttendanceDao {
    pub fn new(db: SqlConnect) -> Self { Self { db } }

    /// Atomic insert-if-absent. Returns `true` when the row was newly
    /// inserted, `false` when the user was already attending. There is
    /// no check-then-act window: concurrent calls race on the primary
    /// key, and ON CONFLICT resolves the loser to a no-op.
    #[instrument(skip(self))]
    pub async fn add_attendee(
        &self, event_id: i64, user_id: Uuid,
    ) -> Result<bool, EventError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(
                "INSERT INTO event_attendees (event_id, user_id) \
                 VALUES ($1, $2) \
                 ON CONFLICT (event_id, user_id) DO NOTHING",
            )
            .await?;

        let affected = client
            .execute(&stmt, &[&event_id, &user_id])
            .await
            .map_err(|err| {
                if err.code() == Some(&SqlState::FOREIGN_KEY_VIOLATION) {
                    EventError::NotFound { event_id }
                }
                else {
                    EventError::Database(err)
                }
            })?;

        Ok(affected == 1)
    }

    #[instrument(skip(self))]
    pub async fn attendees_for(
        &self, event_id: i64,
    ) -> Result<Vec<Uuid>, EventError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(
                "SELECT user_id FROM event_attendees \
                 WHERE event_id = $1 \
                 ORDER BY added_at ASC, user_id ASC",
            )
            .await?;
        let rows = client.query(&stmt, &[&event_id]).await?;

        Ok(rows.iter().map(|row| row.get(0)).collect())
    }

    #[instrument(skip(self))]
    pub async fn is_attending(
        &self, event_id: i64, user_id: Uuid,
    ) -> Result<bool, EventError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(
                "SELECT EXISTS(SELECT 1 FROM event_attendees \
                 WHERE event_id = $1 AND user_id = $2)",
            )
            .await?;
        let row = client.query_one(&stmt, &[&event_id, &user_id]).await?;
        Ok(row.get(0))
    }

    #[instrument(skip(self))]
    pub async fn count_for_event(
        &self, event_id: i64,
    ) -> Result<i64, EventError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(
                "SELECT COUNT(*) FROM event_attendees WHERE event_id = $1",
            )
            .await?;
        let row = client.query_one(&stmt, &[&event_id]).await?;
        Ok(row.get(0))
    }
}
