use events_commands::CreateCommentCommand;
use events_errors::CommentError;
use events_models::Comment;
use events_responses::CommentResponse;
use sql_connection::SqlConnect;
use tokio_postgres::error::SqlState;
use tracing::instrument;

const COMMENT_COLUMNS: &str = "id, event_id, body, created_by, created_at";

/// Comments are append-only, so this exposes only insert and read paths
/// rather than the full [`GenericDao`] surface.
///
/// [`GenericDao`]: database_traits::dao::GenericDao
#[derive(Clone)]
pub struct CommentDao {
    db: SqlConnect,
}

impl CommentDao {
    pub fn new(db: SqlConnect) -> Self { Self { db } }

    fn map_row(&self, row: &tokio_postgres::Row) -> Comment {
        Comment {
            id: row.get(0),
            event_id: row.get(1),
            body: row.get(2),
            created_by: row.get(3),
            created_at: row.get(4),
        }
    }

    /// Inserts the comment. A missing event surfaces as the foreign key
    /// violation on `event_id`, so existence needs no separate query.
    #[instrument(skip(self))]
    pub async fn create(
        &self, req: CreateCommentCommand,
    ) -> Result<CommentResponse, CommentError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(&format!(
                "INSERT INTO comments (event_id, created_by, body) \
                 VALUES ($1, $2, $3) \
                 RETURNING {COMMENT_COLUMNS}"
            ))
            .await?;

        let row = client
            .query_one(&stmt, &[&req.event_id, &req.author_id, &req.body])
            .await
            .map_err(|err| {
                if err.code() == Some(&SqlState::FOREIGN_KEY_VIOLATION) {
                    CommentError::EventNotFound {
                        event_id: req.event_id,
                    }
                }
                else {
                    CommentError::Database(err)
                }
            })?;

        Ok(CommentResponse::from(self.map_row(&row)))
    }

    /// Comments for an event, oldest first.
    #[instrument(skip(self))]
    pub async fn find_by_event(
        &self, event_id: i64,
    ) -> Result<Vec<CommentResponse>, CommentError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(&format!(
                "SELECT {COMMENT_COLUMNS} FROM comments \
                 WHERE event_id = $1 \
                 ORDER BY created_at ASC, id ASC"
            ))
            .await?;
        let rows = client.query(&stmt, &[&event_id]).await?;

        Ok(rows
            .iter()
            .map(|row| CommentResponse::from(self.map_row(row)))
            .collect())
    }

    #[instrument(skip(self))]
    pub async fn count_for_event(
        &self, event_id: i64,
    ) -> Result<i64, CommentError> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare("SELECT COUNT(*) FROM comments WHERE event_id = $1")
            .await?;
        let row = client.query_one(&stmt, &[&event_id]).await?;
        Ok(row.get(0))
    }
}
