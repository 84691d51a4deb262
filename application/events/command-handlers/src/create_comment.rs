use events_commands::CreateCommentCommand;
use events_dao::CommentDao;
use events_errors::CommentError;
use events_responses::CreateCommentResponse;
use sql_connection::SqlConnect;
use tracing::instrument;

#[derive(Clone)]
pub struct CreateCommentHandler {
    comment_dao: CommentDao,
}

impl CreateCommentHandler {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            comment_dao: CommentDao::new(db),
        }
    }

    /// Validation happens before any statement is issued, so an invalid
    /// body never reaches the database.
    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: CreateCommentCommand,
    ) -> Result<CreateCommentResponse, CommentError> {
        if command.body.trim().is_empty() {
            return Err(CommentError::EmptyBody);
        }

        let comment = self.comment_dao.create(command).await?;

        tracing::info!(comment.id, comment.event_id, "Comment created");

        Ok(CreateCommentResponse {
            comment,
            message: "Comment was created successfully".to_string(),
        })
    }
}
