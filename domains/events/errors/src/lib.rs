use common_errors::AppError;
use sql_connection::{PgError, PoolError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("Event not found: {event_id}")]
    NotFound { event_id: i64 },
    #[error("{field} must not be blank")]
    Validation { field: &'static str },
    #[error("Comment error: {0}")]
    Comment(#[from] CommentError),
    #[error("Database error: {0}")]
    Database(#[from] PgError),
    #[error("Connection error: {0}")]
    Connection(#[from] PoolError),
}

#[derive(Debug, Error)]
pub enum CommentError {
    #[error("comment body must not be blank")]
    EmptyBody,
    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },
    #[error("Database error: {0}")]
    Database(#[from] PgError),
    #[error("Connection error: {0}")]
    Connection(#[from] PoolError),
}

impl From<EventError> for AppError {
    fn from(err: EventError) -> Self {
        match err {
            EventError::NotFound { event_id } => {
                AppError::not_found(
                    "EVENT_NOT_FOUND",
                    &format!("Event with ID {event_id} not found"),
                )
            }
            EventError::Validation { field } => {
                AppError::unprocessable_entity_with_details(
                    "VALIDATION_ERROR",
                    &format!("{field} must not be blank"),
                    field,
                )
            }
            EventError::Comment(err) => err.into(),
            EventError::Database(db_err) => {
                AppError::internal_server_error(&format!(
                    "Database error: {db_err}"
                ))
            }
            EventError::Connection(pool_err) => {
                AppError::internal_server_error(&format!(
                    "Database connection error: {pool_err}"
                ))
            }
        }
    }
}

impl From<CommentError> for AppError {
    fn from(err: CommentError) -> Self {
        match err {
            CommentError::EmptyBody => {
                AppError::unprocessable_entity_with_details(
                    "VALIDATION_ERROR",
                    "comment body must not be blank",
                    "body",
                )
            }
            CommentError::EventNotFound { event_id } => {
                AppError::not_found(
                    "EVENT_NOT_FOUND",
                    &format!("Event with ID {event_id} not found"),
                )
            }
            CommentError::Database(db_err) => {
                AppError::internal_server_error(&format!(
                    "Database error: {db_err}"
                ))
            }
            CommentError::Connection(pool_err) => {
                AppError::internal_server_error(&format!(
                    "Database connection error: {pool_err}"
                ))
            }
        }
    }
}
