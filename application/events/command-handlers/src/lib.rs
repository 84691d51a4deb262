pub mod attend_event;
pub mod create_comment;
pub mod create_event;
pub mod delete_event;
pub mod update_event;
mod validate;

pub use attend_event::AttendEventHandler;
pub use create_comment::CreateCommentHandler;
pub use create_event::CreateEventHandler;
pub use delete_event::DeleteEventHandler;
pub use update_event::UpdateEventHandler;
