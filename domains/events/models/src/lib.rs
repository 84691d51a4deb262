pub mod comments;
pub mod events;

pub use comments::Comment;
pub use events::Event;
