pub mod attendance;
pub mod comments;
pub mod events;

pub use attendance::AttendanceDao;
pub use comments::CommentDao;
pub use events::EventDao;
