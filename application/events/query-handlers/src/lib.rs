pub mod get_event;
pub mod list_events;

pub use get_event::GetEventQueryHandler;
pub use list_events::ListEventsQueryHandler;
