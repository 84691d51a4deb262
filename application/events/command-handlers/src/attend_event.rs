use database_traits::dao::GenericDao;
use events_commands::AttendEventCommand;
use events_dao::{AttendanceDao, EventDao};
use events_errors::EventError;
use events_responses::AttendEventResponse;
use sql_connection::SqlConnect;
use tracing::instrument;

#[derive(Clone)]
pub struct AttendEventHandler {
    event_dao: EventDao,
    attendance_dao: AttendanceDao,
}

impl AttendEventHandler {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            event_dao: EventDao::new(db.clone()),
            attendance_dao: AttendanceDao::new(db),
        }
    }

    /// Idempotent: any number of calls for the same (user, event) pair
    /// leaves exactly one membership row. The write itself is a single
    /// insert-if-absent statement; the event fetch up front gives the
    /// 404 and the name for the success message.
    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: AttendEventCommand,
    ) -> Result<AttendEventResponse, EventError> {
        let event = self.event_dao.find_by_id(command.event_id).await?;

        let newly_added = self
            .attendance_dao
            .add_attendee(command.event_id, command.user_id)
            .await?;

        let message = if newly_added {
            tracing::info!(
                event.id,
                user_id = %command.user_id,
                "Attendee registered"
            );
            format!("You are now attending {}", event.name)
        }
        else {
            "You are already attending before".to_string()
        };

        Ok(AttendEventResponse {
            event_id: event.id,
            already_attending: !newly_added,
            message,
        })
    }
}
