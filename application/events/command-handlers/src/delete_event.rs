use database_traits::dao::GenericDao;
use events_commands::DeleteEventCommand;
use events_dao::EventDao;
use events_errors::EventError;
use events_responses::DeleteEventResponse;
use sql_connection::SqlConnect;
use tracing::instrument;

#[derive(Clone)]
pub struct DeleteEventHandler {
    event_dao: EventDao,
}

impl DeleteEventHandler {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            event_dao: EventDao::new(db),
        }
    }

    /// Comments and attendance rows go with the event via FK cascade.
    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: DeleteEventCommand,
    ) -> Result<DeleteEventResponse, EventError> {
        // Fetch first: the success message names the event
        let event = self.event_dao.find_by_id(command.event_id).await?;

        self.event_dao.delete(command.event_id).await?;

        tracing::info!(event.id, "Event deleted");

        Ok(DeleteEventResponse {
            message: format!("{} was deleted successfully", event.name),
        })
    }
}
