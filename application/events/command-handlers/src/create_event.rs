use database_traits::dao::GenericDao;
use events_commands::CreateEventCommand;
use events_dao::EventDao;
use events_errors::EventError;
use events_responses::EventMutationResponse;
use sql_connection::SqlConnect;
use tracing::instrument;

use crate::validate::require_non_blank;

#[derive(Clone)]
pub struct CreateEventHandler {
    event_dao: EventDao,
}

impl CreateEventHandler {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            event_dao: EventDao::new(db),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: CreateEventCommand,
    ) -> Result<EventMutationResponse, EventError> {
        require_non_blank(&command.category, "category")?;
        require_non_blank(&command.name, "name")?;
        require_non_blank(&command.details, "details")?;
        require_non_blank(&command.venue, "venue")?;

        let event = self.event_dao.create(command).await?;

        tracing::info!(event.id, "Event created");

        let message = format!("{} was created successfully", event.name);
        Ok(EventMutationResponse { event, message })
    }
}
