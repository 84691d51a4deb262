use database_traits::dao::GenericDao;
use events_commands::UpdateEventCommand;
use events_dao::EventDao;
use events_errors::EventError;
use events_responses::EventMutationResponse;
use sql_connection::SqlConnect;
use tracing::instrument;

use crate::validate::require_non_blank;

#[derive(Clone)]
pub struct UpdateEventHandler {
    event_dao: EventDao,
}

impl UpdateEventHandler {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            event_dao: EventDao::new(db),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, command: UpdateEventCommand,
    ) -> Result<EventMutationResponse, EventError> {
        if let Some(category) = &command.category {
            require_non_blank(category, "category")?;
        }
        if let Some(name) = &command.name {
            require_non_blank(name, "name")?;
        }
        if let Some(details) = &command.details {
            require_non_blank(details, "details")?;
        }
        if let Some(venue) = &command.venue {
            require_non_blank(venue, "venue")?;
        }

        let event =
            self.event_dao.update(command.event_id, command).await?;

        tracing::info!(event.id, "Event updated");

        let message = format!("{} was updated successfully", event.name);
        Ok(EventMutationResponse { event, message })
    }
}
