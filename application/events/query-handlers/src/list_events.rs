use dao_utils::PaginationParams;
use events_dao::EventDao;
use events_errors::EventError;
use events_queries::ListEventsQuery;
use events_responses::EventResponse;
use sql_connection::SqlConnect;
use tracing::instrument;

#[derive(Clone)]
pub struct ListEventsQueryHandler {
    event_dao: EventDao,
}

impl ListEventsQueryHandler {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            event_dao: EventDao::new(db),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: ListEventsQuery,
    ) -> Result<Vec<EventResponse>, EventError> {
        let pagination = PaginationParams::new(query.limit, query.offset);

        self.event_dao
            .find_with_filters(query.category.as_deref(), pagination)
            .await
    }
}
