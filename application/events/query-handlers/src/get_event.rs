use database_traits::dao::GenericDao;
use events_dao::{AttendanceDao, CommentDao, EventDao};
use events_errors::EventError;
use events_queries::GetEventQuery;
use events_responses::EventDetailResponse;
use sql_connection::SqlConnect;
use tracing::instrument;

#[derive(Clone)]
pub struct GetEventQueryHandler {
    event_dao: EventDao,
    comment_dao: CommentDao,
    attendance_dao: AttendanceDao,
}

impl GetEventQueryHandler {
    pub fn new(db: SqlConnect) -> Self {
        Self {
            event_dao: EventDao::new(db.clone()),
            comment_dao: CommentDao::new(db.clone()),
            attendance_dao: AttendanceDao::new(db),
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(
        &self, query: GetEventQuery,
    ) -> Result<EventDetailResponse, EventError> {
        let event = self.event_dao.find_by_id(query.event_id).await?;

        let comments =
            self.comment_dao.find_by_event(query.event_id).await?;

        let attendees =
            self.attendance_dao.attendees_for(query.event_id).await?;
        let attending = attendees.contains(&query.viewer);

        Ok(EventDetailResponse {
            event,
            comments,
            attendees,
            attending,
        })
    }
}
