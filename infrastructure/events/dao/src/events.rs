use async_trait::async_trait;
use dao_utils::{PaginationParams, PgParamVec, query_helpers};
use database_traits::dao::GenericDao;
use events_commands::{CreateEventCommand, UpdateEventCommand};
use events_errors::EventError;
use events_models::Event;
use events_responses::EventResponse;
use sql_connection::SqlConnect;
use tracing::instrument;

const EVENT_COLUMNS: &str =
    "id, category, name, details, venue, time, date, creator_id, created_at";

#[derive(Clone)]
pub struct EventDao {
    db: SqlConnect,
}

impl EventDao {
    pub fn new(db: SqlConnect) -> Self { Self { db } }

    fn map_row_to_response(&self, row: &tokio_postgres::Row) -> EventResponse {
        EventResponse::from(self.map_row(row))
    }
}

#[async_trait]
impl GenericDao for EventDao {
    type CreateRequest = CreateEventCommand;
    type Error = EventError;
    type ID = i64;
    type Model = Event;
    type Response = EventResponse;
    type UpdateRequest = UpdateEventCommand;

    async fn find_by_id(
        &self, id: Self::ID,
    ) -> Result<Self::Response, Self::Error> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(&format!(
                "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
            ))
            .await?;
        let rows = client.query(&stmt, &[&id]).await?;

        query_helpers::first_row_or_not_found(
            &rows,
            |row| self.map_row_to_response(row),
            EventError::NotFound { event_id: id },
        )
    }

    async fn all(&self) -> Result<Vec<Self::Response>, Self::Error> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(&format!(
                "SELECT {EVENT_COLUMNS} FROM events \
                 ORDER BY date DESC, time DESC, id DESC"
            ))
            .await?;
        let rows = client.query(&stmt, &[]).await?;

        Ok(rows.iter().map(|row| self.map_row_to_response(row)).collect())
    }

    async fn create(
        &self, req: Self::CreateRequest,
    ) -> Result<Self::Response, Self::Error> {
        let client = self.db.get_client().await?;
        let stmt = client
            .prepare(&format!(
                "INSERT INTO events \
                 (category, name, details, venue, time, date, creator_id) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7) \
                 RETURNING {EVENT_COLUMNS}"
            ))
            .await?;

        let row = client
            .query_one(
                &stmt,
                &[
                    &req.category,
                    &req.name,
                    &req.details,
                    &req.venue,
                    &req.time,
                    &req.date,
                    &req.creator_id,
                ],
            )
            .await?;

        Ok(self.map_row_to_response(&row))
    }

    async fn update(
        &self, id: Self::ID, req: Self::UpdateRequest,
    ) -> Result<Self::Response, Self::Error> {
        let client = self.db.get_client().await?;

        // COALESCE keeps unsupplied fields; one statement, no read-back
        let stmt = client
            .prepare(&format!(
                "UPDATE events SET \
                 category = COALESCE($2, category), \
                 name = COALESCE($3, name), \
                 details = COALESCE($4, details), \
                 venue = COALESCE($5, venue), \
                 time = COALESCE($6, time), \
                 date = COALESCE($7, date) \
                 WHERE id = $1 \
                 RETURNING {EVENT_COLUMNS}"
            ))
            .await?;

        let rows = client
            .query(
                &stmt,
                &[
                    &id,
                    &req.category,
                    &req.name,
                    &req.details,
                    &req.venue,
                    &req.time,
                    &req.date,
                ],
            )
            .await?;

        query_helpers::first_row_or_not_found(
            &rows,
            |row| self.map_row_to_response(row),
            EventError::NotFound { event_id: id },
        )
    }

    async fn delete(&self, id: Self::ID) -> Result<(), Self::Error> {
        let client = self.db.get_client().await?;
        let stmt =
            client.prepare("DELETE FROM events WHERE id = $1").await?;
        let affected = client.execute(&stmt, &[&id]).await?;

        if affected == 0 {
            return Err(EventError::NotFound { event_id: id });
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, Self::Error> {
        let client = self.db.get_client().await?;
        let stmt = client.prepare("SELECT COUNT(*) FROM events").await?;
        let row = client.query_one(&stmt, &[]).await?;
        Ok(row.get(0))
    }

    fn map_row(&self, row: &tokio_postgres::Row) -> Self::Model {
        Event {
            id: row.get(0),
            category: row.get(1),
            name: row.get(2),
            details: row.get(3),
            venue: row.get(4),
            time: row.get(5),
            date: row.get(6),
            creator_id: row.get(7),
            created_at: row.get(8),
        }
    }
}

impl EventDao {
    #[instrument(skip_all)]
    pub async fn find_with_filters(
        &self, category: Option<&str>, pagination: PaginationParams,
    ) -> Result<Vec<EventResponse>, EventError> {
        let client = self.db.get_client().await?;

        let mut params: PgParamVec = Vec::new();
        let base_query = if let Some(category) = category {
            params.push(Box::new(category.to_owned()));
            format!(
                "SELECT {EVENT_COLUMNS} FROM events WHERE category = $1"
            )
        }
        else {
            format!("SELECT {EVENT_COLUMNS} FROM events")
        };

        let (query, page_params) = pagination.build_query_with_existing_params(
            &base_query,
            "ORDER BY date DESC, time DESC, id DESC",
            params.len(),
        );
        for p in page_params {
            params.push(Box::new(p));
        }

        let stmt = client.prepare(&query).await?;
        let param_refs = query_helpers::param_refs(&params);
        let rows = client.query(&stmt, &param_refs).await?;

        Ok(rows.iter().map(|row| self.map_row_to_response(row)).collect())
    }
}
