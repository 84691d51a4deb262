use anyhow::Result;
use sql_connection::SqlConnect;
use uuid::Uuid;

use crate::TestPostgresContainer;

/// Create a SQL connection from a test container for use with DAOs and
/// handlers
pub fn create_sql_connect(container: &TestPostgresContainer) -> SqlConnect {
    SqlConnect::new(container.pool.clone())
}

/// A user id as the external authentication collaborator would mint it.
/// Users have no table here, so this is all a test needs.
pub fn test_user_id() -> Uuid { Uuid::now_v7() }

/// Insert an event row directly and return its generated id
pub async fn insert_test_event(
    container: &TestPostgresContainer, creator_id: Uuid, name: &str,
) -> Result<i64> {
    let query = format!(
        "INSERT INTO events \
         (category, name, details, venue, time, date, creator_id) \
         VALUES ('meetup', '{}', 'An evening of talks', 'Main Hall', \
         '18:30', '2026-09-12', '{}') RETURNING id",
        name, creator_id
    );
    let row = container.query_one(&query).await?;
    Ok(row.get(0))
}

/// Insert a comment row directly and return its generated id
pub async fn insert_test_comment(
    container: &TestPostgresContainer, event_id: i64, author_id: Uuid,
    body: &str,
) -> Result<i64> {
    let query = format!(
        "INSERT INTO comments (event_id, created_by, body) \
         VALUES ({}, '{}', '{}') RETURNING id",
        event_id, author_id, body
    );
    let row = container.query_one(&query).await?;
    Ok(row.get(0))
}

/// Register a user in an event's attendee set directly
pub async fn insert_test_attendee(
    container: &TestPostgresContainer, event_id: i64, user_id: Uuid,
) -> Result<()> {
    let query = format!(
        "INSERT INTO event_attendees (event_id, user_id) \
         VALUES ({}, '{}')",
        event_id, user_id
    );
    container.execute_sql(&query).await?;
    Ok(())
}

/// Count attendee rows for an event
pub async fn count_attendees(
    container: &TestPostgresContainer, event_id: i64,
) -> Result<i64> {
    let row = container
        .query_one(&format!(
            "SELECT COUNT(*) FROM event_attendees WHERE event_id = {}",
            event_id
        ))
        .await?;
    Ok(row.get(0))
}

/// Count comment rows for an event
pub async fn count_comments(
    container: &TestPostgresContainer, event_id: i64,
) -> Result<i64> {
    let row = container
        .query_one(&format!(
            "SELECT COUNT(*) FROM comments WHERE event_id = {}",
            event_id
        ))
        .await?;
    Ok(row.get(0))
}

/// Clean all test data from the database (useful for cleanup between
/// tests if needed)
pub async fn clean_test_data(
    container: &TestPostgresContainer,
) -> Result<()> {
    // Clean in dependency order
    container.execute_sql("DELETE FROM event_attendees").await?;
    container.execute_sql("DELETE FROM comments").await?;
    container.execute_sql("DELETE FROM events").await?;
    Ok(())
}
