use anyhow::{Context, Result};
use deadpool_postgres::Pool;
use tracing::debug;

/// The event store schema. Shipped here rather than as standalone
/// migration files: production schema management is owned by the
/// deployment pipeline, tests only need a schema that matches it.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS events (
    id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
    category TEXT NOT NULL,
    name TEXT NOT NULL,
    details TEXT NOT NULL,
    venue TEXT NOT NULL,
    time TIME NOT NULL,
    date DATE NOT NULL,
    creator_id UUID NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS comments (
    id BIGINT GENERATED ALWAYS AS IDENTITY PRIMARY KEY,
    event_id BIGINT NOT NULL
        REFERENCES events (id) ON DELETE CASCADE,
    body TEXT NOT NULL,
    created_by UUID NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS event_attendees (
    event_id BIGINT NOT NULL
        REFERENCES events (id) ON DELETE CASCADE,
    user_id UUID NOT NULL,
    added_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    PRIMARY KEY (event_id, user_id)
);

CREATE INDEX IF NOT EXISTS idx_comments_event_id
    ON comments (event_id);
CREATE INDEX IF NOT EXISTS idx_events_category
    ON events (category);
CREATE INDEX IF NOT EXISTS idx_events_date
    ON events (date DESC);
"#;

pub struct SqlMigrator {
    pool: Pool,
}

impl SqlMigrator {
    pub fn new(pool: Pool) -> Self { Self { pool } }

    pub async fn run_all_migrations(&self) -> Result<()> {
        debug!("Applying event store schema");
        let client = self
            .pool
            .get()
            .await
            .context("Failed to get connection for migrations")?;
        client
            .batch_execute(SCHEMA)
            .await
            .context("Failed to apply schema")?;
        Ok(())
    }
}
