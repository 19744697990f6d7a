use sqlx::{Error, SqlitePool};

pub async fn init_schema(pool: &SqlitePool) -> Result<(), Error> {
	sqlx::query(
		r"
        CREATE TABLE IF NOT EXISTS game_events (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            scheduled_date TEXT NOT NULL,
            start_at TEXT NOT NULL,
            end_at TEXT NOT NULL,
            owner TEXT,
            created_at TEXT NOT NULL
        )
        ",
	)
	.execute(pool)
	.await?;

	sqlx::query("CREATE INDEX IF NOT EXISTS idx_game_events_scheduled_date ON game_events(scheduled_date)")
		.execute(pool)
		.await?;

	Ok(())
}
