use crate::core::error::{GameStoreError, Result};
use crate::core::model::{GameEvent, GameEventDraft};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::SqlitePool;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, sqlx::FromRow)]
pub struct GameEventRow {
	pub id: String,
	pub name: String,
	pub scheduled_date: String,
	pub start_at: String,
	pub end_at: String,
	pub owner: Option<String>,
	pub created_at: String,
}

impl TryFrom<GameEventRow> for GameEvent {
	type Error = GameStoreError;

	fn try_from(row: GameEventRow) -> Result<Self> {
		let scheduled_date = NaiveDate::parse_from_str(&row.scheduled_date, DATE_FORMAT)
			.map_err(|e| GameStoreError::RemoteUnavailable(format!("corrupt row {}: bad date: {e}", row.id)))?;
		let created_at = DateTime::parse_from_rfc3339(&row.created_at)
			.map(|ts| ts.with_timezone(&Utc))
			.map_err(|e| GameStoreError::RemoteUnavailable(format!("corrupt row {}: bad timestamp: {e}", row.id)))?;

		Ok(Self {
			id: row.id,
			name: row.name,
			scheduled_date,
			start: row.start_at.parse()?,
			end: row.end_at.parse()?,
			owner: row.owner,
			created_at,
		})
	}
}

pub async fn fetch_events(pool: &SqlitePool, date_filter: Option<NaiveDate>) -> Result<Vec<GameEvent>> {
	// "HH:MM:SS" strings compare lexicographically in time order
	let rows: Vec<GameEventRow> = match date_filter {
		Some(date) => {
			sqlx::query_as("SELECT id, name, scheduled_date, start_at, end_at, owner, created_at FROM game_events WHERE scheduled_date = ? ORDER BY scheduled_date ASC, start_at ASC")
				.bind(date.format(DATE_FORMAT).to_string())
				.fetch_all(pool)
				.await?
		}
		None => {
			sqlx::query_as("SELECT id, name, scheduled_date, start_at, end_at, owner, created_at FROM game_events ORDER BY scheduled_date ASC, start_at ASC")
				.fetch_all(pool)
				.await?
		}
	};

	rows.into_iter().map(GameEvent::try_from).collect()
}

pub async fn fetch_event(pool: &SqlitePool, id: &str) -> Result<Option<GameEvent>> {
	let row: Option<GameEventRow> = sqlx::query_as("SELECT id, name, scheduled_date, start_at, end_at, owner, created_at FROM game_events WHERE id = ?")
		.bind(id)
		.fetch_optional(pool)
		.await?;

	row.map(GameEvent::try_from).transpose()
}

pub async fn insert_event(pool: &SqlitePool, event: &GameEvent) -> Result<()> {
	sqlx::query("INSERT INTO game_events (id, name, scheduled_date, start_at, end_at, owner, created_at) VALUES (?, ?, ?, ?, ?, ?, ?)")
		.bind(&event.id)
		.bind(&event.name)
		.bind(event.scheduled_date.format(DATE_FORMAT).to_string())
		.bind(event.start.to_string())
		.bind(event.end.to_string())
		.bind(event.owner.as_deref())
		.bind(event.created_at.to_rfc3339())
		.execute(pool)
		.await?;

	Ok(())
}

/// Full replace of the business fields; returns the number of rows touched
pub async fn update_event(pool: &SqlitePool, id: &str, draft: &GameEventDraft, owner: &str) -> Result<u64> {
	let result = sqlx::query("UPDATE game_events SET name = ?, scheduled_date = ?, start_at = ?, end_at = ?, owner = ? WHERE id = ?")
		.bind(&draft.name)
		.bind(draft.scheduled_date.format(DATE_FORMAT).to_string())
		.bind(draft.start.to_string())
		.bind(draft.end.to_string())
		.bind(owner)
		.bind(id)
		.execute(pool)
		.await?;

	Ok(result.rows_affected())
}

pub async fn delete_event(pool: &SqlitePool, id: &str) -> Result<u64> {
	let result = sqlx::query("DELETE FROM game_events WHERE id = ?").bind(id).execute(pool).await?;
	Ok(result.rows_affected())
}

pub async fn delete_before(pool: &SqlitePool, cutoff: NaiveDate) -> Result<u64> {
	let result = sqlx::query("DELETE FROM game_events WHERE scheduled_date < ?")
		.bind(cutoff.format(DATE_FORMAT).to_string())
		.execute(pool)
		.await?;

	Ok(result.rows_affected())
}
