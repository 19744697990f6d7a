use chrono::NaiveDate;
use game_event::GameEvent;

/// Derive the ordered queue of events airing on `today`.
///
/// Pure and deterministic: filters to `scheduled_date == today` and
/// stable-sorts ascending by start offset, so events sharing a start keep
/// the relative order of the input.
#[must_use]
pub fn today_queue(events: &[GameEvent], today: NaiveDate) -> Vec<GameEvent> {
	let mut queue: Vec<GameEvent> = events.iter().filter(|event| event.scheduled_date == today).cloned().collect();
	queue.sort_by_key(|event| event.start.total_seconds());
	queue
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::Utc;

	fn game(id: &str, date: &str, start: &str) -> GameEvent {
		GameEvent {
			id: id.to_string(),
			name: format!("game {id}"),
			scheduled_date: date.parse().unwrap(),
			start: start.parse().unwrap(),
			end: "23:59:59".parse().unwrap(),
			owner: None,
			created_at: Utc::now(),
		}
	}

	#[test]
	fn filters_to_today_and_sorts_by_start() {
		let today: NaiveDate = "2026-08-30".parse().unwrap();
		let events = vec![
			game("1", "2026-08-30", "14:00:00"),
			game("2", "2026-08-31", "09:00:00"),
			game("3", "2026-08-30", "09:30:00"),
		];

		let queue = today_queue(&events, today);
		let ids: Vec<_> = queue.iter().map(|e| e.id.as_str()).collect();
		assert_eq!(ids, vec!["3", "1"]);
	}

	#[test]
	fn equal_starts_keep_input_order() {
		let today: NaiveDate = "2026-08-30".parse().unwrap();
		let events = vec![
			game("a", "2026-08-30", "10:00:00"),
			game("b", "2026-08-30", "10:00:00"),
			game("c", "2026-08-30", "09:00:00"),
		];

		let queue = today_queue(&events, today);
		let ids: Vec<_> = queue.iter().map(|e| e.id.as_str()).collect();
		assert_eq!(ids, vec!["c", "a", "b"]);
	}

	#[test]
	fn empty_input_yields_empty_queue() {
		let today: NaiveDate = "2026-08-30".parse().unwrap();
		assert!(today_queue(&[], today).is_empty());
	}
}
