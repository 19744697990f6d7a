use crate::core::error::{GameStoreError, Result};
use chrono::{DateTime, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A time of day with whole-second precision, serialized as `"HH:MM:SS"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
	pub hour: u8,
	pub minute: u8,
	pub second: u8,
}

impl TimeOfDay {
	///
	/// # Errors
	/// Returns `ValidationFailed` if any component is out of range
	pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self> {
		if hour > 23 || minute > 59 || second > 59 {
			return Err(GameStoreError::ValidationFailed(format!("time of day out of range: {hour:02}:{minute:02}:{second:02}")));
		}
		Ok(Self { hour, minute, second })
	}

	/// Offset from midnight in whole seconds
	#[must_use]
	pub fn total_seconds(&self) -> u32 {
		u32::from(self.hour) * 3600 + u32::from(self.minute) * 60 + u32::from(self.second)
	}
}

impl fmt::Display for TimeOfDay {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
	}
}

impl FromStr for TimeOfDay {
	type Err = GameStoreError;

	fn from_str(s: &str) -> Result<Self> {
		let mut parts = s.splitn(3, ':');
		let (hour, minute, second) = match (parts.next(), parts.next(), parts.next()) {
			(Some(h), Some(m), Some(sec)) => (h, m, sec),
			_ => return Err(GameStoreError::ValidationFailed(format!("malformed time of day: {s:?}"))),
		};

		let parse = |field: &str| {
			field
				.parse::<u8>()
				.map_err(|_| GameStoreError::ValidationFailed(format!("malformed time of day: {s:?}")))
		};

		Self::new(parse(hour)?, parse(minute)?, parse(second)?)
	}
}

impl TryFrom<String> for TimeOfDay {
	type Error = GameStoreError;

	fn try_from(value: String) -> Result<Self> {
		value.parse()
	}
}

impl From<TimeOfDay> for String {
	fn from(value: TimeOfDay) -> Self {
		value.to_string()
	}
}

/// A scheduled time-boxed game/VOD segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
	/// Assigned by the store on creation; never client-guessed
	pub id: String,
	pub name: String,
	pub scheduled_date: NaiveDate,
	pub start: TimeOfDay,
	pub end: TimeOfDay,
	/// Caller identity stamped by the remote tier; `None` for local rows
	pub owner: Option<String>,
	pub created_at: DateTime<Utc>,
}

impl GameEvent {
	/// Segment length in whole seconds; always > 0 for valid events
	#[must_use]
	pub fn duration_secs(&self) -> u32 {
		self.end.total_seconds().saturating_sub(self.start.total_seconds())
	}
}

/// The four business fields supplied by callers on create/update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEventDraft {
	pub name: String,
	pub scheduled_date: NaiveDate,
	pub start: TimeOfDay,
	pub end: TimeOfDay,
}

impl GameEventDraft {
	/// Mutation-boundary validation, run before any store is touched.
	///
	/// # Errors
	/// Returns `ValidationFailed` when the name is blank, the segment bounds
	/// are not strictly increasing, or the date falls outside
	/// `[today, today + 1 year]`.
	pub fn validate(&self, today: NaiveDate) -> Result<()> {
		if self.name.trim().is_empty() {
			return Err(GameStoreError::ValidationFailed("name must not be empty".to_string()));
		}
		if self.start >= self.end {
			return Err(GameStoreError::ValidationFailed(format!("start offset {} must be before end offset {}", self.start, self.end)));
		}
		if self.scheduled_date < today {
			return Err(GameStoreError::ValidationFailed(format!("scheduled date {} is in the past", self.scheduled_date)));
		}
		let horizon = today + Months::new(12);
		if self.scheduled_date > horizon {
			return Err(GameStoreError::ValidationFailed(format!("scheduled date {} is more than one year ahead", self.scheduled_date)));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn draft(name: &str, date: NaiveDate, start: &str, end: &str) -> GameEventDraft {
		GameEventDraft {
			name: name.to_string(),
			scheduled_date: date,
			start: start.parse().unwrap(),
			end: end.parse().unwrap(),
		}
	}

	#[test]
	fn time_of_day_round_trip() {
		let time: TimeOfDay = "09:05:30".parse().unwrap();
		assert_eq!(time, TimeOfDay { hour: 9, minute: 5, second: 30 });
		assert_eq!(time.to_string(), "09:05:30");
		assert_eq!(time.total_seconds(), 9 * 3600 + 5 * 60 + 30);
	}

	#[test]
	fn time_of_day_rejects_garbage() {
		assert!("".parse::<TimeOfDay>().is_err());
		assert!("12:00".parse::<TimeOfDay>().is_err());
		assert!("24:00:00".parse::<TimeOfDay>().is_err());
		assert!("12:60:00".parse::<TimeOfDay>().is_err());
		assert!("ab:cd:ef".parse::<TimeOfDay>().is_err());
	}

	#[test]
	fn duration_is_positive_for_valid_bounds() {
		let today = Utc::now().date_naive();
		let draft = draft("finals", today, "10:00:00", "11:30:00");
		assert!(draft.validate(today).is_ok());

		let event = GameEvent {
			id: "1".to_string(),
			name: draft.name,
			scheduled_date: draft.scheduled_date,
			start: draft.start,
			end: draft.end,
			owner: None,
			created_at: Utc::now(),
		};
		assert_eq!(event.duration_secs(), 5400);
	}

	#[test]
	fn validate_rejects_blank_name() {
		let today = Utc::now().date_naive();
		let result = draft("   ", today, "10:00:00", "11:00:00").validate(today);
		assert!(matches!(result, Err(GameStoreError::ValidationFailed(_))));
	}

	#[test]
	fn validate_rejects_reversed_and_equal_bounds() {
		let today = Utc::now().date_naive();
		assert!(draft("a", today, "11:00:00", "10:00:00").validate(today).is_err());
		assert!(draft("a", today, "10:00:00", "10:00:00").validate(today).is_err());
	}

	#[test]
	fn validate_rejects_dates_outside_horizon() {
		let today = Utc::now().date_naive();
		let past = today - chrono::Days::new(1);
		let beyond = today + Months::new(12) + chrono::Days::new(1);

		assert!(draft("a", past, "10:00:00", "11:00:00").validate(today).is_err());
		assert!(draft("a", beyond, "10:00:00", "11:00:00").validate(today).is_err());
		assert!(draft("a", today + Months::new(12), "10:00:00", "11:00:00").validate(today).is_ok());
	}
}
