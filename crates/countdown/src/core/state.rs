use game_event::GameEvent;
use serde::{Deserialize, Serialize};

/// Countdown run status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CountdownStatus {
	/// Waiting for a start request; also entered whenever the queue changes
	#[default]
	Idle,
	Running,
	Paused,
	/// Terminal until the queue is externally replaced
	Finished,
}

/// Format whole seconds as `"HH:MM:SS"` for display
#[must_use]
pub fn format_seconds(secs: u32) -> String {
	format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Read-only snapshot published to observers after every state change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownSnapshot {
	pub queue: Vec<GameEvent>,
	pub current_index: usize,
	pub remaining_secs: u32,
	pub status: CountdownStatus,
	/// `remaining_secs` rendered as `"HH:MM:SS"`
	pub display_time: String,
	pub current_event: Option<GameEvent>,
}

impl Default for CountdownSnapshot {
	fn default() -> Self {
		Self {
			queue: Vec::new(),
			current_index: 0,
			remaining_secs: 0,
			status: CountdownStatus::default(),
			// Observers reading before the first command still get a
			// presentable clock face
			display_time: format_seconds(0),
			current_event: None,
		}
	}
}

/// The countdown state machine. Every transition is a total function:
/// requests that do not apply in the current status are no-ops, never
/// errors, and `remaining_secs` is never observable below zero.
#[derive(Debug, Clone, Default)]
pub struct CountdownState {
	queue: Vec<GameEvent>,
	current_index: usize,
	remaining_secs: u32,
	status: CountdownStatus,
}

impl CountdownState {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn status(&self) -> CountdownStatus {
		self.status
	}

	#[must_use]
	pub fn remaining_secs(&self) -> u32 {
		self.remaining_secs
	}

	#[must_use]
	pub fn current_index(&self) -> usize {
		self.current_index
	}

	#[must_use]
	pub fn queue(&self) -> &[GameEvent] {
		&self.queue
	}

	#[must_use]
	pub fn current_event(&self) -> Option<&GameEvent> {
		self.queue.get(self.current_index)
	}

	/// Replace the queue and rewind to its head. The only transition that
	/// may fire while `Running`; it unconditionally interrupts any
	/// in-progress countdown.
	pub fn load_queue(&mut self, queue: Vec<GameEvent>) {
		self.queue = queue;
		self.current_index = 0;
		self.remaining_secs = self.queue.first().map_or(0, GameEvent::duration_secs);
		self.status = CountdownStatus::Idle;
	}

	/// Valid from `Idle`/`Paused` with a non-empty queue; no-op otherwise
	pub fn start(&mut self) {
		if self.queue.is_empty() {
			return;
		}
		if matches!(self.status, CountdownStatus::Idle | CountdownStatus::Paused) {
			self.status = CountdownStatus::Running;
		}
	}

	/// Valid from `Running`; preserves `remaining_secs`
	pub fn pause(&mut self) {
		if self.status == CountdownStatus::Running {
			self.status = CountdownStatus::Paused;
		}
	}

	/// Rewind the current event to its full duration and stop
	pub fn reset(&mut self) {
		if self.status == CountdownStatus::Idle {
			return;
		}
		if let Some(current) = self.queue.get(self.current_index) {
			self.remaining_secs = current.duration_secs();
			self.status = CountdownStatus::Idle;
		}
	}

	/// Advance to the next event and keep running, or finish when the
	/// queue is exhausted. No-op on an empty queue.
	pub fn skip(&mut self) {
		if self.queue.is_empty() {
			return;
		}
		if self.current_index + 1 < self.queue.len() {
			self.current_index += 1;
			self.remaining_secs = self.queue[self.current_index].duration_secs();
			self.status = CountdownStatus::Running;
		} else {
			self.current_index = self.queue.len() - 1;
			self.remaining_secs = 0;
			self.status = CountdownStatus::Finished;
		}
	}

	/// One one-second decrement. Only effective while `Running`; reaching
	/// zero auto-advances exactly like `skip`.
	pub fn tick(&mut self) {
		if self.status != CountdownStatus::Running {
			return;
		}
		if self.remaining_secs > 1 {
			self.remaining_secs -= 1;
			return;
		}
		self.skip();
	}

	#[must_use]
	pub fn snapshot(&self) -> CountdownSnapshot {
		CountdownSnapshot {
			queue: self.queue.clone(),
			current_index: self.current_index,
			remaining_secs: self.remaining_secs,
			status: self.status,
			display_time: format_seconds(self.remaining_secs),
			current_event: self.current_event().cloned(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_snapshot_shows_a_zeroed_clock() {
		let snapshot = CountdownSnapshot::default();
		assert_eq!(snapshot.status, CountdownStatus::Idle);
		assert_eq!(snapshot.display_time, "00:00:00");
		assert!(snapshot.queue.is_empty());
	}

	#[test]
	fn format_seconds_pads_components() {
		assert_eq!(format_seconds(0), "00:00:00");
		assert_eq!(format_seconds(61), "00:01:01");
		assert_eq!(format_seconds(3 * 3600 + 25 * 60 + 9), "03:25:09");
	}
}
