use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Countdown engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountdownConfig {
	pub tick_interval_ms: u64,
}

impl CountdownConfig {
	#[must_use]
	pub fn new() -> Self {
		Self { tick_interval_ms: 1000 }
	}

	#[must_use]
	pub fn with_tick_interval(mut self, ms: u64) -> Self {
		self.tick_interval_ms = ms;
		self
	}

	/// Tick cadence; clamps a zero interval to 1 ms (tokio panics on zero)
	#[must_use]
	pub fn tick_interval(&self) -> Duration {
		Duration::from_millis(self.tick_interval_ms.max(1))
	}
}

impl Default for CountdownConfig {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_cadence_is_one_second() {
		assert_eq!(CountdownConfig::default().tick_interval(), Duration::from_secs(1));
	}

	#[test]
	fn zero_interval_is_clamped() {
		let config = CountdownConfig::new().with_tick_interval(0);
		assert_eq!(config.tick_interval(), Duration::from_millis(1));
	}
}
