use tokio::sync::{mpsc, watch};
use tokio::time::{interval_at, Instant, Interval};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::{CountdownCommand, CountdownConfig, CountdownSnapshot, CountdownState, CountdownStatus};

/// The countdown engine actor. Owns the state machine and the periodic
/// ticker, and serializes every mutation: a command fully completes before
/// the next scheduled tick observes engine state.
pub struct CountdownEngine {
	config: CountdownConfig,
	state_tx: watch::Sender<CountdownSnapshot>,
	state_rx: watch::Receiver<CountdownSnapshot>,
}

impl CountdownEngine {
	#[must_use]
	pub fn new(config: CountdownConfig) -> Self {
		let (state_tx, state_rx) = watch::channel(CountdownSnapshot::default());
		Self { config, state_tx, state_rx }
	}

	#[must_use]
	pub fn subscribe(&self) -> watch::Receiver<CountdownSnapshot> {
		self.state_rx.clone()
	}

	pub async fn run(self, mut command_rx: mpsc::UnboundedReceiver<CountdownCommand>, cancel: CancellationToken) {
		let mut state = CountdownState::new();
		let mut ticker: Option<Interval> = None;

		info!("countdown engine started");

		loop {
			tokio::select! {
				// The ticker is armed only while Running
				_ = async {
					match ticker.as_mut() {
						Some(t) => { t.tick().await; }
						None => std::future::pending::<()>().await,
					}
				} => {
					state.tick();
					self.sync_ticker(&state, &mut ticker);
					self.state_tx.send_replace(state.snapshot());
				}

				Some(cmd) = command_rx.recv() => {
					self.handle_command(cmd, &mut state, &mut ticker);
				}

				_ = cancel.cancelled() => {
					info!("countdown engine cancelled");
					break;
				}
			}
		}
	}

	fn handle_command(&self, cmd: CountdownCommand, state: &mut CountdownState, ticker: &mut Option<Interval>) {
		let ack = match cmd {
			CountdownCommand::LoadQueue { queue, ack } => {
				debug!(len = queue.len(), "queue replaced");
				state.load_queue(queue);
				ack
			}
			CountdownCommand::Start { ack } => {
				state.start();
				ack
			}
			CountdownCommand::Pause { ack } => {
				state.pause();
				ack
			}
			CountdownCommand::Reset { ack } => {
				state.reset();
				ack
			}
			CountdownCommand::Skip { ack } => {
				state.skip();
				ack
			}
		};

		self.sync_ticker(state, ticker);
		self.state_tx.send_replace(state.snapshot());
		// Caller may have dropped the ack; that is fine
		let _ = ack.send(());
	}

	/// Keep the ticker lifecycle in lockstep with the status: armed while
	/// `Running` (at most one per engine, so a second `start` is
	/// idempotent), dropped the instant the status leaves `Running`.
	fn sync_ticker(&self, state: &CountdownState, ticker: &mut Option<Interval>) {
		match state.status() {
			CountdownStatus::Running => {
				if ticker.is_none() {
					let period = self.config.tick_interval();
					// First decrement lands one full period after arming
					*ticker = Some(interval_at(Instant::now() + period, period));
					debug!("ticker armed");
				}
			}
			_ => {
				if ticker.take().is_some() {
					debug!("ticker disarmed");
				}
			}
		}
	}
}
