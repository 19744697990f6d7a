use game_event::GameEvent;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot, watch, Mutex};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::error::{CountdownError, Result};
use super::{CountdownCommand, CountdownConfig, CountdownEngine, CountdownSnapshot};

/// Public handle over the countdown engine actor. Imperative calls resolve
/// once the engine has applied the transition, so a subsequent `snapshot`
/// reflects it.
pub struct CountdownTimer {
	command_tx: mpsc::UnboundedSender<CountdownCommand>,
	state_rx: watch::Receiver<CountdownSnapshot>,
	task_handle: Arc<Mutex<Option<JoinHandle<()>>>>,
	cancel_token: CancellationToken,
}

impl CountdownTimer {
	/// Spawn the engine on the current runtime
	#[must_use]
	pub fn spawn(config: CountdownConfig) -> Self {
		let cancel_token = CancellationToken::new();
		let (command_tx, command_rx) = mpsc::unbounded_channel();

		let engine = CountdownEngine::new(config);
		let state_rx = engine.subscribe();
		let task_handle = tokio::spawn(engine.run(command_rx, cancel_token.clone()));

		info!("countdown timer spawned");

		Self {
			command_tx,
			state_rx,
			task_handle: Arc::new(Mutex::new(Some(task_handle))),
			cancel_token,
		}
	}

	async fn send(&self, build: impl FnOnce(oneshot::Sender<()>) -> CountdownCommand) -> Result<()> {
		let (ack_tx, ack_rx) = oneshot::channel();
		self.command_tx.send(build(ack_tx)).map_err(|_| CountdownError::EngineGone)?;
		ack_rx.await.map_err(|_| CountdownError::EngineGone)
	}

	///
	/// # Errors
	/// Returns `EngineGone` if the engine task has shut down
	pub async fn load_queue(&self, queue: Vec<GameEvent>) -> Result<()> {
		self.send(|ack| CountdownCommand::LoadQueue { queue, ack }).await
	}

	///
	/// # Errors
	/// Returns `EngineGone` if the engine task has shut down
	pub async fn start(&self) -> Result<()> {
		self.send(|ack| CountdownCommand::Start { ack }).await
	}

	///
	/// # Errors
	/// Returns `EngineGone` if the engine task has shut down
	pub async fn pause(&self) -> Result<()> {
		self.send(|ack| CountdownCommand::Pause { ack }).await
	}

	///
	/// # Errors
	/// Returns `EngineGone` if the engine task has shut down
	pub async fn reset(&self) -> Result<()> {
		self.send(|ack| CountdownCommand::Reset { ack }).await
	}

	///
	/// # Errors
	/// Returns `EngineGone` if the engine task has shut down
	pub async fn skip(&self) -> Result<()> {
		self.send(|ack| CountdownCommand::Skip { ack }).await
	}

	#[must_use]
	pub fn snapshot(&self) -> CountdownSnapshot {
		self.state_rx.borrow().clone()
	}

	#[must_use]
	pub fn subscribe(&self) -> watch::Receiver<CountdownSnapshot> {
		self.state_rx.clone()
	}

	/// Cancel the engine task and wait for it to drain
	pub async fn shutdown(&self) {
		self.cancel_token.cancel();
		if let Some(handle) = self.task_handle.lock().await.take() {
			let _ = handle.await;
		}
	}
}
