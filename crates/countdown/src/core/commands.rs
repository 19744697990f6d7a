use game_event::GameEvent;
use tokio::sync::oneshot;

/// Internal command type used inside the countdown engine. Every command
/// carries an ack channel so callers can sequence work after the engine
/// has observed the transition.
#[derive(Debug)]
pub enum CountdownCommand {
	LoadQueue { queue: Vec<GameEvent>, ack: oneshot::Sender<()> },
	Start { ack: oneshot::Sender<()> },
	Pause { ack: oneshot::Sender<()> },
	Reset { ack: oneshot::Sender<()> },
	Skip { ack: oneshot::Sender<()> },
}
