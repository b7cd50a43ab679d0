use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use kickabout_core::input::{InputEvent, Key};
use kickabout_core::signal::Signal;
use kickabout_core::sim::Simulation;

/// Commands sent from the presentation/input collaborator to the session
/// loop. Applied between ticks, never mid-tick, so externally triggered
/// mutations (reset included) are atomic with respect to the simulation.
#[derive(Debug)]
pub enum SessionCommand {
    /// A pre-mapped input event.
    Event(InputEvent),
    /// A raw key code with its pressed state; unknown codes are dropped
    /// here, at the boundary.
    RawKey { code: String, pressed: bool },
    /// End the session.
    Stop,
}

/// Broadcasts from the session loop to the presentation collaborator.
#[derive(Debug, Clone)]
pub enum SessionBroadcast<F> {
    /// A renderable frame, one per tick (paused ticks included, so the
    /// pause overlay stays live).
    Frame(F),
    /// Signals produced by a tick or by the match clock. Fire-and-forget;
    /// no ordering guarantee within a tick.
    Signals(Vec<Signal>),
    /// The session loop has exited; nothing will be scheduled again.
    Ended,
}

/// Spawn a session task that owns the simulation.
///
/// The task re-issues the simulation tick at `sim.tick_rate()` and runs
/// the one-second match clock on an independent interval. It ends on a
/// `Stop` command, on command-channel closure (handle drop), or when the
/// broadcast receiver goes away. Every exit path sends `Ended` and drops
/// both intervals, so no scheduling leaks past the session.
pub fn spawn_session<S: Simulation>(
    sim: S,
) -> (
    mpsc::UnboundedSender<SessionCommand>,
    mpsc::UnboundedReceiver<SessionBroadcast<S::Frame>>,
    JoinHandle<()>,
) {
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let (broadcast_tx, broadcast_rx) = mpsc::unbounded_channel();

    let session_id = Uuid::new_v4();
    let span = tracing::info_span!("match_session", %session_id);
    let handle = tokio::spawn(run_session_loop(sim, cmd_rx, broadcast_tx).instrument(span));

    (cmd_tx, broadcast_rx, handle)
}

async fn run_session_loop<S: Simulation>(
    mut sim: S,
    mut cmd_rx: mpsc::UnboundedReceiver<SessionCommand>,
    broadcast_tx: mpsc::UnboundedSender<SessionBroadcast<S::Frame>>,
) {
    let tick_rate = sim.tick_rate();
    let dt = 1.0 / tick_rate;
    let mut ticker = tokio::time::interval(Duration::from_secs_f32(dt));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    // The match clock runs beside the tick interval, not locked to it;
    // the first decrement lands a full second in.
    let clock_period = Duration::from_secs(1);
    let mut clock = tokio::time::interval_at(tokio::time::Instant::now() + clock_period, clock_period);
    clock.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    tracing::debug!("Session started at {tick_rate} Hz");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let signals = sim.tick(dt);
                if broadcast_tx
                    .send(SessionBroadcast::Frame(sim.frame()))
                    .is_err()
                {
                    // Presentation went away; tear down.
                    break;
                }
                if !signals.is_empty() {
                    let _ = broadcast_tx.send(SessionBroadcast::Signals(signals));
                }
            }
            _ = clock.tick() => {
                let signals = sim.clock_second();
                if !signals.is_empty() {
                    let _ = broadcast_tx.send(SessionBroadcast::Signals(signals));
                }
            }
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(SessionCommand::Event(event)) => sim.apply_event(event),
                    Some(SessionCommand::RawKey { code, pressed }) => {
                        match Key::from_code(&code) {
                            Some(key) => sim.apply_event(InputEvent::Key { key, pressed }),
                            None => tracing::debug!(%code, "Dropped unmapped key code"),
                        }
                    },
                    Some(SessionCommand::Stop) | None => break,
                }
            }
        }
    }

    let _ = broadcast_tx.send(SessionBroadcast::Ended);
    tracing::debug!("Session ended");
}
