use crate::input::InputEvent;
use crate::signal::Signal;

/// Core trait a session drives.
///
/// The session owns the tick scheduling and the independent one-second
/// match clock; the simulation only advances state and reports signals.
pub trait Simulation: Send + 'static {
    /// Per-tick state the presentation collaborator renders from.
    type Frame: Clone + Send + 'static;

    /// Simulation tick rate in Hz.
    fn tick_rate(&self) -> f32 {
        60.0
    }

    /// Apply one discrete input event. Called between ticks, never
    /// mid-tick.
    fn apply_event(&mut self, event: InputEvent);

    /// Advance one tick. Returns the signals produced by this tick,
    /// including any buffered by event handling since the last tick.
    fn tick(&mut self, dt: f32) -> Vec<Signal>;

    /// One second of match time elapsed on the independent clock. The
    /// clock is not phase-locked to ticks and may drift relative to them.
    fn clock_second(&mut self) -> Vec<Signal>;

    /// Snapshot the current state for rendering.
    fn frame(&self) -> Self::Frame;

    /// Whether the match has reached its terminal state.
    fn is_over(&self) -> bool;

    /// Whether the simulation is currently paused.
    fn is_paused(&self) -> bool;
}
