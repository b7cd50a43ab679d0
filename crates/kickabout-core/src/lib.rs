pub mod input;
pub mod powerup;
pub mod signal;
pub mod sim;
pub mod team;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::input::{InputEvent, Key};
    use crate::signal::Signal;
    use crate::sim::Simulation;

    /// Run `n` ticks of `dt` seconds each, returning all accumulated
    /// signals.
    pub fn run_ticks<S: Simulation>(sim: &mut S, n: usize, dt: f32) -> Vec<Signal> {
        let mut all = Vec::new();
        for _ in 0..n {
            all.extend(sim.tick(dt));
        }
        all
    }

    /// Press a key (key-down event).
    pub fn press<S: Simulation>(sim: &mut S, key: Key) {
        sim.apply_event(InputEvent::key_down(key));
    }

    /// Release a key (key-up event).
    pub fn release<S: Simulation>(sim: &mut S, key: Key) {
        sim.apply_event(InputEvent::key_up(key));
    }

    /// Tap a key: press, run one tick, release.
    pub fn tap<S: Simulation>(sim: &mut S, key: Key, dt: f32) -> Vec<Signal> {
        press(sim, key);
        let signals = sim.tick(dt);
        release(sim, key);
        signals
    }

    /// Assert that `signals` contains at least one matching the predicate.
    pub fn assert_signal(signals: &[Signal], pred: impl Fn(&Signal) -> bool, what: &str) {
        assert!(
            signals.iter().any(pred),
            "Expected a {what} signal, got: {signals:?}"
        );
    }
}
