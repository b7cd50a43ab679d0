pub mod ai;
pub mod collision;
pub mod config;
pub mod field;
pub mod input;
pub mod physics;
pub mod powerups;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use kickabout_core::input::InputEvent;
use kickabout_core::signal::Signal;
use kickabout_core::sim::Simulation;
use kickabout_core::team::TeamNames;

use crate::config::MatchConfig;
use crate::field::Field;
use crate::input::InputState;
use crate::physics::{Ball, MovableBody};
use crate::powerups::PowerUp;

/// Score, clock, and lifecycle flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub home_score: u32,
    pub away_score: u32,
    /// Seconds left, decremented by the session's independent clock.
    pub time_remaining: u32,
    pub paused: bool,
    pub game_over: bool,
    pub team_names: TeamNames,
}

/// The complete mutable world a tick operates on. Passed explicitly into
/// every sub-algorithm so there is no hidden shared state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct World {
    pub player: MovableBody,
    pub opponent: MovableBody,
    pub ball: Ball,
    pub powerups: Vec<PowerUp>,
    pub input: InputState,
    pub kick_charge: f32,
    pub state: MatchState,
}

impl World {
    /// Kickoff placement: player on the left quarter line, opponent on
    /// the right, ball at center. Starts paused.
    pub fn new(config: &MatchConfig) -> Self {
        let field = Field::from_config(config);
        let (cx, cy) = field.center();
        Self {
            player: MovableBody::new(
                config.field_width * 0.25,
                cy,
                config.player_radius,
                config.player_base_speed,
                config.player_max_speed,
                config.player_accel,
                config.player_decel,
                1.0,
            ),
            opponent: MovableBody::new(
                config.field_width * 0.75,
                cy,
                config.ai_radius,
                config.ai_speed,
                config.ai_speed,
                config.ai_accel,
                1.0,
                -1.0,
            ),
            ball: Ball::new(cx, cy, config.ball_radius),
            powerups: Vec::new(),
            input: InputState::default(),
            kick_charge: 0.0,
            state: MatchState {
                home_score: 0,
                away_score: 0,
                time_remaining: config.match_duration_secs,
                paused: true,
                game_over: false,
                team_names: TeamNames::default(),
            },
        }
    }
}

/// Per-tick state for the presentation collaborator: everything the
/// renderer, scoreboard, and kick meter need.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub field: Field,
    pub player: MovableBody,
    pub opponent: MovableBody,
    pub ball: Ball,
    pub powerups: Vec<PowerUp>,
    pub home_score: u32,
    pub away_score: u32,
    pub time_remaining: u32,
    pub paused: bool,
    pub game_over: bool,
    pub team_names: TeamNames,
    pub kick_charge: f32,
    pub kick_charge_max: f32,
}

/// The match simulator. One instance owns the world for one match; the
/// session layer re-invokes `tick` per animation frame and
/// `clock_second` from its independent one-second timer.
pub struct MatchSim {
    world: World,
    field: Field,
    config: MatchConfig,
    rng: StdRng,
    /// Signals produced by event handling, drained by the next tick.
    pending: Vec<Signal>,
}

impl MatchSim {
    pub fn new() -> Self {
        Self::with_config(MatchConfig::load())
    }

    pub fn with_config(config: MatchConfig) -> Self {
        Self::build(config, StdRng::from_os_rng())
    }

    /// Deterministic construction for tests.
    pub fn with_seed(config: MatchConfig, seed: u64) -> Self {
        Self::build(config, StdRng::seed_from_u64(seed))
    }

    fn build(config: MatchConfig, rng: StdRng) -> Self {
        Self {
            world: World::new(&config),
            field: Field::from_config(&config),
            rng,
            pending: Vec::new(),
            config,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn state(&self) -> &MatchState {
        &self.world.state
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Restore the initial match: score 0-0, full clock, no power-ups,
    /// kickoff placements, paused. Team names survive (cosmetic).
    pub fn reset(&mut self) {
        let team_names = self.world.state.team_names.clone();
        self.world = World::new(&self.config);
        self.world.state.team_names = team_names;
        self.pending.push(Signal::ScoreChanged { home: 0, away: 0 });
        tracing::debug!("Match reset");
    }
}

impl Default for MatchSim {
    fn default() -> Self {
        Self::with_config(MatchConfig::default())
    }
}

impl Simulation for MatchSim {
    type Frame = FrameSnapshot;

    fn tick_rate(&self) -> f32 {
        self.config.tick_rate
    }

    fn apply_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Reset => self.reset(),
            other => input::resolve_event(&mut self.world, other, &mut self.pending),
        }
    }

    fn tick(&mut self, dt: f32) -> Vec<Signal> {
        let mut signals = std::mem::take(&mut self.pending);
        if self.world.state.paused || self.world.state.game_over {
            return signals;
        }

        let target = ai::seek_target(&self.world.opponent, &self.world.ball, self.config.ai_speed);

        physics::drive_player(&mut self.world.player, &self.world.input, &self.field);
        physics::steer_body(&mut self.world.opponent, target, &self.field);
        physics::integrate_ball(&mut self.world.ball, &self.field, &self.config, &mut signals);

        collision::update_kick_charge(&mut self.world, &self.config, dt);
        collision::resolve_player_ball(&mut self.world, &self.config, &mut signals);
        collision::resolve_opponent_ball(&mut self.world, &self.config, &mut signals);
        collision::resolve_goals(&mut self.world, &self.field, &mut signals);

        powerups::update(
            &mut self.world,
            &self.config,
            &mut self.rng,
            dt,
            &mut signals,
        );

        signals
    }

    fn clock_second(&mut self) -> Vec<Signal> {
        let state = &mut self.world.state;
        if state.paused || state.game_over || state.time_remaining == 0 {
            return Vec::new();
        }
        state.time_remaining -= 1;
        if state.time_remaining == 0 {
            state.game_over = true;
            tracing::debug!(
                home = state.home_score,
                away = state.away_score,
                "Full time"
            );
            return vec![Signal::MatchOver];
        }
        Vec::new()
    }

    fn frame(&self) -> FrameSnapshot {
        FrameSnapshot {
            field: self.field,
            player: self.world.player.clone(),
            opponent: self.world.opponent.clone(),
            ball: self.world.ball.clone(),
            powerups: self.world.powerups.clone(),
            home_score: self.world.state.home_score,
            away_score: self.world.state.away_score,
            time_remaining: self.world.state.time_remaining,
            paused: self.world.state.paused,
            game_over: self.world.state.game_over,
            team_names: self.world.state.team_names.clone(),
            kick_charge: self.world.kick_charge,
            kick_charge_max: self.config.kick_power_max,
        }
    }

    fn is_over(&self) -> bool {
        self.world.state.game_over
    }

    fn is_paused(&self) -> bool {
        self.world.state.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kickabout_core::input::Key;
    use kickabout_core::signal::SoundCue;
    use kickabout_core::team::Side;
    use kickabout_core::test_helpers::{assert_signal, press, release, run_ticks};

    const DT: f32 = 1.0 / 60.0;

    fn running_sim() -> MatchSim {
        let mut sim = MatchSim::with_seed(MatchConfig::default(), 99);
        sim.apply_event(InputEvent::PauseToggle);
        sim
    }

    #[test]
    fn new_match_starts_paused_at_kickoff() {
        let sim = MatchSim::with_seed(MatchConfig::default(), 1);
        assert!(sim.is_paused());
        assert!(!sim.is_over());
        let (cx, cy) = sim.field.center();
        assert_eq!((sim.world.ball.x, sim.world.ball.y), (cx, cy));
        assert_eq!(sim.state().time_remaining, 180);
    }

    #[test]
    fn paused_tick_freezes_the_world() {
        let mut sim = MatchSim::with_seed(MatchConfig::default(), 1);
        press(&mut sim, Key::Right);
        sim.tick(DT);
        let before = sim.world.clone();
        run_ticks(&mut sim, 30, DT);
        assert_eq!(sim.world, before, "paused world must not advance");
    }

    #[test]
    fn paused_tick_still_delivers_pending_signals() {
        let mut sim = MatchSim::with_seed(MatchConfig::default(), 1);
        press(&mut sim, Key::Kick);
        release(&mut sim, Key::Kick);
        let signals = sim.tick(DT);
        assert_signal(
            &signals,
            |s| matches!(s, Signal::Sound(SoundCue::Kick)),
            "kick sound",
        );
    }

    #[test]
    fn player_moves_right_under_input() {
        let mut sim = running_sim();
        let x0 = sim.world.player.x;
        press(&mut sim, Key::Right);
        run_ticks(&mut sim, 30, DT);
        assert!(sim.world.player.x > x0, "player should have moved right");
        assert_eq!(sim.world.player.facing, 1.0);
    }

    #[test]
    fn opponent_pursues_the_ball() {
        let mut sim = running_sim();
        let x0 = sim.world.opponent.x;
        run_ticks(&mut sim, 60, DT);
        assert!(
            sim.world.opponent.x < x0,
            "opponent should close on the center ball"
        );
        assert_eq!(sim.world.opponent.facing, -1.0);
    }

    #[test]
    fn full_charge_kick_scenario() {
        // Hold the kick button until the charge tops out, bring the ball
        // into contact, and the next tick fires at exactly max power
        // along the player-to-ball line.
        let mut sim = running_sim();
        // Park the ball well away so charging happens without contact.
        sim.world.ball.x = sim.world.player.x + 200.0;
        press(&mut sim, Key::Kick);
        run_ticks(&mut sim, 60, DT);
        assert_eq!(sim.world.kick_charge, sim.config.kick_power_max);

        sim.world.ball.x = sim.world.player.x + sim.world.player.radius;
        sim.world.ball.y = sim.world.player.y;
        sim.world.ball.vx = 0.0;
        let signals = sim.tick(DT);

        let speed = sim.world.ball.speed();
        assert!(
            (speed - sim.config.kick_power_max).abs() < 1e-3,
            "full-charge kick speed should be {}, got {speed}",
            sim.config.kick_power_max
        );
        assert!(sim.world.ball.vx > 0.0, "kick goes along player→ball");
        assert_signal(
            &signals,
            |s| matches!(s, Signal::Sound(SoundCue::Kick)),
            "kick sound",
        );

        // Release while "touching": sound fires again, charge discards.
        release(&mut sim, Key::Kick);
        let signals = sim.tick(DT);
        assert_signal(
            &signals,
            |s| matches!(s, Signal::Sound(SoundCue::Kick)),
            "release kick sound",
        );
        assert_eq!(sim.world.kick_charge, 0.0);
    }

    #[test]
    fn ball_into_left_goal_scores_for_away() {
        let mut sim = running_sim();
        let (_, cy) = sim.field.center();
        sim.world.ball.x = 3.0;
        sim.world.ball.y = cy;
        sim.world.ball.vx = -5.0;
        // Keep the opponent out of the play.
        sim.world.opponent.x = sim.field.width - 30.0;

        let signals = sim.tick(DT);

        assert_eq!(sim.state().away_score, 1);
        assert_eq!(sim.state().home_score, 0);
        assert_eq!((sim.world.ball.x, sim.world.ball.y), sim.field.center());
        assert_eq!((sim.world.ball.vx, sim.world.ball.vy), (0.0, 0.0));
        assert_signal(
            &signals,
            |s| matches!(s, Signal::GoalScored { side: Side::Away }),
            "away goal",
        );
        assert_signal(
            &signals,
            |s| matches!(s, Signal::Sound(SoundCue::Goal)),
            "goal sound",
        );
    }

    #[test]
    fn goal_fires_exactly_one_score_change() {
        let mut sim = running_sim();
        let (_, cy) = sim.field.center();
        sim.world.ball.x = 2.0;
        sim.world.ball.y = cy;
        sim.world.ball.vx = -6.0;
        sim.world.opponent.x = sim.field.width - 30.0;

        let signals = sim.tick(DT);
        let score_changes = signals
            .iter()
            .filter(|s| matches!(s, Signal::ScoreChanged { .. }))
            .count();
        assert_eq!(score_changes, 1);

        // Following ticks are quiet: the ball is back at center.
        let signals = run_ticks(&mut sim, 10, DT);
        assert!(
            !signals
                .iter()
                .any(|s| matches!(s, Signal::GoalScored { .. })),
            "re-centered ball must not score again"
        );
    }

    #[test]
    fn reset_mid_match_restores_everything() {
        let mut sim = running_sim();
        sim.apply_event(InputEvent::SetTeamName {
            side: Side::Home,
            name: "Rovers".to_string(),
        });
        // Mess the match up thoroughly.
        sim.world.state.home_score = 3;
        sim.world.state.away_score = 2;
        sim.world.state.time_remaining = 41;
        sim.world.player.x = 777.0;
        sim.world.ball.vx = 9.0;
        sim.world.kick_charge = 15.0;
        sim.world
            .powerups
            .push(PowerUp::new(100.0, 100.0, kickabout_core::powerup::PowerUpKind::Speed, 8.0));

        sim.apply_event(InputEvent::Reset);

        assert_eq!(sim.state().home_score, 0);
        assert_eq!(sim.state().away_score, 0);
        assert_eq!(sim.state().time_remaining, 180);
        assert!(sim.state().paused, "reset leaves the match paused");
        assert!(sim.world.powerups.is_empty());
        assert_eq!(sim.world.kick_charge, 0.0);
        assert_eq!(sim.world.player.x, sim.config.field_width * 0.25);
        assert_eq!((sim.world.ball.vx, sim.world.ball.vy), (0.0, 0.0));
        // Cosmetic names survive a reset.
        assert_eq!(sim.state().team_names.home, "Rovers");

        let signals = sim.tick(DT);
        assert_signal(
            &signals,
            |s| matches!(s, Signal::ScoreChanged { home: 0, away: 0 }),
            "score reset",
        );
    }

    #[test]
    fn clock_counts_down_only_while_running() {
        let mut sim = MatchSim::with_seed(MatchConfig::default(), 1);
        assert!(sim.clock_second().is_empty(), "paused clock must not tick");
        assert_eq!(sim.state().time_remaining, 180);

        sim.apply_event(InputEvent::PauseToggle);
        sim.clock_second();
        assert_eq!(sim.state().time_remaining, 179);
    }

    #[test]
    fn full_time_ends_the_match_once() {
        let mut sim = running_sim();
        sim.world.state.time_remaining = 1;

        let signals = sim.clock_second();
        assert_eq!(sim.state().time_remaining, 0);
        assert!(sim.is_over());
        assert_eq!(signals, vec![Signal::MatchOver]);

        // Terminal state: the clock stays at zero, the world freezes.
        assert!(sim.clock_second().is_empty());
        assert_eq!(sim.state().time_remaining, 0);
        let before = sim.world.clone();
        run_ticks(&mut sim, 10, DT);
        assert_eq!(sim.world, before);
    }

    #[test]
    fn pause_reachable_after_full_time() {
        let mut sim = running_sim();
        sim.world.state.time_remaining = 1;
        sim.clock_second();
        assert!(sim.is_over());

        sim.apply_event(InputEvent::PauseToggle);
        assert!(sim.is_paused(), "pause toggle works on the final whistle");
    }

    #[test]
    fn frame_reports_charge_meter_inputs() {
        let mut sim = running_sim();
        press(&mut sim, Key::Kick);
        // Ball away from the player so the charge just builds.
        sim.world.ball.x = sim.world.player.x + 300.0;
        run_ticks(&mut sim, 12, DT);

        let frame = sim.frame();
        assert!(frame.kick_charge > 0.0);
        assert_eq!(frame.kick_charge_max, sim.config.kick_power_max);
        assert!(frame.kick_charge <= frame.kick_charge_max);
        assert!(!frame.paused);
        assert_eq!(frame.time_remaining, 180);
    }

    #[test]
    fn frame_snapshot_json_roundtrip() {
        let sim = MatchSim::with_seed(MatchConfig::default(), 5);
        let frame = sim.frame();
        let json = serde_json::to_string(&frame).unwrap();
        let back: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(frame, back);
    }

    #[test]
    fn long_match_holds_invariants() {
        let mut sim = running_sim();
        // A minute of play with busy input and the clock running.
        for second in 0..60u32 {
            for tick in 0..60 {
                match (second + tick) % 7 {
                    0 => press(&mut sim, Key::Right),
                    1 => press(&mut sim, Key::Up),
                    2 => press(&mut sim, Key::Kick),
                    3 => release(&mut sim, Key::Kick),
                    4 => release(&mut sim, Key::Up),
                    5 => press(&mut sim, Key::Sprint),
                    _ => release(&mut sim, Key::Sprint),
                }
                sim.tick(DT);

                let p = &sim.world.player;
                assert!(p.x >= p.radius && p.x <= sim.field.width - p.radius);
                assert!(p.y >= p.radius && p.y <= sim.field.height - p.radius);
                let o = &sim.world.opponent;
                assert!(o.x >= o.radius && o.x <= sim.field.width - o.radius);
                assert!(
                    sim.world.kick_charge >= 0.0
                        && sim.world.kick_charge <= sim.config.kick_power_max
                );
                let pending = sim.world.powerups.iter().filter(|pu| !pu.collected).count();
                assert!(pending <= powerups::MAX_PENDING);
            }
            sim.clock_second();
        }
        assert_eq!(sim.state().time_remaining, 120);
        assert!(!sim.is_over());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_key() -> impl Strategy<Value = Key> {
            prop_oneof![
                Just(Key::Up),
                Just(Key::Down),
                Just(Key::Left),
                Just(Key::Right),
                Just(Key::Sprint),
                Just(Key::Kick),
            ]
        }

        proptest! {
            #[test]
            fn arbitrary_input_keeps_bodies_in_bounds(
                seed in 0u64..1000,
                events in proptest::collection::vec(
                    (arb_key(), proptest::bool::ANY),
                    0..60
                ),
            ) {
                let mut sim = MatchSim::with_seed(MatchConfig::default(), seed);
                sim.apply_event(InputEvent::PauseToggle);

                for (key, pressed) in events {
                    sim.apply_event(InputEvent::Key { key, pressed });
                    sim.tick(DT);

                    let p = &sim.world.player;
                    prop_assert!(p.x >= p.radius && p.x <= sim.field.width - p.radius);
                    prop_assert!(p.y >= p.radius && p.y <= sim.field.height - p.radius);
                    prop_assert!(sim.world.kick_charge <= sim.config.kick_power_max);
                }
            }

            #[test]
            fn clock_never_leaves_match_bounds(seconds in 0u32..400) {
                let mut sim = MatchSim::with_seed(MatchConfig::default(), 3);
                sim.apply_event(InputEvent::PauseToggle);
                for _ in 0..seconds {
                    sim.clock_second();
                    let t = sim.state().time_remaining;
                    prop_assert!(t <= sim.config.match_duration_secs);
                }
                if seconds >= sim.config.match_duration_secs {
                    prop_assert!(sim.is_over());
                    prop_assert_eq!(sim.state().time_remaining, 0);
                }
            }
        }
    }
}
