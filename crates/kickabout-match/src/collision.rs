use kickabout_core::signal::{Signal, SoundCue};
use kickabout_core::team::Side;

use crate::World;
use crate::config::MatchConfig;
use crate::field::Field;
use crate::physics::{Ball, MovableBody};

/// Circle-circle overlap test.
pub fn circles_overlap(x1: f32, y1: f32, r1: f32, x2: f32, y2: f32, r2: f32) -> bool {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt() < r1 + r2
}

/// Grow the kick charge while the button is held, up to the maximum.
/// Releasing the button clears it (input resolver).
pub fn update_kick_charge(world: &mut World, config: &MatchConfig, dt: f32) {
    if world.input.kick && world.kick_charge < config.kick_power_max {
        world.kick_charge =
            (world.kick_charge + config.kick_charge_rate * dt).min(config.kick_power_max);
    }
}

/// Resolve player-ball contact: a kick while the button is held, a
/// dribble otherwise.
pub fn resolve_player_ball(world: &mut World, config: &MatchConfig, signals: &mut Vec<Signal>) {
    let player = &world.player;
    let ball = &mut world.ball;
    if !circles_overlap(player.x, player.y, player.radius, ball.x, ball.y, ball.radius) {
        return;
    }

    if world.input.kick {
        // Uncharged or barely charged kicks still leave the boot at the
        // minimum power.
        let power = world.kick_charge.max(config.kick_power_min);
        let (dir_x, dir_y) = separation_axis(player, ball);
        ball.vx = dir_x * power;
        ball.vy = dir_y * power;
        // Spin from the player's horizontal motion across the kick line.
        ball.spin = player.vx * -dir_y * config.spin_factor;
        signals.push(Signal::Sound(SoundCue::Kick));
    } else {
        let dx = ball.x - player.x;
        let dy = ball.y - player.y;
        let dist = (dx * dx + dy * dy).sqrt();
        let overlap = player.radius + ball.radius - dist;
        let (dir_x, dir_y) = if dist == 0.0 {
            (player.facing, 0.0)
        } else {
            (dx / dist, dy / dist)
        };
        ball.x += dir_x * overlap;
        ball.y += dir_y * overlap;
        ball.vx = (ball.vx + player.vx) / 2.0;
        ball.vy = (ball.vy + player.vy) / 2.0;
    }
}

/// Resolve opponent-ball contact: the AI always pokes the ball away at a
/// fixed power.
pub fn resolve_opponent_ball(world: &mut World, config: &MatchConfig, signals: &mut Vec<Signal>) {
    let opponent = &world.opponent;
    let ball = &mut world.ball;
    if !circles_overlap(
        opponent.x,
        opponent.y,
        opponent.radius,
        ball.x,
        ball.y,
        ball.radius,
    ) {
        return;
    }

    let (dir_x, dir_y) = separation_axis(opponent, ball);
    ball.vx = dir_x * config.ai_kick_power;
    ball.vy = dir_y * config.ai_kick_power;
    signals.push(Signal::Sound(SoundCue::Kick));
}

/// Detect a ball fully past either goal line, score it, and re-center the
/// ball. Runs after ball integration, which already exempted the
/// goal-mouth band from reflection, so a crossing scores exactly once.
pub fn resolve_goals(world: &mut World, field: &Field, signals: &mut Vec<Signal>) {
    let scored = if world.ball.x < 0.0 {
        Some(Side::Away)
    } else if world.ball.x > field.width {
        Some(Side::Home)
    } else {
        None
    };

    let Some(side) = scored else {
        return;
    };

    match side {
        Side::Home => world.state.home_score += 1,
        Side::Away => world.state.away_score += 1,
    }
    world.ball.place_center(field);

    tracing::debug!(
        home = world.state.home_score,
        away = world.state.away_score,
        ?side,
        "Goal scored"
    );
    signals.push(Signal::Sound(SoundCue::Goal));
    signals.push(Signal::GoalScored { side });
    signals.push(Signal::ScoreChanged {
        home: world.state.home_score,
        away: world.state.away_score,
    });
}

/// Unit vector from a body's center toward the ball; falls back to the
/// body's facing axis when the centers coincide.
fn separation_axis(body: &MovableBody, ball: &Ball) -> (f32, f32) {
    let dx = ball.x - body.x;
    let dy = ball.y - body.y;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist == 0.0 {
        (body.facing, 0.0)
    } else {
        (dx / dist, dy / dist)
    }
}
