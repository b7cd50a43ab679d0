use serde::{Deserialize, Serialize};

use kickabout_core::signal::{Signal, SoundCue};

use crate::config::MatchConfig;
use crate::field::Field;
use crate::input::InputState;

/// Diagonal input normalization (1/√2) so diagonal movement is not faster
/// than axis movement.
const DIAGONAL_SCALE: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// A circular body steered by input or AI (the player and the opponent).
///
/// `base_radius` and `base_max_speed` are the canonical values power-up
/// expiry restores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovableBody {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub base_radius: f32,
    pub base_speed: f32,
    pub max_speed: f32,
    pub base_max_speed: f32,
    /// Velocity blend coefficient per tick (0..1).
    pub accel: f32,
    /// Per-axis velocity retention per tick on a zero-input axis.
    pub decel: f32,
    /// Facing direction, ±1.
    pub facing: f32,
}

impl MovableBody {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        x: f32,
        y: f32,
        radius: f32,
        base_speed: f32,
        max_speed: f32,
        accel: f32,
        decel: f32,
        facing: f32,
    ) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            radius,
            base_radius: radius,
            base_speed,
            max_speed,
            base_max_speed: max_speed,
            accel,
            decel,
            facing,
        }
    }

    pub fn speed(&self) -> f32 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }

    /// Hard positional clamp to the field (no bounce).
    fn clamp_to(&mut self, field: &Field) {
        self.x = self.x.clamp(self.radius, field.width - self.radius);
        self.y = self.y.clamp(self.radius, field.height - self.radius);
    }
}

/// The match ball. Spin only affects the rotation accumulator, which the
/// renderer reads; it has no physical effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub spin: f32,
    pub rotation: f32,
}

impl Ball {
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            radius,
            spin: 0.0,
            rotation: 0.0,
        }
    }

    pub fn speed(&self) -> f32 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }

    /// Re-center the ball at rest (after a goal).
    pub fn place_center(&mut self, field: &Field) {
        let (cx, cy) = field.center();
        self.x = cx;
        self.y = cy;
        self.vx = 0.0;
        self.vy = 0.0;
        self.spin = 0.0;
    }
}

/// Advance the player one tick from its input state.
///
/// Per-axis target is −1/0/+1 scaled by walk or sprint speed, with the
/// diagonal normalized; velocity blends toward the target and a zero-input
/// axis decays after the blend.
pub fn drive_player(player: &mut MovableBody, input: &InputState, field: &Field) {
    let speed = if input.sprint {
        player.max_speed
    } else {
        player.base_speed
    };

    let mut tx = (input.right as i8 - input.left as i8) as f32;
    let mut ty = (input.down as i8 - input.up as i8) as f32;
    if tx != 0.0 && ty != 0.0 {
        tx *= DIAGONAL_SCALE;
        ty *= DIAGONAL_SCALE;
    }

    player.vx += (tx * speed - player.vx) * player.accel;
    player.vy += (ty * speed - player.vy) * player.accel;
    if tx == 0.0 {
        player.vx *= player.decel;
    }
    if ty == 0.0 {
        player.vy *= player.decel;
    }

    player.x += player.vx;
    player.y += player.vy;
    player.clamp_to(field);
}

/// Advance a seeking body one tick toward a velocity target. `None` holds
/// the previous velocity (the coincident-with-ball case). Facing follows
/// the sign of the horizontal velocity.
pub fn steer_body(body: &mut MovableBody, target: Option<(f32, f32)>, field: &Field) {
    if let Some((tvx, tvy)) = target {
        body.vx += (tvx - body.vx) * body.accel;
        body.vy += (tvy - body.vy) * body.accel;
    }

    body.x += body.vx;
    body.y += body.vy;
    body.clamp_to(field);

    if body.vx != 0.0 {
        body.facing = body.vx.signum();
    }
}

/// Advance the ball one tick: move, reflect off walls (outside the goal
/// mouths), decay velocity, accumulate rotation.
pub fn integrate_ball(
    ball: &mut Ball,
    field: &Field,
    config: &MatchConfig,
    signals: &mut Vec<Signal>,
) {
    ball.x += ball.vx;
    ball.y += ball.vy;

    if ball.y - ball.radius < 0.0 {
        ball.y = ball.radius;
        ball.vy = -ball.vy * config.wall_restitution;
        signals.push(Signal::Sound(SoundCue::Bounce));
    } else if ball.y + ball.radius > field.height {
        ball.y = field.height - ball.radius;
        ball.vy = -ball.vy * config.wall_restitution;
        signals.push(Signal::Sound(SoundCue::Bounce));
    }

    // The goal-mouth band is scoring territory; goal detection runs after
    // this and owns the crossing.
    if !field.in_goal_mouth(ball.y) {
        if ball.x - ball.radius < 0.0 {
            ball.x = ball.radius;
            ball.vx = -ball.vx * config.wall_restitution;
            signals.push(Signal::Sound(SoundCue::Bounce));
        } else if ball.x + ball.radius > field.width {
            ball.x = field.width - ball.radius;
            ball.vx = -ball.vx * config.wall_restitution;
            signals.push(Signal::Sound(SoundCue::Bounce));
        }
    }

    ball.vx *= config.ball_friction;
    ball.vy *= config.ball_friction;
    ball.rotation += ball.spin;
}
