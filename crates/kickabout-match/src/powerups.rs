use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use kickabout_core::powerup::PowerUpKind;
use kickabout_core::signal::{Signal, SoundCue};

use crate::World;
use crate::config::MatchConfig;
use crate::physics::MovableBody;

/// Maximum number of uncollected power-ups on the field at once.
pub const MAX_PENDING: usize = 2;

/// A power-up on the field. Pending until collected; once collected the
/// countdown runs and the effect is reverted at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub x: f32,
    pub y: f32,
    pub kind: PowerUpKind,
    pub duration: f32,
    pub remaining: f32,
    pub collected: bool,
}

impl PowerUp {
    pub fn new(x: f32, y: f32, kind: PowerUpKind, duration: f32) -> Self {
        Self {
            x,
            y,
            kind,
            duration,
            remaining: duration,
            collected: false,
        }
    }
}

/// Advance the power-up lifecycle one tick: spawn roll, pickups, expiry.
pub fn update(
    world: &mut World,
    config: &MatchConfig,
    rng: &mut StdRng,
    dt: f32,
    signals: &mut Vec<Signal>,
) {
    spawn_roll(world, config, rng);

    let World {
        player, powerups, ..
    } = world;

    for pu in powerups.iter_mut() {
        if pu.collected {
            continue;
        }
        let dx = player.x - pu.x;
        let dy = player.y - pu.y;
        let reach = player.radius + config.powerup_pickup_radius;
        if (dx * dx + dy * dy).sqrt() < reach {
            pu.collected = true;
            pu.remaining = pu.duration;
            apply_effect(player, pu.kind, config);
            signals.push(Signal::Sound(SoundCue::PowerUp));
            signals.push(Signal::PowerUpApplied { kind: pu.kind });
        }
    }

    for pu in powerups.iter_mut() {
        if pu.collected {
            pu.remaining -= dt;
            if pu.remaining <= 0.0 {
                revert_effect(player, pu.kind);
            }
        }
    }
    powerups.retain(|pu| !pu.collected || pu.remaining > 0.0);
}

/// Maybe spawn a new power-up this tick. Capped at `MAX_PENDING`
/// uncollected ones; position is uniform inside the margin-inset field.
fn spawn_roll(world: &mut World, config: &MatchConfig, rng: &mut StdRng) {
    let pending = world.powerups.iter().filter(|pu| !pu.collected).count();
    if pending >= MAX_PENDING || rng.random::<f32>() >= config.powerup_spawn_chance {
        return;
    }

    let m = config.powerup_margin;
    let x = rng.random_range(m..config.field_width - m);
    let y = rng.random_range(m..config.field_height - m);
    let kind = PowerUpKind::ALL[rng.random_range(0..PowerUpKind::ALL.len())];
    world
        .powerups
        .push(PowerUp::new(x, y, kind, config.powerup_duration_secs));
}

fn apply_effect(player: &mut MovableBody, kind: PowerUpKind, config: &MatchConfig) {
    match kind {
        PowerUpKind::Speed => player.max_speed *= config.powerup_boost,
        PowerUpKind::Giant => player.radius *= config.powerup_boost,
        // Reserved: ball retention is not implemented yet.
        PowerUpKind::Sticky => {},
    }
}

/// Expiry restores the canonical base value outright; stacked effects of
/// the same kind collapse to the base on the first expiry. Known
/// simplification, kept as-is.
fn revert_effect(player: &mut MovableBody, kind: PowerUpKind) {
    match kind {
        PowerUpKind::Speed => player.max_speed = player.base_max_speed,
        PowerUpKind::Giant => player.radius = player.base_radius,
        PowerUpKind::Sticky => {},
    }
}
