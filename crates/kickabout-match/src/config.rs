use serde::{Deserialize, Serialize};

/// Data-driven configuration for a match.
///
/// Velocities and blend coefficients are per tick at the fixed tick rate;
/// rates and durations are per second.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Field width (units).
    pub field_width: f32,
    /// Field height (units).
    pub field_height: f32,
    /// Vertical extent of each goal opening, centered on the field.
    pub goal_height: f32,
    /// Player body radius.
    pub player_radius: f32,
    /// Player walking speed (units/tick).
    pub player_base_speed: f32,
    /// Player sprint speed ceiling (units/tick).
    pub player_max_speed: f32,
    /// Player velocity blend coefficient per tick (0..1).
    pub player_accel: f32,
    /// Per-axis velocity retention per tick when that axis has no input.
    pub player_decel: f32,
    /// AI body radius.
    pub ai_radius: f32,
    /// AI pursuit speed (units/tick).
    pub ai_speed: f32,
    /// AI velocity blend coefficient per tick (0..1).
    pub ai_accel: f32,
    /// Ball radius.
    pub ball_radius: f32,
    /// Ball velocity retention per tick.
    pub ball_friction: f32,
    /// Fraction of velocity kept after a wall bounce.
    pub wall_restitution: f32,
    /// Minimum kick power; uncharged kicks fire at this.
    pub kick_power_min: f32,
    /// Maximum charged kick power.
    pub kick_power_max: f32,
    /// Kick charge growth rate (power units/s while held).
    pub kick_charge_rate: f32,
    /// Fixed power of the AI's touch on the ball.
    pub ai_kick_power: f32,
    /// Ball spin per unit of perpendicular kick velocity.
    pub spin_factor: f32,
    /// Probability of a power-up spawn attempt succeeding each tick.
    pub powerup_spawn_chance: f32,
    /// Active duration of a collected power-up (seconds).
    pub powerup_duration_secs: f32,
    /// Inset from the field edges for spawn positions.
    pub powerup_margin: f32,
    /// Pickup radius added to the player radius for collection.
    pub powerup_pickup_radius: f32,
    /// Attribute multiplier applied by speed/giant power-ups.
    pub powerup_boost: f32,
    /// Match length in seconds.
    pub match_duration_secs: u32,
    /// Simulation tick rate in Hz.
    pub tick_rate: f32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            field_width: 800.0,
            field_height: 500.0,
            goal_height: 140.0,
            player_radius: 20.0,
            player_base_speed: 4.0,
            player_max_speed: 7.0,
            player_accel: 0.2,
            player_decel: 0.85,
            ai_radius: 20.0,
            ai_speed: 3.5,
            ai_accel: 0.12,
            ball_radius: 12.0,
            ball_friction: 0.985,
            wall_restitution: 0.8,
            kick_power_min: 10.0,
            kick_power_max: 20.0,
            kick_charge_rate: 25.0,
            ai_kick_power: 12.0,
            spin_factor: 0.08,
            powerup_spawn_chance: 0.008,
            powerup_duration_secs: 8.0,
            powerup_margin: 40.0,
            powerup_pickup_radius: 12.0,
            powerup_boost: 1.5,
            match_duration_secs: 180,
            tick_rate: 60.0,
        }
    }
}

impl MatchConfig {
    /// Load config from environment or TOML file, falling back to defaults.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("KICKABOUT_MATCH_CONFIG")
            && let Ok(contents) = std::fs::read_to_string(&path)
            && let Ok(config) = toml::from_str::<Self>(&contents)
        {
            return config;
        }
        if let Ok(contents) = std::fs::read_to_string("config/match.toml")
            && let Ok(config) = toml::from_str::<Self>(&contents)
        {
            return config;
        }
        Self::default()
    }
}
