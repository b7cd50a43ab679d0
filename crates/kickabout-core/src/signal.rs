use serde::{Deserialize, Serialize};

use crate::powerup::PowerUpKind;
use crate::team::Side;

/// Audio cues for the sound collaborator. Fire-and-forget; no ordering
/// guarantee within a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    Kick,
    Bounce,
    Goal,
    PowerUp,
}

/// Discrete notifications emitted by the simulation for its external
/// collaborators. Returned from the tick function instead of invoked
/// inline so the core has no audio/render dependency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Signal {
    Sound(SoundCue),
    /// A goal was scored for `side`.
    GoalScored { side: Side },
    /// Score counters changed (fires alongside `GoalScored` and on reset).
    ScoreChanged { home: u32, away: u32 },
    /// A power-up took effect on the player.
    PowerUpApplied { kind: PowerUpKind },
    /// Match time expired; the game-over flag is now set.
    MatchOver,
    /// Presentation relay for the fullscreen toggle input.
    FullscreenToggled,
}
