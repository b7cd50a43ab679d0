use serde::{Deserialize, Serialize};

/// Power-up varieties.
///
/// `Sticky` is a reserved variant: it is spawned, collected, and expires
/// like the others but applies no effect yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    Speed,
    Sticky,
    Giant,
}

impl PowerUpKind {
    /// All kinds, for uniform random spawning.
    pub const ALL: [PowerUpKind; 3] = [PowerUpKind::Speed, PowerUpKind::Sticky, PowerUpKind::Giant];
}
