use serde::{Deserialize, Serialize};

/// Which goal a score belongs to. Home is the human player (defends the
/// left goal), Away is the pursuit AI (defends the right goal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    /// The side that concedes when this side's goal is crossed.
    pub fn opponent(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

/// Maximum stored length of a team name, in bytes.
pub const TEAM_NAME_MAX: usize = 24;

/// Cosmetic team names shown by the presentation layer. No simulation
/// effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamNames {
    pub home: String,
    pub away: String,
}

impl Default for TeamNames {
    fn default() -> Self {
        Self {
            home: "Home".to_string(),
            away: "Away".to_string(),
        }
    }
}

impl TeamNames {
    pub fn get(&self, side: Side) -> &str {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    /// Set a team name, truncating to `TEAM_NAME_MAX` bytes on a char
    /// boundary.
    pub fn set(&mut self, side: Side, name: &str) {
        let mut end = name.len().min(TEAM_NAME_MAX);
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        if end < name.len() {
            tracing::debug!(?side, "Truncated team name to {end} bytes");
        }
        let capped = name[..end].to_string();
        match side {
            Side::Home => self.home = capped,
            Side::Away => self.away = capped,
        }
    }
}
