use serde::{Deserialize, Serialize};

use crate::config::MatchConfig;

/// Playing field geometry. Goals are vertical openings centered on the
/// left and right walls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
    pub goal_height: f32,
}

impl Field {
    pub fn from_config(config: &MatchConfig) -> Self {
        Self {
            width: config.field_width,
            height: config.field_height,
            goal_height: config.goal_height,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }

    /// Whether a vertical position lies inside the goal opening. The
    /// goal-mouth band is exempt from left/right wall reflection; goal
    /// detection alone decides what happens there.
    pub fn in_goal_mouth(&self, y: f32) -> bool {
        let top = (self.height - self.goal_height) / 2.0;
        y >= top && y <= top + self.goal_height
    }
}
