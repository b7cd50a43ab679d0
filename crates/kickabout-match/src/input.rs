use serde::{Deserialize, Serialize};

use kickabout_core::input::{InputEvent, Key};
use kickabout_core::signal::{Signal, SoundCue};

use crate::World;

/// Current boolean input state, maintained from discrete key events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
    pub kick: bool,
}

/// Apply one discrete input event to the world.
///
/// Key events update `InputState`; left/right key-downs also turn the
/// player immediately. Releasing a held kick button emits the kick sound
/// unconditionally (whether or not a kick landed) and discards the charge.
/// Reset is not handled here; the simulation owner rebuilds the world.
pub fn resolve_event(world: &mut World, event: InputEvent, signals: &mut Vec<Signal>) {
    match event {
        InputEvent::Key { key, pressed } => resolve_key(world, key, pressed, signals),
        InputEvent::PauseToggle => {
            // Deliberately ignores game-over: the pause overlay stays
            // reachable on the final whistle screen.
            world.state.paused = !world.state.paused;
        },
        InputEvent::FullscreenToggle => {
            signals.push(Signal::FullscreenToggled);
        },
        InputEvent::SetTeamName { side, name } => {
            world.state.team_names.set(side, &name);
        },
        InputEvent::Reset => {
            tracing::debug!("Reset event reached the resolver; owner handles it");
        },
    }
}

fn resolve_key(world: &mut World, key: Key, pressed: bool, signals: &mut Vec<Signal>) {
    match key {
        Key::Up => world.input.up = pressed,
        Key::Down => world.input.down = pressed,
        Key::Left => {
            world.input.left = pressed;
            if pressed {
                world.player.facing = -1.0;
            }
        },
        Key::Right => {
            world.input.right = pressed;
            if pressed {
                world.player.facing = 1.0;
            }
        },
        Key::Sprint => world.input.sprint = pressed,
        Key::Kick => {
            if !pressed && world.input.kick {
                signals.push(Signal::Sound(SoundCue::Kick));
            }
            world.input.kick = pressed;
            if !pressed {
                world.kick_charge = 0.0;
            }
        },
    }
}
