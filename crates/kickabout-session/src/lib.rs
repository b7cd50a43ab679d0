pub mod session;

pub use session::{SessionBroadcast, SessionCommand, spawn_session};
