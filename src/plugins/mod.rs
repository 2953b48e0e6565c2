pub mod terrain_session;

pub use terrain_session::*;
