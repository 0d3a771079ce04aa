mod intent;
mod service;
mod view;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use intent::SessionIntent;
pub use service::{CardSession, SessionState};
pub use view::CardFace;
