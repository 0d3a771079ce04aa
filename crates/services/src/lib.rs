#![forbid(unsafe_code)]

pub mod deck_loader;
pub mod error;
pub mod resources;
pub mod sessions;
pub mod speech;

pub use deck_loader::{DEFAULT_DECK_RESOURCE, DeckLoad, DeckLoader, LoadStatus};
pub use error::{DeckLoadError, SessionError};
pub use resources::{BundleDirectory, EmbeddedResources, ResourceProvider};
pub use sessions::{CardFace, CardSession, SessionIntent, SessionState};
pub use speech::{CommandSpeech, LoggingSpeech, RecordingSpeech, SpeechService, Utterance};
