use flashcard_core::model::{CardRecord, Deck};

use crate::error::DeckLoadError;
use crate::resources::ResourceProvider;

/// Resource name of the bundled deck.
pub const DEFAULT_DECK_RESOURCE: &str = "questions.json";

/// How a deck came to be, so an empty deck after a failure can be told
/// apart from a deck that really has no cards.
#[derive(Debug)]
pub enum LoadStatus {
    Loaded,
    Missing,
    Failed(DeckLoadError),
}

/// Deck plus the outcome that produced it.
#[derive(Debug)]
pub struct DeckLoad {
    pub deck: Deck,
    pub status: LoadStatus,
}

impl DeckLoad {
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !matches!(self.status, LoadStatus::Loaded)
    }

    #[must_use]
    pub fn into_deck(self) -> Deck {
        self.deck
    }
}

/// Turns deck documents into `Deck`s.
///
/// Compiled-in data goes through here as well, so sessions never depend on
/// where their cards came from.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeckLoader;

impl DeckLoader {
    /// Decode a deck document.
    ///
    /// Record order becomes deck order; emoji order is kept as given.
    ///
    /// # Errors
    ///
    /// Returns `DeckLoadError::Empty` for an empty document and
    /// `DeckLoadError::Decode` when it is not a list of card records.
    pub fn try_load(bytes: &[u8]) -> Result<Deck, DeckLoadError> {
        if bytes.is_empty() {
            return Err(DeckLoadError::Empty);
        }

        let records: Vec<CardRecord> = serde_json::from_slice(bytes)?;
        let deck: Deck = records.into_iter().map(CardRecord::into_card).collect();
        tracing::debug!(cards = deck.len(), "deck decoded");
        Ok(deck)
    }

    /// Load a deck, falling back to an empty deck on any failure.
    #[must_use]
    pub fn load(source: Option<&[u8]>) -> Deck {
        let Some(bytes) = source else {
            tracing::warn!("no deck source; using empty deck");
            return Deck::empty();
        };

        Self::try_load(bytes).unwrap_or_else(|err| {
            tracing::warn!(%err, "deck failed to load; using empty deck");
            Deck::empty()
        })
    }

    /// Deck compiled into the binary.
    #[must_use]
    pub fn embedded(bytes: &'static [u8]) -> Deck {
        Self::load(Some(bytes))
    }

    /// Load a named deck from a resource provider, keeping the outcome.
    #[must_use]
    pub fn load_resource(resources: &dyn ResourceProvider, name: &str) -> DeckLoad {
        let Some(bytes) = resources.load_bytes(name) else {
            tracing::warn!(name, "deck resource missing; using empty deck");
            return DeckLoad {
                deck: Deck::empty(),
                status: LoadStatus::Missing,
            };
        };

        match Self::try_load(&bytes) {
            Ok(deck) => DeckLoad {
                deck,
                status: LoadStatus::Loaded,
            },
            Err(err) => {
                tracing::warn!(name, %err, "deck resource failed to decode; using empty deck");
                DeckLoad {
                    deck: Deck::empty(),
                    status: LoadStatus::Failed(err),
                }
            }
        }
    }
}
