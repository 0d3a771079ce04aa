use std::fmt;

use flashcard_core::model::{Card, CardSide, Deck, Locale};

use crate::error::SessionError;
use crate::speech::{SpeechService, Utterance};
use super::intent::SessionIntent;
use super::view::CardFace;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Position and flip state of a viewing session.
///
/// `current_index` is always a valid deck index while the deck has cards and
/// stays 0 for an empty deck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    pub current_index: usize,
    pub is_flipped: bool,
}

impl SessionState {
    /// Side currently facing the viewer.
    #[must_use]
    pub fn side(&self) -> CardSide {
        CardSide::from_flipped(self.is_flipped)
    }
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Flip-and-browse session over a loaded deck.
///
/// Navigation clamps at both ends and a successful move always shows the
/// front of the new card. Nothing here blocks: reading aloud is handed to a
/// `SpeechService` and forgotten.
pub struct CardSession {
    deck: Deck,
    state: SessionState,
}

impl CardSession {
    /// Start at the first card, front side up.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        tracing::debug!(cards = deck.len(), "card session started");
        Self {
            deck,
            state: SessionState::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.state.is_flipped
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Card under the cursor, `None` when the deck is empty.
    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.deck.get(self.state.current_index)
    }

    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.deck
            .last_index()
            .is_some_and(|last| self.state.current_index < last)
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.state.current_index > 0
    }

    /// Toggle between front and back. Never moves the cursor.
    pub fn flip(&mut self) {
        self.state.is_flipped = !self.state.is_flipped;
        tracing::trace!(index = self.state.current_index, flipped = self.state.is_flipped, "flip");
    }

    /// Advance one card. Returns `false` and changes nothing on the last card.
    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            tracing::trace!(index = self.state.current_index, "next ignored at end of deck");
            return false;
        }
        self.move_to(self.state.current_index + 1);
        true
    }

    /// Step back one card. Returns `false` and changes nothing on the first card.
    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            tracing::trace!("previous ignored at start of deck");
            return false;
        }
        self.move_to(self.state.current_index - 1);
        true
    }

    fn move_to(&mut self, index: usize) {
        self.state = SessionState {
            current_index: index,
            is_flipped: false,
        };
        tracing::debug!(index, total = self.deck.len(), "moved to card");
    }

    /// Read one side of the current card aloud.
    ///
    /// The front reads the statement, the back reads the question, both in
    /// `Locale::ITALIAN`. Exactly one utterance is dispatched per call.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the deck has no cards; nothing is spoken.
    pub fn read(&self, side: CardSide, speech: &dyn SpeechService) -> Result<(), SessionError> {
        let card = self.current_card().ok_or(SessionError::Empty)?;
        tracing::debug!(index = self.state.current_index, side = side.label(), "read aloud");
        speech.speak(Utterance::new(card.text(side), Locale::ITALIAN));
        Ok(())
    }

    /// Read the side currently facing the viewer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` if the deck has no cards.
    pub fn read_visible(&self, speech: &dyn SpeechService) -> Result<(), SessionError> {
        self.read(self.state.side(), speech)
    }

    /// Apply a user intent.
    ///
    /// Returns whether the session state changed; reads never change it.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` for read intents on an empty deck.
    pub fn apply(
        &mut self,
        intent: SessionIntent,
        speech: &dyn SpeechService,
    ) -> Result<bool, SessionError> {
        match intent {
            SessionIntent::Flip => {
                self.flip();
                Ok(true)
            }
            SessionIntent::Next => Ok(self.next()),
            SessionIntent::Previous => Ok(self.previous()),
            SessionIntent::Read(side) => self.read(side, speech).map(|()| false),
            SessionIntent::ReadVisible => self.read_visible(speech).map(|()| false),
        }
    }

    /// What the card view should show right now.
    #[must_use]
    pub fn view(&self) -> Option<CardFace<'_>> {
        let card = self.current_card()?;
        let side = self.state.side();
        Some(CardFace {
            side,
            text: card.text(side),
            emojis: card.emojis(side),
            position: self.state.current_index + 1,
            total: self.deck.len(),
            can_go_previous: self.can_go_previous(),
            can_go_next: self.can_go_next(),
        })
    }
}

impl fmt::Debug for CardSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardSession")
            .field("cards_len", &self.deck.len())
            .field("current_index", &self.state.current_index)
            .field("is_flipped", &self.state.is_flipped)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
