use serde::{Deserialize, Serialize};

use crate::model::card::Card;

/// Serialized shape of one card in a deck document.
///
/// Field names follow the bundled JSON asset. Extra fields are ignored,
/// missing fields make the whole document fail to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    pub statement: String,
    pub statement_emojis: Vec<String>,
    pub question: String,
    pub question_emojis: Vec<String>,
}

impl CardRecord {
    #[must_use]
    pub fn from_card(card: &Card) -> Self {
        Self {
            statement: card.statement().to_owned(),
            statement_emojis: card.statement_emojis().to_vec(),
            question: card.question().to_owned(),
            question_emojis: card.question_emojis().to_vec(),
        }
    }

    /// Convert the record into a domain `Card` with a fresh id.
    #[must_use]
    pub fn into_card(self) -> Card {
        Card::new(
            self.statement,
            self.statement_emojis,
            self.question,
            self.question_emojis,
        )
    }
}
