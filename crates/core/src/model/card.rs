use crate::model::ids::CardId;

//
// ─── CARD SIDE ─────────────────────────────────────────────────────────────────
//

/// Which face of a card is meant.
///
/// The front carries the statement, the back carries the question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardSide {
    #[default]
    Front,
    Back,
}

impl CardSide {
    /// Side shown for a given flip state.
    #[must_use]
    pub fn from_flipped(is_flipped: bool) -> Self {
        if is_flipped { Self::Back } else { Self::Front }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }
}

//
// ─── CARD ──────────────────────────────────────────────────────────────────────
//

/// One statement/question pair with its emoji annotations.
///
/// Immutable after construction. Text is accepted as-is: empty strings and
/// arbitrary emoji content are not rejected.
#[derive(Debug, Clone)]
pub struct Card {
    id: CardId,
    statement: String,
    statement_emojis: Vec<String>,
    question: String,
    question_emojis: Vec<String>,
}

impl Card {
    /// Builds a card and assigns it a fresh process-local id.
    #[must_use]
    pub fn new(
        statement: impl Into<String>,
        statement_emojis: Vec<String>,
        question: impl Into<String>,
        question_emojis: Vec<String>,
    ) -> Self {
        Self {
            id: CardId::new_random(),
            statement: statement.into(),
            statement_emojis,
            question: question.into(),
            question_emojis,
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn statement(&self) -> &str {
        &self.statement
    }

    #[must_use]
    pub fn statement_emojis(&self) -> &[String] {
        &self.statement_emojis
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn question_emojis(&self) -> &[String] {
        &self.question_emojis
    }

    /// Primary text of the given side.
    #[must_use]
    pub fn text(&self, side: CardSide) -> &str {
        match side {
            CardSide::Front => &self.statement,
            CardSide::Back => &self.question,
        }
    }

    /// Emoji glyphs of the given side, in display order.
    #[must_use]
    pub fn emojis(&self, side: CardSide) -> &[String] {
        match side {
            CardSide::Front => &self.statement_emojis,
            CardSide::Back => &self.question_emojis,
        }
    }
}

// `id` is rendering identity only.
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.statement == other.statement
            && self.statement_emojis == other.statement_emojis
            && self.question == other.question
            && self.question_emojis == other.question_emojis
    }
}

impl Eq for Card {}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn emojis(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn sides_resolve_to_matching_fields() {
        let card = Card::new("Il gatto dorme", emojis(&["🐱", "💤"]), "Chi dorme?", emojis(&["❓"]));

        assert_eq!(card.text(CardSide::Front), "Il gatto dorme");
        assert_eq!(card.emojis(CardSide::Front), emojis(&["🐱", "💤"]).as_slice());
        assert_eq!(card.text(CardSide::Back), "Chi dorme?");
        assert_eq!(card.emojis(CardSide::Back), emojis(&["❓"]).as_slice());
    }

    #[test]
    fn equality_ignores_id() {
        let a = Card::new("A", emojis(&["x"]), "B", emojis(&["y"]));
        let b = Card::new("A", emojis(&["x"]), "B", emojis(&["y"]));

        assert_ne!(a.id(), b.id());
        assert_eq!(a, b);
    }

    #[test]
    fn emoji_order_is_significant() {
        let a = Card::new("A", emojis(&["x", "y"]), "B", Vec::new());
        let b = Card::new("A", emojis(&["y", "x"]), "B", Vec::new());
        assert_ne!(a, b);
    }

    #[test]
    fn empty_text_is_accepted() {
        let card = Card::new("", Vec::new(), "", Vec::new());
        assert_eq!(card.statement(), "");
        assert!(card.question_emojis().is_empty());
    }

    #[test]
    fn side_flips_and_maps_from_flag() {
        assert_eq!(CardSide::Front.flipped(), CardSide::Back);
        assert_eq!(CardSide::Back.flipped(), CardSide::Front);
        assert_eq!(CardSide::from_flipped(false), CardSide::Front);
        assert_eq!(CardSide::from_flipped(true), CardSide::Back);
    }
}
