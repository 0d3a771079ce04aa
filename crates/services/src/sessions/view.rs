use flashcard_core::model::CardSide;

/// Read-only snapshot of the visible card face, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFace<'a> {
    pub side: CardSide,
    pub text: &'a str,
    pub emojis: &'a [String],
    /// 1-based.
    pub position: usize,
    pub total: usize,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

impl CardFace<'_> {
    /// `"2 / 5"` style counter.
    #[must_use]
    pub fn counter(&self) -> String {
        format!("{} / {}", self.position, self.total)
    }

    /// Emojis joined with spaces, in display order.
    #[must_use]
    pub fn emoji_line(&self) -> String {
        self.emojis.join(" ")
    }
}
