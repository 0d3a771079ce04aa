use flashcard_core::model::CardSide;

/// User actions the presentation layer forwards to a `CardSession`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionIntent {
    Flip,
    Next,
    Previous,
    Read(CardSide),
    ReadVisible,
}

impl SessionIntent {
    /// Map a typed command (`f`, `n`, `p`, `r`, `rf`, `rb`) to an intent.
    #[must_use]
    pub fn from_command(command: &str) -> Option<Self> {
        match command.trim() {
            "f" | "flip" => Some(Self::Flip),
            "n" | "next" => Some(Self::Next),
            "p" | "prev" | "previous" => Some(Self::Previous),
            "r" | "read" => Some(Self::ReadVisible),
            "rf" => Some(Self::Read(CardSide::Front)),
            "rb" => Some(Self::Read(CardSide::Back)),
            _ => None,
        }
    }
}
