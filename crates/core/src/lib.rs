#![forbid(unsafe_code)]

pub mod model;

pub use model::{Card, CardId, CardRecord, CardSide, Deck, Locale};
