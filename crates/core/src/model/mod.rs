mod card;
mod deck;
mod ids;
mod locale;
mod record;

pub use card::{Card, CardSide};
pub use deck::Deck;
pub use ids::CardId;
pub use locale::Locale;
pub use record::CardRecord;
