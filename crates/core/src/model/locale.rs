use std::borrow::Cow;
use std::fmt;

/// Language tag handed to the speech service along with the text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(Cow<'static, str>);

impl Locale {
    /// The voice every read-aloud request uses.
    pub const ITALIAN: Locale = Locale(Cow::Borrowed("it-IT"));

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Primary language subtag, e.g. `it` for `it-IT`.
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split(['-', '_']).next().unwrap_or(self.as_str())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn italian_tag() {
        assert_eq!(Locale::ITALIAN.as_str(), "it-IT");
        assert_eq!(Locale::ITALIAN.language(), "it");
        assert_eq!(Locale::ITALIAN.to_string(), "it-IT");
    }
}
