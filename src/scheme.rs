use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::case::{lowercase, sentencecase, titlecase, uppercase};
use crate::errors::UnsupportedScheme;

/// Capitalization scheme.
///
/// See [crate documentation](index.html) for examples.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    Sentence,
    Title,
    Upper,
    Lower,
}

impl Scheme {
    pub const ALL: [Scheme; 4] = [Scheme::Sentence, Scheme::Title, Scheme::Upper, Scheme::Lower];

    /// The identifier this scheme is selected by.
    pub fn name(self) -> &'static str {
        match self {
            Scheme::Sentence => "sentence",
            Scheme::Title => "title",
            Scheme::Upper => "upper",
            Scheme::Lower => "lower",
        }
    }

    /// All scheme identifiers in alphabetical order.
    pub fn names() -> Vec<&'static str> {
        let mut names: Vec<_> = Self::ALL.iter().map(|s| s.name()).collect();
        names.sort_unstable();
        names
    }

    /// Rewrite the casing of `text` according to this scheme.
    pub fn apply(self, text: &str) -> String {
        match self {
            Scheme::Sentence => sentencecase(text),
            Scheme::Title => titlecase(text),
            Scheme::Upper => uppercase(text),
            Scheme::Lower => lowercase(text),
        }
    }
}

impl Default for Scheme {
    fn default() -> Self {
        Scheme::Sentence
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = UnsupportedScheme;

    /// Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|scheme| scheme.name() == wanted)
            .ok_or_else(|| UnsupportedScheme {
                name: s.to_owned(),
                valid: Self::names(),
            })
    }
}

/// Resolve the scheme named `scheme` and apply it to `text`.
///
/// Nothing is transformed if the name is not recognized.
pub fn transform(scheme: &str, text: &str) -> Result<String, UnsupportedScheme> {
    let scheme: Scheme = scheme.parse()?;
    debug!(%scheme, bytes = text.len(), "transforming text");
    Ok(scheme.apply(text))
}
