use core::fmt;

use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Grammatical category a known word belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum GrammarRole {
    Article = 0,
    Adjective = 1,
    Noun = 2,
    Verb = 3,
}

impl GrammarRole {
    pub const ALL: [GrammarRole; 4] = [
        GrammarRole::Article,
        GrammarRole::Adjective,
        GrammarRole::Noun,
        GrammarRole::Verb,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GrammarRole::Article => "Article",
            GrammarRole::Adjective => "Adjective",
            GrammarRole::Noun => "Noun",
            GrammarRole::Verb => "Verb",
        }
    }
}

impl fmt::Display for GrammarRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The only role sequence accepted as a correct sentence.
pub const REQUIRED_PATTERN: [GrammarRole; 4] = GrammarRole::ALL;
