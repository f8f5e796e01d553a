use rkyv::{Archive, Deserialize, Serialize};
use crate::grammar::GrammarRole;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct WordEntry {
    pub word: String,
    pub role: GrammarRole,
}

impl WordEntry {
    pub fn new(word: &str, role: GrammarRole) -> Self {
        Self { word: word.to_string(), role }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
pub struct Lexicon {
    pub version: u32,
    pub entries: Vec<WordEntry>,
}

const BUILTIN: &[(&str, GrammarRole)] = &[
    ("A", GrammarRole::Article),
    ("The", GrammarRole::Article),
    ("big", GrammarRole::Adjective),
    ("small", GrammarRole::Adjective),
    ("cute", GrammarRole::Adjective),
    ("playful", GrammarRole::Adjective),
    ("dog", GrammarRole::Noun),
    ("cat", GrammarRole::Noun),
    ("boy", GrammarRole::Noun),
    ("girl", GrammarRole::Noun),
    ("jumps", GrammarRole::Verb),
    ("smiles", GrammarRole::Verb),
    ("hides", GrammarRole::Verb),
];

impl Lexicon {
    /// The word set shipped with the game page.
    pub fn builtin() -> Self {
        Self {
            version: 1,
            entries: BUILTIN
                .iter()
                .map(|(word, role)| WordEntry::new(word, *role))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_role() {
        let lexicon = Lexicon::builtin();
        assert_eq!(lexicon.entries.len(), 13);
        for role in GrammarRole::ALL {
            assert!(lexicon.entries.iter().any(|e| e.role == role), "no word for {role}");
        }
    }
}
