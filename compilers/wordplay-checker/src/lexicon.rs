use std::collections::BTreeMap;

use thiserror::Error;
use wordplay_protocol::{GrammarRole, Lexicon};

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("word '{0}' is listed more than once")]
    DuplicateWord(String),
    #[error("lexicon entry {0} has an empty word")]
    EmptyWord(usize),
    #[error("lexicon archive failed validation: {0}")]
    InvalidArchive(String),
}

/// Word -> role lookup built once from a [`Lexicon`].
#[derive(Debug, Clone, Default)]
pub struct LexiconIndex {
    roles: BTreeMap<String, GrammarRole>,
}

impl LexiconIndex {
    pub fn builtin() -> Self {
        let lexicon = Lexicon::builtin();
        Self {
            roles: lexicon
                .entries
                .into_iter()
                .map(|entry| (entry.word, entry.role))
                .collect(),
        }
    }

    pub fn from_lexicon(lexicon: &Lexicon) -> Result<Self, LexiconError> {
        let mut roles = BTreeMap::new();

        for (i, entry) in lexicon.entries.iter().enumerate() {
            if entry.word.is_empty() {
                return Err(LexiconError::EmptyWord(i));
            }
            if roles.insert(entry.word.clone(), entry.role).is_some() {
                return Err(LexiconError::DuplicateWord(entry.word.clone()));
            }
        }

        tracing::debug!(version = lexicon.version, words = roles.len(), "lexicon indexed");
        Ok(Self { roles })
    }

    /// Loads an rkyv archive produced by `lexicon-compiler`, validating it first.
    pub fn from_archive(bytes: &[u8]) -> Result<Self, LexiconError> {
        // Buffers handed over from JS carry no alignment guarantee
        let mut aligned = rkyv::AlignedVec::with_capacity(bytes.len());
        aligned.extend_from_slice(bytes);

        let lexicon = rkyv::from_bytes::<Lexicon>(&aligned)
            .map_err(|e| LexiconError::InvalidArchive(e.to_string()))?;

        Self::from_lexicon(&lexicon)
    }

    pub fn role_of(&self, word: &str) -> Option<GrammarRole> {
        self.roles.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
