use wordplay_protocol::GrammarRole;

pub const LENGTH_MISMATCH_MESSAGE: &str =
    "Invalid sentence! Please use exactly one article, adjective, noun, and verb.";
pub const CORRECT_MESSAGE: &str = "Correct sentence! 🎉";
pub const INCORRECT_MESSAGE: &str =
    "Incorrect sentence! Please follow the structure: Article -> Adjective -> Noun -> Verb.";

/// One position where the placed word does not have the required role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub position: usize,
    pub word: String,
    pub expected: GrammarRole,
    /// `None` when the word is not in the lexicon
    pub found: Option<GrammarRole>,
}

impl Mismatch {
    pub fn is_unknown_word(&self) -> bool {
        self.found.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    LengthMismatch { expected: usize, found: usize },
    Correct,
    Incorrect { mismatches: Vec<Mismatch> },
}

impl Verdict {
    /// Text shown to the player in the notification overlay.
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::LengthMismatch { .. } => LENGTH_MISMATCH_MESSAGE,
            Verdict::Correct => CORRECT_MESSAGE,
            Verdict::Incorrect { .. } => INCORRECT_MESSAGE,
        }
    }

    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Verdict::LengthMismatch { .. } => "LengthMismatch",
            Verdict::Correct => "Correct",
            Verdict::Incorrect { .. } => "Incorrect",
        }
    }
}
