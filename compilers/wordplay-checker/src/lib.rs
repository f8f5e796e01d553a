pub mod lexicon;
pub mod splitter;
pub mod verdict;

pub use lexicon::{LexiconError, LexiconIndex};
pub use splitter::split_words;
pub use verdict::{Mismatch, Verdict};

use wordplay_protocol::REQUIRED_PATTERN;

/// Classifies every placed word and compares the roles to the required pattern.
///
/// Words missing from the lexicon have no role, so they can never match and
/// always end up as a mismatch. They still count towards the length.
pub fn check<S: AsRef<str>>(words: &[S], lexicon: &LexiconIndex) -> Verdict {
    if words.len() != REQUIRED_PATTERN.len() {
        tracing::debug!(found = words.len(), "sentence has the wrong number of words");
        return Verdict::LengthMismatch {
            expected: REQUIRED_PATTERN.len(),
            found: words.len(),
        };
    }

    let mismatches: Vec<Mismatch> = words
        .iter()
        .zip(REQUIRED_PATTERN.iter())
        .enumerate()
        .filter_map(|(position, (word, expected))| {
            let word = word.as_ref();
            let found = lexicon.role_of(word);
            (found != Some(*expected)).then(|| Mismatch {
                position,
                word: word.to_string(),
                expected: *expected,
                found,
            })
        })
        .collect();

    if mismatches.is_empty() {
        Verdict::Correct
    } else {
        Verdict::Incorrect { mismatches }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use wordplay_protocol::GrammarRole;

    fn builtin() -> LexiconIndex {
        LexiconIndex::builtin()
    }

    #[test]
    fn test_correct_sentence() {
        let verdict = check(&["A", "big", "dog", "jumps"], &builtin());
        assert_eq!(verdict, Verdict::Correct);
        assert_eq!(verdict.message(), "Correct sentence! 🎉");
    }

    #[test]
    fn test_swapped_words_are_incorrect() {
        let verdict = check(&["big", "A", "dog", "jumps"], &builtin());

        match verdict {
            Verdict::Incorrect { ref mismatches } => {
                assert_eq!(mismatches.len(), 2);
                assert_eq!(mismatches[0].position, 0);
                assert_eq!(mismatches[0].found, Some(GrammarRole::Adjective));
                assert_eq!(mismatches[1].expected, GrammarRole::Adjective);
            }
            other => panic!("Expected Incorrect, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_word_is_incorrect() {
        let verdict = check(&["A", "big", "unicorn", "jumps"], &builtin());

        // Unknown words fold into Incorrect, flagged by the missing role
        let Verdict::Incorrect { mismatches } = verdict else {
            panic!("Expected Incorrect");
        };
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].word, "unicorn");
        assert_eq!(mismatches[0].found, None);
        assert!(mismatches[0].is_unknown_word());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let verdict = check(&["a", "big", "dog", "jumps"], &builtin());
        assert!(matches!(verdict, Verdict::Incorrect { .. }));
    }

    #[test]
    fn test_empty_sentence() {
        let words: [&str; 0] = [];
        assert_eq!(
            check(&words, &builtin()),
            Verdict::LengthMismatch { expected: 4, found: 0 }
        );
    }

    proptest! {
        #[test]
        fn test_wrong_length_always_mismatches(
            words in prop::collection::vec("[A-Za-z]{1,8}", 0..12usize)
                .prop_filter("length four is checked by role", |w| w.len() != 4)
        ) {
            let verdict = check(&words, &builtin());
            prop_assert!(
                matches!(verdict, Verdict::LengthMismatch { found, .. } if found == words.len()),
                "unexpected verdict {:?}",
                verdict
            );
        }
    }
}
