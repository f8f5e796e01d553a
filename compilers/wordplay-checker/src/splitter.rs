use nom::{
    bytes::complete::take_while1,
    character::complete::multispace0,
    IResult,
};

/// Letters, digits and the joiners found inside English words.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\'' || c == '-'
}

fn word(input: &str) -> IResult<&str, &str> {
    take_while1(is_word_char)(input)
}

/// Splits typed text into the words a player would have placed as tiles.
/// Whitespace and punctuation separate words and are dropped.
pub fn split_words(original_input: &str) -> Vec<&str> {
    let mut input = original_input;
    let mut result = Vec::new();

    loop {
        // 1. Skip whitespace
        let (next_input, _) = match multispace0::<&str, nom::error::Error<&str>>(input) {
            Ok(res) => res,
            Err(_) => break,
        };
        input = next_input;

        if input.is_empty() {
            break;
        }

        // 2. Take a word, or skip one separator char
        match word(input) {
            Ok((next_input, w)) => {
                result.push(w);
                input = next_input;
            }
            Err(_) => {
                if let Some(c) = input.chars().next() {
                    input = &input[c.len_utf8()..];
                } else {
                    break;
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_sentence() {
        assert_eq!(split_words("A big dog jumps"), vec!["A", "big", "dog", "jumps"]);
    }

    #[test]
    fn test_punctuation_is_dropped() {
        assert_eq!(
            split_words("  The cute cat, smiles!  "),
            vec!["The", "cute", "cat", "smiles"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(split_words("   ").is_empty());
        assert!(split_words("?!.").is_empty());
    }
}
