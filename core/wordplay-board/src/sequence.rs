/// Words placed in the container, in drop order. Append-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacedSequence {
    words: Vec<String>,
}

impl PlacedSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, word: String) {
        self.words.push(word);
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
