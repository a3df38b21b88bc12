use std::fmt;
use std::fmt::Display;
use std::fs;
use std::io;
use std::ops::Index;
use std::path::Path;

use itertools::Itertools;

use crate::crossword::WordId;

/// A word that may be placed in a slot
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: Box<[char]>,
}

impl Word {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let letters = text.chars().collect();
        Self { text, letters }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The number of letters in the word
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn letter(&self, index: usize) -> Option<char> {
        self.letters.get(index).copied()
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The vocabulary used to fill a crossword
///
/// Words are distinct and keep the order they were first listed in. A word's
/// position in the list is its [`WordId`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WordList {
    words: Vec<Word>,
}

impl WordList {
    /// Creates a word list, dropping repeated words
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let words = words
            .into_iter()
            .map(Into::<String>::into)
            .unique()
            .map(Word::new)
            .collect();
        Self { words }
    }

    /// Parses a word list with one word per line. Words are upper-cased and blank lines are skipped.
    pub fn parse(s: &str) -> Self {
        Self::new(
            s.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_uppercase),
        )
    }

    pub fn from_file(path: impl AsRef<Path>) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::parse(&contents))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WordId, &Word)> {
        self.words.iter().enumerate()
    }
}

impl Index<WordId> for WordList {
    type Output = Word;

    fn index(&self, id: WordId) -> &Self::Output {
        &self.words[id]
    }
}

#[cfg(test)]
mod test {
    use super::{Word, WordList};

    #[test]
    fn parse() {
        let words = WordList::parse("one\n  Two \n\nthree\nONE\n");
        let words: Vec<_> = words.iter().map(|(_, w)| w.as_str()).collect();
        assert_eq!(vec!["ONE", "TWO", "THREE"], words);
    }

    #[test]
    fn ids_follow_first_occurrence() {
        let words = WordList::new(vec!["B", "A", "B", "C"]);
        assert_eq!(3, words.len());
        assert_eq!("A", words[1].as_str());
        assert_eq!("C", words[2].as_str());
    }

    #[test]
    fn letters_count_chars() {
        let word = Word::new("ÉTÉ");
        assert_eq!(3, word.len());
        assert_eq!(Some('T'), word.letter(1));
        assert_eq!(None, word.letter(3));
    }
}
