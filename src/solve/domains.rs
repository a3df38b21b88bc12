use std::fmt::{Debug, Formatter};
use std::ops::{Index, IndexMut};

use itertools::Itertools;

use crate::crossword::{Crossword, VariableId, WordId};

/// The candidate words of one variable, kept in word list order
#[derive(Clone, PartialEq, Eq)]
pub struct Domain {
    words: Vec<WordId>,
}

impl Debug for Domain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(&self.words).finish()
    }
}

impl Domain {
    /// Creates a domain with every word of a word list of `word_count` words
    pub fn with_all(word_count: usize) -> Self {
        Self {
            words: (0..word_count).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: WordId) -> bool {
        self.words.binary_search(&word).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = WordId> + '_ {
        self.words.iter().copied()
    }

    /// Keeps only the words for which `f` returns true. Returns the number of words removed.
    pub(crate) fn retain(&mut self, mut f: impl FnMut(WordId) -> bool) -> usize {
        let len = self.words.len();
        self.words.retain(|&word| f(word));
        len - self.words.len()
    }

    /// Removes every word except `word`
    pub(crate) fn restrict_to(&mut self, word: WordId) {
        debug_assert!(self.contains(word));
        self.words.clear();
        self.words.push(word);
    }
}

/// The domain store: candidate words for every variable of a crossword
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domains {
    domains: Vec<Domain>,
}

impl Domains {
    /// Creates a domain for every variable containing the crossword's whole word list
    pub fn new(crossword: &Crossword) -> Self {
        let domain = Domain::with_all(crossword.words().len());
        Self {
            domains: vec![domain; crossword.variable_count()],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (VariableId, &Domain)> {
        self.domains.iter().enumerate()
    }

    /// The first variable without any candidate words
    pub fn first_empty(&self) -> Option<VariableId> {
        self.domains.iter().position(Domain::is_empty)
    }

    /// The total number of candidate words over all variables
    pub fn total_len(&self) -> usize {
        self.domains.iter().map(Domain::len).sum()
    }

    /// The words of a variable's domain as text, for diagnostics
    pub fn words<'a>(&'a self, crossword: &'a Crossword, id: VariableId) -> Vec<&'a str> {
        self.domains[id]
            .iter()
            .map(|word| crossword.word(word).as_str())
            .collect_vec()
    }
}

impl Index<VariableId> for Domains {
    type Output = Domain;

    fn index(&self, id: VariableId) -> &Self::Output {
        &self.domains[id]
    }
}

impl IndexMut<VariableId> for Domains {
    fn index_mut(&mut self, id: VariableId) -> &mut Self::Output {
        &mut self.domains[id]
    }
}

#[cfg(test)]
mod test {
    use super::Domain;

    #[test]
    fn retain() {
        let mut domain = Domain::with_all(5);
        let removed = domain.retain(|word| word % 2 == 0);
        assert_eq!(2, removed);
        assert_eq!(vec![0, 2, 4], domain.iter().collect::<Vec<_>>());
        assert!(domain.contains(2));
        assert!(!domain.contains(3));
    }

    #[test]
    fn restrict_to() {
        let mut domain = Domain::with_all(3);
        domain.restrict_to(1);
        assert_eq!(vec![1], domain.iter().collect::<Vec<_>>());
    }
}
