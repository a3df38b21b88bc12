use ahash::AHashSet;
use itertools::Itertools;

use crate::crossword::{Crossword, Variable, VariableId, Word, WordId};

/// A partial mapping from variables to words
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignment {
    words: Vec<Option<WordId>>,
    len: usize,
}

impl Assignment {
    /// Creates an empty assignment for a crossword with `variable_count` variables
    pub fn new(variable_count: usize) -> Self {
        Self {
            words: vec![None; variable_count],
            len: 0,
        }
    }

    pub fn get(&self, id: VariableId) -> Option<WordId> {
        self.words[id]
    }

    pub fn contains(&self, id: VariableId) -> bool {
        self.words[id].is_some()
    }

    /// The number of assigned variables
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if every variable has a word
    pub fn is_complete(&self) -> bool {
        self.len == self.words.len()
    }

    /// Assigns a word to a variable. Returns the word previously assigned, if any.
    pub fn insert(&mut self, id: VariableId, word: WordId) -> Option<WordId> {
        let previous = self.words[id].replace(word);
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    pub fn remove(&mut self, id: VariableId) -> Option<WordId> {
        let previous = self.words[id].take();
        if previous.is_some() {
            self.len -= 1;
        }
        previous
    }

    /// Assigned variables and their words, in variable order
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, WordId)> + '_ {
        self.words
            .iter()
            .enumerate()
            .filter_map(|(id, word)| word.map(|word| (id, word)))
    }

    /// Assigned variables and their words, resolved against the crossword
    pub fn words<'a>(
        &'a self,
        crossword: &'a Crossword,
    ) -> impl Iterator<Item = (Variable, &'a Word)> + 'a {
        self.iter()
            .map(move |(id, word)| (crossword.variable(id), crossword.word(word)))
    }

    /// Returns true if `word` can be assigned to the unassigned variable `id` without breaking a
    /// constraint with the words already assigned
    pub fn admits(&self, crossword: &Crossword, id: VariableId, word: WordId) -> bool {
        let candidate = crossword.word(word);
        if candidate.len() != crossword.variable(id).length() {
            return false;
        }
        if self.iter().any(|(other, w)| other != id && w == word) {
            return false;
        }
        crossword.neighbors(id).iter().all(|&neighbor| {
            let assigned = match self.get(neighbor) {
                Some(w) => crossword.word(w),
                None => return true,
            };
            let overlap = crossword
                .overlap(id, neighbor)
                .expect("neighbors must overlap");
            letters_agree(candidate, assigned, overlap.i, overlap.j)
        })
    }

    /// Checks every constraint over the whole assignment: words are distinct, every word fits its
    /// slot, and every pair of assigned crossing slots agree on the shared letter
    pub fn is_consistent(&self, crossword: &Crossword) -> bool {
        let mut seen: AHashSet<WordId> = AHashSet::default();
        if !self.iter().all(|(_, word)| seen.insert(word)) {
            return false;
        }
        if !self
            .words(crossword)
            .all(|(variable, word)| variable.length() == word.len())
        {
            return false;
        }
        let assigned: Vec<_> = self.iter().collect();
        assigned.iter().tuple_combinations().all(|(&(x, x_word), &(y, y_word))| {
            match crossword.overlap(x, y) {
                None => true,
                Some(overlap) => letters_agree(
                    crossword.word(x_word),
                    crossword.word(y_word),
                    overlap.i,
                    overlap.j,
                ),
            }
        })
    }
}

fn letters_agree(x: &Word, y: &Word, i: usize, j: usize) -> bool {
    match (x.letter(i), y.letter(j)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::Assignment;
    use crate::crossword::Crossword;

    fn crossword() -> Crossword {
        // 0: down (0, 1) length 5, 1: across (0, 1) length 3
        // 2: down (1, 4) length 4, 3: across (4, 1) length 4
        Crossword::parse(
            "#___#\n#_##_\n#_##_\n#_##_\n#____\n",
            "six\nseven\nnine\nfive\nten\nthree",
        )
        .unwrap()
    }

    #[test]
    fn insert_and_remove() {
        let mut assignment = Assignment::new(3);
        assert!(assignment.is_empty());
        assert_eq!(None, assignment.insert(1, 4));
        assert_eq!(Some(4), assignment.insert(1, 5));
        assert_eq!(1, assignment.len());
        assert_eq!(Some(5), assignment.get(1));
        assert_eq!(Some(5), assignment.remove(1));
        assert_eq!(None, assignment.remove(1));
        assert!(assignment.is_empty());
    }

    #[test]
    fn is_complete() {
        let mut assignment = Assignment::new(2);
        assignment.insert(0, 0);
        assert!(!assignment.is_complete());
        assignment.insert(1, 1);
        assert!(assignment.is_complete());
    }

    #[test]
    fn admits() {
        let crossword = crossword();
        let mut assignment = Assignment::new(crossword.variable_count());
        assignment.insert(0, 1); // SEVEN
        assert!(assignment.admits(&crossword, 1, 0)); // SIX
        assert!(!assignment.admits(&crossword, 1, 4)); // TEN
        assert!(!assignment.admits(&crossword, 1, 1)); // wrong length
        assert!(assignment.admits(&crossword, 3, 2)); // NINE
        assignment.insert(3, 2);
        assert!(assignment.admits(&crossword, 2, 3)); // FIVE
        assert!(!assignment.admits(&crossword, 2, 2)); // NINE is taken
    }

    #[test]
    fn is_consistent() {
        let crossword = crossword();
        let mut assignment = Assignment::new(crossword.variable_count());
        assignment.insert(0, 1);
        assignment.insert(1, 0);
        assignment.insert(3, 2);
        assignment.insert(2, 3);
        assert!(assignment.is_consistent(&crossword));
        assignment.insert(1, 4);
        assert!(!assignment.is_consistent(&crossword));
        assignment.insert(1, 0);
        assignment.insert(2, 2);
        assert!(!assignment.is_consistent(&crossword));
    }

    #[test]
    fn is_consistent_rejects_repeated_words() {
        // NINE agrees with itself where the slots cross, so only distinctness fails
        let crossword = crossword();
        let mut assignment = Assignment::new(crossword.variable_count());
        assignment.insert(2, 2);
        assert!(assignment.is_consistent(&crossword));
        assignment.insert(3, 2);
        assert!(!assignment.is_consistent(&crossword));
        assignment.insert(3, 3);
        assert!(assignment.is_consistent(&crossword));
    }
}
