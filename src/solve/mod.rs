//! Fill crosswords: node consistency, arc consistency, then backtracking search

pub use self::arc_consistency::{ac3, ac3_with_arcs, all_arcs, revise, Arc, ArcConsistency};
pub use self::assignment::Assignment;
pub use self::domains::{Domain, Domains};
pub use self::node_consistency::enforce_node_consistency;
pub use self::search::SearchStatistics;

use crate::crossword::{Crossword, VariableId};
use crate::error::SolveError;

use self::search::{search_solution, SearchResult};

mod arc_consistency;
mod assignment;
mod domains;
mod node_consistency;
mod search;

#[derive(Debug)]
pub enum SolveResult {
    /// Every slot has a word
    Solved(SolvedData),
    /// No fill satisfies every constraint
    Unsolvable(Unsolvable),
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved(_))
    }

    pub fn solved(&self) -> Option<&SolvedData> {
        match self {
            SolveResult::Solved(data) => Some(data),
            SolveResult::Unsolvable(_) => None,
        }
    }

    pub fn unsolvable(&self) -> Option<Unsolvable> {
        match *self {
            SolveResult::Solved(_) => None,
            SolveResult::Unsolvable(reason) => Some(reason),
        }
    }

    pub fn into_assignment(self) -> Option<Assignment> {
        match self {
            SolveResult::Solved(data) => Some(data.assignment),
            SolveResult::Unsolvable(_) => None,
        }
    }
}

#[derive(Debug)]
pub struct SolvedData {
    pub assignment: Assignment,
    pub statistics: SearchStatistics,
}

/// Why a crossword has no fill
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unsolvable {
    /// No word can be placed in the variable before search begins
    InfeasibleDomain(VariableId),
    /// Search tried every consistent assignment without completing one
    SearchExhausted,
}

pub struct CrosswordSolver<'a> {
    crossword: &'a Crossword,
    maintain_arc_consistency: bool,
    domains: Domains,
}

impl<'a> CrosswordSolver<'a> {
    pub fn new(crossword: &'a Crossword) -> Self {
        Self {
            crossword,
            maintain_arc_consistency: false,
            domains: Domains::new(crossword),
        }
    }

    /// Restore arc consistency after every guess during search, instead of only checking the
    /// guess against the words already placed
    pub fn maintain_arc_consistency(&mut self, enabled: bool) -> &mut Self {
        self.maintain_arc_consistency = enabled;
        self
    }

    /// The domains as left by the last call to `solve`. Search does not change them.
    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    pub fn solve(&mut self) -> Result<SolveResult, SolveError> {
        check_overlaps(self.crossword)?;
        self.domains = Domains::new(self.crossword);
        enforce_node_consistency(self.crossword, &mut self.domains);
        if let Some(id) = self.domains.first_empty() {
            info!("No words fit {}", self.crossword.variable(id));
            return Ok(SolveResult::Unsolvable(Unsolvable::InfeasibleDomain(id)));
        }
        info!("Enforcing arc consistency");
        if let ArcConsistency::Infeasible(id) = ac3(self.crossword, &mut self.domains) {
            info!(
                "No words fit {} consistently with its neighbors",
                self.crossword.variable(id)
            );
            return Ok(SolveResult::Unsolvable(Unsolvable::InfeasibleDomain(id)));
        }
        debug!(
            "{} candidate words remain after arc consistency",
            self.domains.total_len()
        );
        info!("Begin backtracking");
        let mut assignment = Assignment::new(self.crossword.variable_count());
        let (result, statistics) = search_solution(
            self.crossword,
            &self.domains,
            &mut assignment,
            self.maintain_arc_consistency,
        );
        info!(
            "Backtracking finished after {} assignments and {} backtracks",
            statistics.assignments, statistics.backtracks
        );
        match result {
            SearchResult::Exhausted => Ok(SolveResult::Unsolvable(Unsolvable::SearchExhausted)),
            SearchResult::Complete => {
                debug_assert!(assignment.is_consistent(self.crossword));
                Ok(SolveResult::Solved(SolvedData {
                    assignment,
                    statistics,
                }))
            }
        }
    }
}

/// Every overlap must point at letters inside both of its slots
fn check_overlaps(crossword: &Crossword) -> Result<(), SolveError> {
    for x in crossword.variable_ids() {
        for &y in crossword.neighbors(x) {
            let overlap = match crossword.overlap(x, y) {
                Some(overlap) => overlap,
                None => continue,
            };
            let (x, y) = (crossword.variable(x), crossword.variable(y));
            if overlap.i >= x.length() || overlap.j >= y.length() {
                return Err(SolveError::MalformedOverlap { x, y, overlap });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{CrosswordSolver, SolveResult, Unsolvable};
    use crate::crossword::{Crossword, Direction, Overlap, Variable, WordList};
    use crate::error::SolveError;

    fn pair(x_length: usize, y_length: usize, overlap: Overlap, words: Vec<&str>) -> Crossword {
        Crossword::from_parts(
            vec![
                Variable::new(0, 0, Direction::Across, x_length),
                Variable::new(0, 0, Direction::Down, y_length),
            ],
            vec![(0, 1, overlap)],
            WordList::new(words),
        )
        .unwrap()
    }

    fn solution(crossword: &Crossword, result: SolveResult) -> Vec<String> {
        result
            .into_assignment()
            .expect("no solution")
            .words(crossword)
            .map(|(_, word)| word.to_string())
            .collect()
    }

    #[test]
    fn conflicting_letters_unsolvable() {
        let crossword = pair(3, 4, Overlap::new(0, 0), vec!["CAT", "DOGS"]);
        let mut solver = CrosswordSolver::new(&crossword);
        let result = solver.solve().unwrap();
        assert_eq!(
            Some(Unsolvable::InfeasibleDomain(0)),
            result.unsolvable()
        );
        assert!(solver.domains()[0].is_empty());
    }

    #[test]
    fn single_consistent_pair() {
        let crossword = pair(
            3,
            4,
            Overlap::new(2, 0),
            vec!["CAT", "CAR", "TRAP", "SLAP"],
        );
        let result = CrosswordSolver::new(&crossword).solve().unwrap();
        assert_eq!(vec!["CAT", "TRAP"], solution(&crossword, result));
    }

    #[test]
    fn cycle_requires_backtracking() {
        let crossword = Crossword::from_parts(
            vec![
                Variable::new(0, 0, Direction::Across, 2),
                Variable::new(0, 0, Direction::Down, 2),
                Variable::new(1, 0, Direction::Across, 2),
            ],
            vec![
                (0, 1, Overlap::new(0, 0)),
                (1, 2, Overlap::new(1, 0)),
                (2, 0, Overlap::new(1, 1)),
            ],
            WordList::new(vec!["AA", "AB", "AC", "CB"]),
        )
        .unwrap();
        let result = CrosswordSolver::new(&crossword).solve().unwrap();
        let data = result.solved().unwrap();
        assert!(data.statistics.backtracks > 0);
        assert!(data.assignment.is_complete());
        assert!(data.assignment.is_consistent(&crossword));
        assert_eq!(vec!["AB", "AC", "CB"], solution(&crossword, result));
    }

    #[test]
    fn no_words_of_slot_length() {
        let crossword = pair(5, 3, Overlap::new(0, 0), vec!["CAT", "DOG", "ANT"]);
        let mut solver = CrosswordSolver::new(&crossword);
        let result = solver.solve().unwrap();
        assert_eq!(
            Some(Unsolvable::InfeasibleDomain(0)),
            result.unsolvable()
        );
        // arc consistency never ran, so the neighbor keeps every word of its length
        assert_eq!(vec!["CAT", "DOG", "ANT"], solver.domains().words(&crossword, 1));
    }

    #[test]
    fn repeated_word_exhausts_search() {
        let crossword = Crossword::parse("#_#\n___\n#_#\n", "aba").unwrap();
        let result = CrosswordSolver::new(&crossword).solve().unwrap();
        assert_eq!(Some(Unsolvable::SearchExhausted), result.unsolvable());
    }

    #[test]
    fn malformed_overlap() {
        let crossword = pair(3, 3, Overlap::new(3, 0), vec!["CAT"]);
        let error = CrosswordSolver::new(&crossword).solve().unwrap_err();
        assert_eq!(
            SolveError::MalformedOverlap {
                x: crossword.variable(0),
                y: crossword.variable(1),
                overlap: Overlap::new(3, 0),
            },
            error
        );
    }

    #[test]
    fn no_variables() {
        let crossword = Crossword::parse("#_#\n", "one").unwrap();
        let result = CrosswordSolver::new(&crossword).solve().unwrap();
        assert!(result.into_assignment().unwrap().is_empty());
    }

    #[test]
    fn maintain_arc_consistency_finds_same_fill() {
        let crossword = Crossword::parse(
            "#___#\n#_##_\n#_##_\n#_##_\n#____\n",
            "one\ntwo\nthree\nfour\nfive\nsix\nseven\neight\nnine\nten",
        )
        .unwrap();
        let baseline = CrosswordSolver::new(&crossword).solve().unwrap();
        let inferred = CrosswordSolver::new(&crossword)
            .maintain_arc_consistency(true)
            .solve()
            .unwrap();
        assert_eq!(
            vec!["SEVEN", "SIX", "FIVE", "NINE"],
            solution(&crossword, baseline)
        );
        assert_eq!(
            vec!["SEVEN", "SIX", "FIVE", "NINE"],
            solution(&crossword, inferred)
        );
    }
}
