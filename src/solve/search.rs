use std::cmp::Reverse;

use ahash::AHashMap;

use crate::crossword::{Crossword, VariableId, WordId};
use crate::solve::arc_consistency::{ac3_with_arcs, Arc, ArcConsistency};
use crate::solve::{Assignment, Domains};

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum SearchResult {
    /// The assignment is complete
    Complete,
    /// No complete assignment extends the starting assignment
    Exhausted,
}

/// Counters describing the work done by backtracking search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Words that were consistent with the assignment and tried in a deeper search
    pub assignments: u64,
    /// Tried words whose search failed and were taken back out of the assignment
    pub backtracks: u64,
    /// The deepest level of search reached
    pub max_depth: usize,
}

struct SearchContext<'a> {
    crossword: &'a Crossword,
    maintain_arc_consistency: bool,
    statistics: SearchStatistics,
}

/// One level of search: a variable and the words left to try for it
struct Frame {
    id: VariableId,
    depth: usize,
    candidates: Vec<WordId>,
    next: usize,
    /// True while a word from this frame is in the assignment
    guessed: bool,
    /// Domains narrowed by inference for this level. `None` uses the starting domains.
    domains: Option<Domains>,
}

impl Frame {
    /// Advances to the next candidate that the assignment admits. Returns its guess number and
    /// the word.
    fn next_candidate(
        &mut self,
        crossword: &Crossword,
        assignment: &Assignment,
    ) -> Option<(usize, WordId)> {
        while let Some(&word) = self.candidates.get(self.next) {
            self.next += 1;
            if assignment.admits(crossword, self.id, word) {
                return Some((self.next, word));
            }
        }
        None
    }
}

/// Extends `assignment` to a complete assignment, if possible. On success, `assignment` holds the
/// solution. Otherwise it is left as it was given.
pub(crate) fn search_solution(
    crossword: &Crossword,
    domains: &Domains,
    assignment: &mut Assignment,
    maintain_arc_consistency: bool,
) -> (SearchResult, SearchStatistics) {
    let mut context = SearchContext {
        crossword,
        maintain_arc_consistency,
        statistics: SearchStatistics::default(),
    };
    let result = context.search(domains, assignment);
    (result, context.statistics)
}

impl SearchContext<'_> {
    /// Depth-first search over an explicit stack of frames
    fn search(&mut self, domains: &Domains, assignment: &mut Assignment) -> SearchResult {
        let mut stack = match self.open_frame(domains, None, assignment, 1) {
            Some(frame) => vec![frame],
            None => return SearchResult::Complete,
        };
        while let Some(frame) = stack.last_mut() {
            if frame.guessed {
                debug!("Guess failed");
                assignment.remove(frame.id);
                frame.guessed = false;
                self.statistics.backtracks += 1;
            }
            let (number, word) = match frame.next_candidate(self.crossword, assignment) {
                Some(guess) => guess,
                None => {
                    stack.pop();
                    continue;
                }
            };
            debug!(
                "Guessing {} for {}, guess #: {}",
                self.crossword.word(word),
                self.crossword.variable(frame.id),
                number
            );
            self.statistics.assignments += 1;
            assignment.insert(frame.id, word);
            frame.guessed = true;
            let depth = frame.depth + 1;
            let narrowed = if self.maintain_arc_consistency {
                let frame_domains = frame.domains.as_ref().unwrap_or(domains);
                match self.infer(frame_domains, assignment, frame.id, word) {
                    Some(narrowed) => Some(narrowed),
                    None => continue,
                }
            } else {
                None
            };
            match self.open_frame(domains, narrowed, assignment, depth) {
                Some(next) => stack.push(next),
                None => return SearchResult::Complete,
            }
        }
        SearchResult::Exhausted
    }

    /// Selects the next variable to guess. Returns `None` if the assignment is complete.
    fn open_frame(
        &mut self,
        domains: &Domains,
        narrowed: Option<Domains>,
        assignment: &Assignment,
        depth: usize,
    ) -> Option<Frame> {
        let current = narrowed.as_ref().unwrap_or(domains);
        let id = select_unassigned_variable(self.crossword, current, assignment)?;
        self.statistics.max_depth = self.statistics.max_depth.max(depth);
        debug!(
            "Backtracking (depth={}) on {}",
            depth,
            self.crossword.variable(id)
        );
        let candidates = order_domain_values(self.crossword, current, assignment, id);
        Some(Frame {
            id,
            depth,
            candidates,
            next: 0,
            guessed: false,
            domains: narrowed,
        })
    }

    /// Narrows a copy of the domains to the guess and restores arc consistency. Returns `None` if
    /// some unassigned variable is left without words.
    fn infer(
        &self,
        domains: &Domains,
        assignment: &Assignment,
        id: VariableId,
        word: WordId,
    ) -> Option<Domains> {
        let mut domains = domains.clone();
        domains[id].restrict_to(word);
        let arcs = self
            .crossword
            .neighbors(id)
            .iter()
            .filter(|&&z| !assignment.contains(z))
            .map(|&z| Arc::new(z, id));
        match ac3_with_arcs(self.crossword, &mut domains, arcs) {
            ArcConsistency::Infeasible(_) => None,
            ArcConsistency::Consistent => Some(domains),
        }
    }
}

/// Picks the unassigned variable with the fewest remaining words. Ties go to the variable with
/// the most neighbors, and then to the lowest ID.
pub(crate) fn select_unassigned_variable(
    crossword: &Crossword,
    domains: &Domains,
    assignment: &Assignment,
) -> Option<VariableId> {
    crossword
        .variable_ids()
        .filter(|&id| !assignment.contains(id))
        .min_by_key(|&id| (domains[id].len(), Reverse(crossword.neighbors(id).len())))
}

/// Orders the words of a variable's domain by how many words each one rules out for unassigned
/// neighbors, fewest first. Words that rule out the same number keep their domain order.
pub(crate) fn order_domain_values(
    crossword: &Crossword,
    domains: &Domains,
    assignment: &Assignment,
    id: VariableId,
) -> Vec<WordId> {
    // for each unassigned neighbor: letter index in this variable, neighbor domain size,
    // and the number of neighbor words with each letter at the overlap
    let neighbors: Vec<(usize, usize, AHashMap<char, usize>)> = crossword
        .neighbors(id)
        .iter()
        .filter(|&&neighbor| !assignment.contains(neighbor))
        .map(|&neighbor| {
            let overlap = crossword
                .overlap(id, neighbor)
                .expect("neighbors must overlap");
            let mut letter_counts = AHashMap::default();
            for word in domains[neighbor].iter() {
                if let Some(letter) = crossword.word(word).letter(overlap.j) {
                    *letter_counts.entry(letter).or_insert(0) += 1;
                }
            }
            (overlap.i, domains[neighbor].len(), letter_counts)
        })
        .collect();
    let mut values: Vec<(usize, WordId)> = domains[id]
        .iter()
        .map(|word| {
            let ruled_out: usize = neighbors
                .iter()
                .map(|(i, len, letter_counts)| {
                    let kept = crossword
                        .word(word)
                        .letter(*i)
                        .and_then(|letter| letter_counts.get(&letter))
                        .copied()
                        .unwrap_or(0);
                    len - kept
                })
                .sum();
            (ruled_out, word)
        })
        .collect();
    values.sort_by_key(|&(ruled_out, _)| ruled_out);
    values.into_iter().map(|(_, word)| word).collect()
}
