//! Arc consistency (AC-3)

use ahash::AHashSet;

use crate::collections::LinkedAHashSet;
use crate::crossword::{Crossword, VariableId};
use crate::solve::Domains;

/// An ordered pair of neighboring variables. Revising the arc makes `x` consistent with `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Arc {
    pub x: VariableId,
    pub y: VariableId,
}

impl Arc {
    pub fn new(x: VariableId, y: VariableId) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArcConsistency {
    /// Every remaining word has a compatible word in each neighbor's domain
    Consistent,
    /// The domain of the variable became empty
    Infeasible(VariableId),
}

/// Every arc of the constraint graph, in variable order
pub fn all_arcs(crossword: &Crossword) -> impl Iterator<Item = Arc> + '_ {
    crossword.variable_ids().flat_map(move |x| {
        crossword
            .neighbors(x)
            .iter()
            .map(move |&y| Arc::new(x, y))
    })
}

/// Makes `arc.x` arc consistent with `arc.y` by removing every word of `x` that has no word of
/// `y` with the same letter at their overlap. Returns true if the domain of `x` changed.
pub fn revise(crossword: &Crossword, domains: &mut Domains, arc: Arc) -> bool {
    let overlap = match crossword.overlap(arc.x, arc.y) {
        Some(overlap) => overlap,
        None => return false,
    };
    let supported: AHashSet<char> = domains[arc.y]
        .iter()
        .filter_map(|word| crossword.word(word).letter(overlap.j))
        .collect();
    let removed = domains[arc.x].retain(|word| {
        crossword
            .word(word)
            .letter(overlap.i)
            .map_or(false, |letter| supported.contains(&letter))
    });
    if removed > 0 {
        debug!(
            "removed {} words from {} with no match in {}",
            removed,
            crossword.variable(arc.x),
            crossword.variable(arc.y)
        );
    }
    removed > 0
}

/// Enforces arc consistency over the whole constraint graph
pub fn ac3(crossword: &Crossword, domains: &mut Domains) -> ArcConsistency {
    ac3_with_arcs(crossword, domains, all_arcs(crossword))
}

/// Enforces arc consistency starting from the given arcs. Arcs whose consistency may be broken by
/// a revision are queued as they are found.
pub fn ac3_with_arcs(
    crossword: &Crossword,
    domains: &mut Domains,
    arcs: impl IntoIterator<Item = Arc>,
) -> ArcConsistency {
    let mut queue: LinkedAHashSet<Arc> = arcs.into_iter().collect();
    let mut revisions = 0;
    while let Some(arc) = queue.pop_front() {
        if !revise(crossword, domains, arc) {
            continue;
        }
        revisions += 1;
        if domains[arc.x].is_empty() {
            debug!(
                "no words remain for {} after {} revisions",
                crossword.variable(arc.x),
                revisions
            );
            return ArcConsistency::Infeasible(arc.x);
        }
        for &z in crossword.neighbors(arc.x) {
            if z != arc.y {
                queue.insert(Arc::new(z, arc.x));
            }
        }
    }
    debug!("arc consistency finished after {} revisions", revisions);
    ArcConsistency::Consistent
}
