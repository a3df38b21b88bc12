use crate::crossword::Crossword;
use crate::solve::Domains;

/// Applies the unary constraint of every variable: removes every word whose length differs from
/// the variable's length. Returns the number of words removed.
pub fn enforce_node_consistency(crossword: &Crossword, domains: &mut Domains) -> usize {
    debug!("reducing domains to words of the slot length");
    let mut count = 0;
    for (id, variable) in crossword.variables().iter().enumerate() {
        let removed =
            domains[id].retain(|word| crossword.word(word).len() == variable.length());
        if removed > 0 {
            debug!(
                "removed {} words of the wrong length from {}, {} remain",
                removed,
                variable,
                domains[id].len()
            );
        }
        count += removed;
    }
    count
}

#[cfg(test)]
mod test {
    use super::enforce_node_consistency;
    use crate::crossword::Crossword;
    use crate::solve::Domains;

    fn crossword() -> Crossword {
        Crossword::parse(
            "#___#\n#_##_\n#_##_\n#_##_\n#____\n",
            "one\ntwo\nthree\nfour\nfive\nsix\nseven\neight\nnine\nten",
        )
        .unwrap()
    }

    #[test]
    fn words_match_slot_length() {
        let crossword = crossword();
        let mut domains = Domains::new(&crossword);
        enforce_node_consistency(&crossword, &mut domains);
        for (id, domain) in domains.iter() {
            let length = crossword.variable(id).length();
            assert!(domain.iter().all(|word| crossword.word(word).len() == length));
        }
        assert_eq!(
            vec!["THREE", "SEVEN", "EIGHT"],
            domains.words(&crossword, 0)
        );
        assert_eq!(vec!["ONE", "TWO", "SIX", "TEN"], domains.words(&crossword, 1));
        assert_eq!(vec!["FOUR", "FIVE", "NINE"], domains.words(&crossword, 2));
    }

    #[test]
    fn idempotent() {
        let crossword = crossword();
        let mut domains = Domains::new(&crossword);
        let removed = enforce_node_consistency(&crossword, &mut domains);
        assert_eq!(4 * 10 - 3 - 4 - 3 - 3, removed);
        let once = domains.clone();
        assert_eq!(0, enforce_node_consistency(&crossword, &mut domains));
        assert_eq!(once, domains);
    }
}
