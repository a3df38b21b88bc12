#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use std::fs;

use anyhow::{Context as _, Result};
use crisscross::crossword::Crossword;
use crisscross::solve::{CrosswordSolver, Domains, SolveResult, SolvedData, Unsolvable};
use itertools::Itertools;

use crate::options::Options;

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let crossword = Crossword::from_files(options.structure_path(), options.words_path())
        .with_context(|| {
            format!(
                "Error reading crossword from \"{}\" and \"{}\"",
                options.structure_path().display(),
                options.words_path().display()
            )
        })?;
    println!(
        "Filling {} slots from {} words",
        crossword.variable_count(),
        crossword.words().len()
    );
    let mut solver = CrosswordSolver::new(&crossword);
    solver.maintain_arc_consistency(options.maintain_arc_consistency());
    match solver.solve()? {
        SolveResult::Solved(data) => on_solved(&options, &crossword, &data)?,
        SolveResult::Unsolvable(reason) => {
            println!("No solution.");
            print_reason(&crossword, reason);
            if options.show_domains() {
                print_domains(&crossword, solver.domains());
            }
        }
    }
    Ok(())
}

fn on_solved(options: &Options, crossword: &Crossword, data: &SolvedData) -> Result<()> {
    let grid = crossword.letter_grid(&data.assignment).to_string();
    print!("{}", grid);
    println!(
        "Search made {} assignments and {} backtracks",
        data.statistics.assignments, data.statistics.backtracks
    );
    if let Some(path) = options.output_path() {
        fs::write(path, &grid)
            .with_context(|| format!("Error saving crossword to {}", path.display()))?;
        println!("Saved crossword to {}", path.display());
    }
    Ok(())
}

fn print_reason(crossword: &Crossword, reason: Unsolvable) {
    match reason {
        Unsolvable::InfeasibleDomain(id) => {
            println!("No words fit {}", crossword.variable(id))
        }
        Unsolvable::SearchExhausted => println!("Every candidate fill was tried"),
    }
}

fn print_domains(crossword: &Crossword, domains: &Domains) {
    for (id, domain) in domains.iter() {
        println!(
            " {:>2}: {} [{}] {}",
            id,
            crossword.variable(id),
            domain.len(),
            domains.words(crossword, id).iter().join(" ")
        );
    }
}
