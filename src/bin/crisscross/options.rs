use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ArgMatches;

#[derive(Clone)]
pub(crate) struct Options {
    structure_path: PathBuf,
    words_path: PathBuf,
    output_path: Option<PathBuf>,
    maintain_arc_consistency: bool,
    show_domains: bool,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        // both paths are required by clap
        let options = Self {
            structure_path: matches.value_of("structure").unwrap_or_default().into(),
            words_path: matches.value_of("words").unwrap_or_default().into(),
            output_path: matches.value_of("output").map(PathBuf::from),
            maintain_arc_consistency: matches.is_present("maintain_arc_consistency"),
            show_domains: matches.is_present("show_domains"),
        };
        Ok(options)
    }

    pub fn structure_path(&self) -> &Path {
        &self.structure_path
    }

    pub fn words_path(&self) -> &Path {
        &self.words_path
    }

    pub fn output_path(&self) -> Option<&Path> {
        self.output_path.as_deref()
    }

    pub fn maintain_arc_consistency(&self) -> bool {
        self.maintain_arc_consistency
    }

    pub fn show_domains(&self) -> bool {
        self.show_domains
    }
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, AppSettings, Arg};

    App::new("crisscross")
        .help_message("Fill crossword grids")
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(
            Arg::with_name("structure")
                .value_name("STRUCTURE")
                .required(true)
                .index(1)
                .help("the crossword structure: one row per line, '_' marks an open cell"),
        )
        .arg(
            Arg::with_name("words")
                .value_name("WORDS")
                .required(true)
                .index(2)
                .help("the word list: one word per line"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("PATH")
                .help("save the filled crossword to a text file"),
        )
        .arg(
            Arg::with_name("maintain_arc_consistency")
                .long("maintain-arc-consistency")
                .help("restore arc consistency after every guess during search"),
        )
        .arg(
            Arg::with_name("show_domains")
                .long("show-domains")
                .help("print the remaining candidate words of every slot when there is no solution"),
        )
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use super::{clap_app, Options};

    #[test]
    fn parse_args() {
        let matches = clap_app().get_matches_from(vec![
            "crisscross",
            "structure.txt",
            "words.txt",
            "-o",
            "out.txt",
            "--maintain-arc-consistency",
        ]);
        let options = Options::from_arg_matches(&matches).unwrap();
        assert_eq!(Path::new("structure.txt"), options.structure_path());
        assert_eq!(Path::new("words.txt"), options.words_path());
        assert_eq!(Some(Path::new("out.txt")), options.output_path());
        assert!(options.maintain_arc_consistency());
        assert!(!options.show_domains());
    }

    #[test]
    fn paths_are_required() {
        let result = clap_app().get_matches_from_safe(vec!["crisscross", "structure.txt"]);
        assert!(result.is_err());
    }
}
