//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Quiz Catalog Sync - keep config.json in step with your quiz folders
///
/// Scans <ROOT>/<category>/<quiz>/quiz.json, compares the result with
/// <ROOT>/config.json and rewrites the configuration when they disagree.
/// Set RUST_LOG=info (or debug) to see every folder the scan visits.
#[derive(Parser, Debug)]
#[command(name = "quiz-sync")]
#[command(author, version, about)]
pub struct Cli {
    /// Catalog root containing the category folders
    #[arg(default_value = ".")]
    pub root: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_root_defaults_to_current_dir() {
        let cli = Cli::try_parse_from(["quiz-sync"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("."));
    }

    #[test]
    fn test_root_positional() {
        let cli = Cli::try_parse_from(["quiz-sync", "/srv/quiz"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("/srv/quiz"));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["quiz-sync", "--dry-run"]).is_err());
    }

    #[test]
    fn test_second_positional_is_rejected() {
        assert!(Cli::try_parse_from(["quiz-sync", "a", "b"]).is_err());
    }
}
