//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Interactive command-line quiz trainer.
#[derive(Debug, Parser)]
#[command(name = "quiz-trainer", version)]
pub struct Args {
    /// Categories to draw questions from (default: all).
    pub categories: Vec<String>,

    /// Number of questions for this session.
    #[arg(short = 'n', long, default_value_t = 20)]
    pub number: usize,

    /// List the available categories and exit.
    #[arg(short, long)]
    pub list: bool,

    /// Show whether each answer was correct immediately,
    /// with the question's help text on a wrong answer.
    #[arg(long)]
    pub training: bool,

    /// Do not announce whether a question expects one answer or several.
    #[arg(long)]
    pub hide_multiple_choice: bool,

    /// Directory holding the question-bank YAML files.
    #[arg(short, long, default_value = "data")]
    pub data: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["quiz-trainer"]);
        assert!(args.categories.is_empty());
        assert_eq!(args.number, 20);
        assert!(!args.list);
        assert!(!args.training);
        assert!(!args.hide_multiple_choice);
        assert_eq!(args.data, PathBuf::from("data"));
    }

    #[test]
    fn categories_are_positional() {
        let args = Args::parse_from(["quiz-trainer", "B", "C", "-n", "3"]);
        assert_eq!(args.categories, vec!["B", "C"]);
        assert_eq!(args.number, 3);
    }

    #[test]
    fn session_flags() {
        let args = Args::parse_from(["quiz-trainer", "--training", "--hide-multiple-choice"]);
        assert!(args.training);
        assert!(args.hide_multiple_choice);
    }
}
