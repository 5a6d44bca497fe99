//! Command line argument parsing for the Lexinet CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::network::ExpansionConfig;

/// Lexinet - find the edit-distance social network of a word
#[derive(Parser, Debug, Clone)]
#[command(name = "lexinet")]
#[command(about = "Find a word's friends, friends of friends and friends of friends of friends")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexinetArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexinetArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Find the social network of a word
    Network(NetworkArgs),

    /// Check whether two words are friends
    Check(CheckArgs),

    /// Show dictionary statistics
    Stats(StatsArgs),
}

/// Arguments for finding a social network
#[derive(Parser, Debug, Clone)]
pub struct NetworkArgs {
    /// The word whose network to find
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Word list with one word per line
    #[arg(value_name = "DICTIONARY", env = "LEXINET_DICTIONARY")]
    pub dictionary: PathBuf,

    /// Where to send the network
    #[arg(short, long, default_value = "terminal")]
    pub output: OutputTarget,

    /// Directory for the network file
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub out_dir: PathBuf,

    /// Scan each round on a thread pool
    #[arg(long)]
    pub parallel: bool,

    /// Number of threads for parallel expansion
    #[arg(short, long, requires = "parallel")]
    pub threads: Option<usize>,
}

impl NetworkArgs {
    /// Expansion settings derived from the flags
    pub fn expansion_config(&self) -> ExpansionConfig {
        ExpansionConfig {
            parallel: self.parallel,
            thread_pool_size: self.threads,
        }
    }
}

/// Arguments for checking adjacency
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// First word
    #[arg(value_name = "WORD_A")]
    pub word_a: String,

    /// Second word
    #[arg(value_name = "WORD_B")]
    pub word_b: String,
}

/// Arguments for dictionary statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Word list with one word per line
    #[arg(value_name = "DICTIONARY", env = "LEXINET_DICTIONARY")]
    pub dictionary: PathBuf,
}

/// Destinations for a computed network
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    /// Print the grouped report
    Terminal,
    /// Append the sorted network to <WORD>_SocialNetwork.txt
    File,
    /// Print and write the file
    Both,
    /// Compute only
    #[value(name = "none")]
    Discard,
}

impl OutputTarget {
    pub fn prints(self) -> bool {
        matches!(self, OutputTarget::Terminal | OutputTarget::Both)
    }

    pub fn writes_file(self) -> bool {
        matches!(self, OutputTarget::File | OutputTarget::Both)
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_basic_network_command() {
        let args = LexinetArgs::try_parse_from([
            "lexinet",
            "network",
            "cat",
            "/path/to/words.txt",
            "--output",
            "both",
            "--out-dir",
            "/tmp/out",
        ])
        .unwrap();

        if let Command::Network(network_args) = args.command {
            assert_eq!(network_args.word, "cat");
            assert_eq!(network_args.dictionary, PathBuf::from("/path/to/words.txt"));
            assert_eq!(network_args.output, OutputTarget::Both);
            assert_eq!(network_args.out_dir, PathBuf::from("/tmp/out"));
            assert!(!network_args.parallel);
        } else {
            panic!("Expected Network command");
        }
    }

    #[test]
    fn test_network_defaults() {
        let args =
            LexinetArgs::try_parse_from(["lexinet", "network", "cat", "words.txt"]).unwrap();

        if let Command::Network(network_args) = args.command {
            assert_eq!(network_args.output, OutputTarget::Terminal);
            assert_eq!(network_args.out_dir, PathBuf::from("."));
            assert_eq!(network_args.threads, None);
        } else {
            panic!("Expected Network command");
        }
    }

    #[test]
    fn test_parallel_flags() {
        let args = LexinetArgs::try_parse_from([
            "lexinet",
            "network",
            "cat",
            "words.txt",
            "--parallel",
            "--threads",
            "4",
        ])
        .unwrap();

        if let Command::Network(network_args) = args.command {
            let config = network_args.expansion_config();
            assert!(config.parallel);
            assert_eq!(config.thread_pool_size, Some(4));
        } else {
            panic!("Expected Network command");
        }

        // --threads only makes sense with --parallel
        let result = LexinetArgs::try_parse_from([
            "lexinet",
            "network",
            "cat",
            "words.txt",
            "--threads",
            "4",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_none() {
        let args = LexinetArgs::try_parse_from([
            "lexinet", "network", "cat", "words.txt", "-o", "none",
        ])
        .unwrap();

        if let Command::Network(network_args) = args.command {
            assert_eq!(network_args.output, OutputTarget::Discard);
            assert!(!network_args.output.prints());
            assert!(!network_args.output.writes_file());
        } else {
            panic!("Expected Network command");
        }
    }

    #[test]
    fn test_check_command() {
        let args = LexinetArgs::try_parse_from(["lexinet", "check", "cat", "cot"]).unwrap();

        if let Command::Check(check_args) = args.command {
            assert_eq!(check_args.word_a, "cat");
            assert_eq!(check_args.word_b, "cot");
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_missing_word_is_error() {
        assert!(LexinetArgs::try_parse_from(["lexinet", "check", "cat"]).is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = LexinetArgs::try_parse_from(["lexinet", "check", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = LexinetArgs::try_parse_from(["lexinet", "-vv", "check", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args =
            LexinetArgs::try_parse_from(["lexinet", "--quiet", "check", "a", "b"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            LexinetArgs::try_parse_from(["lexinet", "--format", "json", "check", "a", "b"])
                .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
