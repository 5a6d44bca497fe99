//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexinetArgs, OutputFormat};
use crate::dictionary::DictionaryLoad;
use crate::error::Result;
use crate::network::{Hop, SocialNetwork};

/// Result structure for a network computation.
#[derive(Debug, Serialize, Deserialize)]
pub struct NetworkSummary {
    pub origin: String,
    pub friends: Vec<String>,
    pub friends_of_friends: Vec<String>,
    pub friends_of_friends_of_friends: Vec<String>,
    pub network_size: usize,
    pub duration_ms: f64,
    pub written_to: Option<String>,
    #[serde(skip)]
    pub report: String,
}

impl NetworkSummary {
    pub fn new(network: &SocialNetwork, duration_ms: f64, written_to: Option<String>) -> Self {
        let level = |hop: Hop| -> Vec<String> {
            network
                .sorted_level(hop)
                .into_iter()
                .map(str::to_string)
                .collect()
        };

        NetworkSummary {
            origin: network.origin().to_string(),
            friends: level(Hop::Friends),
            friends_of_friends: level(Hop::FriendsOfFriends),
            friends_of_friends_of_friends: level(Hop::FriendsOfFriendsOfFriends),
            network_size: network.size(),
            duration_ms,
            written_to,
            report: network.to_sorted_report(),
        }
    }
}

/// Result structure for an adjacency check.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdjacencyCheck {
    pub word_a: String,
    pub word_b: String,
    pub friends: bool,
}

/// Per-length bucket size.
#[derive(Debug, Serialize, Deserialize)]
pub struct BucketStats {
    pub length: usize,
    pub words: usize,
}

/// Dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct DictionaryStats {
    pub path: String,
    pub unique_words: usize,
    pub buckets: Vec<BucketStats>,
    pub skipped_lines: usize,
}

impl DictionaryStats {
    pub fn new(path: String, load: &DictionaryLoad) -> Self {
        DictionaryStats {
            path,
            unique_words: load.index.len(),
            buckets: load
                .index
                .bucket_sizes()
                .into_iter()
                .map(|(length, words)| BucketStats { length, words })
                .collect(),
            skipped_lines: load.skipped.len(),
        }
    }
}

/// Human-readable rendering of a command result.
pub trait HumanOutput {
    fn render_human(&self, verbosity: u8) -> String;
}

impl HumanOutput for NetworkSummary {
    fn render_human(&self, verbosity: u8) -> String {
        let mut out = self.report.clone();
        if verbosity > 0 {
            out.push_str(&format!("\nTime elapsed: {:.3}ms\n", self.duration_ms));
        }
        if let Some(path) = &self.written_to {
            out.push_str(&format!("Network written to {path}\n"));
        }
        out
    }
}

impl HumanOutput for AdjacencyCheck {
    fn render_human(&self, _verbosity: u8) -> String {
        let relation = if self.friends { "are" } else { "are not" };
        format!("'{}' and '{}' {relation} friends\n", self.word_a, self.word_b)
    }
}

impl HumanOutput for DictionaryStats {
    fn render_human(&self, verbosity: u8) -> String {
        let mut out = String::new();
        out.push_str("Dictionary Statistics:\n");
        out.push_str("══════════════════════\n");
        out.push_str(&format!("Path: {}\n", self.path));
        out.push_str(&format!("Unique words: {}\n", self.unique_words));
        out.push_str(&format!("Skipped lines: {}\n", self.skipped_lines));

        if verbosity > 0 && !self.buckets.is_empty() {
            out.push_str("\nWords by length:\n");
            out.push_str("────────────────\n");
            for bucket in &self.buckets {
                out.push_str(&format!("  {:>3}: {}\n", bucket.length, bucket.words));
            }
        }
        out
    }
}

/// Render a result in the requested format.
pub fn render_result<T: Serialize + HumanOutput>(result: &T, args: &LexinetArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => Ok(result.render_human(args.verbosity())),
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            Ok(format!("{json}\n"))
        }
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &LexinetArgs) -> Result<()> {
    print!("{}", render_result(result, args)?);
    Ok(())
}
