//! Command implementations for the Lexinet CLI.

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::dictionary::WordIndex;
use crate::error::{LexinetError, Result};
use crate::network::{NetworkExpander, SocialNetwork, is_adjacent, report_file_name};

/// Execute a CLI command.
pub fn execute_command(args: LexinetArgs) -> Result<()> {
    match &args.command {
        Command::Network(network_args) => find_network(network_args, &args),
        Command::Check(check_args) => check_words(check_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

/// Compute the social network of a word and send it to the chosen outputs.
fn find_network(args: &NetworkArgs, cli_args: &LexinetArgs) -> Result<()> {
    if args.word.is_empty() {
        return Err(LexinetError::EmptyOrigin);
    }

    let start_time = Instant::now();

    let load = WordIndex::load_from_file(&args.dictionary)?;
    if !load.skipped.is_empty() {
        warn!(
            "Skipped {} malformed lines in {}",
            load.skipped.len(),
            args.dictionary.display()
        );
    }

    let expander = NetworkExpander::with_config(&load.index, args.expansion_config())?;
    let network = expander.expand(&args.word)?;

    let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;
    info!("Network of '{}' computed in {duration_ms:.3}ms", args.word);

    let written_to = if args.output.writes_file() {
        let path = write_network_file(&network, &args.out_dir)?;
        Some(path.to_string_lossy().to_string())
    } else {
        None
    };

    let summary = NetworkSummary::new(&network, duration_ms, written_to);
    if args.output.prints() {
        output_result(&summary, cli_args)?;
    } else if let Some(path) = &summary.written_to
        && cli_args.verbosity() > 0
    {
        println!("Network written to {path}");
    }

    Ok(())
}

/// Append the network's file lines to `<origin>_SocialNetwork.txt` in `dir`.
///
/// The file is created if missing; earlier runs are kept.
pub fn write_network_file(network: &SocialNetwork, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(report_file_name(network.origin()));

    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let mut writer = BufWriter::new(file);
    for line in network.to_file_lines() {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;

    info!("Wrote {} words to {}", network.size(), path.display());
    Ok(path)
}

/// Report whether two words are friends.
fn check_words(args: &CheckArgs, cli_args: &LexinetArgs) -> Result<()> {
    let check = AdjacencyCheck {
        word_a: args.word_a.clone(),
        word_b: args.word_b.clone(),
        friends: is_adjacent(&args.word_a, &args.word_b),
    };
    output_result(&check, cli_args)
}

/// Show unique word and bucket counts for a dictionary.
fn show_stats(args: &StatsArgs, cli_args: &LexinetArgs) -> Result<()> {
    let load = WordIndex::load_from_file(&args.dictionary)?;
    let stats = DictionaryStats::new(args.dictionary.to_string_lossy().to_string(), &load);
    output_result(&stats, cli_args)
}
