//! Command-line front end: trains a token Markov chain on a text file and
//! prints a handful of generated sentences.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use rs_markov_core::io::read_text;
use rs_markov_core::model::generation_config::{DEFAULT_MAX_ATTEMPTS, DEFAULT_TARGET_COUNT};
use rs_markov_core::{
    Corpus, GenerationConfig, PunctuationTokenizer, Report, SentenceGenerator, render_display,
};

/// Generate novel sentences from a Markov chain over the tokens of a text.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Plain text source (UTF-8).
    input: PathBuf,

    /// Number of sequential tokens defining a Markov state.
    tuple_len: usize,

    /// Minimum sentence length to consider (default: tuple_len + 1).
    min_sentence: Option<usize>,

    /// Maximum attempts to create a new sentence before stopping.
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Number of distinct sentences to generate.
    #[arg(long, default_value_t = DEFAULT_TARGET_COUNT)]
    count: usize,

    /// PRNG seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = GenerationConfig::new(args.tuple_len)?;
    if let Some(min_sentence) = args.min_sentence {
        config.set_min_sentence_len(min_sentence);
    }
    config.set_max_attempts(args.max_attempts)?;
    config.set_target_count(args.count)?;

    let text = read_text(&args.input)
        .map_err(|e| format!("cannot read {}: {e}", args.input.display()))?;
    let corpus = Corpus::from_text(&config, &PunctuationTokenizer, &text)?;

    // Without an explicit seed, draw one so the run can still be replayed
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    info!("Random seed: {seed}");
    let mut rng = SmallRng::seed_from_u64(seed);

    let generation = SentenceGenerator::new(&corpus, &config).run(&mut rng)?;
    let report = Report::new(&corpus, &config, &generation, render_display)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &Report) {
    let lengths = &report.lengths;

    println!();
    println!("{} unique tokens.", report.unique_tokens);
    println!(
        "{} viable sentences; min. length {}, max. {}, mean {:.1}, median {:.1}, stdev {:.1}",
        lengths.count, lengths.min, lengths.max, lengths.mean, lengths.median, lengths.stdev
    );
    println!("{} transitions.", report.transitions);
    println!("{} start tuples ({} with more than one transition).", report.start_states, report.good_start_states);
    println!("{} end tokens.", report.end_tokens);
    println!();

    println!("Seed: \"{}\" (max_attempts = {}):", report.seed, report.max_attempts);
    println!();

    for entry in &report.results {
        let tag = if entry.abnormal { '*' } else { ' ' };
        println!("{} {} \"{}\"", entry.rank, tag, entry.sentence);
        println!();
    }

    if report.results.len() < report.target_count {
        println!(
            "Only {} of {} sentences found after {} attempts.",
            report.results.len(),
            report.target_count,
            report.attempts
        );
    }
}
