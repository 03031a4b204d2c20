//! Token-level Markov chain text generation library.
//!
//! This crate provides:
//! - Weighted sampling from frequency counts
//! - A transition table over fixed-length token tuples
//! - Corpus ingestion with start/end tracking and length statistics
//! - Sentence generation with length targeting and duplicate rejection
//! - A default punctuation-aware tokenizer, kept apart from the core
//!
//! Randomness is always injected as a `rand::Rng`, so a seeded generator
//! makes every run reproducible.

/// Markov model, ingestion and generation.
pub mod model;

/// Error type shared by the whole crate.
pub mod error;

/// Sentence length statistics.
pub mod stats;

/// Plain-data summary of a run, serializable for front ends.
pub mod report;

/// Text to sentences of tokens, and back to display strings.
pub mod tokenizer;

/// File loading.
pub mod io;

pub use error::{MarkovError, Result};
pub use model::corpus::Corpus;
pub use model::generation_config::GenerationConfig;
pub use model::generator::{GeneratedSentence, Generation, SentenceGenerator};
pub use model::sampler::WeightedSampler;
pub use model::state::{State, Token};
pub use model::transition_model::TransitionModel;
pub use report::{Report, ReportEntry};
pub use stats::LengthStatistics;
pub use tokenizer::{PunctuationTokenizer, Tokenizer, render_display};
