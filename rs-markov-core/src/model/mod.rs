//! Markov model over token sequences.
//!
//! This module provides:
//! - Weighted discrete sampling from observation counts (`WeightedSampler`)
//! - Token tuple states (`State`)
//! - The state → next-token transition table (`TransitionModel`)
//! - Corpus ingestion (`Corpus`)
//! - Run parameters (`GenerationConfig`)
//! - Sentence generation (`SentenceGenerator`)

/// Sentence generation from a trained corpus.
///
/// Picks a seed among the branching start states and produces distinct
/// sentences under an attempt budget.
pub mod generator;

/// Ingestion of tokenized sentences.
///
/// Feeds the transition model and records start states, end tokens,
/// sentence lengths and token counts.
pub mod corpus;

/// Transition table keyed by fixed-length token tuples.
pub mod transition_model;

/// Weighted sampling over accumulated counts, with a lazily built
/// cumulative table.
pub mod sampler;

/// Markov state (token tuple) and token types.
pub mod state;

/// Validated run parameters.
pub mod generation_config;
