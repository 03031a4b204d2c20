use std::collections::HashMap;

use rand::Rng;

use super::sampler::WeightedSampler;
use super::state::{State, Token};
use crate::error::{MarkovError, Result};

/// Markov transition table over token sequences.
///
/// The `TransitionModel` stores, for every observed state of `tuple_len`
/// tokens, the distribution of the tokens that followed it.
///
/// # Responsibilities
/// - Accumulate transition counts for each state
/// - Answer existence and branching queries
/// - Sample the next token given a state
///
/// # Invariants
/// - `tuple_len` is always >= 1
/// - Every key of `states` holds exactly `tuple_len` tokens
/// - Every stored sampler holds at least one transition
#[derive(Clone, Debug)]
pub struct TransitionModel {
	/// Number of tokens in a state
	tuple_len: usize, // must be >= 1

	/// Mapping from a state to the distribution of its next token
	states: HashMap<State, WeightedSampler<Token>>,
}

impl TransitionModel {
	/// Creates an empty model whose states hold `tuple_len` tokens.
	///
	/// # Errors
	/// Returns an error if `tuple_len < 1`.
	pub fn new(tuple_len: usize) -> Result<Self> {
		if tuple_len < 1 {
			return Err(MarkovError::InvalidConfig("tuple length must be >= 1".to_owned()));
		}
		Ok(Self { tuple_len, states: HashMap::new() })
	}

	pub fn tuple_len(&self) -> usize {
		self.tuple_len
	}

	/// Number of distinct states observed.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}

	/// Records one observation of `next` following `state`.
	///
	/// # Errors
	/// Returns `StateLength` if `state` does not hold `tuple_len` tokens.
	pub fn add_transition(&mut self, state: State, next: Token) -> Result<()> {
		if state.len() != self.tuple_len {
			return Err(MarkovError::StateLength { expected: self.tuple_len, found: state.len() });
		}
		self.states.entry(state).or_default().increment(next);
		Ok(())
	}

	/// Whether `state` was observed at least once.
	pub fn exists(&self, state: &State) -> bool {
		self.states.contains_key(state)
	}

	/// Number of distinct tokens observed after `state`.
	///
	/// # Errors
	/// Returns `UnknownState` if the state was never observed.
	pub fn transition_count(&self, state: &State) -> Result<usize> {
		Ok(self.sampler(state)?.entry_count())
	}

	/// Draws the next token after `state`, weighted by observation counts.
	///
	/// # Errors
	/// Returns `UnknownState` if the state was never observed.
	pub fn sample_next<R: Rng + ?Sized>(&self, state: &State, rng: &mut R) -> Result<&Token> {
		let u: f64 = rng.random();
		self.sampler(state)?.sample(u)
	}

	fn sampler(&self, state: &State) -> Result<&WeightedSampler<Token>> {
		self.states.get(state).ok_or_else(|| MarkovError::UnknownState(state.to_string()))
	}
}
