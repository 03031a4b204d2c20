use crate::error::{MarkovError, Result};

/// Default bound on generation attempts.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

/// Default number of distinct sentences to produce.
pub const DEFAULT_TARGET_COUNT: usize = 10;

/// Parameters shared by ingestion and generation.
///
/// # Responsibilities
/// - Track the state size (`tuple_len`) and the shortest usable sentence
/// - Track the generation budget (`max_attempts`) and quota (`target_count`)
///
/// # Invariants
/// - `tuple_len >= 1`
/// - `min_sentence_len >= tuple_len + 1`
/// - `max_attempts >= 1` and `target_count >= 1`
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationConfig {
	/// Number of tokens defining a Markov state.
	tuple_len: usize,

	/// Sentences with fewer tokens are ignored during ingestion.
	min_sentence_len: usize,

	/// Upper bound on generation attempts, duplicates included.
	max_attempts: usize,

	/// Number of distinct sentences to stop at.
	target_count: usize,
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self {
			tuple_len: 2,
			min_sentence_len: 3,
			max_attempts: DEFAULT_MAX_ATTEMPTS,
			target_count: DEFAULT_TARGET_COUNT,
		}
	}
}

impl GenerationConfig {
	/// Creates a configuration for states of `tuple_len` tokens.
	///
	/// `min_sentence_len` defaults to `tuple_len + 1`.
	///
	/// # Errors
	/// Returns an error if `tuple_len < 1`.
	pub fn new(tuple_len: usize) -> Result<Self> {
		if tuple_len < 1 {
			return Err(MarkovError::InvalidConfig("tuple length must be >= 1".to_owned()));
		}
		Ok(Self { tuple_len, min_sentence_len: tuple_len + 1, ..Self::default() })
	}

	pub fn tuple_len(&self) -> usize {
		self.tuple_len
	}

	pub fn min_sentence_len(&self) -> usize {
		self.min_sentence_len
	}

	pub fn max_attempts(&self) -> usize {
		self.max_attempts
	}

	pub fn target_count(&self) -> usize {
		self.target_count
	}

	/// Sets the shortest sentence kept for training.
	///
	/// Values below `tuple_len + 1` are raised to it: a shorter sentence
	/// cannot produce a single transition.
	pub fn set_min_sentence_len(&mut self, min_sentence_len: usize) {
		self.min_sentence_len = min_sentence_len.max(self.tuple_len + 1);
	}

	/// Sets the attempt budget.
	///
	/// # Errors
	/// Returns an error if `max_attempts` is 0.
	pub fn set_max_attempts(&mut self, max_attempts: usize) -> Result<()> {
		if max_attempts < 1 {
			return Err(MarkovError::InvalidConfig("max attempts must be >= 1".to_owned()));
		}
		self.max_attempts = max_attempts;
		Ok(())
	}

	/// Sets the number of distinct sentences to generate.
	///
	/// # Errors
	/// Returns an error if `target_count` is 0.
	pub fn set_target_count(&mut self, target_count: usize) -> Result<()> {
		if target_count < 1 {
			return Err(MarkovError::InvalidConfig("target count must be >= 1".to_owned()));
		}
		self.target_count = target_count;
		Ok(())
	}
}
