use thiserror::Error;

/// Errors raised while building or sampling a Markov model.
#[derive(Error, Debug)]
pub enum MarkovError {
	/// Sampling was attempted on a distribution without any entry.
	#[error("cannot sample from an empty distribution")]
	EmptyDistribution,

	/// The transition model was queried for a state it never observed.
	#[error("unknown state \"{0}\"")]
	UnknownState(String),

	/// Ingestion produced no start state with more than one outgoing transition.
	#[error("no suitable start states found for state tuple size of {tuple_len}")]
	NoViableStartState { tuple_len: usize },

	/// Statistics or target lengths were requested without any qualifying sentence.
	#[error("no viable sentences to compute length statistics from")]
	InsufficientLengthSamples,

	/// A state was built with the wrong number of tokens.
	#[error("state must hold {expected} tokens, got {found}")]
	StateLength { expected: usize, found: usize },

	/// Counts only ever grow.
	#[error("increment amount must be > 0")]
	InvalidIncrement,

	/// Invalid configuration value.
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),

	/// Failure while reading the training text.
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, MarkovError>;
