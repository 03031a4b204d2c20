use std::fmt;

use serde::Serialize;

/// Smallest unit of text after normalization.
pub type Token = String;

/// Markov context: an ordered, fixed-length run of tokens.
///
/// Two states holding the same tokens in the same order are equal and hash
/// identically, so they share one distribution inside a `TransitionModel`.
///
/// ## Invariants
/// - The length never changes once built; `advance` slides the window
///   instead of growing it.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct State {
	tokens: Box<[Token]>,
}

impl State {
	/// Builds a state from an ordered token window.
	pub fn new<I, T>(tokens: I) -> Self
	where
		I: IntoIterator<Item = T>,
		T: Into<Token>,
	{
		Self { tokens: tokens.into_iter().map(Into::into).collect() }
	}

	/// Tokens of the state, oldest first.
	pub fn tokens(&self) -> &[Token] {
		&self.tokens
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Returns the state that follows once `next` has been emitted.
	///
	/// Drops the oldest token and appends `next`, keeping the length.
	/// Example: `(the, cat)` + `sat` → `(cat, sat)`
	pub fn advance(&self, next: &str) -> Self {
		let mut tokens = Vec::with_capacity(self.tokens.len());
		tokens.extend(self.tokens.iter().skip(1).cloned());
		tokens.push(next.to_owned());
		Self { tokens: tokens.into_boxed_slice() }
	}
}

impl fmt::Display for State {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.tokens.join(" "))
	}
}
