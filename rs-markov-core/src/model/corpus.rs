use std::collections::{HashMap, HashSet};

use log::debug;

use super::generation_config::GenerationConfig;
use super::state::{State, Token};
use super::transition_model::TransitionModel;
use crate::error::{MarkovError, Result};
use crate::stats::LengthStatistics;
use crate::tokenizer::Tokenizer;

/// Training data digested into a Markov model.
///
/// This struct manages:
/// - `model`: the state → next-token transition table.
/// - `start_states`: states opening a training sentence, in first-seen order.
/// - `end_tokens`: tokens closing a training sentence.
/// - `sentence_lengths`: one entry per kept sentence, the empirical pool of
///   target lengths.
/// - `token_counts`: global occurrence count of every token.
///
/// Built once, then only read by the generator.
#[derive(Clone, Debug)]
pub struct Corpus {
	min_sentence_len: usize,
	model: TransitionModel,
	start_states: Vec<State>,
	known_starts: HashSet<State>,
	end_tokens: HashSet<Token>,
	sentence_lengths: Vec<usize>,
	token_counts: HashMap<Token, usize>,
	discarded: usize,
}

impl Corpus {
	/// Creates an empty corpus using the state size and minimum sentence
	/// length of `config`.
	pub fn new(config: &GenerationConfig) -> Result<Self> {
		Ok(Self {
			min_sentence_len: config.min_sentence_len(),
			model: TransitionModel::new(config.tuple_len())?,
			start_states: Vec::new(),
			known_starts: HashSet::new(),
			end_tokens: HashSet::new(),
			sentence_lengths: Vec::new(),
			token_counts: HashMap::new(),
			discarded: 0,
		})
	}

	/// Builds a corpus from already tokenized sentences.
	pub fn from_sentences<I, S>(config: &GenerationConfig, sentences: I) -> Result<Self>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<[Token]>,
	{
		let mut corpus = Self::new(config)?;
		for sentence in sentences {
			corpus.add_sentence(sentence.as_ref())?;
		}
		debug!(
			"Ingested {} sentences ({} discarded), {} states, {} start states, {} end tokens",
			corpus.sentence_lengths.len(),
			corpus.discarded,
			corpus.model.len(),
			corpus.start_states.len(),
			corpus.end_tokens.len()
		);
		Ok(corpus)
	}

	/// Tokenizes `text` and builds a corpus from the resulting sentences.
	pub fn from_text<T: Tokenizer + ?Sized>(config: &GenerationConfig, tokenizer: &T, text: &str) -> Result<Self> {
		Self::from_sentences(config, tokenizer.sentences(text))
	}

	/// Adds one tokenized sentence.
	///
	/// Returns `false` if the sentence is shorter than the minimum length and
	/// was ignored entirely.
	///
	/// # Behavior
	/// - Records the length and every token occurrence.
	/// - Slides a window of `tuple_len` tokens and records the token that
	///   follows each window.
	/// - The first window is a start state; the token closing the sentence is
	///   an end token.
	pub fn add_sentence(&mut self, tokens: &[Token]) -> Result<bool> {
		if tokens.len() < self.min_sentence_len {
			self.discarded += 1;
			return Ok(false);
		}

		self.sentence_lengths.push(tokens.len());
		for token in tokens {
			*self.token_counts.entry(token.clone()).or_insert(0) += 1;
		}

		let tuple_len = self.model.tuple_len();
		for (i, window) in tokens.windows(tuple_len + 1).enumerate() {
			let (prefix, next) = window.split_at(tuple_len);
			let state = State::new(prefix.iter().cloned());
			let next = next[0].clone();

			if i == 0 && self.known_starts.insert(state.clone()) {
				self.start_states.push(state.clone());
			}
			if i + tuple_len == tokens.len() - 1 {
				self.end_tokens.insert(next.clone());
			}

			self.model.add_transition(state, next)?;
		}

		Ok(true)
	}

	pub fn model(&self) -> &TransitionModel {
		&self.model
	}

	/// Start states in the order they were first seen.
	pub fn start_states(&self) -> &[State] {
		&self.start_states
	}

	pub fn end_tokens(&self) -> &HashSet<Token> {
		&self.end_tokens
	}

	pub fn is_end_token(&self, token: &str) -> bool {
		self.end_tokens.contains(token)
	}

	/// Lengths of the kept sentences, in ingestion order.
	pub fn sentence_lengths(&self) -> &[usize] {
		&self.sentence_lengths
	}

	/// Number of sentences ignored for being too short.
	pub fn discarded_count(&self) -> usize {
		self.discarded
	}

	pub fn unique_token_count(&self) -> usize {
		self.token_counts.len()
	}

	/// Occurrences of `token` across the kept sentences.
	pub fn token_count(&self, token: &str) -> usize {
		self.token_counts.get(token).copied().unwrap_or(0)
	}

	/// The `n` most frequent tokens, ties broken alphabetically.
	pub fn most_common_tokens(&self, n: usize) -> Vec<(&str, usize)> {
		let mut tokens: Vec<(&str, usize)> = self.token_counts.iter().map(|(t, c)| (t.as_str(), *c)).collect();
		tokens.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
		tokens.truncate(n);
		tokens
	}

	/// Statistics over the sentence length pool.
	///
	/// # Errors
	/// Returns `InsufficientLengthSamples` if no sentence was kept.
	pub fn length_statistics(&self) -> Result<LengthStatistics> {
		LengthStatistics::from_samples(&self.sentence_lengths)
	}

	/// Start states offering more than one distinct next token.
	///
	/// # Errors
	/// Returns `NoViableStartState` if there is none.
	pub fn good_start_states(&self) -> Result<Vec<&State>> {
		let mut good = Vec::new();
		for state in &self.start_states {
			if self.model.transition_count(state)? > 1 {
				good.push(state);
			}
		}

		if good.is_empty() {
			return Err(MarkovError::NoViableStartState { tuple_len: self.model.tuple_len() });
		}
		Ok(good)
	}
}
