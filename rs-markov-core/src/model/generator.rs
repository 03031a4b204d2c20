use std::collections::HashSet;

use log::{info, trace, warn};
use rand::Rng;
use rand::seq::IndexedRandom;

use super::corpus::Corpus;
use super::generation_config::GenerationConfig;
use super::state::{State, Token};
use crate::error::{MarkovError, Result};

/// One distinct generated sentence.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedSentence {
	/// Tokens, seed included.
	pub tokens: Vec<Token>,
	/// Tokens joined by single spaces; the key used to reject duplicates.
	pub text: String,
	/// `true` when generation hit a dead end or stopped before reaching both
	/// the target length and an end token.
	pub abnormal: bool,
}

/// Outcome of a generation run.
#[derive(Clone, Debug)]
pub struct Generation {
	/// The start state shared by every attempt.
	pub seed: State,
	/// Distinct sentences in the order they were found.
	pub sentences: Vec<GeneratedSentence>,
	/// Attempts consumed, duplicates included.
	pub attempts: usize,
}

/// Sentence generator over a trained `Corpus`.
///
/// # Responsibilities
/// - Pick a seed among the good start states
/// - Walk the transition model from that seed, aiming at a length drawn
///   from the training sentences
/// - Keep only distinct sentences, within a bounded number of attempts
pub struct SentenceGenerator<'a> {
	corpus: &'a Corpus,
	max_attempts: usize,
	target_count: usize,
}

impl<'a> SentenceGenerator<'a> {
	pub fn new(corpus: &'a Corpus, config: &GenerationConfig) -> Self {
		Self {
			corpus,
			max_attempts: config.max_attempts(),
			target_count: config.target_count(),
		}
	}

	/// Picks a seed uniformly among the good start states.
	///
	/// # Errors
	/// Returns `NoViableStartState` if the corpus has no branching start state.
	pub fn choose_seed<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<State> {
		let good = self.corpus.good_start_states()?;
		let seed = good.choose(rng).ok_or(MarkovError::NoViableStartState {
			tuple_len: self.corpus.model().tuple_len(),
		})?;
		Ok((*seed).clone())
	}

	/// Chooses a seed and generates from it.
	pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Generation> {
		let seed = self.choose_seed(rng)?;
		info!("Seed: \"{}\" (max_attempts = {})", seed, self.max_attempts);
		self.generate(&seed, rng)
	}

	/// Generates up to `target_count` distinct sentences starting from `seed`.
	///
	/// # Behavior
	/// - Each attempt draws a target length from the training sentences and
	///   restarts from `seed`.
	/// - A sentence already produced in this run is dropped and does not count.
	/// - Stops at `target_count` sentences or `max_attempts` attempts; running
	///   out of attempts is not an error.
	///
	/// # Errors
	/// - `StateLength` if `seed` does not match the model's state size.
	/// - `InsufficientLengthSamples` if the corpus kept no sentence.
	pub fn generate<R: Rng + ?Sized>(&self, seed: &State, rng: &mut R) -> Result<Generation> {
		let tuple_len = self.corpus.model().tuple_len();
		if seed.len() != tuple_len {
			return Err(MarkovError::StateLength { expected: tuple_len, found: seed.len() });
		}

		let mut previous: HashSet<String> = HashSet::new();
		let mut sentences = Vec::new();
		let mut attempts = 0;

		while sentences.len() < self.target_count && attempts < self.max_attempts {
			attempts += 1;

			let target_len = *self
				.corpus
				.sentence_lengths()
				.choose(rng)
				.ok_or(MarkovError::InsufficientLengthSamples)?;

			let (tokens, abnormal) = self.attempt(seed, target_len, rng)?;
			let text = tokens.join(" ");
			if !previous.insert(text.clone()) {
				trace!("Attempt {attempts}: duplicate \"{text}\"");
				continue;
			}

			sentences.push(GeneratedSentence { tokens, text, abnormal });
		}

		if sentences.len() < self.target_count {
			warn!(
				"Attempt budget exhausted: {} of {} sentences after {} attempts",
				sentences.len(),
				self.target_count,
				attempts
			);
		} else {
			info!("Generated {} sentences in {} attempts", sentences.len(), attempts);
		}

		Ok(Generation { seed: seed.clone(), sentences, attempts })
	}

	/// Walks the model once from `seed`.
	///
	/// Stops on a dead end, or once the sentence is longer than `target_len`
	/// and the last token is an end token. Returns the tokens and whether the
	/// sentence ended abnormally.
	fn attempt<R: Rng + ?Sized>(&self, seed: &State, target_len: usize, rng: &mut R) -> Result<(Vec<Token>, bool)> {
		let model = self.corpus.model();
		let mut sequence: Vec<Token> = seed.tokens().to_vec();
		let mut state = seed.clone();
		let mut ended_on_end_token = false;

		loop {
			let next = match model.sample_next(&state, rng) {
				Ok(next) => next,
				Err(MarkovError::UnknownState(dead_end)) => {
					trace!("Dead end at \"{dead_end}\"");
					break;
				}
				Err(e) => return Err(e),
			};

			sequence.push(next.clone());
			state = state.advance(next);
			debug_assert_eq!(state.len(), seed.len());

			ended_on_end_token = self.corpus.is_end_token(next);
			if sequence.len() > target_len && ended_on_end_token {
				break;
			}
		}

		let abnormal = sequence.len() <= target_len || !ended_on_end_token;
		Ok((sequence, abnormal))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	fn sentence(words: &str) -> Vec<Token> {
		words.split_whitespace().map(str::to_owned).collect()
	}

	fn corpus(tuple_len: usize, lines: &[&str]) -> Corpus {
		let config = GenerationConfig::new(tuple_len).unwrap();
		Corpus::from_sentences(&config, lines.iter().map(|l| sentence(l))).unwrap()
	}

	fn config(max_attempts: usize, target_count: usize) -> GenerationConfig {
		let mut config = GenerationConfig::new(1).unwrap();
		config.set_max_attempts(max_attempts).unwrap();
		config.set_target_count(target_count).unwrap();
		config
	}

	#[test]
	fn outputs_start_with_seed_and_are_distinct() {
		let corpus = corpus(1, &["the cat sat .", "the cat ran .", "the dog sat ."]);
		let generator = SentenceGenerator::new(&corpus, &config(1_000, 10));
		let mut rng = SmallRng::seed_from_u64(11);

		let generation = generator.run(&mut rng).unwrap();
		assert_eq!(generation.seed, State::new(["the"]));
		assert!(!generation.sentences.is_empty());

		let distinct: HashSet<_> = generation.sentences.iter().map(|s| s.text.as_str()).collect();
		assert_eq!(distinct.len(), generation.sentences.len());
		for sentence in &generation.sentences {
			assert_eq!(sentence.tokens[0], "the");
			assert_eq!(sentence.text, sentence.tokens.join(" "));
		}
	}

	#[test]
	fn small_language_exhausts_budget_without_error() {
		// Only three distinct sentences exist
		let corpus = corpus(1, &["the cat sat .", "the cat ran .", "the dog sat ."]);
		let generator = SentenceGenerator::new(&corpus, &config(500, 10));
		let mut rng = SmallRng::seed_from_u64(5);

		let generation = generator.generate(&State::new(["the"]), &mut rng).unwrap();
		assert_eq!(generation.attempts, 500);
		assert_eq!(generation.sentences.len(), 3);
		// "." closes every sentence at exactly the target length, then dead-ends
		assert!(generation.sentences.iter().all(|s| s.abnormal));
	}

	#[test]
	fn stops_at_target_count() {
		let corpus = corpus(1, &["a b c .", "a c b .", "b a c .", "c a b ."]);
		let generator = SentenceGenerator::new(&corpus, &config(10_000, 3));
		let mut rng = SmallRng::seed_from_u64(9);

		let generation = generator.run(&mut rng).unwrap();
		assert_eq!(generation.sentences.len(), 3);
		assert!(generation.attempts >= 3);
	}

	#[test]
	fn dead_end_is_tagged_abnormal() {
		// With pairs of tokens, the final window of a sentence is never a state
		let corpus = corpus(2, &["x y z", "x y w"]);
		let generator = SentenceGenerator::new(&corpus, &config(50, 2));
		let mut rng = SmallRng::seed_from_u64(1);

		let generation = generator.run(&mut rng).unwrap();
		assert_eq!(generation.sentences.len(), 2);
		for sentence in &generation.sentences {
			assert_eq!(sentence.tokens.len(), 3);
			assert!(sentence.abnormal);
		}
	}

	#[test]
	fn clean_end_requires_passing_target_length() {
		// "b" ends sentences but is always followed by "a", so walks never dead-end
		let corpus = corpus(1, &["a b a b", "a a b"]);
		let generator = SentenceGenerator::new(&corpus, &config(100, 2));
		let mut rng = SmallRng::seed_from_u64(2);

		let generation = generator.run(&mut rng).unwrap();
		assert_eq!(generation.sentences.len(), 2);
		for sentence in &generation.sentences {
			assert!(sentence.tokens.len() > 3);
			assert_eq!(sentence.tokens.last().map(String::as_str), Some("b"));
			assert!(!sentence.abnormal);
		}
	}

	#[test]
	fn seed_of_wrong_length_is_rejected() {
		let corpus = corpus(1, &["the cat sat .", "the dog sat ."]);
		let generator = SentenceGenerator::new(&corpus, &config(10, 1));
		let mut rng = SmallRng::seed_from_u64(0);
		let err = generator.generate(&State::new(["the", "cat"]), &mut rng).unwrap_err();
		assert!(matches!(err, MarkovError::StateLength { expected: 1, found: 2 }));
	}

	#[test]
	fn same_seed_same_output() {
		let lines = ["the cat sat on the mat .", "the dog sat on the cat .", "a dog ran to the mat ."];
		let corpus = corpus(1, &lines);
		let generator = SentenceGenerator::new(&corpus, &config(1_000, 5));

		let first = generator.run(&mut SmallRng::seed_from_u64(77)).unwrap();
		let second = generator.run(&mut SmallRng::seed_from_u64(77)).unwrap();
		assert_eq!(first.seed, second.seed);
		assert_eq!(first.sentences, second.sentences);
		assert_eq!(first.attempts, second.attempts);
	}
}
