use serde::Serialize;

use crate::error::Result;
use crate::model::corpus::Corpus;
use crate::model::generation_config::GenerationConfig;
use crate::model::generator::Generation;
use crate::model::state::{State, Token};
use crate::stats::LengthStatistics;

/// One generated sentence as presented to the user.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReportEntry {
	/// 1-based position in discovery order.
	pub rank: usize,
	pub abnormal: bool,
	pub sentence: String,
}

/// Everything a front end shows after a run, as plain data.
#[derive(Serialize, Clone, Debug)]
pub struct Report {
	pub unique_tokens: usize,
	pub lengths: LengthStatistics,
	/// Number of distinct states in the transition table.
	pub transitions: usize,
	pub start_states: usize,
	pub good_start_states: usize,
	pub end_tokens: usize,
	pub seed: State,
	pub max_attempts: usize,
	pub target_count: usize,
	pub attempts: usize,
	pub results: Vec<ReportEntry>,
}

impl Report {
	/// Gathers corpus statistics and generated sentences.
	///
	/// `render` turns a token list into its display form (see
	/// `tokenizer::render_display`).
	///
	/// # Errors
	/// Returns an error if the corpus has no length sample or no good start state.
	pub fn new<F>(corpus: &Corpus, config: &GenerationConfig, generation: &Generation, render: F) -> Result<Self>
	where
		F: Fn(&[Token]) -> String,
	{
		let results = generation
			.sentences
			.iter()
			.enumerate()
			.map(|(i, s)| ReportEntry { rank: i + 1, abnormal: s.abnormal, sentence: render(s.tokens.as_slice()) })
			.collect();

		Ok(Self {
			unique_tokens: corpus.unique_token_count(),
			lengths: corpus.length_statistics()?,
			transitions: corpus.model().len(),
			start_states: corpus.start_states().len(),
			good_start_states: corpus.good_start_states()?.len(),
			end_tokens: corpus.end_tokens().len(),
			seed: generation.seed.clone(),
			max_attempts: config.max_attempts(),
			target_count: config.target_count(),
			attempts: generation.attempts,
			results,
		})
	}
}
