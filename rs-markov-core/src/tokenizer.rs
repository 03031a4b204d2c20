use crate::model::state::Token;

/// Splits raw text into sentences of tokens.
///
/// The Markov core only needs opaque, comparable tokens and explicit
/// sentence boundaries; any normalization policy can be plugged in here.
pub trait Tokenizer {
	fn sentences(&self, text: &str) -> Vec<Vec<Token>>;
}

/// Punctuation that closes a sentence and is kept as its own token.
const SENTENCE_END: [char; 3] = ['.', '!', '?'];

/// Punctuation kept as its own token inside a sentence.
const INLINE_PUNCTUATION: [char; 3] = [',', ':', ';'];

/// Characters dropped entirely.
const REMOVED: [char; 4] = ['"', '\'', '(', ')'];

/// Default plain-text tokenizer.
///
/// - Lowercases the whole text
/// - `.` `!` `?` become tokens and end the current sentence
/// - `,` `:` `;` become tokens
/// - `-` and whitespace separate words
/// - quotes, apostrophes and parentheses are removed
///
/// Example:
/// `"The cat (sat), then ran!"` → `[[the, cat, sat, ",", then, ran, "!"]]`
#[derive(Clone, Copy, Debug, Default)]
pub struct PunctuationTokenizer;

impl Tokenizer for PunctuationTokenizer {
	fn sentences(&self, text: &str) -> Vec<Vec<Token>> {
		let mut sentences = Vec::new();
		let mut sentence: Vec<Token> = Vec::new();
		let mut word = String::new();

		for c in text.to_lowercase().chars() {
			if SENTENCE_END.contains(&c) {
				flush_word(&mut word, &mut sentence);
				sentence.push(c.to_string());
				sentences.push(std::mem::take(&mut sentence));
			} else if INLINE_PUNCTUATION.contains(&c) {
				flush_word(&mut word, &mut sentence);
				sentence.push(c.to_string());
			} else if c.is_whitespace() || c == '-' {
				flush_word(&mut word, &mut sentence);
			} else if !REMOVED.contains(&c) {
				word.push(c);
			}
		}

		flush_word(&mut word, &mut sentence);
		if !sentence.is_empty() {
			sentences.push(sentence);
		}
		sentences
	}
}

fn flush_word(word: &mut String, sentence: &mut Vec<Token>) {
	if !word.is_empty() {
		sentence.push(std::mem::take(word));
	}
}

fn is_punctuation(token: &str) -> bool {
	let mut chars = token.chars();
	match (chars.next(), chars.next()) {
		(Some(c), None) => SENTENCE_END.contains(&c) || INLINE_PUNCTUATION.contains(&c),
		_ => false,
	}
}

/// Joins tokens for display.
///
/// Punctuation sticks to the preceding word and the first letter is
/// uppercased: `[the, cat, sat, .]` → `"The cat sat."`
pub fn render_display(tokens: &[Token]) -> String {
	let mut sentence = String::new();
	for token in tokens {
		if !sentence.is_empty() && !is_punctuation(token) {
			sentence.push(' ');
		}
		sentence.push_str(token);
	}

	let mut chars = sentence.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => sentence,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tokens(sentence: &[&str]) -> Vec<Token> {
		sentence.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn splits_sentences_on_terminal_punctuation() {
		let sentences = PunctuationTokenizer.sentences("The cat sat. The dog ran!  Why?");
		assert_eq!(sentences, vec![
			tokens(&["the", "cat", "sat", "."]),
			tokens(&["the", "dog", "ran", "!"]),
			tokens(&["why", "?"]),
		]);
	}

	#[test]
	fn inline_punctuation_and_removed_characters() {
		let sentences = PunctuationTokenizer.sentences("\"Well\", she said: (it's) well-known;\nfine");
		assert_eq!(sentences, vec![tokens(&[
			"well", ",", "she", "said", ":", "its", "well", "known", ";", "fine",
		])]);
	}

	#[test]
	fn empty_text_has_no_sentences() {
		assert!(PunctuationTokenizer.sentences("  \n ").is_empty());
		assert!(PunctuationTokenizer.sentences("").is_empty());
	}

	#[test]
	fn render_attaches_punctuation_and_capitalizes() {
		assert_eq!(render_display(&tokens(&["the", "cat", ",", "sat", "."])), "The cat, sat.");
		assert_eq!(render_display(&tokens(&["élan", "!"])), "Élan!");
		assert_eq!(render_display(&[]), "");
	}
}
