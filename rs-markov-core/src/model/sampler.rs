use std::cell::OnceCell;
use std::collections::HashMap;
use std::hash::Hash;

use crate::error::{MarkovError, Result};

/// Discrete distribution built from observation counts.
///
/// A `WeightedSampler` accumulates how many times each key was observed and
/// answers "which key does this uniform draw select" queries.
///
/// Conceptually, this is the set of outgoing edges of one Markov node, each
/// edge weighted by its number of observations.
///
/// ## Responsibilities:
/// - Accumulate occurrences during learning (increment only)
/// - Freeze itself lazily into a cumulative-probability table
/// - Map a draw in `[0, 1)` to a key by scanning that table
///
/// ## Invariants
/// - Each count is strictly positive and never decreases
/// - `total` is the sum of all counts
/// - The cached table, when present, reflects the current counts
#[derive(Clone, Debug)]
pub struct WeightedSampler<K> {
	/// Keys with their occurrence count, in first-insertion order.
	counts: Vec<(K, u64)>,
	/// Position of each key inside `counts`.
	index: HashMap<K, usize>,
	total: u64,
	/// `(position in counts, cumulative probability)`, largest count first.
	/// Dropped by every increment and rebuilt on the next sample.
	cumulative: OnceCell<Vec<(usize, f64)>>,
}

impl<K> Default for WeightedSampler<K> {
	fn default() -> Self {
		Self {
			counts: Vec::new(),
			index: HashMap::new(),
			total: 0,
			cumulative: OnceCell::new(),
		}
	}
}

impl<K: Eq + Hash + Clone> WeightedSampler<K> {
	/// Creates an empty sampler.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `key`.
	pub fn increment(&mut self, key: K) {
		self.add(key, 1);
	}

	/// Records `amount` occurrences of `key`.
	///
	/// # Errors
	/// Returns `InvalidIncrement` if `amount` is 0.
	pub fn increment_by(&mut self, key: K, amount: u64) -> Result<()> {
		if amount == 0 {
			return Err(MarkovError::InvalidIncrement);
		}
		self.add(key, amount);
		Ok(())
	}

	fn add(&mut self, key: K, amount: u64) {
		match self.index.get(&key) {
			Some(&i) => self.counts[i].1 += amount,
			None => {
				self.index.insert(key.clone(), self.counts.len());
				self.counts.push((key, amount));
			}
		}
		self.total += amount;
		self.cumulative = OnceCell::new();
	}

	/// Sum of all counts.
	pub fn total(&self) -> u64 {
		self.total
	}

	/// Number of distinct keys.
	pub fn entry_count(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Occurrence count of `key`, 0 if never observed.
	pub fn count(&self, key: &K) -> u64 {
		self.index.get(key).map_or(0, |&i| self.counts[i].1)
	}

	/// Selects the key matching the uniform draw `u`.
	///
	/// Scans the cumulative table (largest count first, ties in insertion
	/// order) and returns the first key whose cumulative probability is
	/// `>= u`. Builds the table on first use.
	///
	/// When rounding leaves the last cumulative value slightly below `u`,
	/// the last entry of the table is returned. This is the policy for
	/// float undershoot, not an error: it can only favour the least likely key.
	///
	/// # Errors
	/// Returns `EmptyDistribution` if nothing was ever observed.
	pub fn sample(&self, u: f64) -> Result<&K> {
		let table = self.table();
		let (position, _) = table
			.iter()
			.find(|(_, cumulative)| *cumulative >= u)
			.or_else(|| table.last())
			.ok_or(MarkovError::EmptyDistribution)?;
		Ok(&self.counts[*position].0)
	}

	/// Iterates over the cumulative table as `(key, cumulative probability)`.
	pub fn cumulative(&self) -> impl Iterator<Item = (&K, f64)> {
		self.table().iter().map(|(position, cumulative)| (&self.counts[*position].0, *cumulative))
	}

	fn table(&self) -> &[(usize, f64)] {
		self.cumulative.get_or_init(|| {
			let total = self.total as f64;
			let mut order: Vec<usize> = (0..self.counts.len()).collect();
			// Stable sort, equal counts stay in insertion order
			order.sort_by(|a, b| self.counts[*b].1.cmp(&self.counts[*a].1));

			let mut acc = 0.0;
			order
				.into_iter()
				.map(|position| {
					acc += self.counts[position].1 as f64 / total;
					(position, acc)
				})
				.collect()
		})
	}
}
