use serde::Serialize;

use crate::error::{MarkovError, Result};

/// Summary of the training sentence lengths, in tokens.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LengthStatistics {
	pub count: usize,
	pub min: usize,
	pub max: usize,
	pub mean: f64,
	/// Mean of the two middle values when `count` is even.
	pub median: f64,
	/// Sample standard deviation (n - 1 denominator), 0.0 for a single sample.
	pub stdev: f64,
}

impl LengthStatistics {
	/// Computes the statistics of a length pool.
	///
	/// # Errors
	/// Returns `InsufficientLengthSamples` if `samples` is empty.
	pub fn from_samples(samples: &[usize]) -> Result<Self> {
		let count = samples.len();
		let (Some(&min), Some(&max)) = (samples.iter().min(), samples.iter().max()) else {
			return Err(MarkovError::InsufficientLengthSamples);
		};

		let mean = samples.iter().sum::<usize>() as f64 / count as f64;

		let mut sorted = samples.to_vec();
		sorted.sort_unstable();
		let median = if count % 2 == 1 {
			sorted[count / 2] as f64
		} else {
			(sorted[count / 2 - 1] + sorted[count / 2]) as f64 / 2.0
		};

		let stdev = if count > 1 {
			let squares: f64 = samples.iter().map(|&x| (x as f64 - mean).powi(2)).sum();
			(squares / (count - 1) as f64).sqrt()
		} else {
			0.0
		};

		Ok(Self { count, min, max, mean, median, stdev })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_pool_fails() {
		assert!(matches!(LengthStatistics::from_samples(&[]), Err(MarkovError::InsufficientLengthSamples)));
	}

	#[test]
	fn odd_pool() {
		let stats = LengthStatistics::from_samples(&[4, 2, 9]).unwrap();
		assert_eq!(stats.count, 3);
		assert_eq!(stats.min, 2);
		assert_eq!(stats.max, 9);
		assert!((stats.mean - 5.0).abs() < 1e-12);
		assert!((stats.median - 4.0).abs() < 1e-12);
		// variance = (1 + 9 + 16) / 2 = 13
		assert!((stats.stdev - 13f64.sqrt()).abs() < 1e-12);
	}

	#[test]
	fn even_pool_median_averages_middle() {
		let stats = LengthStatistics::from_samples(&[1, 4, 3, 10]).unwrap();
		assert!((stats.median - 3.5).abs() < 1e-12);
	}

	#[test]
	fn single_sample_has_zero_stdev() {
		let stats = LengthStatistics::from_samples(&[7]).unwrap();
		assert_eq!(stats.stdev, 0.0);
		assert_eq!(stats.median, 7.0);
	}
}
