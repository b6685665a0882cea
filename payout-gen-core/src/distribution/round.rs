use rand::Rng;

use serde::{Deserialize, Serialize};

/// Ranges used to draw the top-level inputs of a round.
///
/// `RoundSettings` holds the inclusive range the total payout is drawn
/// from and the inclusive range the attempt count is drawn from.
///
/// # Invariants
/// - `min_total <= max_total`
/// - `1 <= min_parts <= max_parts`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RoundSettings {
	/// Smallest total payout a round may be asked to split.
	min_total: u32,
	/// Largest total payout a round may be asked to split.
	max_total: u32,
	/// Smallest number of attempts in a round.
	min_parts: u32,
	/// Largest number of attempts in a round.
	max_parts: u32,
}

impl Default for RoundSettings {
	fn default() -> Self {
		Self {
			min_total: 5,
			max_total: 100,
			min_parts: 1,
			max_parts: 3,
		}
	}
}

impl RoundSettings {
	/// Creates settings with the default ranges (total 5..=100,
	/// attempts 1..=3).
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the inclusive range the total payout is drawn from.
	///
	/// # Errors
	/// Returns an error if the range is inverted.
	pub fn set_total_range(&mut self, min: u32, max: u32) -> Result<(), String> {
		if min > max {
			return Err(format!("Invalid total range: {} > {}", min, max));
		}
		self.min_total = min;
		self.max_total = max;
		Ok(())
	}

	/// Sets the inclusive range the attempt count is drawn from.
	///
	/// # Errors
	/// Returns an error if the range is inverted or starts at 0.
	pub fn set_part_range(&mut self, min: u32, max: u32) -> Result<(), String> {
		if min == 0 {
			return Err("Part count must be at least 1".to_owned());
		}
		if min > max {
			return Err(format!("Invalid part range: {} > {}", min, max));
		}
		self.min_parts = min;
		self.max_parts = max;
		Ok(())
	}

	/// Returns the inclusive total range as `(min, max)`.
	pub fn total_range(&self) -> (u32, u32) {
		(self.min_total, self.max_total)
	}

	/// Returns the inclusive part-count range as `(min, max)`.
	pub fn part_range(&self) -> (u32, u32) {
		(self.min_parts, self.max_parts)
	}

	/// Draws a uniformly random `(total, part_count)` pair.
	pub fn draw(&self) -> (u32, u32) {
		let mut rng = rand::rng();
		(
			rng.random_range(self.min_total..=self.max_total),
			rng.random_range(self.min_parts..=self.max_parts),
		)
	}
}

/// Record of one generated round.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RoundOutcome {
	/// Total payout that was split.
	pub total: u32,
	/// Number of attempts the total was nominally split into.
	pub part_count: u32,
	/// The produced values, in draw order.
	pub values: Vec<u32>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_match_the_playable_ranges() {
		let settings = RoundSettings::new();
		assert_eq!(settings.total_range(), (5, 100));
		assert_eq!(settings.part_range(), (1, 3));
	}

	#[test]
	fn draw_stays_within_ranges() {
		let mut settings = RoundSettings::new();
		settings.set_total_range(10, 12).unwrap();
		settings.set_part_range(2, 2).unwrap();
		for _ in 0..100 {
			let (total, part_count) = settings.draw();
			assert!((10..=12).contains(&total));
			assert_eq!(part_count, 2);
		}
	}

	#[test]
	fn degenerate_single_value_ranges_are_accepted() {
		let mut settings = RoundSettings::new();
		settings.set_total_range(7, 7).unwrap();
		settings.set_part_range(1, 1).unwrap();
		assert_eq!(settings.draw(), (7, 1));
	}

	#[test]
	fn inverted_ranges_are_rejected() {
		let mut settings = RoundSettings::new();
		assert!(settings.set_total_range(10, 5).is_err());
		assert!(settings.set_part_range(3, 2).is_err());
		// failed setters leave the settings untouched
		assert_eq!(settings, RoundSettings::default());
	}

	#[test]
	fn zero_part_count_is_rejected() {
		let mut settings = RoundSettings::new();
		assert!(settings.set_part_range(0, 3).is_err());
	}

	#[test]
	fn outcome_round_trips_through_serde() {
		let outcome = RoundOutcome {
			total: 30,
			part_count: 3,
			values: vec![5, 0, 25],
		};
		let json = serde_json::to_string(&outcome).unwrap();
		let back: RoundOutcome = serde_json::from_str(&json).unwrap();
		assert_eq!(back, outcome);
	}
}
