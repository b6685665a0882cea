use std::cmp::{max, min};

use rand::Rng;

use crate::distribution::refiner::refine;
use crate::distribution::round::{RoundOutcome, RoundSettings};

/// Default maximum value an ordinary slot may take.
pub const DEFAULT_SLOT_CAP: u32 = 20;

/// Splits a total payout into a sequence of per-attempt values.
///
/// # Responsibilities
/// - Compute the feasible `[min, max)` range for each next value so the
///   remaining slots can still absorb what is left
/// - Draw each value uniformly from the refined candidate set
/// - Handle the zero-shortcut and the oversized-final-slot placeholder
///
/// # Invariants
/// - Produced values always sum to the requested total
/// - No value exceeds the slot cap unless immediately preceded by a `0`
/// - A `0` entry is always followed by exactly one entry (the whole
///   remainder at that point) and terminates the sequence
#[derive(Debug, Clone)]
pub struct Distributor {
	slot_cap: u32,
}

impl Default for Distributor {
	fn default() -> Self {
		Self { slot_cap: DEFAULT_SLOT_CAP }
	}
}

impl Distributor {
	/// Creates a distributor with the default slot cap.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a distributor with a custom slot cap.
	///
	/// # Errors
	/// Returns an error if the cap is 0.
	pub fn with_slot_cap(slot_cap: u32) -> Result<Self, String> {
		if slot_cap == 0 {
			return Err("Slot cap must be at least 1".to_owned());
		}
		Ok(Self { slot_cap })
	}

	/// Returns the configured slot cap.
	pub fn slot_cap(&self) -> u32 {
		self.slot_cap
	}

	/// Splits `total` into values for `part_count` attempts.
	///
	/// # Behavior
	/// - Values are appended one by one; each draw narrows the feasible
	///   range for the rest.
	/// - Drawing a `0` collapses everything remaining into one final
	///   entry, even when more than one part was left. The entry count
	///   then ends up below `part_count`; `validator` accepts this
	///   whenever a `0` is present.
	/// - When the last slot must hold more than the cap, a `0`
	///   placeholder is emitted before the oversized value. Callers must
	///   treat a value above the cap as legitimate only when immediately
	///   preceded by a `0`.
	///
	/// # Errors
	/// Returns an error if `part_count` is 0. Never fails otherwise.
	pub fn distribute(&self, total: u32, part_count: u32) -> Result<Vec<u32>, String> {
		if part_count == 0 {
			return Err("Part count must be at least 1".to_owned());
		}

		let mut values: Vec<u32> = Vec::with_capacity(part_count as usize + 1);
		let mut remaining = total;
		let mut parts_left = part_count;

		loop {
			// Stop condition / last value
			if parts_left == 1 {
				if remaining > self.slot_cap {
					values.push(0);
				}
				values.push(remaining);
				return Ok(values);
			}

			let raw = self.raw_candidates(remaining, parts_left);
			if raw.is_empty() {
				// Only reachable from degenerate totals below the playable
				// range (ex: total 0 over 2 parts). Fold the remainder into
				// an overflow pair so the sum stays intact.
				values.push(0);
				values.push(remaining);
				return Ok(values);
			}

			let candidates = refine(&raw, remaining, &values, parts_left);
			let new_value = candidates[rand::rng().random_range(0..candidates.len())];
			values.push(new_value);

			// Stop condition / a wild 0 has appeared
			if new_value == 0 {
				values.push(remaining);
				return Ok(values);
			}

			remaining -= new_value;
			parts_left -= 1;
		}
	}

	/// Computes the raw candidate range `[min, max)` for the next value.
	///
	/// # Behavior
	/// - `min` stays 0 while the remainder exceeds the cap: `0` must remain
	///   drawable there so the zero-shortcut can absorb an oversized
	///   remainder. Below that, `min` rises so the other slots, mutually
	///   distinct and capped, can still soak up the rest.
	/// - `max` keeps the value at or below the cap, and low enough that a
	///   minimal strictly increasing completion of the remaining slots does
	///   not overshoot the remainder.
	///
	/// Returns an empty range when no next value is feasible.
	fn raw_candidates(&self, remaining: u32, parts_left: u32) -> Vec<u32> {
		let cap = i64::from(self.slot_cap);
		let r = i64::from(remaining);
		let t = i64::from(parts_left);

		// When 0 is possible there is no minimum
		let mut low = 0;
		if r < cap + 1 {
			low = max(1, r - (t - 1) * cap + (t - 2) * (t - 1) / 2);
		}
		let high = min(r + 1 - (t - 1) * t / 2, cap + 1);

		(low..high).map(|v| v as u32).collect()
	}

	/// Generates one full round: draws a random total and attempt count
	/// from `settings`, then distributes the total across the attempts.
	///
	/// # Errors
	/// Never fails for settings built through `RoundSettings` setters;
	/// the error type is kept for parity with `distribute`.
	pub fn run_round(&self, settings: &RoundSettings) -> Result<RoundOutcome, String> {
		let (total, part_count) = settings.draw();
		let values = self.distribute(total, part_count)?;
		Ok(RoundOutcome { total, part_count, values })
	}
}
