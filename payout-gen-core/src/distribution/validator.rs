use thiserror::Error;

/// Ways a produced sequence can be inconsistent with its request.
///
/// Either kind indicates a defect in the generation logic itself, not a
/// user-facing condition. Callers should treat a failure as an assertion
/// failure rather than a recoverable error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
	/// The sequence does not sum to the requested total.
	#[error("sequence sums to {actual}, expected total {expected}")]
	TotalMismatch { expected: u32, actual: u32 },

	/// The sequence length differs from the requested part count and no
	/// zero entry is present to justify it.
	#[error("sequence holds {actual} entries, expected {expected} and no zero entry present")]
	CountMismatch { expected: u32, actual: u32 },
}

/// Checks a produced sequence against the requested total and part count.
///
/// A zero entry relaxes the count check: the zero-shortcut legitimately
/// collapses the remaining parts into a single final entry, and the
/// oversized-final-slot placeholder legitimately adds one.
pub fn validate(sequence: &[u32], total: u32, part_count: u32) -> Result<(), ValidationError> {
	let sum: u32 = sequence.iter().sum();
	if sum != total {
		return Err(ValidationError::TotalMismatch { expected: total, actual: sum });
	}

	let count = sequence.len() as u32;
	if count != part_count && !sequence.contains(&0) {
		return Err(ValidationError::CountMismatch { expected: part_count, actual: count });
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_matching_sequence() {
		assert!(validate(&[5], 5, 1).is_ok());
		assert!(validate(&[7, 13], 20, 2).is_ok());
	}

	#[test]
	fn rejects_wrong_total() {
		assert_eq!(
			validate(&[5], 6, 1),
			Err(ValidationError::TotalMismatch { expected: 6, actual: 5 })
		);
	}

	#[test]
	fn rejects_wrong_count_without_zero() {
		assert_eq!(
			validate(&[7, 13], 20, 3),
			Err(ValidationError::CountMismatch { expected: 3, actual: 2 })
		);
	}

	#[test]
	fn zero_entry_relaxes_the_count_check() {
		assert!(validate(&[0, 12], 12, 3).is_ok());
		assert!(validate(&[5, 0, 25], 30, 3).is_ok());
	}

	#[test]
	fn total_check_wins_over_count_check() {
		assert_eq!(
			validate(&[1, 2], 10, 3),
			Err(ValidationError::TotalMismatch { expected: 10, actual: 3 })
		);
	}

	#[test]
	fn empty_sequence_sums_to_zero() {
		assert!(validate(&[], 0, 1).is_err());
		assert_eq!(
			validate(&[], 0, 1),
			Err(ValidationError::CountMismatch { expected: 1, actual: 0 })
		);
	}
}
