/// Narrows a raw candidate range down to a preferred subset.
///
/// Distinct values across the whole sequence are preferred, never
/// required: when filtering would leave nothing to draw, the raw range
/// is returned unmodified.
///
/// ## Responsibilities
/// - Drop candidates already present in `chosen`
/// - On the second-to-last draw, drop candidates that would force the
///   final value into a repeat
/// - Guarantee a non-empty result for any non-empty `raw`
///
/// ## Invariants
/// - Pure: no side effects, no randomness
/// - Result is always a subset of `raw`, or `raw` itself
pub(crate) fn refine(
	raw: &[u32],
	remaining_total: u32,
	chosen: &[u32],
	parts_left: u32,
) -> Vec<u32> {
	// Remove repeated values
	let mut refined: Vec<u32> = raw
		.iter()
		.copied()
		.filter(|candidate| !chosen.contains(candidate))
		.collect();

	// Remove candidates that will cause the last value to equal an
	// earlier one
	if parts_left == 2 {
		// The exact midpoint would make the final value equal this one
		if remaining_total % 2 == 0 {
			refined.retain(|&candidate| candidate != remaining_total / 2);
		}
		// Choosing `candidate` fixes the final value to
		// `remaining_total - candidate`; skip it when that value is taken.
		// checked_sub keeps out-of-range inputs from wrapping.
		refined.retain(|&candidate| match remaining_total.checked_sub(candidate) {
			Some(rest) => !chosen.contains(&rest),
			None => true,
		});
	}

	// If there are no possible values left, accept repeated values
	// (ex: 5 over 3 attempts needs one repetition, 1 2 2 or 1 1 3)
	if refined.is_empty() {
		return raw.to_vec();
	}
	refined
}
