
// Correlation helpers for verifying spreading-code structure.  Sequences are
// chip sequences; a true chip counts as 1 and a false chip as 0, so the dot
// product below is equivalent to correlating the +/-1 renderings.

/// Difference between the number of matched and mismatched chips of two
/// equal-length sequences
pub fn dot_product(a:&[bool], b:&[bool]) -> i32 {
	assert_eq!(a.len(), b.len(), "sequences must have the same length");

	let matches:i32 = a.iter().zip(b.iter()).filter(|(x, y)| x == y).count() as i32;
	let mismatches:i32 = (a.len() as i32) - matches;

	matches - mismatches
}

/// Cyclic rotation moving the last `distance` chips to the front
pub fn rotate(x:&[bool], distance:usize) -> Vec<bool> {
	if x.is_empty() {
		return vec![];
	}

	let distance:usize = distance % x.len();
	let split:usize = x.len() - distance;

	let mut ans:Vec<bool> = x[split..].to_vec();
	ans.extend_from_slice(&x[..split]);
	ans
}

/// Dot product of `a` against every cyclic rotation of `b`; index 0 holds the
/// unrotated correlation
pub fn cross_correlate(a:&[bool], b:&[bool]) -> Vec<i32> {
	(0..a.len()).map(|offset| dot_product(a, &rotate(b, offset))).collect()
}

pub fn autocorrelate(x:&[bool]) -> Vec<i32> {
	cross_correlate(x, x)
}

/// The three cross-correlation values a preferred pair of m-sequences is
/// allowed to take: {-1, -t, t-2} with t depending on the register size
pub fn preferred_sequence_values(size:usize) -> [i32; 3] {
	let adjustment:usize = if size % 2 == 0 { 2 } else { 1 };
	let t:i32 = (1 << ((size + adjustment) / 2)) + 1;

	[-1, -t, t - 2]
}

/// Whether every correlation value is one the preferred set allows for
/// registers of the given size
pub fn is_preferred_pair(correlations:&[i32], size:usize) -> bool {
	let allowed:[i32; 3] = preferred_sequence_values(size);
	correlations.iter().all(|c| allowed.contains(c))
}
