/// A pair chosen by the greedy matcher, by position in the original lists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchedPair {
    pub left: usize,
    pub right: usize,
    pub score: f64,
}

/// Greedy pairing of two lists.
///
/// Each round scans every remaining `(i, j)` in row-major order, keeps the
/// first pair with the strictly greatest score, then removes both elements.
/// Runs `min(|left|, |right|)` rounds. Removal happens on local index lists;
/// the caller's slices are never modified. This is not an optimal
/// assignment: an early pick is never revisited.
pub fn greedy_match<T, F>(left: &[T], right: &[T], mut score: F) -> Vec<MatchedPair>
where
    F: FnMut(&T, &T) -> f64,
{
    let mut remaining_left: Vec<usize> = (0..left.len()).collect();
    let mut remaining_right: Vec<usize> = (0..right.len()).collect();
    let rounds = left.len().min(right.len());
    let mut pairs = Vec::with_capacity(rounds);

    for _ in 0..rounds {
        let mut best: Option<(usize, usize, f64)> = None;
        for (i, &l) in remaining_left.iter().enumerate() {
            for (j, &r) in remaining_right.iter().enumerate() {
                let s = score(&left[l], &right[r]);
                if best.map_or(true, |(_, _, top)| s > top) {
                    best = Some((i, j, s));
                }
            }
        }

        let Some((i, j, s)) = best else { break };
        pairs.push(MatchedPair {
            left: remaining_left.remove(i),
            right: remaining_right.remove(j),
            score: s,
        });
    }

    pairs
}

/// `(sum of matched scores + delta * unmatched) / longer length`; 1 for two
/// empty lists.
pub fn matched_similarity(pairs: &[MatchedPair], left_len: usize, right_len: usize, delta: f64) -> f64 {
    let big = left_len.max(right_len);
    if big == 0 {
        return 1.0;
    }
    let matched = left_len.min(right_len);
    let sum: f64 = pairs.iter().fold(0.0, |acc, p| acc + p.score);
    (sum + delta * (big - matched) as f64) / big as f64
}
