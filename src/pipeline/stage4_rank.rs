use std::cmp::Ordering;

/// Competition ("1224") ranking over final scores, higher is better.
///
/// Returns the rank of each input position. Scores tie only on exact `f64`
/// equality; tied scores share the rank of the first of the run, and the
/// next distinct score gets rank `position + 1`, skipping the tied slots.
/// Ties keep input order (stable descending sort with index tie-break).
pub fn competition_ranks(final_scores: &[f64]) -> Vec<u32> {
    let mut order: Vec<usize> = (0..final_scores.len()).collect();
    order.sort_by(|&a, &b| {
        final_scores[b]
            .partial_cmp(&final_scores[a])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });

    let mut ranks = vec![0u32; final_scores.len()];
    let mut current = 0u32;
    for (pos, &idx) in order.iter().enumerate() {
        if pos == 0 || final_scores[idx] != final_scores[order[pos - 1]] {
            current = pos as u32 + 1;
        }
        ranks[idx] = current;
    }
    ranks
}
