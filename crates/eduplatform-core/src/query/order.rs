use crate::model::SortRule;
use std::cmp::Ordering;

// Sort rows by one sort rule, breaking ties by input position.
pub(crate) fn apply_order<E>(rows: &mut Vec<&E>, rule: &SortRule<E>) {
    if rows.len() < 2 {
        return;
    }

    // Phase 1: tag rows with their original position to preserve stability.
    let mut indexed: Vec<(usize, &E)> = rows.drain(..).enumerate().collect();

    // Phase 2: ordering via position tie-breaker.
    indexed.sort_by(|(left_idx, left), (right_idx, right)| {
        let ordering = rule.ordering(left, right);
        if ordering == Ordering::Equal {
            left_idx.cmp(right_idx)
        } else {
            ordering
        }
    });

    // Phase 3: restore the ordered rows.
    rows.extend(indexed.into_iter().map(|(_, row)| row));
}
