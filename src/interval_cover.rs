use itertools::Itertools;

/// Finds a minimum set of `intervals` covering the closed interval
/// `[target.0, target.1]` and returns their indices in the order they were
/// chosen, or `None` if the target cannot be covered.
pub fn cover((start, end): (f64, f64), intervals: &[(f64, f64)]) -> Option<Vec<usize>> {
    let by_start = (0..intervals.len())
        .sorted_by(|&i, &j| intervals[i].0.total_cmp(&intervals[j].0))
        .collect_vec();

    let mut chosen = vec![];
    let mut covered = start;
    let mut next = 0;
    loop {
        // Among the intervals starting inside the covered part, take the one
        // reaching furthest.
        let mut best: Option<usize> = None;
        while let Some(&i) = by_start.get(next) {
            if intervals[i].0 > covered {
                break;
            }
            let reach = intervals[i].1;
            if reach >= covered && best.map_or(true, |b| reach > intervals[b].1) {
                best = Some(i);
            }
            next += 1;
        }

        let best = best?;
        if !chosen.is_empty() && intervals[best].1 <= covered {
            return None;
        }
        chosen.push(best);
        covered = intervals[best].1;

        if covered >= end {
            return Some(chosen);
        }
    }
}
