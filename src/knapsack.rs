#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    pub value: u64,
    pub weight: usize,
}

/// Solves the 0/1 knapsack problem. Returns the indices of the chosen items in
/// ascending order.
pub fn solve(capacity: usize, items: &[Item]) -> Vec<usize> {
    // best[i][c] is the best value using the first `i` items with capacity `c`
    let mut best = vec![vec![0u64; capacity + 1]; items.len() + 1];
    for (i, item) in items.iter().enumerate() {
        for c in 0..=capacity {
            let without = best[i][c];
            best[i + 1][c] = match c.checked_sub(item.weight) {
                Some(rest) => without.max(best[i][rest] + item.value),
                None => without,
            };
        }
    }

    // Backtracking
    let mut chosen = vec![];
    let mut c = capacity;
    for i in (0..items.len()).rev() {
        if best[i + 1][c] != best[i][c] {
            chosen.push(i);
            c -= items[i].weight;
        }
    }
    chosen.reverse();
    chosen
}
