/// An element of a candidate subsequence, linked to the element before it.
struct Node {
    index: usize,
    prev: Option<usize>,
}

/// Returns the indices of a longest strictly increasing subsequence of `seq`,
/// in ascending order. Runs in `O(n log n)` using patience sorting.
pub fn longest_increasing_subsequence(seq: &[i64]) -> Vec<usize> {
    // All nodes ever created, addressed by position
    let mut nodes: Vec<Node> = Vec::with_capacity(seq.len());
    // The top value of each pile and the node that put it there. Pile tops
    // are strictly increasing.
    let mut tops: Vec<i64> = vec![];
    let mut top_nodes: Vec<usize> = vec![];

    for (index, &x) in seq.iter().enumerate() {
        let pile = tops.partition_point(|&top| top < x);
        nodes.push(Node {
            index,
            prev: pile.checked_sub(1).map(|p| top_nodes[p]),
        });
        let node = nodes.len() - 1;

        if pile == tops.len() {
            tops.push(x);
            top_nodes.push(node);
        } else {
            tops[pile] = x;
            top_nodes[pile] = node;
        }
    }

    let mut res = vec![];
    let mut node = top_nodes.last().copied();
    while let Some(n) = node {
        res.push(nodes[n].index);
        node = nodes[n].prev;
    }
    res.reverse();
    res
}
