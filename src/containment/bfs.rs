// bfs.rs
// ──────────────────────────────────────────────────────────────────────────────
// Unweighted shortest-path distances over the network graph. Nodes the start
// cannot reach are simply absent from the result. Expansion follows the
// graph's lexicographic neighbor order, so downstream tie-breaking is
// reproducible.
// ──────────────────────────────────────────────────────────────────────────────

use std::collections::{HashMap, VecDeque};

use super::graph::NetworkGraph;

/// Distance from `start` to every reachable node.
pub fn distances(start: &str, graph: &NetworkGraph) -> HashMap<String, usize> {
    let mut dist = HashMap::new();
    dist.insert(start.to_string(), 0);

    let mut queue = VecDeque::new();
    queue.push_back(start.to_string());

    while let Some(current) = queue.pop_front() {
        let current_dist = dist[&current];
        for neighbor in graph.neighbors(&current) {
            if !dist.contains_key(neighbor) {
                dist.insert(neighbor.clone(), current_dist + 1);
                queue.push_back(neighbor.clone());
            }
        }
    }

    dist
}
