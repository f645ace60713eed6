// virus.rs
// ──────────────────────────────────────────────────────────────────────────────
// The adversary's movement policy: head for the nearest gateway, breaking
// distance ties by smallest identifier, advancing through the lexicographically
// smallest non-gateway neighbor that stays on a shortest path.
// ──────────────────────────────────────────────────────────────────────────────

use super::bfs;
use super::graph::NetworkGraph;

/// The adversary's planned move for one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirusMove {
    /// The gateway the adversary is heading for.
    pub target: String,
    /// The node it will advance to, absent when the gateway is already
    /// adjacent (it would step straight in next round).
    pub next_hop: Option<String>,
    /// Shortest-path distance from the current position to the target.
    pub distance: usize,
}

/// Plans the adversary's move from `position`, or `None` when no gateway is
/// reachable any more, meaning containment is already won.
pub fn next_move(position: &str, graph: &NetworkGraph) -> Option<VirusMove> {
    let from_position = bfs::distances(position, graph);

    // Nearest gateway; BTreeSet iteration makes the lexicographic tie-break
    // implicit in the `<` comparison.
    let mut nearest: Option<(usize, &String)> = None;
    for gateway in graph.gateways() {
        if let Some(&d) = from_position.get(gateway) {
            if nearest.map_or(true, |(best, _)| d < best) {
                nearest = Some((d, gateway));
            }
        }
    }
    let (distance, target) = nearest?;

    if distance == 1 {
        return Some(VirusMove {
            target: target.clone(),
            next_hop: None,
            distance,
        });
    }

    let next_hop = shortest_path_hop(position, target, distance, graph);
    Some(VirusMove {
        target: target.clone(),
        next_hop,
        distance,
    })
}

/// Smallest non-gateway neighbor of `position` lying at `distance - 1` from
/// the target gateway.
fn shortest_path_hop(
    position: &str,
    target: &str,
    distance: usize,
    graph: &NetworkGraph,
) -> Option<String> {
    let to_target = bfs::distances(target, graph);
    graph
        .neighbors(position)
        .filter(|n| !graph.gateways().contains(*n))
        .find(|n| to_target.get(*n).copied() == Some(distance - 1))
        .cloned()
}
