// policy.rs
// ──────────────────────────────────────────────────────────────────────────────
// The defender's edge-severing loop. One severable edge is cut per round, so
// the loop runs at most once per gateway-adjacent edge in the input. Rule
// order within a round:
//
//   1. danger now:   the adversary stands next to a gateway: cut the
//                     smallest such edge, nothing else can stop it;
//   2. one step out: its planned hop lands next to a gateway: cut the edge
//                     it is about to walk into, or failing that the smallest
//                     severable edge reachable from that hop;
//   3. proactive:    cut the smallest severable edge anywhere.
//
// After the cut the adversary advances one hop toward its nearest reachable
// gateway (standing still when the gateway is already adjacent or none is
// reachable). The loop ends when no severable edge remains or the adversary
// has nowhere left to go; a breach is reported as an error, never by looping.
// ──────────────────────────────────────────────────────────────────────────────

use super::bfs;
use super::error::ContainmentError;
use super::graph::{is_gateway, AvailableEdge, NetworkGraph};
use super::virus;

/// Node the adversary occupies when the simulation starts.
const START_NODE: &str = "a";

/// Runs the full containment simulation over `edges`, returning the severed
/// edges in order, formatted `gateway-neighbor`.
pub fn solve(edges: &[(String, String)]) -> Result<Vec<String>, ContainmentError> {
    let mut graph = NetworkGraph::from_edges(edges);
    let mut position = START_NODE.to_string();
    let mut severed = Vec::new();

    // Degenerate inputs end before any round: nothing to cut, or the
    // adversary already sits on a gateway.
    if is_gateway(&position) || !graph.contains(&position) {
        return Ok(Vec::new());
    }

    while !graph.available_edges().is_empty() {
        let Some(edge) = choose_edge(&position, &graph) else {
            break;
        };
        severed.push(format!("{}-{}", edge.0, edge.1));
        graph.sever(&edge);

        match virus::next_move(&position, &graph) {
            // No gateway reachable any more: contained for good.
            None => break,
            Some(planned) => {
                if let Some(hop) = planned.next_hop {
                    position = hop;
                }
                // With the gateway adjacent the adversary stays put; the
                // danger-now rule answers it next round.
            }
        }
    }

    if let Some(gateway) = graph.gateway_neighbors(&position).into_iter().next() {
        return Err(ContainmentError::Breached { gateway });
    }

    Ok(severed)
}

/// Picks this round's edge by the three-rule priority above. `None` only
/// when no severable edge remains.
fn choose_edge(position: &str, graph: &NetworkGraph) -> Option<AvailableEdge> {
    // Rule 1: a gateway borders the current position.
    if let Some(gateway) = graph.gateway_neighbors(position).into_iter().next() {
        return Some((gateway, position.to_string()));
    }

    // Rule 2: the planned hop would border a gateway next round.
    if let Some(planned) = virus::next_move(position, graph) {
        if let Some(hop) = planned.next_hop.as_deref() {
            if !graph.gateway_neighbors(hop).is_empty() {
                let walking_into = (planned.target.clone(), hop.to_string());
                if graph.available_edges().contains(&walking_into) {
                    return Some(walking_into);
                }
                let reachable = bfs::distances(hop, graph);
                if let Some(edge) = graph
                    .available_edges()
                    .iter()
                    .find(|(_, n)| reachable.contains_key(n))
                {
                    return Some(edge.clone());
                }
            }
        }
    }

    // Rule 3: proactive smallest cut.
    graph.available_edges().iter().next().cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    #[test]
    fn empty_edge_list_terminates_immediately() {
        assert_eq!(solve(&[]).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn danger_now_cut_comes_first() {
        // Gateway B touches the start node; D is two hops away. The first
        // cut must be B-a, then D-c falls to the proactive rule.
        let result = solve(&edges(&[("a", "B"), ("a", "c"), ("c", "D")])).unwrap();
        assert_eq!(result, vec!["B-a".to_string(), "D-c".to_string()]);
    }

    #[test]
    fn round_count_never_exceeds_severable_edges() {
        let input = edges(&[
            ("a", "b"),
            ("b", "E"),
            ("b", "F"),
            ("a", "c"),
            ("c", "G"),
        ]);
        let severable = 3;
        let result = solve(&input).unwrap();
        assert!(result.len() <= severable);
    }

    #[test]
    fn lookahead_cuts_the_edge_being_walked_into() {
        // The adversary's shortest route is a -> b -> E, and b borders the
        // gateway E, so round one must cut E-b before the hop lands.
        let input = edges(&[("a", "b"), ("b", "E"), ("c", "F"), ("a", "c")]);
        let result = solve(&input).unwrap();
        assert!(result.contains(&"E-b".to_string()));
        assert!(result.len() <= 2);
    }

    #[test]
    fn contained_adversary_stops_the_loop() {
        // Severing B-a disconnects the adversary from every gateway, so the
        // stranded F-x edge is never touched.
        let result = solve(&edges(&[("a", "B"), ("x", "F"), ("x", "y")])).unwrap();
        assert_eq!(result, vec!["B-a".to_string()]);
    }
}
