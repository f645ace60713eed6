// graph.rs
// ──────────────────────────────────────────────────────────────────────────────
// Undirected adjacency structure for the containment simulation. Gateway
// nodes, the adversary's escape points, are flagged by the capitalization
// of their identifier in the source edge list. Sorted containers keep
// neighbor iteration lexicographic, which every tie-break downstream relies
// on. The graph is mutated destructively as edges are severed; nothing else
// aliases it during a round.
// ──────────────────────────────────────────────────────────────────────────────

use std::collections::{BTreeMap, BTreeSet};

/// An edge between a gateway and a regular neighbor, eligible for severance.
pub type AvailableEdge = (String, String);

/// True when the identifier names a gateway (written in uppercase).
pub fn is_gateway(node: &str) -> bool {
    node.chars().any(char::is_uppercase) && !node.chars().any(char::is_lowercase)
}

/// Symmetric adjacency over string node identifiers, plus the derived gateway
/// bookkeeping the containment policy works from.
#[derive(Clone, Debug, Default)]
pub struct NetworkGraph {
    adjacency: BTreeMap<String, BTreeSet<String>>,
    gateways: BTreeSet<String>,
    available: BTreeSet<AvailableEdge>,
}

impl NetworkGraph {
    /// Builds the graph from an undirected edge list. Each gateway-to-regular
    /// edge is also recorded as severable.
    pub fn from_edges(edges: &[(String, String)]) -> NetworkGraph {
        let mut graph = NetworkGraph::default();
        for (u, v) in edges {
            graph
                .adjacency
                .entry(u.clone())
                .or_default()
                .insert(v.clone());
            graph
                .adjacency
                .entry(v.clone())
                .or_default()
                .insert(u.clone());

            let u_gw = is_gateway(u);
            let v_gw = is_gateway(v);
            if u_gw {
                graph.gateways.insert(u.clone());
            }
            if v_gw {
                graph.gateways.insert(v.clone());
            }
            if u_gw && !v_gw {
                graph.available.insert((u.clone(), v.clone()));
            } else if v_gw && !u_gw {
                graph.available.insert((v.clone(), u.clone()));
            }
        }
        graph
    }

    /// Neighbors of `node` in lexicographic order. Unknown nodes have none.
    pub fn neighbors(&self, node: &str) -> impl Iterator<Item = &String> {
        self.adjacency.get(node).into_iter().flatten()
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// All gateway nodes present in the edge list.
    pub fn gateways(&self) -> &BTreeSet<String> {
        &self.gateways
    }

    /// Severable gateway-to-regular edges still present.
    pub fn available_edges(&self) -> &BTreeSet<AvailableEdge> {
        &self.available
    }

    /// Gateway neighbors of `node`, lexicographic. Non-empty means the
    /// adversary standing on `node` escapes next step unless an edge is cut.
    pub fn gateway_neighbors(&self, node: &str) -> Vec<String> {
        self.neighbors(node)
            .filter(|n| self.gateways.contains(*n))
            .cloned()
            .collect()
    }

    /// Removes `edge` from both adjacency directions and from the severable
    /// set. Exclusive mutation: callers hold the only reference.
    pub fn sever(&mut self, edge: &AvailableEdge) {
        let (gateway, neighbor) = edge;
        if let Some(adj) = self.adjacency.get_mut(gateway) {
            adj.remove(neighbor);
        }
        if let Some(adj) = self.adjacency.get_mut(neighbor) {
            adj.remove(gateway);
        }
        self.available.remove(edge);
    }
}
