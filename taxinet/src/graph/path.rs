//! Bounded shortest-path search over one airport's taxi network.

use super::airport::Airport;
use super::NodeIdx;

/// One node of a computed path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathNode {
    /// Taxi node index
    pub node: NodeIdx,
    /// Distance from the start of the path in meters
    pub path_len_m: f64,
}

/// Per-search bookkeeping, indexed like the taxi nodes.
#[derive(Debug, Clone, Copy)]
struct SearchState {
    dist: f64,
    prev: Option<NodeIdx>,
    seeded: bool,
    visited: bool,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            dist: f64::INFINITY,
            prev: None,
            seeded: false,
            visited: false,
        }
    }
}

impl Airport {
    /// Shortest path between two nodes with a maximum length (Dijkstra).
    ///
    /// With `start_is_runway` the search starts at every taxi node joined to
    /// runway end `start`, otherwise at taxi node `start`. Nodes farther than
    /// `max_len_m` from the start are never expanded.
    ///
    /// # Returns
    ///
    /// The path in reverse order: `end` first, the start node last. Empty if
    /// `end` cannot be reached within `max_len_m` or start and end coincide.
    pub fn shortest_path(
        &self,
        start: NodeIdx,
        start_is_runway: bool,
        end: NodeIdx,
        max_len_m: f64,
    ) -> Vec<PathNode> {
        if end >= self.nodes.len() || (!start_is_runway && start == end) {
            return Vec::new();
        }

        let seeds: Vec<NodeIdx> = if start_is_runway {
            match self.runway_ends.get(start) {
                Some(rwy_end) => rwy_end.taxi_nodes().to_vec(),
                None => return Vec::new(),
            }
        } else if start < self.nodes.len() {
            vec![start]
        } else {
            return Vec::new();
        };

        let mut state = vec![SearchState::default(); self.nodes.len()];
        let mut frontier: Vec<NodeIdx> = Vec::with_capacity(seeds.len());
        for &seed in seeds.iter().filter(|&&s| s < self.nodes.len()) {
            state[seed].dist = 0.0;
            state[seed].seeded = true;
            if !frontier.contains(&seed) {
                frontier.push(seed);
            }
        }

        while !state[end].visited {
            // Linear scan is fine, the length cap keeps the frontier small
            let Some(pos) = frontier
                .iter()
                .enumerate()
                .min_by(|a, b| state[*a.1].dist.total_cmp(&state[*b.1].dist))
                .map(|(pos, _)| pos)
            else {
                break;
            };
            let current = frontier.swap_remove(pos);
            state[current].visited = true;
            let current_dist = state[current].dist;

            for &edge_idx in self.nodes[current].edges() {
                let Some(edge) = self.edges.get(edge_idx) else {
                    continue;
                };
                if edge.is_runway() {
                    continue;
                }
                let next = edge.other_node(current);
                if state[next].visited {
                    continue;
                }
                let new_dist = current_dist + edge.length_m();
                if new_dist > max_len_m || state[next].dist <= new_dist {
                    continue;
                }
                state[next].dist = new_dist;
                state[next].prev = Some(current);
                if !frontier.contains(&next) {
                    frontier.push(next);
                }
            }
        }

        if !state[end].visited {
            return Vec::new();
        }

        let mut path = Vec::new();
        let mut current = end;
        loop {
            path.push(PathNode {
                node: current,
                path_len_m: state[current].dist,
            });
            if state[current].seeded {
                break;
            }
            match state[current].prev {
                Some(prev) => current = prev,
                None => break,
            }
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::RunwayThreshold;

    // ==================== Helpers ====================

    /// Build an airport from nodes on a line and explicit edges with lengths.
    fn weighted_airport(node_count: usize, edges: &[(NodeIdx, NodeIdx, f64)]) -> Airport {
        let mut apt = Airport::new("PATH");
        for i in 0..node_count {
            apt.add_node(0.0, i as f64 * 0.001, None);
        }
        for &(a, b, len) in edges {
            apt.add_edge(a, b, Some(len)).unwrap();
        }
        apt.sort_edges_by_bearing();
        apt
    }

    fn nodes_of(path: &[PathNode]) -> Vec<NodeIdx> {
        path.iter().map(|p| p.node).collect()
    }

    fn assert_contiguous(apt: &Airport, path: &[PathNode]) {
        for pair in path.windows(2) {
            let (a, b) = (pair[0].node, pair[1].node);
            let joined = apt.nodes()[a]
                .edges()
                .iter()
                .any(|&e| apt.edges()[e].connects(b));
            assert!(joined, "no edge between {} and {}", a, b);
        }
    }

    // ==================== Tests ====================

    #[test]
    fn test_prefers_shorter_detour_over_direct_edge() {
        // 0-3 direct costs 10, 0-1-2-3 costs 6
        let apt = weighted_airport(4, &[(0, 3, 10.0), (0, 1, 2.0), (1, 2, 2.0), (2, 3, 2.0)]);

        let path = apt.shortest_path(0, false, 3, 100.0);
        assert_eq!(nodes_of(&path), vec![3, 2, 1, 0]);
        assert_eq!(path[0].path_len_m, 6.0);
        assert_eq!(path[3].path_len_m, 0.0);
        assert_contiguous(&apt, &path);
    }

    #[test]
    fn test_length_cap_returns_empty() {
        let apt = weighted_airport(4, &[(0, 3, 10.0), (0, 1, 2.0), (1, 2, 2.0), (2, 3, 2.0)]);

        assert!(apt.shortest_path(0, false, 3, 5.9).is_empty());
        assert_eq!(apt.shortest_path(0, false, 3, 6.0).len(), 4);
    }

    #[test]
    fn test_edge_over_budget_is_never_relaxed() {
        // The direct edge alone already exceeds the cap
        let apt = weighted_airport(3, &[(0, 2, 8.0), (0, 1, 3.0), (1, 2, 3.0)]);
        let path = apt.shortest_path(0, false, 2, 7.0);
        assert_eq!(nodes_of(&path), vec![2, 1, 0]);
    }

    #[test]
    fn test_unreachable_and_degenerate() {
        let apt = weighted_airport(4, &[(0, 1, 1.0), (2, 3, 1.0)]);

        assert!(apt.shortest_path(0, false, 3, 100.0).is_empty());
        assert!(apt.shortest_path(1, false, 1, 100.0).is_empty());
        assert!(apt.shortest_path(0, false, 42, 100.0).is_empty());
    }

    #[test]
    fn test_reversed_path_walks_start_to_end() {
        let apt = weighted_airport(
            6,
            &[(0, 1, 1.0), (1, 2, 1.0), (2, 5, 5.0), (1, 3, 1.0), (3, 4, 1.0), (4, 5, 1.0)],
        );
        let mut path = apt.shortest_path(0, false, 5, 100.0);
        assert_contiguous(&apt, &path);

        path.reverse();
        assert_eq!(path.first().map(|p| p.node), Some(0));
        assert_eq!(path.last().map(|p| p.node), Some(5));
        assert!(path.windows(2).all(|w| w[0].path_len_m < w[1].path_len_m));
    }

    #[test]
    fn test_runway_start_seeds_joined_nodes() {
        let mut apt = weighted_airport(3, &[(0, 1, 4.0), (1, 2, 4.0)]);
        apt.add_runway(
            &RunwayThreshold::new("09", 0.01, 0.0, 0.0),
            &RunwayThreshold::new("27", 0.01, 0.01, 0.0),
        );
        apt.runway_ends[0].attach_taxi_node(1);

        let path = apt.shortest_path(0, true, 2, 100.0);
        assert_eq!(nodes_of(&path), vec![2, 1]);
        assert_eq!(path[0].path_len_m, 4.0);

        // A runway end without joined nodes has no path
        assert!(apt.shortest_path(1, true, 2, 100.0).is_empty());
    }
}
