use tracing::warn;

use crate::{
    constants::{INVALID_EDGE, RESTRICTED_TURN_MS, RESTRICTED_TURN_WEIGHT},
    graph_edge::is_valid_edge,
    types::{EdgeId, NodeId},
    weighting::{Milliseconds, Weight},
};

use super::TurnCostProvider;

/// Turn costs for a graph extended with virtual nodes and edges during one query.
///
/// Virtual ids come after the base graph ids. Virtual edges are mapped back to the base edge
/// they were split from before asking the wrapped provider. Turning at a virtual node is free,
/// except turning back onto the edge we came from.
#[derive(Debug, Clone)]
pub struct QueryTurnCostProvider<T> {
    turn_cost_provider: T,
    base_node_count: usize,
    base_edge_count: usize,

    // Original edge of every virtual edge, indexed by virtual edge id
    original_edges: Vec<EdgeId>,
}

impl<T: TurnCostProvider> QueryTurnCostProvider<T> {
    pub fn new(turn_cost_provider: T, base_node_count: usize, base_edge_count: usize) -> Self {
        QueryTurnCostProvider {
            turn_cost_provider,
            base_node_count,
            base_edge_count,
            original_edges: Vec::new(),
        }
    }

    /// Registers the next virtual edge and returns its id
    pub fn add_virtual_edge(&mut self, original_edge: EdgeId) -> EdgeId {
        let edge_id = self.base_edge_count + self.original_edges.len();
        self.original_edges.push(original_edge);
        edge_id
    }

    pub fn is_virtual_node(&self, node_id: NodeId) -> bool {
        node_id >= self.base_node_count
    }

    pub fn is_virtual_edge(&self, edge_id: EdgeId) -> bool {
        edge_id >= self.base_edge_count
    }

    /// Base edge a virtual edge was split from, `INVALID_EDGE` for unregistered virtual ids
    pub fn original_edge(&self, edge_id: EdgeId) -> EdgeId {
        if !self.is_virtual_edge(edge_id) {
            return edge_id;
        }

        self.original_edges
            .get(edge_id - self.base_edge_count)
            .copied()
            .unwrap_or(INVALID_EDGE)
    }

    /// Original `(in, out)` edges of a turn, `None` when either one is unknown
    fn original_turn(&self, in_edge: EdgeId, out_edge: EdgeId) -> Option<(EdgeId, EdgeId)> {
        if !is_valid_edge(in_edge) || !is_valid_edge(out_edge) {
            return None;
        }

        let in_edge = self.original_edge(in_edge);
        let out_edge = self.original_edge(out_edge);
        if !is_valid_edge(in_edge) || !is_valid_edge(out_edge) {
            warn!("Turn cost requested for a virtual edge that was never added");
            return None;
        }

        Some((in_edge, out_edge))
    }
}

impl<T: TurnCostProvider> TurnCostProvider for QueryTurnCostProvider<T> {
    fn calc_turn_weight(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Weight {
        let Some((in_edge, out_edge)) = self.original_turn(in_edge, out_edge) else {
            return 0.0;
        };

        if self.is_virtual_node(via_node) {
            return if in_edge == out_edge {
                RESTRICTED_TURN_WEIGHT
            } else {
                0.0
            };
        }

        self.turn_cost_provider
            .calc_turn_weight(in_edge, via_node, out_edge)
    }

    fn calc_turn_ms(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Milliseconds {
        let Some((in_edge, out_edge)) = self.original_turn(in_edge, out_edge) else {
            return 0;
        };

        if self.is_virtual_node(via_node) {
            return if in_edge == out_edge {
                RESTRICTED_TURN_MS
            } else {
                0
            };
        }

        self.turn_cost_provider
            .calc_turn_ms(in_edge, via_node, out_edge)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::turn_cost::{
        default_turn_cost_provider::DefaultTurnCostProvider, turn_cost_table::TurnCostTable,
    };

    use super::*;

    // Base graph: 3 nodes, 2 edges (0: 0 - 1, 1: 1 - 2). A query point splits edge 0 with virtual node 3
    fn provider() -> QueryTurnCostProvider<DefaultTurnCostProvider> {
        let mut table = TurnCostTable::new();
        table.add_turn_cost(0, 1, 1, 7.0).unwrap();
        let base = DefaultTurnCostProvider::new(Arc::new(table), Some(20.0)).unwrap();

        let mut provider = QueryTurnCostProvider::new(base, 3, 2);
        assert_eq!(provider.add_virtual_edge(0), 2);
        assert_eq!(provider.add_virtual_edge(0), 3);
        provider
    }

    #[test]
    fn virtual_edges_use_original_turn_costs() {
        let provider = provider();

        assert_eq!(provider.calc_turn_weight(3, 1, 1), 7.0);
        assert_eq!(provider.calc_turn_ms(3, 1, 1), 7000);
        assert_eq!(provider.calc_turn_weight(0, 1, 1), 7.0);
    }

    #[test]
    fn u_turns_at_virtual_nodes_are_restricted() {
        let provider = provider();

        assert_eq!(provider.calc_turn_weight(2, 3, 3), RESTRICTED_TURN_WEIGHT);
        assert_eq!(provider.calc_turn_ms(2, 3, 2), RESTRICTED_TURN_MS);
    }

    #[test]
    fn other_turns_at_virtual_nodes_are_free() {
        let mut provider = provider();
        let other = provider.add_virtual_edge(1);

        assert_eq!(provider.calc_turn_weight(2, 3, other), 0.0);
        assert_eq!(provider.calc_turn_ms(2, 3, other), 0);
    }

    #[test]
    fn ids() {
        let provider = provider();

        assert!(provider.is_virtual_node(3));
        assert!(!provider.is_virtual_node(2));
        assert!(provider.is_virtual_edge(2));
        assert_eq!(provider.original_edge(3), 0);
        assert_eq!(provider.original_edge(1), 1);
        assert_eq!(provider.original_edge(4), INVALID_EDGE);
    }

    #[test]
    fn unregistered_virtual_edges_have_no_turn_costs() {
        let provider = provider();

        // Edge 5 was never added, it must not be read as base edge 5 or as a u-turn
        assert_eq!(provider.calc_turn_weight(5, 1, 1), 0.0);
        assert_eq!(provider.calc_turn_ms(5, 1, 1), 0);
        assert_eq!(provider.calc_turn_weight(4, 3, 5), 0.0);
        assert_eq!(provider.calc_turn_ms(4, 3, 5), 0);
    }
}
