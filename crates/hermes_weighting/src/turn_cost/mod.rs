use std::sync::Arc;

use crate::{
    types::{EdgeId, NodeId},
    weighting::{Milliseconds, Weight},
};

pub mod default_turn_cost_provider;
pub mod no_turn_cost_provider;
pub mod query_turn_cost_provider;
pub mod turn_cost_table;

/// Cost of turning from `in_edge` onto `out_edge` at `via_node`.
///
/// Edge ids are edges of the uncontracted graph. Results are non-negative and finite,
/// a forbidden turn is reported as [`RESTRICTED_TURN_WEIGHT`](crate::constants::RESTRICTED_TURN_WEIGHT)
/// and [`RESTRICTED_TURN_MS`](crate::constants::RESTRICTED_TURN_MS).
pub trait TurnCostProvider {
    fn calc_turn_weight(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Weight;
    fn calc_turn_ms(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Milliseconds;
}

impl<T: TurnCostProvider + ?Sized> TurnCostProvider for &T {
    fn calc_turn_weight(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Weight {
        (**self).calc_turn_weight(in_edge, via_node, out_edge)
    }

    fn calc_turn_ms(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Milliseconds {
        (**self).calc_turn_ms(in_edge, via_node, out_edge)
    }
}

impl<T: TurnCostProvider + ?Sized> TurnCostProvider for Arc<T> {
    fn calc_turn_weight(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Weight {
        (**self).calc_turn_weight(in_edge, via_node, out_edge)
    }

    fn calc_turn_ms(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Milliseconds {
        (**self).calc_turn_ms(in_edge, via_node, out_edge)
    }
}
