use crate::{
    types::{EdgeId, NodeId},
    weighting::{Milliseconds, Weight},
};

use super::TurnCostProvider;

/// Every turn is free
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoTurnCostProvider;

impl TurnCostProvider for NoTurnCostProvider {
    #[inline(always)]
    fn calc_turn_weight(&self, _in_edge: EdgeId, _via_node: NodeId, _out_edge: EdgeId) -> Weight {
        0.0
    }

    #[inline(always)]
    fn calc_turn_ms(&self, _in_edge: EdgeId, _via_node: NodeId, _out_edge: EdgeId) -> Milliseconds {
        0
    }
}
