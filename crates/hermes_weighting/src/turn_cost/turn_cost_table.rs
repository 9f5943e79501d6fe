use fxhash::FxHashMap;
use tracing::trace;

use crate::{
    constants::RESTRICTED_TURN_WEIGHT,
    error::WeightingError,
    types::{EdgeId, NodeId},
    weighting::Weight,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TurnCost {
    Cost(Weight),
    Restricted,
}

impl TurnCost {
    pub fn weight(&self) -> Weight {
        match self {
            TurnCost::Cost(weight) => *weight,
            TurnCost::Restricted => RESTRICTED_TURN_WEIGHT,
        }
    }
}

/// Turn costs and restrictions of the base graph, keyed by (in edge, via node, out edge)
#[derive(Debug, Clone, Default)]
pub struct TurnCostTable {
    entries: FxHashMap<(EdgeId, NodeId, EdgeId), TurnCost>,
}

impl TurnCostTable {
    pub fn new() -> Self {
        TurnCostTable::default()
    }

    pub fn add_turn_cost(
        &mut self,
        in_edge: EdgeId,
        via_node: NodeId,
        out_edge: EdgeId,
        weight: Weight,
    ) -> Result<(), WeightingError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(WeightingError::InvalidTurnCost {
                in_edge,
                via_node,
                out_edge,
                weight,
            });
        }

        self.entries
            .insert((in_edge, via_node, out_edge), TurnCost::Cost(weight));
        Ok(())
    }

    pub fn add_restriction(&mut self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) {
        trace!(
            "Added turn restriction {} -> {} -> {}",
            in_edge, via_node, out_edge
        );
        self.entries
            .insert((in_edge, via_node, out_edge), TurnCost::Restricted);
    }

    pub fn get(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Option<TurnCost> {
        self.entries.get(&(in_edge, via_node, out_edge)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
