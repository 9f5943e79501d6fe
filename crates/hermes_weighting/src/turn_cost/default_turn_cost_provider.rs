use std::sync::Arc;

use crate::{
    constants::{RESTRICTED_TURN_MS, RESTRICTED_TURN_WEIGHT},
    error::WeightingError,
    graph_edge::is_valid_edge,
    types::{EdgeId, NodeId},
    weighting::{Milliseconds, Weight},
};

use super::{TurnCostProvider, turn_cost_table::TurnCostTable};

/// Turn costs read from a [`TurnCostTable`].
///
/// U-turns are charged `u_turn_costs`, or forbidden when no u-turn cost is configured.
#[derive(Debug, Clone)]
pub struct DefaultTurnCostProvider {
    table: Arc<TurnCostTable>,
    u_turn_costs: Option<Weight>,
}

impl DefaultTurnCostProvider {
    pub fn new(
        table: Arc<TurnCostTable>,
        u_turn_costs: Option<Weight>,
    ) -> Result<Self, WeightingError> {
        if let Some(weight) = u_turn_costs.filter(|weight| !weight.is_finite() || *weight < 0.0) {
            return Err(WeightingError::InvalidUTurnCost(weight));
        }

        Ok(DefaultTurnCostProvider {
            table,
            u_turn_costs,
        })
    }

    pub fn u_turn_costs(&self) -> Option<Weight> {
        self.u_turn_costs
    }
}

impl TurnCostProvider for DefaultTurnCostProvider {
    fn calc_turn_weight(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Weight {
        if !is_valid_edge(in_edge) || !is_valid_edge(out_edge) {
            return 0.0;
        }

        if in_edge == out_edge {
            return self.u_turn_costs.unwrap_or(RESTRICTED_TURN_WEIGHT);
        }

        self.table
            .get(in_edge, via_node, out_edge)
            .map_or(0.0, |turn_cost| turn_cost.weight())
    }

    fn calc_turn_ms(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Milliseconds {
        let weight = self.calc_turn_weight(in_edge, via_node, out_edge);
        if weight >= RESTRICTED_TURN_WEIGHT {
            return RESTRICTED_TURN_MS;
        }

        (weight * 1000.0).round() as Milliseconds
    }
}

#[cfg(test)]
mod tests {
    use crate::constants::INVALID_EDGE;

    use super::*;

    fn table() -> Arc<TurnCostTable> {
        let mut table = TurnCostTable::new();
        table.add_turn_cost(1, 10, 2, 4.5).unwrap();
        table.add_restriction(2, 10, 3);
        Arc::new(table)
    }

    #[test]
    fn should_read_table() {
        let provider = DefaultTurnCostProvider::new(table(), Some(40.0)).unwrap();

        assert_eq!(provider.calc_turn_weight(1, 10, 2), 4.5);
        assert_eq!(provider.calc_turn_ms(1, 10, 2), 4500);
        assert_eq!(provider.calc_turn_weight(2, 10, 3), RESTRICTED_TURN_WEIGHT);
        assert_eq!(provider.calc_turn_ms(2, 10, 3), RESTRICTED_TURN_MS);
        assert_eq!(provider.calc_turn_weight(3, 10, 1), 0.0);
    }

    #[test]
    fn u_turn_costs() {
        let provider = DefaultTurnCostProvider::new(table(), Some(40.0)).unwrap();
        assert_eq!(provider.calc_turn_weight(1, 10, 1), 40.0);
        assert_eq!(provider.calc_turn_ms(1, 10, 1), 40_000);

        let no_u_turns = DefaultTurnCostProvider::new(table(), None).unwrap();
        assert_eq!(no_u_turns.calc_turn_weight(1, 10, 1), RESTRICTED_TURN_WEIGHT);
        assert_eq!(no_u_turns.calc_turn_ms(1, 10, 1), RESTRICTED_TURN_MS);
    }

    #[test]
    fn should_reject_invalid_u_turn_costs() {
        for weight in [-30.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                DefaultTurnCostProvider::new(table(), Some(weight)),
                Err(WeightingError::InvalidUTurnCost(_))
            ));
        }

        let free_u_turns = DefaultTurnCostProvider::new(table(), Some(0.0)).unwrap();
        assert_eq!(free_u_turns.calc_turn_weight(1, 10, 1), 0.0);
    }

    #[test]
    fn invalid_edges_are_free() {
        let provider = DefaultTurnCostProvider::new(table(), None).unwrap();

        assert_eq!(provider.calc_turn_weight(INVALID_EDGE, 10, 2), 0.0);
        assert_eq!(provider.calc_turn_ms(1, 10, INVALID_EDGE), 0);
    }
}
