use std::sync::Arc;

use crate::{
    edge_direction::EdgeDirection,
    error::WeightingError,
    graph_edge::GraphEdge,
    meters::Meters,
    turn_cost::TurnCostProvider,
    types::{EdgeId, NodeId},
    vehicle_profile::VehicleProfile,
};

use super::{
    Milliseconds, Weight, Weighting,
    base_weighting::{calc_ms_with_turn_ms, calc_weight_with_turn_weight},
    request_hints::RequestHints,
    weighting_key::WeightingKey,
};

/// Uses the turn costs of one query on top of a shared weighting.
///
/// Edge costs and identity come from the wrapped weighting, only turn costs are replaced.
/// The wrapped weighting is borrowed and never modified, so it can keep serving other queries.
pub struct QueryWeighting<'a, W, T> {
    weighting: &'a W,
    turn_cost_provider: T,
}

impl<'a, W: Weighting, T: TurnCostProvider> QueryWeighting<'a, W, T> {
    pub fn new(weighting: &'a W, turn_cost_provider: T) -> Self {
        QueryWeighting {
            weighting,
            turn_cost_provider,
        }
    }

    pub fn turn_cost_provider(&self) -> &T {
        &self.turn_cost_provider
    }
}

impl<W: Weighting, T: TurnCostProvider> Weighting for QueryWeighting<'_, W, T> {
    fn key(&self) -> &WeightingKey {
        self.weighting.key()
    }

    fn vehicle(&self) -> &Arc<VehicleProfile> {
        self.weighting.vehicle()
    }

    fn name(&self) -> &str {
        self.weighting.name()
    }

    fn min_weight(&self, distance: Meters) -> Weight {
        self.weighting.min_weight(distance)
    }

    fn calc_edge_weight<E: GraphEdge + ?Sized>(&self, edge: &E, direction: EdgeDirection) -> Weight {
        self.weighting.calc_edge_weight(edge, direction)
    }

    fn calc_weight<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
        adj_edge: EdgeId,
    ) -> Weight {
        calc_weight_with_turn_weight(
            self.weighting,
            &self.turn_cost_provider,
            edge,
            direction,
            adj_edge,
        )
    }

    fn calc_edge_ms<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
    ) -> Result<Milliseconds, WeightingError> {
        self.weighting.calc_edge_ms(edge, direction)
    }

    fn calc_ms<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
        adj_edge: EdgeId,
    ) -> Result<Milliseconds, WeightingError> {
        calc_ms_with_turn_ms(
            self.weighting,
            &self.turn_cost_provider,
            edge,
            direction,
            adj_edge,
        )
    }

    fn calc_turn_weight(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Weight {
        self.turn_cost_provider
            .calc_turn_weight(in_edge, via_node, out_edge)
    }

    fn calc_turn_ms(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Milliseconds {
        self.turn_cost_provider
            .calc_turn_ms(in_edge, via_node, out_edge)
    }

    fn matches(&self, hints: &RequestHints) -> bool {
        self.weighting.matches(hints)
    }
}
