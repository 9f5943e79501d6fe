use std::{
    hash::{Hash, Hasher},
    sync::Arc,
};

use crate::{
    edge_direction::EdgeDirection,
    error::WeightingError,
    graph_edge::GraphEdge,
    meters::Meters,
    turn_cost::{TurnCostProvider, no_turn_cost_provider::NoTurnCostProvider},
    types::{EdgeId, NodeId},
    vehicle_profile::VehicleProfile,
};

use super::{
    Milliseconds, Weight, Weighting,
    base_weighting::{
        BaseWeighting, calc_ms_with_turn_ms, calc_weight_with_turn_weight, effective_direction,
    },
    weighting_key::WeightingKey,
};

pub const SHORTEST: &str = "shortest";

/// Weight is the distance in meters
#[derive(Debug, Clone)]
pub struct ShortestWeighting<T = NoTurnCostProvider> {
    base: BaseWeighting<T>,
}

impl ShortestWeighting<NoTurnCostProvider> {
    pub fn new(vehicle: Arc<VehicleProfile>) -> Result<Self, WeightingError> {
        ShortestWeighting::with_turn_costs(vehicle, NoTurnCostProvider)
    }
}

impl<T: TurnCostProvider> ShortestWeighting<T> {
    pub fn with_turn_costs(
        vehicle: Arc<VehicleProfile>,
        turn_cost_provider: T,
    ) -> Result<Self, WeightingError> {
        Ok(ShortestWeighting {
            base: BaseWeighting::new(SHORTEST, vehicle, turn_cost_provider)?,
        })
    }

    pub fn turn_cost_provider(&self) -> &T {
        self.base.turn_cost_provider()
    }
}

impl<T: TurnCostProvider> Weighting for ShortestWeighting<T> {
    fn key(&self) -> &WeightingKey {
        self.base.key()
    }

    fn vehicle(&self) -> &Arc<VehicleProfile> {
        self.base.vehicle()
    }

    fn min_weight(&self, distance: Meters) -> Weight {
        distance.value()
    }

    fn calc_edge_weight<E: GraphEdge + ?Sized>(&self, edge: &E, direction: EdgeDirection) -> Weight {
        let direction = effective_direction(edge, direction);
        if !edge
            .get_bool(self.base.vehicle().access_property(), direction)
            .unwrap_or(false)
        {
            return Weight::INFINITY;
        }

        edge.distance().value()
    }

    fn calc_weight<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
        adj_edge: EdgeId,
    ) -> Weight {
        calc_weight_with_turn_weight(
            self,
            self.base.turn_cost_provider(),
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
        self.base.calc_edge_ms(edge, direction)
    }

    fn calc_ms<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
        adj_edge: EdgeId,
    ) -> Result<Milliseconds, WeightingError> {
        calc_ms_with_turn_ms(
            self,
            self.base.turn_cost_provider(),
            edge,
            direction,
            adj_edge,
        )
    }

    fn calc_turn_weight(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Weight {
        self.base.calc_turn_weight(in_edge, via_node, out_edge)
    }

    fn calc_turn_ms(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Milliseconds {
        self.base.calc_turn_ms(in_edge, via_node, out_edge)
    }
}

impl<T> PartialEq for ShortestWeighting<T> {
    fn eq(&self, other: &Self) -> bool {
        self.base.key() == other.base.key()
    }
}

impl<T> Eq for ShortestWeighting<T> {}

impl<T> Hash for ShortestWeighting<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.key().hash(state);
    }
}
