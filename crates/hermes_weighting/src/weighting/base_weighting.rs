use std::sync::Arc;

use tracing::{debug, error};

use crate::{
    edge_direction::EdgeDirection,
    error::WeightingError,
    graph_edge::{GraphEdge, is_valid_edge},
    kmh::Kmh,
    turn_cost::TurnCostProvider,
    types::{EdgeId, NodeId},
    vehicle_profile::VehicleProfile,
};

use super::{Milliseconds, Weight, Weighting, weighting_key::WeightingKey};

/// State shared by all cost models: identity, vehicle and turn costs.
///
/// Concrete weightings embed it and only provide their own edge weight formula.
#[derive(Debug, Clone)]
pub struct BaseWeighting<T> {
    key: WeightingKey,
    vehicle: Arc<VehicleProfile>,
    turn_cost_provider: T,
}

impl<T> BaseWeighting<T> {
    pub fn key(&self) -> &WeightingKey {
        &self.key
    }

    pub fn vehicle(&self) -> &Arc<VehicleProfile> {
        &self.vehicle
    }

    pub fn turn_cost_provider(&self) -> &T {
        &self.turn_cost_provider
    }
}

impl<T: TurnCostProvider> BaseWeighting<T> {
    pub fn new(
        name: &str,
        vehicle: Arc<VehicleProfile>,
        turn_cost_provider: T,
    ) -> Result<Self, WeightingError> {
        if !vehicle.is_registered() {
            return Err(WeightingError::UnregisteredVehicle(vehicle.name().to_string()));
        }

        let key = WeightingKey::new(name, &vehicle)?;
        debug!("Created weighting {}", key);

        Ok(BaseWeighting {
            key,
            vehicle,
            turn_cost_provider,
        })
    }

    pub fn calc_edge_ms<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
    ) -> Result<Milliseconds, WeightingError> {
        calc_edge_ms_from_speed(&self.vehicle, edge, direction)
    }

    pub fn calc_turn_weight(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Weight {
        self.turn_cost_provider
            .calc_turn_weight(in_edge, via_node, out_edge)
    }

    pub fn calc_turn_ms(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Milliseconds {
        self.turn_cost_provider
            .calc_turn_ms(in_edge, via_node, out_edge)
    }
}

/// Loops have no meaningful direction, they are always read forward
pub fn effective_direction<E: GraphEdge + ?Sized>(edge: &E, direction: EdgeDirection) -> EdgeDirection {
    if edge.is_loop() {
        EdgeDirection::Forward
    } else {
        direction
    }
}

/// Travel time along `edge` from its length and the vehicle's speed in `direction`.
///
/// Asking for the time in a direction the vehicle may not use is an error, as is a speed
/// that is negative, not finite or zero. Blocked edges must be marked through access.
pub fn calc_edge_ms_from_speed<E: GraphEdge + ?Sized>(
    vehicle: &VehicleProfile,
    edge: &E,
    direction: EdgeDirection,
) -> Result<Milliseconds, WeightingError> {
    let direction = effective_direction(edge, direction);
    let access = vehicle.access_property();
    let speed = vehicle.speed_property();

    if !edge.get_bool(access, direction).unwrap_or(false) {
        let err = WeightingError::WrongDirection {
            edge_id: edge.edge_id(),
            base_node: edge.base_node(),
            adj_node: edge.adj_node(),
            distance: edge.distance(),
            direction,
            forward_access: edge.get_bool(access, EdgeDirection::Forward).unwrap_or(false),
            backward_access: edge.get_bool(access, EdgeDirection::Backward).unwrap_or(false),
            forward_speed: edge.get_f64(speed, EdgeDirection::Forward).unwrap_or(0.0),
            backward_speed: edge.get_f64(speed, EdgeDirection::Backward).unwrap_or(0.0),
        };
        error!("{}", err);
        return Err(err);
    }

    let speed = edge.get_f64(speed, direction).unwrap_or(0.0);
    if !speed.is_finite() || speed < 0.0 {
        let err = WeightingError::InvalidSpeed {
            edge_id: edge.edge_id(),
            direction,
            speed,
        };
        error!("{}", err);
        return Err(err);
    }

    if speed == 0.0 {
        let err = WeightingError::ZeroSpeed {
            edge_id: edge.edge_id(),
            direction,
        };
        error!("{}", err);
        return Err(err);
    }

    Ok(edge.distance().travel_time_ms(Kmh::new(speed)).round() as Milliseconds)
}

/// Edge weight of `weighting` plus the turn weight of `turn_cost_provider`.
///
/// Going forward the turn is `adj_edge -> base node -> first original edge`,
/// going backward it is `last original edge -> base node -> adj_edge`.
pub fn calc_weight_with_turn_weight<W, T, E>(
    weighting: &W,
    turn_cost_provider: &T,
    edge: &E,
    direction: EdgeDirection,
    adj_edge: EdgeId,
) -> Weight
where
    W: Weighting,
    T: TurnCostProvider + ?Sized,
    E: GraphEdge + ?Sized,
{
    let edge_weight = weighting.calc_edge_weight(edge, direction);
    if !is_valid_edge(adj_edge) {
        return edge_weight;
    }

    let turn_weight = match direction {
        EdgeDirection::Forward => turn_cost_provider.calc_turn_weight(
            adj_edge,
            edge.base_node(),
            edge.orig_edge_first(),
        ),
        EdgeDirection::Backward => {
            turn_cost_provider.calc_turn_weight(edge.orig_edge_last(), edge.base_node(), adj_edge)
        }
    };

    edge_weight + turn_weight
}

/// Edge time of `weighting` plus the turn time of `turn_cost_provider`.
pub fn calc_ms_with_turn_ms<W, T, E>(
    weighting: &W,
    turn_cost_provider: &T,
    edge: &E,
    direction: EdgeDirection,
    adj_edge: EdgeId,
) -> Result<Milliseconds, WeightingError>
where
    W: Weighting,
    T: TurnCostProvider + ?Sized,
    E: GraphEdge + ?Sized,
{
    let edge_ms = weighting.calc_edge_ms(edge, direction)?;
    if !is_valid_edge(adj_edge) {
        return Ok(edge_ms);
    }

    // Unlike calc_weight_with_turn_weight this uses the edge id instead of the first/last
    // original edge, so both disagree for shortcuts. Needs a review before changing either.
    let edge_id = edge.edge_id();
    let turn_ms = match direction {
        EdgeDirection::Forward => turn_cost_provider.calc_turn_ms(adj_edge, edge.base_node(), edge_id),
        EdgeDirection::Backward => {
            turn_cost_provider.calc_turn_ms(edge_id, edge.base_node(), adj_edge)
        }
    };

    Ok(edge_ms.saturating_add(turn_ms))
}
