use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    edge_direction::EdgeDirection,
    encoding_manager::EncodingManager,
    error::WeightingError,
    graph_edge::GraphEdge,
    meters::Meters,
    turn_cost::{
        TurnCostProvider, default_turn_cost_provider::DefaultTurnCostProvider,
        no_turn_cost_provider::NoTurnCostProvider, turn_cost_table::TurnCostTable,
    },
    types::{EdgeId, NodeId},
    vehicle_profile::VehicleProfile,
};

use super::{
    Milliseconds, Weight, Weighting,
    fastest_weighting::{FASTEST, FastestWeighting},
    request_hints::RequestHints,
    shortest_weighting::{SHORTEST, ShortestWeighting},
    weighting_key::WeightingKey,
};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProfileConfig {
    pub name: String,
    pub vehicle: String,
    pub weighting: String,

    #[serde(default)]
    pub turn_costs: bool,

    /// Weight of a u-turn when turn costs are enabled, u-turns are forbidden when missing
    #[serde(default)]
    pub u_turn_costs: Option<Weight>,
}

impl ProfileConfig {
    pub fn from_json(json: &str) -> Result<Self, WeightingError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn list_from_json(json: &str) -> Result<Vec<Self>, WeightingError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone)]
pub enum ProfileTurnCosts {
    None(NoTurnCostProvider),
    Table(DefaultTurnCostProvider),
}

impl TurnCostProvider for ProfileTurnCosts {
    fn calc_turn_weight(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Weight {
        match self {
            ProfileTurnCosts::None(provider) => provider.calc_turn_weight(in_edge, via_node, out_edge),
            ProfileTurnCosts::Table(provider) => {
                provider.calc_turn_weight(in_edge, via_node, out_edge)
            }
        }
    }

    fn calc_turn_ms(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Milliseconds {
        match self {
            ProfileTurnCosts::None(provider) => provider.calc_turn_ms(in_edge, via_node, out_edge),
            ProfileTurnCosts::Table(provider) => provider.calc_turn_ms(in_edge, via_node, out_edge),
        }
    }
}

/// Weighting of a configured profile
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProfileWeighting {
    Fastest(FastestWeighting<ProfileTurnCosts>),
    Shortest(ShortestWeighting<ProfileTurnCosts>),
}

impl ProfileWeighting {
    pub fn turn_cost_provider(&self) -> &ProfileTurnCosts {
        match self {
            ProfileWeighting::Fastest(weighting) => weighting.turn_cost_provider(),
            ProfileWeighting::Shortest(weighting) => weighting.turn_cost_provider(),
        }
    }
}

impl Weighting for ProfileWeighting {
    fn key(&self) -> &WeightingKey {
        match self {
            ProfileWeighting::Fastest(weighting) => weighting.key(),
            ProfileWeighting::Shortest(weighting) => weighting.key(),
        }
    }

    fn vehicle(&self) -> &Arc<VehicleProfile> {
        match self {
            ProfileWeighting::Fastest(weighting) => weighting.vehicle(),
            ProfileWeighting::Shortest(weighting) => weighting.vehicle(),
        }
    }

    fn min_weight(&self, distance: Meters) -> Weight {
        match self {
            ProfileWeighting::Fastest(weighting) => weighting.min_weight(distance),
            ProfileWeighting::Shortest(weighting) => weighting.min_weight(distance),
        }
    }

    fn calc_edge_weight<E: GraphEdge + ?Sized>(&self, edge: &E, direction: EdgeDirection) -> Weight {
        match self {
            ProfileWeighting::Fastest(weighting) => weighting.calc_edge_weight(edge, direction),
            ProfileWeighting::Shortest(weighting) => weighting.calc_edge_weight(edge, direction),
        }
    }

    fn calc_weight<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
        adj_edge: EdgeId,
    ) -> Weight {
        match self {
            ProfileWeighting::Fastest(weighting) => weighting.calc_weight(edge, direction, adj_edge),
            ProfileWeighting::Shortest(weighting) => {
                weighting.calc_weight(edge, direction, adj_edge)
            }
        }
    }

    fn calc_edge_ms<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
    ) -> Result<Milliseconds, WeightingError> {
        match self {
            ProfileWeighting::Fastest(weighting) => weighting.calc_edge_ms(edge, direction),
            ProfileWeighting::Shortest(weighting) => weighting.calc_edge_ms(edge, direction),
        }
    }

    fn calc_ms<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
        adj_edge: EdgeId,
    ) -> Result<Milliseconds, WeightingError> {
        match self {
            ProfileWeighting::Fastest(weighting) => weighting.calc_ms(edge, direction, adj_edge),
            ProfileWeighting::Shortest(weighting) => weighting.calc_ms(edge, direction, adj_edge),
        }
    }

    fn calc_turn_weight(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Weight {
        self.turn_cost_provider()
            .calc_turn_weight(in_edge, via_node, out_edge)
    }

    fn calc_turn_ms(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Milliseconds {
        self.turn_cost_provider()
            .calc_turn_ms(in_edge, via_node, out_edge)
    }

    fn matches(&self, hints: &RequestHints) -> bool {
        hints.matches(self.key())
    }
}

/// Builds the weightings of the configured profiles
pub struct WeightingFactory<'a> {
    encoding_manager: &'a EncodingManager,
    turn_cost_table: Arc<TurnCostTable>,
}

impl<'a> WeightingFactory<'a> {
    pub fn new(encoding_manager: &'a EncodingManager, turn_cost_table: Arc<TurnCostTable>) -> Self {
        WeightingFactory {
            encoding_manager,
            turn_cost_table,
        }
    }

    pub fn create_weighting(
        &self,
        profile: &ProfileConfig,
    ) -> Result<ProfileWeighting, WeightingError> {
        let vehicle = self.encoding_manager.vehicle(&profile.vehicle)?;

        let turn_costs = if profile.turn_costs {
            ProfileTurnCosts::Table(DefaultTurnCostProvider::new(
                self.turn_cost_table.clone(),
                profile.u_turn_costs,
            )?)
        } else {
            ProfileTurnCosts::None(NoTurnCostProvider)
        };

        match profile.weighting.as_str() {
            FASTEST => Ok(ProfileWeighting::Fastest(
                FastestWeighting::with_turn_costs(vehicle, turn_costs)?,
            )),
            SHORTEST => Ok(ProfileWeighting::Shortest(
                ShortestWeighting::with_turn_costs(vehicle, turn_costs)?,
            )),
            other => Err(WeightingError::UnknownWeighting(other.to_string())),
        }
    }

    pub fn create_weightings(
        &self,
        profiles: &[ProfileConfig],
    ) -> Result<Vec<ProfileWeighting>, WeightingError> {
        profiles
            .iter()
            .map(|profile| {
                let weighting = self.create_weighting(profile)?;
                info!(
                    "Created weighting {} for profile {} (turn costs: {})",
                    weighting.key(),
                    profile.name,
                    profile.turn_costs
                );
                Ok(weighting)
            })
            .collect()
    }
}
