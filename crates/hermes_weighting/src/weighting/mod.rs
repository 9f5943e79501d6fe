use std::sync::Arc;

use crate::{
    edge_direction::EdgeDirection,
    error::WeightingError,
    graph_edge::GraphEdge,
    meters::Meters,
    types::{EdgeId, NodeId},
    vehicle_profile::VehicleProfile,
};

pub mod base_weighting;
pub mod fastest_weighting;
pub mod query_weighting;
pub mod request_hints;
pub mod shortest_weighting;
pub mod weighting_factory;
pub mod weighting_key;

use request_hints::RequestHints;
use weighting_key::WeightingKey;

pub type Weight = f64;
pub type Milliseconds = u64;

/// A cost model bound to one vehicle and one turn cost provider.
///
/// Edge weights are never negative. An edge that cannot be traversed in a direction weighs
/// `Weight::INFINITY` in that direction.
pub trait Weighting {
    fn key(&self) -> &WeightingKey;
    fn vehicle(&self) -> &Arc<VehicleProfile>;

    fn name(&self) -> &str {
        self.key().name()
    }

    /// Lower bound of the weight of any path covering `distance`
    fn min_weight(&self, distance: Meters) -> Weight;

    /// Weight of the edge alone, without any turn cost
    fn calc_edge_weight<E: GraphEdge + ?Sized>(&self, edge: &E, direction: EdgeDirection) -> Weight;

    /// Edge weight plus the turn weight from/to `adj_edge`. `adj_edge` is the previous edge when
    /// going forward and the next edge when going backward, `INVALID_EDGE` at the ends of a path.
    fn calc_weight<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
        adj_edge: EdgeId,
    ) -> Weight;

    fn calc_edge_ms<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
    ) -> Result<Milliseconds, WeightingError>;

    fn calc_ms<E: GraphEdge + ?Sized>(
        &self,
        edge: &E,
        direction: EdgeDirection,
        adj_edge: EdgeId,
    ) -> Result<Milliseconds, WeightingError>;

    fn calc_turn_weight(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Weight;
    fn calc_turn_ms(&self, in_edge: EdgeId, via_node: NodeId, out_edge: EdgeId) -> Milliseconds;

    fn can_access_edge<E: GraphEdge + ?Sized>(&self, edge: &E) -> bool {
        self.calc_edge_weight(edge, EdgeDirection::Forward).is_finite()
            || self.calc_edge_weight(edge, EdgeDirection::Backward).is_finite()
    }

    fn matches(&self, hints: &RequestHints) -> bool {
        hints.matches(self.key())
    }

    /// Token used to name files holding data prepared for this weighting
    fn file_name(&self) -> String {
        self.key().file_name()
    }
}
