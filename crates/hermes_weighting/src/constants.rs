use crate::{
    types::{EdgeId, NodeId},
    weighting::{Milliseconds, Weight},
};

/// No edge, e.g. the predecessor of the first edge of a path
pub const INVALID_EDGE: EdgeId = usize::MAX;
pub const INVALID_NODE: NodeId = usize::MAX;

/// Weight of a forbidden turn. It is finite so search algorithms can compare it like any other weight.
pub const RESTRICTED_TURN_WEIGHT: Weight = 1.0e15;
pub const RESTRICTED_TURN_MS: Milliseconds = 1_000_000_000_000_000_000;
