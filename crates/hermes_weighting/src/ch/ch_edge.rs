use crate::{
    base_edge::EdgeTraversal,
    edge_direction::EdgeDirection,
    graph_edge::GraphEdge,
    meters::Meters,
    properties::property::Property,
    types::{EdgeId, NodeId},
};

use super::shortcut::Shortcut;

/// An edge of the contracted graph: either an edge of the base graph or a shortcut
#[derive(Debug, Clone, Copy)]
pub enum CHGraphEdge<'a> {
    Shortcut(&'a Shortcut),
    Edge(EdgeTraversal<'a>),
}

impl GraphEdge for CHGraphEdge<'_> {
    fn edge_id(&self) -> EdgeId {
        match self {
            CHGraphEdge::Shortcut(shortcut) => shortcut.edge_id(),
            CHGraphEdge::Edge(edge) => edge.edge_id(),
        }
    }

    fn base_node(&self) -> NodeId {
        match self {
            CHGraphEdge::Shortcut(shortcut) => shortcut.base_node(),
            CHGraphEdge::Edge(edge) => edge.base_node(),
        }
    }

    fn adj_node(&self) -> NodeId {
        match self {
            CHGraphEdge::Shortcut(shortcut) => shortcut.adj_node(),
            CHGraphEdge::Edge(edge) => edge.adj_node(),
        }
    }

    fn orig_edge_first(&self) -> EdgeId {
        match self {
            CHGraphEdge::Shortcut(shortcut) => shortcut.orig_edge_first(),
            CHGraphEdge::Edge(edge) => edge.orig_edge_first(),
        }
    }

    fn orig_edge_last(&self) -> EdgeId {
        match self {
            CHGraphEdge::Shortcut(shortcut) => shortcut.orig_edge_last(),
            CHGraphEdge::Edge(edge) => edge.orig_edge_last(),
        }
    }

    fn distance(&self) -> Meters {
        match self {
            CHGraphEdge::Shortcut(shortcut) => shortcut.distance(),
            CHGraphEdge::Edge(edge) => edge.distance(),
        }
    }

    fn get_bool(&self, property: &Property, direction: EdgeDirection) -> Option<bool> {
        match self {
            CHGraphEdge::Shortcut(shortcut) => shortcut.get_bool(property, direction),
            CHGraphEdge::Edge(edge) => edge.get_bool(property, direction),
        }
    }

    fn get_f64(&self, property: &Property, direction: EdgeDirection) -> Option<f64> {
        match self {
            CHGraphEdge::Shortcut(shortcut) => shortcut.get_f64(property, direction),
            CHGraphEdge::Edge(edge) => edge.get_f64(property, direction),
        }
    }

    fn as_shortcut(&self) -> Option<&Shortcut> {
        match self {
            CHGraphEdge::Shortcut(shortcut) => Some(*shortcut),
            CHGraphEdge::Edge(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{edge, shortcut};

    use super::*;

    #[test]
    fn should_dispatch_to_variant() {
        let base = edge(4, 1, 2, 100.0, 50.0, 50.0);
        let shortcut = shortcut(10, 1, 3, 4, 5, 42.0);

        let edge = CHGraphEdge::Edge(base.backward());
        assert_eq!(edge.edge_id(), 4);
        assert_eq!(edge.base_node(), 2);
        assert!(edge.as_shortcut().is_none());

        let shortcut_edge = CHGraphEdge::Shortcut(&shortcut);
        assert_eq!(shortcut_edge.edge_id(), 10);
        assert_eq!(shortcut_edge.orig_edge_first(), 4);
        assert_eq!(shortcut_edge.orig_edge_last(), 5);
        assert_eq!(shortcut_edge.as_shortcut().map(|s| s.weight), Some(42.0));
    }
}
