use crate::{edge_direction::EdgeDirection, properties::property::Property};

#[derive(Clone, Debug, Default)]
struct SmallMap<T>(Vec<(Property, T)>);

impl<T> SmallMap<T> {
    fn get(&self, property: &Property) -> Option<&T> {
        self.0.iter().find(|(p, _)| p == property).map(|(_, v)| v)
    }

    fn insert(&mut self, property: Property, value: T) -> Option<T> {
        match self.0.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.0.push((property, value));
                None
            }
        }
    }
}

/// Direction-aware edge properties, stored relative to the edge's own start -> end orientation
#[derive(Clone, Debug, Default)]
pub struct EdgePropertyMap {
    forward_bool_values: SmallMap<bool>,
    backward_bool_values: SmallMap<bool>,
    forward_f64_values: SmallMap<f64>,
    backward_f64_values: SmallMap<f64>,
}

impl EdgePropertyMap {
    pub fn new() -> EdgePropertyMap {
        EdgePropertyMap::default()
    }

    pub fn get_bool(&self, property: &Property, direction: EdgeDirection) -> Option<bool> {
        match direction {
            EdgeDirection::Forward => self.forward_bool_values.get(property).copied(),
            EdgeDirection::Backward => self.backward_bool_values.get(property).copied(),
        }
    }

    pub fn get_f64(&self, property: &Property, direction: EdgeDirection) -> Option<f64> {
        match direction {
            EdgeDirection::Forward => self.forward_f64_values.get(property).copied(),
            EdgeDirection::Backward => self.backward_f64_values.get(property).copied(),
        }
    }

    /// Returns the previous value if the property was already set
    pub fn insert_bool(
        &mut self,
        property: Property,
        direction: EdgeDirection,
        value: bool,
    ) -> Option<bool> {
        match direction {
            EdgeDirection::Forward => self.forward_bool_values.insert(property, value),
            EdgeDirection::Backward => self.backward_bool_values.insert(property, value),
        }
    }

    pub fn insert_f64(
        &mut self,
        property: Property,
        direction: EdgeDirection,
        value: f64,
    ) -> Option<f64> {
        match direction {
            EdgeDirection::Forward => self.forward_f64_values.insert(property, value),
            EdgeDirection::Backward => self.backward_f64_values.insert(property, value),
        }
    }
}
