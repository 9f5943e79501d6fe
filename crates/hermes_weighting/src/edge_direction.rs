/// Direction in which an edge is traversed, relative to the way it is read.
///
/// `Backward` is what routing code usually calls a "reverse" traversal.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum EdgeDirection {
    Forward,
    Backward,
}

impl EdgeDirection {
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            EdgeDirection::Backward
        } else {
            EdgeDirection::Forward
        }
    }

    pub fn is_reverse(&self) -> bool {
        *self == EdgeDirection::Backward
    }

    pub fn opposite(&self) -> Self {
        match self {
            EdgeDirection::Forward => EdgeDirection::Backward,
            EdgeDirection::Backward => EdgeDirection::Forward,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_reverse_flag() {
        assert_eq!(EdgeDirection::from_reverse(true), EdgeDirection::Backward);
        assert_eq!(EdgeDirection::from_reverse(false), EdgeDirection::Forward);
        assert!(EdgeDirection::Backward.is_reverse());
        assert!(!EdgeDirection::Forward.is_reverse());
    }

    #[test]
    fn opposite() {
        assert_eq!(EdgeDirection::Forward.opposite(), EdgeDirection::Backward);
        assert_eq!(EdgeDirection::Backward.opposite(), EdgeDirection::Forward);
    }
}
