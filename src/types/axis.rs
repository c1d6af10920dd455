//! Shared wildcard/exact-set selection primitive.
//!
//! Every dimension axis (idiom, gamut, appearance traits) is a small
//! closed set of values plus an "any" wildcard. The overlap rule is the
//! same everywhere: `Any` matches every concrete value, and two exact
//! sets overlap when they share a member. Keeping this in one type keeps
//! the conjunctive conflict rule uniform across axes.

/// A selection on one dimension axis: either the wildcard, or a
/// non-empty set of concrete values in selection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AxisSelection<T> {
    /// Matches every concrete value on the axis.
    Any,
    /// Matches exactly the listed values.
    Exact(Vec<T>),
}

impl<T> Default for AxisSelection<T> {
    fn default() -> Self {
        AxisSelection::Any
    }
}

impl<T: PartialEq + Copy> AxisSelection<T> {
    /// Select a concrete value.
    ///
    /// The first concrete selection replaces the wildcard; selecting the
    /// same value again is a no-op. Selection never fails.
    pub fn select(&mut self, value: T) {
        match self {
            AxisSelection::Any => *self = AxisSelection::Exact(vec![value]),
            AxisSelection::Exact(values) => {
                if !values.contains(&value) {
                    values.push(value);
                }
            }
        }
    }

    /// Reset to the wildcard.
    pub fn clear(&mut self) {
        *self = AxisSelection::Any;
    }

    /// Whether this selection is the wildcard.
    pub fn is_any(&self) -> bool {
        matches!(self, AxisSelection::Any)
    }

    /// Whether the selection matches a concrete value.
    pub fn contains(&self, value: T) -> bool {
        match self {
            AxisSelection::Any => true,
            AxisSelection::Exact(values) => values.contains(&value),
        }
    }

    /// The selected concrete values, in selection order. `None` means the
    /// wildcard.
    pub fn values(&self) -> Option<&[T]> {
        match self {
            AxisSelection::Any => None,
            AxisSelection::Exact(values) => Some(values),
        }
    }

    /// Whether two selections match at least one common concrete point.
    pub fn intersects(&self, other: &Self) -> bool {
        match (self, other) {
            (AxisSelection::Any, _) | (_, AxisSelection::Any) => true,
            (AxisSelection::Exact(a), AxisSelection::Exact(b)) => {
                a.iter().any(|v| b.contains(v))
            }
        }
    }
}
