use std::collections::hash_map::DefaultHasher;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use num_traits::Float;
use crate::point::Point;

/// An undirected edge between two points. The weight is not stored; it is always the distance
/// between the endpoints under the metric bound to `v1`.
#[derive(Copy, Clone, Debug)]
pub struct Edge<T> {
    pub v1: Point<T>,
    pub v2: Point<T>,
}

impl<T: Float> Edge<T> {
    pub fn new(v1: Point<T>, v2: Point<T>) -> Self {
        Edge { v1, v2 }
    }

    pub fn weight(&self) -> T {
        self.v1.distance_to(&self.v2)
    }

    /// Whether `point` is one of the two endpoints.
    pub fn touches(&self, point: &Point<T>) -> bool {
        self.v1 == *point || self.v2 == *point
    }
}

impl<T: Float> PartialEq for Edge<T> {
    fn eq(&self, other: &Self) -> bool {
        (self.v1 == other.v1 && self.v2 == other.v2)
            || (self.v1 == other.v2 && self.v2 == other.v1)
    }
}

impl<T: Float> Eq for Edge<T> {}

impl<T: Float> Hash for Edge<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let h1 = point_hash(&self.v1);
        let h2 = point_hash(&self.v2);
        // Endpoint order must not change the hash
        h1.min(h2).hash(state);
        h1.max(h2).hash(state);
    }
}

fn point_hash<T: Float>(point: &Point<T>) -> u64 {
    let mut hasher = DefaultHasher::new();
    point.hash(&mut hasher);
    hasher.finish()
}

impl<T: Float + Display> Display for Edge<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <-> {}", self.v1, self.v2)
    }
}
