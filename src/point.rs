use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use num_traits::Float;
use crate::distance::DistanceMetric;
use crate::error::SpannerError;

/// A point in the plane together with the distance metric it is measured with.
///
/// Equality and hashing only consider the coordinates. The metric is configuration: it is
/// bound when the point is created or re-bound with [`Point::set_metric`] before a solve.
#[derive(Copy, Clone, Debug)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
    metric: DistanceMetric,
}

impl<T: Float> Point<T> {
    /// Creates a point measured with the default (Euclidean) metric.
    pub fn new(x: T, y: T) -> Self {
        Self::with_metric(x, y, DistanceMetric::default())
    }

    pub fn with_metric(x: T, y: T, metric: DistanceMetric) -> Self {
        Point { x, y, metric }
    }

    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    pub fn set_metric(&mut self, metric: DistanceMetric) {
        self.metric = metric;
    }

    /// The distance to `other` under this point's metric.
    pub fn distance_to(&self, other: &Point<T>) -> T {
        self.metric.calc_dist(self.coords(), other.coords())
    }

    pub fn coords(&self) -> (T, T) {
        (self.x, self.y)
    }

    pub(crate) fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl<T: Float> PartialEq for Point<T> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<T: Float> Eq for Point<T> {}

impl<T: Float> Hash for Point<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_coordinate(self.x, state);
        hash_coordinate(self.y, state);
    }
}

fn hash_coordinate<T: Float, H: Hasher>(value: T, state: &mut H) {
    // -0.0 == 0.0, so both must hash alike
    let value = if value == T::zero() { T::zero() } else { value };
    value.integer_decode().hash(state);
}

impl<T: Float + FromStr> FromStr for Point<T> {
    type Err = SpannerError;

    /// Parses a point literal of the form `x,y`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s.split_once(',')
            .ok_or_else(|| SpannerError::MalformedPoint(format!("expected x,y but got {s:?}")))?;
        let parse = |coord: &str| coord.trim().parse::<T>()
            .map_err(|_| SpannerError::MalformedPoint(format!("{coord:?} is not a number in {s:?}")));
        Ok(Point::new(parse(x)?, parse(y)?))
    }
}

impl<T: Float + Display> Display for Point<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2},{:.2})", self.x, self.y)
    }
}
