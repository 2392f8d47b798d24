use std::str::FromStr;
use num_traits::Float;
use crate::error::SpannerError;

/// Possible distance metrics used to weigh the edge between two points.
/// Every option is symmetric and satisfies the triangle inequality, which the exact
/// solvers rely on.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DistanceMetric {
    #[default]
    Euclidean,
    Manhattan,
}

impl DistanceMetric {
    pub fn calc_dist<T: Float>(&self, a: (T, T), b: (T, T)) -> T {
        match *self {
            Self::Euclidean => { euclidean_distance(a, b) }
            Self::Manhattan => { manhattan_distance(a, b) }
        }
    }

    /// The canonical name, as accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::Manhattan => "manhattan",
        }
    }
}

impl FromStr for DistanceMetric {
    type Err = SpannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            // "euclidian" is the spelling older scripts pass on the command line
            "euclidean" | "euclidian" => Ok(Self::Euclidean),
            "manhattan" => Ok(Self::Manhattan),
            _ => Err(SpannerError::UnknownMetric(s.to_string())),
        }
    }
}

pub(crate) fn euclidean_distance<T: Float>(a: (T, T), b: (T, T)) -> T {
    let dx = b.0 - a.0;
    let dy = b.1 - a.1;
    (dx * dx + dy * dy).sqrt()
}

pub(crate) fn manhattan_distance<T: Float>(a: (T, T), b: (T, T)) -> T {
    (b.0 - a.0).abs() + (b.1 - a.1).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean() {
        assert_eq!(1.0, DistanceMetric::Euclidean.calc_dist((0.0, 0.0), (1.0, 0.0)));
        assert_eq!(1.0, DistanceMetric::Euclidean.calc_dist((0.0, 0.0), (0.0, 1.0)));
        assert_eq!(2.0_f64.sqrt(), DistanceMetric::Euclidean.calc_dist((0.0, 0.0), (1.0, 1.0)));
    }

    #[test]
    fn manhattan() {
        assert_eq!(2.0, DistanceMetric::Manhattan.calc_dist((0.0, 0.0), (1.0, 1.0)));
        assert_eq!(7.0_f32, DistanceMetric::Manhattan.calc_dist((-1.0, 2.0), (2.0, -2.0)));
    }

    #[test]
    fn symmetric() {
        for metric in [DistanceMetric::Euclidean, DistanceMetric::Manhattan] {
            let a = (0.3, -1.7);
            let b = (4.1, 2.9);
            assert_eq!(metric.calc_dist(a, b), metric.calc_dist(b, a));
        }
    }

    #[test]
    fn parse_names() {
        assert_eq!(Ok(DistanceMetric::Euclidean), "euclidean".parse());
        assert_eq!(Ok(DistanceMetric::Euclidean), "euclidian".parse());
        assert_eq!(Ok(DistanceMetric::Manhattan), "Manhattan".parse());
        assert!(matches!(
            "chebyshev".parse::<DistanceMetric>(),
            Err(SpannerError::UnknownMetric(..))
        ));
    }
}
