use std::fmt::{Display, Formatter};
use std::str::FromStr;
use crate::distance::DistanceMetric;
use crate::error::SpannerError;

// Defaults for parameters
const ALGORITHM_DEFAULT: Algorithm = Algorithm::MinimumSpanningTree;
const DISTANCE_METRIC_DEFAULT: DistanceMetric = DistanceMetric::Euclidean;

/// The tree spanning algorithm options
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Prim's minimum spanning tree over the terminals. Optional vertices are ignored.
    MinimumSpanningTree,
    /// The exact Dreyfus-Wagner dynamic program. Exponential in the number of terminals,
    /// polynomial in the number of optional vertices.
    DreyfusWagner,
    /// Minimum spanning trees over the terminals plus every subset of the optional vertices.
    /// Exponential in the number of optional vertices, so only fit for cross-checking.
    BruteForceMst,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::MinimumSpanningTree => "minimum-spanning-tree",
            Algorithm::DreyfusWagner => "dreyfus-wagner",
            Algorithm::BruteForceMst => "brute-force-mst",
        }
    }
}

impl FromStr for Algorithm {
    type Err = SpannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "mst" | "minimum-spanning-tree" => Ok(Algorithm::MinimumSpanningTree),
            "dfw" | "dreyfus-wagner" => Ok(Algorithm::DreyfusWagner),
            "bfmst" | "brute-force-mst" => Ok(Algorithm::BruteForceMst),
            _ => Err(SpannerError::UnknownAlgorithm(s.to_string())),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The solver configuration: which algorithm to run and which metric to measure edges with.
/// Use `Spanner::default_config()` if the defaults will do.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpannerConfig {
    pub(crate) algorithm: Algorithm,
    pub(crate) dist_metric: DistanceMetric,
}

/// Builder object to set a custom configuration.
pub struct ConfigBuilder {
    algorithm: Option<Algorithm>,
    dist_metric: Option<DistanceMetric>,
}

impl SpannerConfig {
    pub(crate) fn default() -> Self {
        Self::builder().build()
    }

    /// Enters the builder pattern, allowing the algorithm and metric to be set using
    /// setter methods.
    ///
    /// # Returns
    /// * the configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder {
            algorithm: None,
            dist_metric: None,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn dist_metric(&self) -> DistanceMetric {
        self.dist_metric
    }
}

impl ConfigBuilder {

    /// Sets the algorithm used to span the terminals. Defaults to the minimum spanning tree.
    ///
    /// # Parameters
    /// * algorithm - the algorithm variant
    ///
    /// # Returns
    /// * the configuration builder
    pub fn algorithm(mut self, algorithm: Algorithm) -> ConfigBuilder {
        self.algorithm = Some(algorithm);
        self
    }

    /// Sets the distance metric bound to every input point before solving. Defaults to
    /// Euclidean. Options are defined by the DistanceMetric enum.
    ///
    /// # Parameters
    /// * dist_metric - the distance metric
    ///
    /// # Returns
    /// * the configuration builder
    pub fn dist_metric(mut self, dist_metric: DistanceMetric) -> ConfigBuilder {
        self.dist_metric = Some(dist_metric);
        self
    }

    /// Finishes the building of the configuration.
    ///
    /// # Returns
    /// * The completed solver configuration.
    pub fn build(self) -> SpannerConfig {
        SpannerConfig {
            algorithm: self.algorithm.unwrap_or(ALGORITHM_DEFAULT),
            dist_metric: self.dist_metric.unwrap_or(DISTANCE_METRIC_DEFAULT),
        }
    }
}
