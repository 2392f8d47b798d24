//! Minimum-cost trees connecting a set of mandatory points ("terminals") in the plane, optionally
//! routed through candidate branch points ("optional" or Steiner vertices) to shorten the tree.
//! Generic over floating point numeric types.
//!
//! Three solvers share the [`TreeSpanner`] contract:
//!  1. [`MinimumSpanningTree`] - Prim's algorithm over the terminals alone. Fast, and exact when
//!     no branch points other than terminals are allowed;
//!  2. [`DreyfusWagner`] - the exact dynamic program for the discrete Steiner tree problem. It is
//!     exponential in the number of terminals but polynomial in the number of optional vertices;
//!     and
//!  3. [`BruteForceMst`] - the spanning tree of the terminals plus every subset of the optional
//!     vertices. Exact but exponential in the optional vertices, so it serves as a reference.
//!
//! Every edge is weighed with a [`DistanceMetric`] that satisfies the triangle inequality. The
//! metric is configuration and is bound to the input points when a [`Spanner`] is created.
//!
//! # Examples
//! ```
//!use tree_spanner::{Algorithm, Point, Spanner, SpannerConfig};
//!
//!let terminals = vec![
//!    Point::new(0.0, 0.0),
//!    Point::new(0.0, 1.0),
//!    Point::new(1.0, 0.0),
//!    Point::new(1.0, 1.0),
//!];
//!let optionals = vec![Point::new(0.5, 0.5)];
//!let config = SpannerConfig::builder()
//!    .algorithm(Algorithm::DreyfusWagner)
//!    .build();
//!let spanner = Spanner::new(&terminals, &optionals, config);
//!let solution = spanner.solve().unwrap();
//!assert_eq!(4, solution.edges.len());
//!assert!((solution.total_cost - 4.0 * 0.5_f64.sqrt()).abs() < 1e-9);
//! ```
//!
//! # References
//! * [Dreyfus, S.E.; Wagner, R.A. The Steiner problem in graphs.](https://doi.org/10.1002/net.3230010302)
//! * [Prim, R.C. Shortest connection networks and some generalizations.](https://doi.org/10.1002/j.1538-7305.1957.tb01515.x)

use num_traits::Float;
use tracing::info;
use crate::validation::InputValidator;

pub use crate::brute_force::{BruteForceMst, MAX_BRUTE_FORCE_OPTIONALS};
pub use crate::config::{Algorithm, ConfigBuilder, SpannerConfig};
pub use crate::distance::DistanceMetric;
pub use crate::dreyfus_wagner::{DreyfusWagner, TerminalSet, MAX_TERMINALS};
pub use crate::edge::Edge;
pub use crate::error::SpannerError;
pub use crate::point::Point;
pub use crate::spanning_tree::MinimumSpanningTree;

pub mod instance;
pub mod plot;
mod brute_force;
mod config;
mod distance;
mod dreyfus_wagner;
mod edge;
mod error;
mod point;
mod spanning_tree;
mod validation;

/// The shared contract of every solver: connect all `terminals`, optionally through some of the
/// `optionals`, with a tree of minimum total length.
pub trait TreeSpanner<T: Float> {
    fn solve(&self, terminals: &[Point<T>], optionals: &[Point<T>]) -> Solution<T>;
}

/// A tree as a list of edges, in the order the solver added them, with its total length.
#[derive(Clone, Debug)]
pub struct Solution<T> {
    pub edges: Vec<Edge<T>>,
    pub total_cost: T,
}

impl<T: Float> Solution<T> {
    /// The tree with no edges, spanning zero or one points.
    pub fn empty() -> Self {
        Solution { edges: Vec::new(), total_cost: T::zero() }
    }

    pub fn from_edges(edges: Vec<Edge<T>>) -> Self {
        let total_cost = sum_weights(&edges);
        Solution { edges, total_cost }
    }

    /// Sum of the edge weights, which agrees with `total_cost` up to rounding.
    pub fn edge_weight_sum(&self) -> T {
        sum_weights(&self.edges)
    }
}

fn sum_weights<T: Float>(edges: &[Edge<T>]) -> T {
    edges.iter()
        .map(Edge::weight)
        .fold(T::zero(), std::ops::Add::add)
}

/// A tree spanning problem: terminals, optional vertices, and the configuration to solve it with.
pub struct Spanner<T> {
    terminals: Vec<Point<T>>,
    optionals: Vec<Point<T>>,
    config: SpannerConfig,
}

impl<T: Float> Spanner<T> {

    /// Creates a problem instance using a custom configuration. The configured metric is bound
    /// to copies of every input point, replacing whatever metric they carried.
    ///
    /// # Parameters
    /// * `terminals` - the points that must be connected.
    /// * `optionals` - candidate branch points that may be used to shorten the tree.
    /// * `config` - the solver configuration.
    ///
    /// # Returns
    /// * The problem instance.
    ///
    /// # Examples
    /// ```
    ///use tree_spanner::{Algorithm, DistanceMetric, Point, Spanner, SpannerConfig};
    ///
    ///let terminals = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)];
    ///let config = SpannerConfig::builder()
    ///    .algorithm(Algorithm::BruteForceMst)
    ///    .dist_metric(DistanceMetric::Manhattan)
    ///    .build();
    ///let spanner = Spanner::new(&terminals, &[], config);
    ///assert_eq!(2.0, spanner.solve().unwrap().total_cost);
    /// ```
    pub fn new(terminals: &[Point<T>], optionals: &[Point<T>], config: SpannerConfig) -> Self {
        let bind = |points: &[Point<T>]| -> Vec<Point<T>> {
            points.iter()
                .map(|point| Point::with_metric(point.x, point.y, config.dist_metric))
                .collect()
        };
        Spanner { terminals: bind(terminals), optionals: bind(optionals), config }
    }

    /// Creates a problem instance with the default configuration: a minimum spanning tree
    /// measured with the Euclidean metric.
    ///
    /// # Examples
    /// ```
    ///use tree_spanner::{Point, Spanner};
    ///
    ///let terminals = vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(1.0, 0.0)];
    ///let spanner = Spanner::default_config(&terminals, &[]);
    ///assert_eq!(2.0, spanner.solve().unwrap().total_cost);
    /// ```
    pub fn default_config(terminals: &[Point<T>], optionals: &[Point<T>]) -> Self {
        Spanner::new(terminals, optionals, SpannerConfig::default())
    }

    pub fn terminals(&self) -> &[Point<T>] {
        &self.terminals
    }

    pub fn optionals(&self) -> &[Point<T>] {
        &self.optionals
    }

    pub fn config(&self) -> &SpannerConfig {
        &self.config
    }

    /// Solves the problem with the configured algorithm.
    ///
    /// # Returns
    /// * A result that, if successful, contains the tree edges and their total length. Zero or
    ///   one terminals give an empty tree. An Error will be returned if any coordinate is not
    ///   finite, or if there are more terminals (Dreyfus-Wagner) or optional vertices (brute
    ///   force) than the chosen algorithm can index.
    pub fn solve(&self) -> Result<Solution<T>, SpannerError> {
        InputValidator::new(&self.terminals, &self.optionals, &self.config).validate_input_data()?;

        let algorithm = self.config.algorithm;
        let span = tracing::info_span!(
            "solve",
            algorithm = algorithm.name(),
            n_terminals = self.terminals.len(),
            n_optionals = self.optionals.len()
        );
        let _enter = span.enter();

        let solution = match algorithm {
            Algorithm::MinimumSpanningTree => {
                MinimumSpanningTree.solve(&self.terminals, &self.optionals)
            }
            Algorithm::DreyfusWagner => DreyfusWagner.solve(&self.terminals, &self.optionals),
            Algorithm::BruteForceMst => BruteForceMst.solve(&self.terminals, &self.optionals),
        };
        info!(n_edges = solution.edges.len(), total_cost = solution.total_cost.to_f64(), "solved");
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_with_each_algorithm() {
        let terminals = vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(1.0, 0.0)];
        for algorithm in [Algorithm::MinimumSpanningTree, Algorithm::DreyfusWagner, Algorithm::BruteForceMst] {
            let config = SpannerConfig::builder().algorithm(algorithm).build();
            let solution = Spanner::new(&terminals, &[], config).solve().unwrap();
            assert_eq!(2.0, solution.total_cost);
            assert_eq!(2, solution.edges.len());
        }
    }

    #[test]
    fn binds_configured_metric() {
        let terminals = vec![
            Point::with_metric(0.0, 0.0, DistanceMetric::Euclidean),
            Point::with_metric(3.0, 4.0, DistanceMetric::Euclidean),
        ];
        let config = SpannerConfig::builder().dist_metric(DistanceMetric::Manhattan).build();
        let spanner = Spanner::new(&terminals, &[], config);
        assert!(spanner.terminals().iter().all(|p| p.metric() == DistanceMetric::Manhattan));
        assert_eq!(7.0, spanner.solve().unwrap().total_cost);
        // The caller's points are left as they were
        assert_eq!(5.0, terminals[0].distance_to(&terminals[1]));
    }

    #[test]
    fn empty_solution() {
        let solution = Solution::<f32>::empty();
        assert!(solution.edges.is_empty());
        assert_eq!(0.0, solution.total_cost);
        assert_eq!(0.0, solution.edge_weight_sum());
    }

    #[test]
    fn non_finite_coordinate() {
        let terminals = vec![Point::new(0.0, f32::infinity())];
        let result = Spanner::default_config(&terminals, &[]).solve();
        assert!(matches!(result, Err(SpannerError::NonFiniteCoordinate(..))));
    }
}
