use num_traits::Float;
use tracing::warn;
use crate::point::Point;
use crate::spanning_tree::MinimumSpanningTree;
use crate::{Solution, TreeSpanner};

/// The most optional vertices the brute force will enumerate subsets of.
pub const MAX_BRUTE_FORCE_OPTIONALS: usize = 24;

// Above this many subsets a run is slow enough to be worth a warning
const SLOW_SUBSET_COUNT: u64 = 1 << 16;

/// Minimum spanning trees over the terminals plus every subset of the optional vertices,
/// keeping the cheapest. Exact, but exponential in the number of optional vertices, so it is
/// meant as a reference to check the other solvers against.
#[derive(Copy, Clone, Debug, Default)]
pub struct BruteForceMst;

impl<T: Float> TreeSpanner<T> for BruteForceMst {
    /// # Panics
    /// If there are more than [`MAX_BRUTE_FORCE_OPTIONALS`] optional vertices.
    fn solve(&self, terminals: &[Point<T>], optionals: &[Point<T>]) -> Solution<T> {
        if terminals.len() < 2 {
            return Solution::empty();
        }
        if optionals.is_empty() {
            return MinimumSpanningTree.span(terminals);
        }
        assert!(
            optionals.len() <= MAX_BRUTE_FORCE_OPTIONALS,
            "brute force supports at most {MAX_BRUTE_FORCE_OPTIONALS} optional vertices, got {}",
            optionals.len()
        );

        let n_subsets = 1_u64 << optionals.len();
        if n_subsets > SLOW_SUBSET_COUNT {
            warn!(n_subsets, "brute force over many optional vertex subsets");
        }

        let mut best: Option<Solution<T>> = None;
        let mut vertices = Vec::with_capacity(terminals.len() + optionals.len());
        for subset in 0..n_subsets {
            vertices.clear();
            vertices.extend_from_slice(terminals);
            vertices.extend(
                optionals.iter().enumerate()
                    .filter(|&(i, _)| subset & (1 << i) != 0)
                    .map(|(_, optional)| *optional)
            );
            let candidate = MinimumSpanningTree.span(&vertices);
            if best.as_ref().map_or(true, |b| candidate.total_cost < b.total_cost) {
                best = Some(candidate);
            }
        }
        // The empty subset is always tried, so there is a best solution
        best.unwrap_or_else(Solution::empty)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use super::*;
    use crate::edge::Edge;

    fn points(coords: &[(f64, f64)]) -> Vec<Point<f64>> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn no_optional() {
        let cases: [(Vec<Point<f64>>, f64, Vec<(usize, usize)>); 4] = [
            (vec![], 0.0, vec![]),
            (points(&[(1.0, 1.0)]), 0.0, vec![]),
            (points(&[(0.0, 0.0), (0.0, 1.0)]), 1.0, vec![(0, 1)]),
            (points(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0)]), 2.0, vec![(0, 1), (0, 2)]),
        ];
        for (vertices, expected_total_cost, edge_indices) in cases {
            let expected_edges = edge_indices.iter()
                .map(|&(i, j)| Edge::new(vertices[i], vertices[j]))
                .collect::<Vec<_>>();
            let solution = BruteForceMst.solve(&vertices, &[]);
            assert_eq!(expected_total_cost, solution.total_cost);
            assert_eq!(expected_edges, solution.edges);
        }
    }

    #[test]
    fn with_optional_vertex_in_the_middle() {
        let terminals = points(&[(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)]);
        let optionals = points(&[(0.5, 0.5)]);
        let solution = BruteForceMst.solve(&terminals, &optionals);

        assert!((solution.total_cost - 0.5_f64.sqrt() * 4.0).abs() < 1e-9);
        // Order of edges does not matter for the solution
        let expected = terminals.iter()
            .map(|terminal| Edge::new(*terminal, optionals[0]))
            .collect::<HashSet<_>>();
        assert_eq!(expected, solution.edges.into_iter().collect::<HashSet<_>>());
    }

    #[test]
    fn single_terminal_ignores_optionals() {
        let terminals = points(&[(3.0, 3.0)]);
        let optionals = points(&[(0.0, 0.0), (1.0, 1.0)]);
        let solution = BruteForceMst.solve(&terminals, &optionals);
        assert!(solution.edges.is_empty());
        assert_eq!(0.0, solution.total_cost);
    }
}
