use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use num_traits::Float;
use crate::edge::Edge;
use crate::point::Point;
use crate::{Solution, TreeSpanner};

/// Prim's algorithm over the complete graph of a vertex set.
#[derive(Copy, Clone, Debug, Default)]
pub struct MinimumSpanningTree;

impl MinimumSpanningTree {
    /// Spans every vertex in `vertices`, starting from the first one.
    ///
    /// # Parameters
    /// * `vertices` - the vertices to span. Every pair is considered joined by an edge weighted
    ///                by the metric bound to its first endpoint.
    ///
    /// # Returns
    /// * The tree edges in the order they were added, and their total weight. Zero or one
    ///   vertices give an empty tree of cost zero.
    pub fn span<T: Float>(&self, vertices: &[Point<T>]) -> Solution<T> {
        if vertices.len() < 2 {
            return Solution::empty();
        }
        let mut visited = vec![false; vertices.len()];
        let mut queue = BinaryHeap::new();
        let mut next_seq = 0;
        let mut edges = Vec::with_capacity(vertices.len() - 1);

        visited[0] = true;
        push_edges_from(0, vertices, &visited, &mut queue, &mut next_seq);
        let mut n_visited = 1;

        while n_visited < vertices.len() {
            let Some(Reverse(next)) = queue.pop() else { break };
            // Skip edges into vertices that were reached more cheaply since
            if visited[next.to] {
                continue;
            }
            edges.push(Edge::new(vertices[next.from], vertices[next.to]));
            visited[next.to] = true;
            n_visited += 1;
            push_edges_from(next.to, vertices, &visited, &mut queue, &mut next_seq);
        }

        Solution::from_edges(edges)
    }
}

impl<T: Float> TreeSpanner<T> for MinimumSpanningTree {
    fn solve(&self, terminals: &[Point<T>], _optionals: &[Point<T>]) -> Solution<T> {
        self.span(terminals)
    }
}

fn push_edges_from<T: Float>(
    from: usize,
    vertices: &[Point<T>],
    visited: &[bool],
    queue: &mut BinaryHeap<Reverse<QueuedEdge<T>>>,
    next_seq: &mut usize,
) {
    for (to, vertex) in vertices.iter().enumerate() {
        if visited[to] {
            continue;
        }
        let weight = vertices[from].distance_to(vertex);
        queue.push(Reverse(QueuedEdge { weight, seq: *next_seq, from, to }));
        *next_seq += 1;
    }
}

/// A candidate edge in the priority queue. Ordered by weight, then by the order in which it
/// was discovered, so equal weights pop first-in first-out.
#[derive(Clone, Debug)]
struct QueuedEdge<T> {
    weight: T,
    seq: usize,
    from: usize,
    to: usize,
}

impl<T: Float> PartialEq for QueuedEdge<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Float> Eq for QueuedEdge<T> {}

impl<T: Float> PartialOrd for QueuedEdge<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Float> Ord for QueuedEdge<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight.partial_cmp(&other.weight)
            .unwrap_or(Ordering::Equal)
            .then(self.seq.cmp(&other.seq))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_edges(vertices: &[Point<f64>], edge_indices: &[(usize, usize)]) -> Vec<Edge<f64>> {
        edge_indices.iter().map(|&(i, j)| Edge::new(vertices[i], vertices[j])).collect()
    }

    #[test]
    fn empty_and_single_vertex() {
        let solution = MinimumSpanningTree.span::<f64>(&[]);
        assert!(solution.edges.is_empty());
        assert_eq!(0.0, solution.total_cost);

        let solution = MinimumSpanningTree.span(&[Point::new(1.0, 1.0)]);
        assert!(solution.edges.is_empty());
        assert_eq!(0.0, solution.total_cost);
    }

    #[test]
    fn two_vertices() {
        let vertices = vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0)];
        let solution = MinimumSpanningTree.span(&vertices);
        assert_eq!(make_edges(&vertices, &[(0, 1)]), solution.edges);
        assert_eq!(1.0, solution.total_cost);
    }

    #[test]
    fn three_vertices_connect_through_first() {
        let vertices = vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0), Point::new(1.0, 0.0)];
        let solution = MinimumSpanningTree.span(&vertices);
        assert_eq!(make_edges(&vertices, &[(0, 1), (0, 2)]), solution.edges);
        assert_eq!(2.0, solution.total_cost);
    }

    #[test]
    fn equal_weights_keep_discovery_order() {
        // Every edge from the centre has weight one; they must be taken in input order
        let vertices = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(-1.0, 0.0),
            Point::new(0.0, -1.0),
            Point::new(1.0, 0.0),
        ];
        let solution = MinimumSpanningTree.span(&vertices);
        assert_eq!(make_edges(&vertices, &[(0, 1), (0, 2), (0, 3), (0, 4)]), solution.edges);
        assert_eq!(4.0, solution.total_cost);
    }

    #[test]
    fn path_along_a_line() {
        let vertices = vec![
            Point::new(3.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 0.0),
        ];
        let solution = MinimumSpanningTree.span(&vertices);
        assert_eq!(make_edges(&vertices, &[(0, 2), (2, 3), (3, 1)]), solution.edges);
        assert_eq!(3.0, solution.total_cost);
    }

    #[test]
    fn duplicate_points_are_joined() {
        let vertices = vec![Point::new(1.0, 1.0), Point::new(1.0, 1.0), Point::new(2.0, 1.0)];
        let solution = MinimumSpanningTree.span(&vertices);
        assert_eq!(2, solution.edges.len());
        assert_eq!(1.0, solution.total_cost);
    }

    #[test]
    fn ignores_optionals_as_tree_spanner() {
        let terminals = vec![Point::new(0.0, 0.0), Point::new(2.0, 0.0)];
        let optionals = vec![Point::new(1.0, 0.0)];
        let solution = MinimumSpanningTree.solve(&terminals, &optionals);
        assert_eq!(make_edges(&terminals, &[(0, 1)]), solution.edges);
        assert_eq!(2.0, solution.total_cost);
    }
}
