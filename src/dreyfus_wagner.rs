//! The Dreyfus-Wagner dynamic program for exact Steiner trees.
//!
//! Two quantities are tabulated for every vertex `v` and set `R` of terminals not yet reached:
//!  * `connect(v, R)` - the cheapest tree joining `v` to every terminal in `R`; and
//!  * `split(v, R)` - the cheapest such tree in which `v` is a branch point, i.e. `R` is divided
//!    into two non-empty halves that are each joined to `v` independently.
//!
//! `connect(v, R)` is the minimum of branching at `v` itself, stepping to an optional vertex `w`
//! and branching there (`split(w, R) + d(v, w)`), or stepping to a terminal `t` in `R`
//! (`connect(t, R \ {t}) + d(v, t)`). The answer is `connect(t0, T \ {t0})` for the first
//! terminal `t0`. The tables are filled bottom up, and the tree is read back out of the recorded
//! choices with an explicit stack, so neither phase recurses.

use num_traits::Float;
use tracing::{debug, debug_span};
use crate::edge::Edge;
use crate::point::Point;
use crate::spanning_tree::MinimumSpanningTree;
use crate::{Solution, TreeSpanner};

use memo::{ConnectEntry, MemoTables, SearchState, SplitEntry};
pub use terminal_set::{TerminalSet, MAX_TERMINALS};

mod memo;
mod terminal_set;

/// Exact minimum Steiner trees by the Dreyfus-Wagner algorithm.
///
/// Runs in roughly `O(3^k n + 2^k n^2)` for `k` terminals and `n` vertices, so the terminal count
/// must stay small while the number of optional vertices can grow.
#[derive(Copy, Clone, Debug, Default)]
pub struct DreyfusWagner;

impl<T: Float> TreeSpanner<T> for DreyfusWagner {
    /// # Panics
    /// If there are more than [`MAX_TERMINALS`] terminals.
    fn solve(&self, terminals: &[Point<T>], optionals: &[Point<T>]) -> Solution<T> {
        if terminals.is_empty() {
            return Solution::empty();
        }
        // Without optional vertices there is nowhere to branch but at terminals
        if optionals.is_empty() {
            return MinimumSpanningTree.span(terminals);
        }
        assert!(
            terminals.len() <= MAX_TERMINALS,
            "Dreyfus-Wagner supports at most {MAX_TERMINALS} terminals, got {}",
            terminals.len()
        );

        let run = DpRun::new(terminals, optionals);
        let memo = debug_span!("fill_memo").in_scope(|| run.fill_memo());
        let (n_connect, n_split) = memo.len();
        debug!(n_connect, n_split, "filled memo tables");

        let edges = debug_span!("reconstruct").in_scope(|| run.reconstruct(&memo));
        let total_cost = memo.connect_cost(0, run.root_remaining());
        Solution { edges, total_cost }
    }
}

/// One step of tree reconstruction, mirroring the two tabulated functions.
enum Step {
    Connect(usize, TerminalSet),
    Split(usize, TerminalSet),
}

/// The state of a single solve. Vertices are indexed terminals first, so vertex `i` for
/// `i < n_terminals` is the terminal with bit `i` in a `TerminalSet`.
struct DpRun<T> {
    vertices: Vec<Point<T>>,
    n_terminals: usize,
}

impl<T: Float> DpRun<T> {
    fn new(terminals: &[Point<T>], optionals: &[Point<T>]) -> Self {
        let vertices = terminals.iter().chain(optionals).copied().collect();
        DpRun { vertices, n_terminals: terminals.len() }
    }

    fn is_terminal(&self, vertex: usize) -> bool {
        vertex < self.n_terminals
    }

    fn distance(&self, a: usize, b: usize) -> T {
        self.vertices[a].distance_to(&self.vertices[b])
    }

    /// Every terminal but the first, which is where the tree is rooted.
    fn root_remaining(&self) -> TerminalSet {
        TerminalSet::all(self.n_terminals).without(0)
    }

    fn optionals(&self) -> std::ops::Range<usize> {
        self.n_terminals..self.vertices.len()
    }

    /// A vertex is never asked to reach a set containing itself.
    fn vertices_outside(&self, remaining: TerminalSet) -> impl Iterator<Item = usize> + '_ {
        (0..self.vertices.len()).filter(move |&v| !self.is_terminal(v) || !remaining.contains(v))
    }

    fn fill_memo(&self) -> MemoTables<T> {
        let mut memo = MemoTables::new();
        // Bit 0 is never in a remaining set. Counting through the other bits visits every
        // proper subset of a set before the set itself.
        let n_sets = self.root_remaining().bits() >> 1;
        for packed in 1..=n_sets {
            let remaining = TerminalSet::from_bits(packed << 1);
            if remaining.len() >= 2 {
                for vertex in self.vertices_outside(remaining) {
                    self.evaluate_split(&mut memo, vertex, remaining);
                }
            }
            for vertex in self.vertices_outside(remaining) {
                self.evaluate_connect(&mut memo, vertex, remaining);
            }
        }
        memo
    }

    fn evaluate_split(&self, memo: &mut MemoTables<T>, vertex: usize, remaining: TerminalSet) {
        let mut best: Option<SplitEntry<T>> = None;
        for subset in remaining.bipartitions() {
            let complement = remaining.difference(subset);
            let cost = memo.connect_cost(vertex, subset) + memo.connect_cost(vertex, complement);
            if best.map_or(true, |b| cost < b.cost) {
                best = Some(SplitEntry { cost, subset });
            }
        }
        if let Some(entry) = best {
            memo.record_split(SearchState::new(vertex, remaining), entry);
        }
    }

    fn evaluate_connect(&self, memo: &mut MemoTables<T>, vertex: usize, remaining: TerminalSet) {
        let state = SearchState::new(vertex, remaining);
        if remaining.len() == 1 {
            if let Some(terminal) = remaining.lowest() {
                let cost = self.distance(vertex, terminal);
                memo.record_connect(state, ConnectEntry { cost, next_hop: terminal });
            }
            return;
        }

        let mut best = memo.split_cost(vertex, remaining)
            .map(|cost| ConnectEntry { cost, next_hop: vertex });
        let mut consider = |cost: T, next_hop: usize| {
            if best.map_or(true, |b: ConnectEntry<T>| cost < b.cost) {
                best = Some(ConnectEntry { cost, next_hop });
            }
        };

        for optional in self.optionals() {
            if let Some(split) = memo.split_cost(optional, remaining) {
                consider(split + self.distance(vertex, optional), optional);
            }
        }
        for terminal in remaining.iter() {
            let rest = memo.connect_cost(terminal, remaining.without(terminal));
            consider(rest + self.distance(vertex, terminal), terminal);
        }

        if let Some(entry) = best {
            memo.record_connect(state, entry);
        }
    }

    /// Replays the recorded choices from the root, emitting edges in the order a depth-first
    /// walk of the choices would add them.
    fn reconstruct(&self, memo: &MemoTables<T>) -> Vec<Edge<T>> {
        let mut edges = Vec::new();
        let mut stack = vec![Step::Connect(0, self.root_remaining())];

        while let Some(step) = stack.pop() {
            match step {
                Step::Connect(vertex, remaining) => {
                    if remaining.is_empty() {
                        continue;
                    }
                    let next_hop = memo.connect(vertex, remaining).next_hop;
                    if next_hop == vertex {
                        stack.push(Step::Split(vertex, remaining));
                        continue;
                    }
                    edges.push(Edge::new(self.vertices[vertex], self.vertices[next_hop]));
                    if self.is_terminal(next_hop) {
                        stack.push(Step::Connect(next_hop, remaining.without(next_hop)));
                    } else {
                        // An optional vertex is only ever stepped to in order to branch there
                        stack.push(Step::Split(next_hop, remaining));
                    }
                }
                Step::Split(vertex, remaining) => {
                    if remaining.is_empty() {
                        continue;
                    }
                    let subset = memo.split(vertex, remaining).subset;
                    // Pushed in reverse so the winning half is rebuilt first
                    stack.push(Step::Connect(vertex, remaining.difference(subset)));
                    stack.push(Step::Connect(vertex, subset));
                }
            }
        }
        edges
    }
}
