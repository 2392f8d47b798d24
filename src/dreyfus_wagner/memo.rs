use std::collections::HashMap;
use num_traits::Float;
use super::terminal_set::TerminalSet;

/// Memo key: a vertex (by position, terminals first) and the terminals it still has to reach.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct SearchState {
    pub(crate) vertex: usize,
    pub(crate) remaining: TerminalSet,
}

impl SearchState {
    pub(crate) fn new(vertex: usize, remaining: TerminalSet) -> Self {
        SearchState { vertex, remaining }
    }
}

/// Cheapest way to attach a vertex to its remaining terminals, and where the tree goes next.
/// A next hop equal to the vertex itself means the vertex is a branch point.
#[derive(Copy, Clone, Debug)]
pub(crate) struct ConnectEntry<T> {
    pub(crate) cost: T,
    pub(crate) next_hop: usize,
}

/// Cheapest way to branch at a vertex, and the half of the remaining set that won.
#[derive(Copy, Clone, Debug)]
pub(crate) struct SplitEntry<T> {
    pub(crate) cost: T,
    pub(crate) subset: TerminalSet,
}

/// The two memo tables of one Dreyfus-Wagner run.
pub(crate) struct MemoTables<T> {
    connect: HashMap<SearchState, ConnectEntry<T>>,
    split: HashMap<SearchState, SplitEntry<T>>,
}

impl<T: Float> MemoTables<T> {
    pub(crate) fn new() -> Self {
        MemoTables { connect: HashMap::new(), split: HashMap::new() }
    }

    /// `connect(vertex, remaining)`; zero when nothing remains.
    ///
    /// # Panics
    /// If a non-empty state was never evaluated.
    pub(crate) fn connect_cost(&self, vertex: usize, remaining: TerminalSet) -> T {
        if remaining.is_empty() {
            return T::zero();
        }
        self.connect(vertex, remaining).cost
    }

    /// `split(vertex, remaining)`, or `None` when fewer than two terminals remain and there is
    /// nothing to branch on.
    pub(crate) fn split_cost(&self, vertex: usize, remaining: TerminalSet) -> Option<T> {
        if remaining.len() < 2 {
            return None;
        }
        self.split.get(&SearchState::new(vertex, remaining)).map(|entry| entry.cost)
    }

    pub(crate) fn connect(&self, vertex: usize, remaining: TerminalSet) -> ConnectEntry<T> {
        *self.connect.get(&SearchState::new(vertex, remaining))
            .expect("connect state evaluated before it is read")
    }

    pub(crate) fn split(&self, vertex: usize, remaining: TerminalSet) -> SplitEntry<T> {
        *self.split.get(&SearchState::new(vertex, remaining))
            .expect("split state evaluated before it is read")
    }

    pub(crate) fn record_connect(&mut self, state: SearchState, entry: ConnectEntry<T>) {
        self.connect.insert(state, entry);
    }

    pub(crate) fn record_split(&mut self, state: SearchState, entry: SplitEntry<T>) {
        self.split.insert(state, entry);
    }

    pub(crate) fn len(&self) -> (usize, usize) {
        (self.connect.len(), self.split.len())
    }
}
