/// The largest number of terminals a `TerminalSet` can index.
pub const MAX_TERMINALS: usize = u64::BITS as usize;

/// A set of terminal indices stored as a bitmask. Bit `i` stands for the `i`th terminal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TerminalSet(u64);

impl TerminalSet {
    pub const EMPTY: TerminalSet = TerminalSet(0);

    /// The set `{0, 1, ..., n_terminals - 1}`.
    pub fn all(n_terminals: usize) -> Self {
        debug_assert!(n_terminals <= MAX_TERMINALS);
        if n_terminals == MAX_TERMINALS {
            TerminalSet(u64::MAX)
        } else {
            TerminalSet((1 << n_terminals) - 1)
        }
    }

    pub fn from_bits(bits: u64) -> Self {
        TerminalSet(bits)
    }

    pub fn bits(&self) -> u64 {
        self.0
    }

    pub fn single(index: usize) -> Self {
        TerminalSet(1 << index)
    }

    pub fn contains(&self, index: usize) -> bool {
        index < MAX_TERMINALS && self.0 & (1 << index) != 0
    }

    pub fn with(&self, index: usize) -> Self {
        TerminalSet(self.0 | (1 << index))
    }

    pub fn without(&self, index: usize) -> Self {
        TerminalSet(self.0 & !(1 << index))
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The lowest index in the set, if any.
    pub fn lowest(&self) -> Option<usize> {
        if self.is_empty() { None } else { Some(self.0.trailing_zeros() as usize) }
    }

    /// `self \ other`
    pub fn difference(&self, other: TerminalSet) -> Self {
        TerminalSet(self.0 & !other.0)
    }

    /// Iterates the indices in the set in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> {
        let mut rest = self.0;
        std::iter::from_fn(move || {
            if rest == 0 {
                return None;
            }
            let index = rest.trailing_zeros() as usize;
            rest &= rest - 1;
            Some(index)
        })
    }

    /// Every way of splitting the set into two non-empty halves, each partition listed once.
    ///
    /// The yielded half always holds the lowest index of the set, so `S` and `self \ S` are
    /// never both produced. Halves come in decreasing order of their bitmask.
    pub fn bipartitions(&self) -> impl Iterator<Item = TerminalSet> {
        let whole = self.0;
        let pivot = whole & whole.wrapping_neg();
        let rest = whole & !pivot;
        // Walk the proper submasks of `rest` from the largest down to the empty mask
        let mut next = if rest == 0 { None } else { Some((rest - 1) & rest) };
        std::iter::from_fn(move || {
            let sub = next?;
            next = if sub == 0 { None } else { Some((sub - 1) & rest) };
            Some(TerminalSet(sub | pivot))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all() {
        assert_eq!(0, TerminalSet::all(0).len());
        assert_eq!(0b111, TerminalSet::all(3).bits());
        assert_eq!(64, TerminalSet::all(MAX_TERMINALS).len());
    }

    #[test]
    fn membership() {
        let set = TerminalSet::all(4).without(2);
        assert!(set.contains(0) && set.contains(1) && set.contains(3));
        assert!(!set.contains(2));
        assert!(!set.contains(70));
        assert_eq!(3, set.len());
        assert_eq!(Some(0), set.lowest());
        assert_eq!(Some(1), set.without(0).lowest());
        assert_eq!(None, TerminalSet::EMPTY.lowest());
        assert_eq!(set.with(2), TerminalSet::all(4));
    }

    #[test]
    fn iter_in_index_order() {
        let set = TerminalSet::from_bits(0b1011_0010);
        assert_eq!(vec![1, 4, 5, 7], set.iter().collect::<Vec<_>>());
        assert_eq!(0, TerminalSet::EMPTY.iter().count());
    }

    #[test]
    fn bipartitions_of_small_sets() {
        assert_eq!(0, TerminalSet::EMPTY.bipartitions().count());
        assert_eq!(0, TerminalSet::single(3).bipartitions().count());

        let pair = TerminalSet::from_bits(0b1010);
        assert_eq!(vec![TerminalSet::single(1)], pair.bipartitions().collect::<Vec<_>>());

        let triple = TerminalSet::from_bits(0b1110);
        let halves = triple.bipartitions().map(|s| s.bits()).collect::<Vec<_>>();
        assert_eq!(vec![0b1010, 0b0110, 0b0010], halves);
    }

    #[test]
    fn bipartitions_cover_every_split_once() {
        let set = TerminalSet::from_bits(0b1101_0110);
        let halves = set.bipartitions().collect::<Vec<_>>();
        // 2^(n-1) - 1 unordered splits of an n element set
        assert_eq!((1 << (set.len() - 1)) - 1, halves.len());
        for half in &halves {
            let other = set.difference(*half);
            assert!(!half.is_empty() && !other.is_empty());
            assert_eq!(set, TerminalSet::from_bits(half.bits() | other.bits()));
            assert!(!halves.contains(&other));
        }
    }
}
