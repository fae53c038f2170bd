//! List run counters.
//!
//! One `ListCounters` value lives for exactly one layout pass. It tracks, per
//! list kind, how long the current top-level run is, and for ordered lists
//! the numbering of nested runs keyed by the top-level count at which they
//! started.

use rustc_hash::FxHashMap;

use crate::content::ListKind;

#[derive(Debug, Default)]
pub(crate) struct ListCounters {
    unordered: u32,
    ordered: u32,
    /// Nested ordered numbering, keyed by parent index (sparse).
    ordered_children: FxHashMap<u32, u32>,
}

impl ListCounters {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Current top-level count of a list kind.
    pub(crate) fn count(&self, kind: ListKind) -> u32 {
        match kind {
            ListKind::Unordered => self.unordered,
            ListKind::Ordered => self.ordered,
        }
    }

    fn count_mut(&mut self, kind: ListKind) -> &mut u32 {
        match kind {
            ListKind::Unordered => &mut self.unordered,
            ListKind::Ordered => &mut self.ordered,
        }
    }

    /// Close any open run before a non-list block.
    ///
    /// Returns `true` when a run of either kind was open; both counts are
    /// zero afterwards.
    pub(crate) fn end_all_runs(&mut self) -> bool {
        let open = self.unordered > 0 || self.ordered > 0;
        if open {
            self.unordered = 0;
            self.ordered = 0;
        }
        open
    }

    /// Close the run of the other kind before a list item of `kind`.
    ///
    /// The count of `kind` itself is left alone.
    pub(crate) fn end_other_run(&mut self, kind: ListKind) -> bool {
        let other = self.count_mut(kind.other());
        if *other > 0 {
            *other = 0;
            true
        } else {
            false
        }
    }

    /// Count an unordered item. Depth plays no part.
    pub(crate) fn next_unordered(&mut self) -> u32 {
        self.unordered += 1;
        self.unordered
    }

    /// Display number of the next ordered item.
    ///
    /// A zero top-level count means a new top-level run, which forgets all
    /// nested numbering. Nested items count within the slot of the current
    /// parent index and leave the top-level count untouched; every nesting
    /// depth shares that one slot.
    pub(crate) fn next_ordered(&mut self, nested: bool) -> u32 {
        let parent_index = self.ordered;
        if parent_index == 0 {
            self.ordered_children.clear();
        }

        if nested {
            let slot = self.ordered_children.entry(parent_index).or_insert(0);
            *slot += 1;
            *slot
        } else {
            self.ordered += 1;
            self.ordered
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_numbering() {
        let mut counters = ListCounters::new();
        let numbers: Vec<_> = (0..3).map(|_| counters.next_ordered(false)).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(counters.count(ListKind::Ordered), 3);
    }

    #[test]
    fn test_nested_numbering_restarts_per_parent() {
        let mut counters = ListCounters::new();
        assert_eq!(counters.next_ordered(false), 1);
        assert_eq!(counters.next_ordered(true), 1);
        assert_eq!(counters.next_ordered(true), 2);
        assert_eq!(counters.next_ordered(false), 2);
        assert_eq!(counters.next_ordered(true), 1);
        assert_eq!(counters.count(ListKind::Ordered), 2);
    }

    #[test]
    fn test_nested_without_parent_never_advances() {
        // parent index stays 0, so every item opens a fresh run
        let mut counters = ListCounters::new();
        assert_eq!(counters.next_ordered(true), 1);
        assert_eq!(counters.next_ordered(true), 1);
        assert_eq!(counters.count(ListKind::Ordered), 0);
    }

    #[test]
    fn test_new_top_level_run_forgets_children() {
        let mut counters = ListCounters::new();
        counters.next_ordered(false);
        counters.next_ordered(true);
        counters.next_ordered(true);
        assert!(counters.end_all_runs());

        assert_eq!(counters.next_ordered(false), 1);
        assert_eq!(counters.next_ordered(true), 1);
    }

    #[test]
    fn test_end_all_runs() {
        let mut counters = ListCounters::new();
        assert!(!counters.end_all_runs());

        counters.next_unordered();
        counters.next_ordered(false);
        assert!(counters.end_all_runs());
        assert_eq!(counters.count(ListKind::Unordered), 0);
        assert_eq!(counters.count(ListKind::Ordered), 0);
        assert!(!counters.end_all_runs());
    }

    #[test]
    fn test_end_other_run_leaves_own_kind() {
        let mut counters = ListCounters::new();
        counters.next_unordered();
        counters.next_unordered();
        assert!(!counters.end_other_run(ListKind::Unordered));
        assert_eq!(counters.count(ListKind::Unordered), 2);

        assert!(counters.end_other_run(ListKind::Ordered));
        assert_eq!(counters.count(ListKind::Unordered), 0);
        assert!(!counters.end_other_run(ListKind::Ordered));
    }
}
