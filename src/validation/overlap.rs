//! Pairwise conflict detection.
//!
//! The engine walks every unordered definition pair and asks whether
//! their dimension coordinates can both match a single concrete render
//! point. Detection is exhaustive: every conflicting pair is collected,
//! because conflicts are independent and a caller fixing one benefits
//! from seeing them all. Ambiguity is always an error; definition order
//! never resolves it.

/// An ambiguous definition pair, by insertion index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    pub first: usize,
    pub second: usize,
}

impl Conflict {
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }
}

/// Collect every unordered pair of definitions whose coordinates
/// overlap.
///
/// `overlaps` is the axis-conjunction test of the definition type.
/// Self-comparison is skipped; pairs come out ordered by `(first,
/// second)` with `first < second`. O(n²) over small n.
pub fn detect_conflicts<D, F>(defs: &[D], overlaps: F) -> Vec<Conflict>
where
    F: Fn(&D, &D) -> bool,
{
    let mut conflicts = Vec::new();
    for i in 0..defs.len() {
        for j in (i + 1)..defs.len() {
            if overlaps(&defs[i], &defs[j]) {
                conflicts.push(Conflict::new(i, j));
            }
        }
    }
    conflicts
}
