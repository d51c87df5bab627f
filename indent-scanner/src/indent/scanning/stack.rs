//! Indentation stack
//!
//!     The stack records every indentation width that is currently open, from the top-level
//!     column 0 at the bottom to the innermost block at the top. Widths are strictly
//!     increasing from bottom to top.
//!
//!     Given the width of the next meaningful line, the stack decides what happened:
//!
//!         - wider than the top:    a block opens (push)
//!         - narrower than the top: one or more blocks close (pop while the top is wider)
//!         - equal:                 nothing changes
//!
//!     Dedenting is permissive. Popping stops at the first level not wider than the new
//!     width, even if that level is narrower than it. A line that lands between two open
//!     levels is accepted and simply sits inside the outer one.
//!
//!     Capacity is fixed at [`MAX_DEPTH`] levels. An increase beyond that is absorbed without
//!     recording a level and reported as [`Adjustment::Clamped`]; it is never an error.

use std::cmp::Ordering;

/// Number of levels the stack can hold, including the top-level column.
pub const MAX_DEPTH: usize = 100;

/// What a width comparison did to the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Unchanged,
    /// A new level was pushed.
    Opened,
    /// The width grew but the stack was full; nothing was pushed.
    Clamped,
    /// This many levels were popped.
    Closed(usize),
}

/// Bounded stack of open indentation widths.
#[derive(Debug, Clone)]
pub struct IndentStack {
    widths: [u16; MAX_DEPTH],
    depth: usize,
}

impl IndentStack {
    pub fn new() -> Self {
        IndentStack {
            widths: [0; MAX_DEPTH],
            depth: 0,
        }
    }

    /// Index of the innermost open level; 0 means only the top level is open.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Width of the innermost open level.
    pub fn current(&self) -> u16 {
        self.widths[self.depth]
    }

    /// Open widths, bottom to top.
    pub fn levels(&self) -> &[u16] {
        &self.widths[..=self.depth]
    }

    pub fn is_full(&self) -> bool {
        self.depth + 1 >= MAX_DEPTH
    }

    /// Compare `width` against the innermost level and open or close levels to match.
    pub fn adjust(&mut self, width: u16) -> Adjustment {
        match width.cmp(&self.current()) {
            Ordering::Greater => {
                if self.is_full() {
                    return Adjustment::Clamped;
                }
                self.depth += 1;
                self.widths[self.depth] = width;
                Adjustment::Opened
            }
            Ordering::Less => {
                let mut closed = 0;
                while self.depth > 0 && self.widths[self.depth] > width {
                    self.depth -= 1;
                    closed += 1;
                }
                Adjustment::Closed(closed)
            }
            Ordering::Equal => Adjustment::Unchanged,
        }
    }

    /// Drop the innermost level without comparing widths. No-op at the top level.
    pub(crate) fn close_innermost(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Back to the start-of-stream shape. Slots above the top level keep stale values;
    /// they are always written before being read again.
    pub(crate) fn reset(&mut self) {
        self.depth = 0;
        self.widths[0] = 0;
    }

    /// Set the depth directly, clamped to capacity.
    pub(crate) fn set_depth(&mut self, depth: usize) {
        self.depth = depth.min(MAX_DEPTH - 1);
    }

    pub(crate) fn set_width(&mut self, index: usize, width: u16) {
        if let Some(slot) = self.widths.get_mut(index) {
            *slot = width;
        }
    }
}

impl Default for IndentStack {
    fn default() -> Self {
        Self::new()
    }
}

/// Two stacks are equal when their open levels are; stale slots above the top don't count.
impl PartialEq for IndentStack {
    fn eq(&self, other: &Self) -> bool {
        self.levels() == other.levels()
    }
}

impl Eq for IndentStack {}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack_with(widths: &[u16]) -> IndentStack {
        let mut stack = IndentStack::new();
        for &w in widths {
            assert_eq!(stack.adjust(w), Adjustment::Opened);
        }
        stack
    }

    #[test]
    fn test_starts_at_top_level() {
        let stack = IndentStack::new();
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.levels(), &[0]);
    }

    #[test]
    fn test_open_and_unchanged() {
        let mut stack = IndentStack::new();
        assert_eq!(stack.adjust(0), Adjustment::Unchanged);
        assert_eq!(stack.adjust(2), Adjustment::Opened);
        assert_eq!(stack.adjust(2), Adjustment::Unchanged);
        assert_eq!(stack.levels(), &[0, 2]);
    }

    #[test]
    fn test_close_multiple_levels() {
        let mut stack = stack_with(&[2, 4, 8]);
        assert_eq!(stack.adjust(2), Adjustment::Closed(2));
        assert_eq!(stack.levels(), &[0, 2]);
        assert_eq!(stack.adjust(0), Adjustment::Closed(1));
        assert_eq!(stack.levels(), &[0]);
    }

    #[test]
    fn test_dedent_to_unaligned_width_is_permissive() {
        // 3 matches no open level; popping stops at 2
        let mut stack = stack_with(&[2, 4]);
        assert_eq!(stack.adjust(3), Adjustment::Closed(1));
        assert_eq!(stack.levels(), &[0, 2]);
        assert_eq!(stack.current(), 2);
    }

    #[test]
    fn test_clamps_at_capacity() {
        let widths: Vec<u16> = (1..MAX_DEPTH as u16).collect();
        let mut stack = stack_with(&widths);
        assert_eq!(stack.depth(), MAX_DEPTH - 1);
        assert!(stack.is_full());

        assert_eq!(stack.adjust(500), Adjustment::Clamped);
        assert_eq!(stack.depth(), MAX_DEPTH - 1);
        assert_eq!(stack.current(), (MAX_DEPTH - 1) as u16);

        // Still able to close normally afterwards
        assert_eq!(stack.adjust(0), Adjustment::Closed(MAX_DEPTH - 1));
        assert_eq!(stack.levels(), &[0]);
    }

    #[test]
    fn test_close_innermost_saturates() {
        let mut stack = stack_with(&[4]);
        stack.close_innermost();
        assert_eq!(stack.depth(), 0);
        stack.close_innermost();
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_equality_ignores_stale_slots() {
        let mut a = stack_with(&[2, 4]);
        a.adjust(0);
        let b = IndentStack::new();
        assert_eq!(a, b);
    }
}
