/// Number of cells in the completion grid.
pub const HISTORY_SLOTS: usize = 21;

/// Fixed-size completion grid derived from a habit's `history_count`.
///
/// Slot `i` is filled iff `i < history_count`. This is a display
/// approximation, not a calendar: it has no identity of its own and is
/// rebuilt whenever the count changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionHistory {
    slots: [bool; HISTORY_SLOTS],
}

impl CompletionHistory {
    pub fn from_count(history_count: u32) -> Self {
        let filled = usize::try_from(history_count).unwrap_or(usize::MAX);
        let mut slots = [false; HISTORY_SLOTS];
        for (index, slot) in slots.iter_mut().enumerate() {
            *slot = index < filled;
        }
        Self { slots }
    }

    pub fn slots(&self) -> &[bool; HISTORY_SLOTS] {
        &self.slots
    }

    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|slot| **slot).count()
    }
}

impl Default for CompletionHistory {
    fn default() -> Self {
        Self::from_count(0)
    }
}
