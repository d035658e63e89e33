//! Shared types for the Model

/// Vim command state for tracking double-key commands like 'gg'
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG, // First 'g' pressed, waiting for second 'g'
}

/// Rows occupied by one project card, in page coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectSpan {
    pub project_index: usize,
    pub top: u16,
    pub height: u16,
}

impl ProjectSpan {
    pub fn contains_row(&self, row: u16) -> bool {
        row >= self.top && row < self.top.saturating_add(self.height)
    }
}
