//! Focus state for the two-pane layout.
//!
//! Keyboard input goes to exactly one region at a time. [`Focus`] decides which
//! one, and with it which keys edit text and which navigate.
//!
//! ```text
//! List → Search → Title → Content → List …   (Tab)
//! ```
//!
//! The editor regions are skipped while no note is selected.

/// Region receiving keyboard input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// Note list in the sidebar. Arrow keys and `j`/`k` move the selection.
    #[default]
    List,

    /// Sidebar search box. Typing filters the list.
    Search,

    /// Editor title field.
    Title,

    /// Editor content area. Enter inserts a newline.
    Content,
}

impl Focus {
    const ORDER: [Self; 4] = [Self::List, Self::Search, Self::Title, Self::Content];

    /// Whether this region belongs to the editor pane.
    #[must_use]
    pub const fn is_editor(self) -> bool {
        matches!(self, Self::Title | Self::Content)
    }

    /// Next region in tab order, skipping the editor when `editor_available`
    /// is false.
    #[must_use]
    pub fn next(self, editor_available: bool) -> Self {
        self.step(1, editor_available)
    }

    /// Previous region in tab order.
    #[must_use]
    pub fn previous(self, editor_available: bool) -> Self {
        self.step(Self::ORDER.len() - 1, editor_available)
    }

    fn step(self, offset: usize, editor_available: bool) -> Self {
        let len = Self::ORDER.len();
        let mut index = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        for _ in 0..len {
            index = (index + offset) % len;
            let candidate = Self::ORDER[index];
            if editor_available || !candidate.is_editor() {
                return candidate;
            }
        }
        Self::List
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_order_cycles_through_all_regions() {
        assert_eq!(Focus::List.next(true), Focus::Search);
        assert_eq!(Focus::Search.next(true), Focus::Title);
        assert_eq!(Focus::Content.next(true), Focus::List);
        assert_eq!(Focus::List.previous(true), Focus::Content);
    }

    #[test]
    fn editor_is_skipped_without_a_note() {
        assert_eq!(Focus::Search.next(false), Focus::List);
        assert_eq!(Focus::List.previous(false), Focus::Search);
    }
}
