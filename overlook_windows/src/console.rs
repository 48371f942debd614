// Copyright 2026 the Overlook Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use overlook_router::InputEvent;

/// The developer-console collaborator.
///
/// Command parsing, autocomplete, and output rendering live entirely behind
/// the implementor; the window layer only needs visibility to decide chain
/// inclusion, a toggle for the global shortcut, and event forwarding.
///
/// By convention a visible console traps every event it receives — typing
/// into the command line must never pan the camera underneath — so
/// implementations normally return `true` from [`ConsoleView::handle_event`]
/// whenever they are visible.
pub trait ConsoleView {
    /// Whether the console is currently shown.
    ///
    /// A hidden console is skipped by routing entirely.
    fn visible(&self) -> bool;

    /// Show or hide the console.
    fn toggle(&mut self);

    /// Handle one routed event, returning `true` if consumed.
    fn handle_event(&mut self, event: &InputEvent) -> bool;
}

/// Submitted-line history with a browse cursor.
///
/// Consecutive duplicate submissions collapse into one entry. Browsing
/// clamps at both ends, and a submission parks the cursor one past the
/// newest entry so the next [`CommandHistory::back`] returns it.
#[derive(Clone, Debug, Default)]
pub struct CommandHistory {
    lines: Vec<String>,
    cursor: usize,
}

impl CommandHistory {
    /// An empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no line has been submitted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Records a submitted line and resets the browse cursor.
    pub fn add(&mut self, line: &str) {
        if self.lines.last().is_none_or(|last| last != line) {
            self.lines.push(line.to_string());
        }
        self.cursor = self.lines.len();
    }

    /// Steps the cursor toward older entries, returning the line there.
    pub fn back(&mut self) -> Option<&str> {
        self.step(-1)
    }

    /// Steps the cursor toward newer entries, returning the line there.
    pub fn forward(&mut self) -> Option<&str> {
        self.step(1)
    }

    fn step(&mut self, delta: isize) -> Option<&str> {
        if self.lines.is_empty() {
            return None;
        }
        let last = (self.lines.len() - 1) as isize;
        self.cursor = (self.cursor as isize + delta).clamp(0, last) as usize;
        self.lines.get(self.cursor).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browsing_walks_newest_to_oldest_and_clamps() {
        let mut history = CommandHistory::new();
        history.add("first");
        history.add("second");
        history.add("third");

        assert_eq!(history.back(), Some("third"));
        assert_eq!(history.back(), Some("second"));
        assert_eq!(history.back(), Some("first"));
        // Clamped at the oldest entry.
        assert_eq!(history.back(), Some("first"));
        assert_eq!(history.forward(), Some("second"));
    }

    #[test]
    fn consecutive_duplicates_collapse() {
        let mut history = CommandHistory::new();
        history.add("spawn");
        history.add("spawn");
        history.add("clear");
        history.add("spawn");

        assert_eq!(history.back(), Some("spawn"));
        assert_eq!(history.back(), Some("clear"));
        assert_eq!(history.back(), Some("spawn"));
        assert_eq!(history.back(), Some("spawn"));
    }

    #[test]
    fn submitting_resets_the_cursor() {
        let mut history = CommandHistory::new();
        history.add("one");
        history.add("two");
        assert_eq!(history.back(), Some("two"));
        assert_eq!(history.back(), Some("one"));

        history.add("three");
        assert_eq!(history.back(), Some("three"));
    }

    #[test]
    fn empty_history_browses_nothing() {
        let mut history = CommandHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), None);
    }
}
