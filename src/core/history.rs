//! Recall of previously entered commands for up/down navigation.

use std::collections::VecDeque;

use crate::config::MAX_COMMAND_HISTORY;

/// Bounded list of submitted commands with a navigation cursor.
#[derive(Clone, Debug, Default)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    /// Current position while navigating; `None` means "at the prompt".
    index: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted command and reset navigation.
    ///
    /// Blank input and repeats of the latest entry are not recorded.
    pub fn record(&mut self, cmd: &str) {
        let cmd = cmd.trim();
        if !cmd.is_empty() && self.entries.back().map(String::as_str) != Some(cmd) {
            if self.entries.len() == MAX_COMMAND_HISTORY {
                self.entries.pop_front();
            }
            self.entries.push_back(cmd.to_string());
        }
        self.index = None;
    }

    /// Step through history: negative = older, positive = newer.
    ///
    /// Returns the entry to show, or `None` when back at the prompt.
    pub fn navigate(&mut self, direction: i32) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.index = match self.index {
            None if direction < 0 => Some(last),
            Some(i) if direction < 0 && i > 0 => Some(i - 1),
            Some(i) if direction > 0 && i < last => Some(i + 1),
            Some(_) if direction > 0 => None,
            current => current,
        };

        self.index.map(|i| self.entries[i].clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_up_and_down() {
        let mut history = CommandHistory::new();
        history.record("ls");
        history.record("cd projects");

        assert_eq!(history.navigate(-1).as_deref(), Some("cd projects"));
        assert_eq!(history.navigate(-1).as_deref(), Some("ls"));
        // Oldest entry sticks
        assert_eq!(history.navigate(-1).as_deref(), Some("ls"));
        assert_eq!(history.navigate(1).as_deref(), Some("cd projects"));
        assert_eq!(history.navigate(1), None);
    }

    #[test]
    fn test_skips_blank_and_repeats() {
        let mut history = CommandHistory::new();
        history.record("help");
        history.record("help");
        history.record("   ");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_bounded() {
        let mut history = CommandHistory::new();
        for i in 0..MAX_COMMAND_HISTORY + 5 {
            history.record(&format!("cmd{}", i));
        }
        assert_eq!(history.len(), MAX_COMMAND_HISTORY);
        assert_eq!(
            history.navigate(-1),
            Some(format!("cmd{}", MAX_COMMAND_HISTORY + 4))
        );

        // The oldest surviving entry is the sixth one recorded
        for _ in 0..MAX_COMMAND_HISTORY {
            history.navigate(-1);
        }
        assert_eq!(history.navigate(-1), Some("cmd5".to_string()));
    }

    #[test]
    fn test_empty_history() {
        let mut history = CommandHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.navigate(-1), None);
    }
}
