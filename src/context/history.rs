//! Prompt input history with Up/Down recall.

/// Maximum number of lines to keep in history.
const MAX_HISTORY_SIZE: usize = 1000;

#[derive(Clone, Debug, Default)]
pub struct History {
    lines: Vec<String>,
    /// Position while browsing with Up/Down; `None` when not browsing.
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line as typed.
    /// Skips blank lines and repeats of the previous line, and resets browsing.
    pub fn push(&mut self, line: &str) {
        self.cursor = None;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }
        if self.lines.last().map(|s| s.trim()) == Some(trimmed) {
            return;
        }

        self.lines.push(line.to_string());
        if self.lines.len() > MAX_HISTORY_SIZE {
            self.lines.remove(0);
        }
    }

    /// Step to an older line. Stays on the oldest one once reached.
    pub fn older(&mut self) -> Option<&str> {
        if self.lines.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => self.lines.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(next);
        self.lines.get(next).map(|s| s.as_str())
    }

    /// Step to a newer line. Returns `None` after the newest, which means
    /// "back to an empty prompt".
    pub fn newer(&mut self) -> Option<&str> {
        let i = self.cursor?;
        if i + 1 >= self.lines.len() {
            self.cursor = None;
            return None;
        }
        self.cursor = Some(i + 1);
        self.lines.get(i + 1).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
