//! Tabs and their output logs.

use std::fmt;

/// Identifier of a tab. Ids are handed out in increasing order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(u64);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Tab {
    pub id: TabId,
    pub name: String,
    history: Vec<String>,
}

impl Tab {
    fn new(id: TabId, name: String) -> Self {
        Self {
            id,
            name,
            history: Vec::new(),
        }
    }

    /// Output lines in the order they were appended.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

/// The set of open tabs. Exactly one of them is active at any time.
#[derive(Debug)]
pub struct Session {
    tabs: Vec<Tab>,
    active: TabId,
    next_id: u64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        let first = TabId(1);
        Self {
            tabs: vec![Tab::new(first, "Tab 1".to_string())],
            active: first,
            next_id: 2,
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn active_id(&self) -> TabId {
        self.active
    }

    pub fn contains(&self, id: TabId) -> bool {
        self.tabs.iter().any(|t| t.id == id)
    }

    pub fn get(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    pub fn active_tab(&self) -> &Tab {
        // `active` always names a live tab, and there is always at least one.
        self.get(self.active).unwrap_or(&self.tabs[0])
    }

    fn active_tab_mut(&mut self) -> &mut Tab {
        let idx = self.position(self.active).unwrap_or(0);
        &mut self.tabs[idx]
    }

    fn position(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    /// Open a new tab named after its position and make it active.
    pub fn create_tab(&mut self) -> TabId {
        let id = TabId(self.next_id);
        self.next_id += 1;
        let name = format!("Tab {}", self.tabs.len() + 1);
        self.tabs.push(Tab::new(id, name));
        self.active = id;
        tracing::debug!("Created tab {}", id);
        id
    }

    /// Activate `id`. Unknown ids are ignored and return `false`.
    pub fn switch_tab(&mut self, id: TabId) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.active = id;
        true
    }

    /// Activate the tab at the 1-based position shown in the tab bar.
    pub fn switch_to_position(&mut self, position: usize) -> bool {
        match position.checked_sub(1).and_then(|i| self.tabs.get(i)) {
            Some(tab) => {
                self.active = tab.id;
                true
            }
            None => false,
        }
    }

    pub fn next_tab(&mut self) {
        let idx = self.position(self.active).unwrap_or(0);
        self.active = self.tabs[(idx + 1) % self.tabs.len()].id;
    }

    pub fn previous_tab(&mut self) {
        let idx = self.position(self.active).unwrap_or(0);
        let len = self.tabs.len();
        self.active = self.tabs[(idx + len - 1) % len].id;
    }

    /// Close `id`. The last remaining tab can't be closed.
    pub fn close_tab(&mut self, id: TabId) -> bool {
        if self.tabs.len() <= 1 {
            return false;
        }
        let Some(idx) = self.position(id) else {
            return false;
        };
        self.tabs.remove(idx);
        if self.active == id {
            self.active = self.tabs[0].id;
        }
        tracing::debug!("Closed tab {}", id);
        true
    }

    /// Append a line to the active tab.
    pub fn append_output(&mut self, text: impl Into<String>) {
        self.active_tab_mut().history.push(text.into());
    }

    /// Append a line to `id`, or to the active tab if `id` was closed meanwhile.
    pub fn append_to(&mut self, id: TabId, text: impl Into<String>) {
        match self.position(id) {
            Some(idx) => self.tabs[idx].history.push(text.into()),
            None => {
                tracing::debug!("Tab {} is gone, routing output to the active tab", id);
                self.append_output(text);
            }
        }
    }
}
