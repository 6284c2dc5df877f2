//! Interactive tree state: load lifecycle, expansion, selection and theme.
//!
//! `App` is owned by the UI thread. The fetch worker never touches it; it sends a
//! [`WorkerMessage`] that the UI thread applies on its own turn.

use crate::domain::EntryKind;
use crate::scan::{NodeId, RepoTree};
use crossterm::event::KeyCode;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Populated,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Status,
    Tree,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Result of a background fetch.
#[derive(Debug)]
pub enum WorkerMessage {
    Loaded(RepoTree),
    Failed(String),
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    Refetch,
}

/// A tree node currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Row {
    pub id: NodeId,
    pub depth: usize,
}

pub struct App {
    repo_label: String,
    state: LoadState,
    tree: Option<RepoTree>,
    expanded: HashSet<NodeId>,
    selected: Option<NodeId>,
    focus: Focus,
    theme: Theme,
}

impl App {
    /// Starts in `Loading`; the caller dispatches the first fetch.
    pub fn new(repo_label: impl Into<String>) -> Self {
        Self {
            repo_label: repo_label.into(),
            state: LoadState::Loading,
            tree: None,
            expanded: HashSet::new(),
            selected: None,
            focus: Focus::Status,
            theme: Theme::Dark,
        }
    }

    pub fn repo_label(&self) -> &str {
        &self.repo_label
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn tree(&self) -> Option<&RepoTree> {
        self.tree.as_ref()
    }

    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    pub fn tree_visible(&self) -> bool {
        self.state == LoadState::Populated
    }

    pub fn status_visible(&self) -> bool {
        !self.tree_visible()
    }

    pub fn status_text(&self) -> String {
        match &self.state {
            LoadState::Loading => format!("🔮 Fetching data for {}...", self.repo_label),
            LoadState::Failed(reason) => reason.clone(),
            LoadState::Populated => String::new(),
        }
    }

    /// Restart the cycle at `Loading`. Returns `false` while a fetch is already running.
    pub fn begin_fetch(&mut self) -> bool {
        if self.state == LoadState::Loading {
            return false;
        }
        self.state = LoadState::Loading;
        self.tree = None;
        self.expanded.clear();
        self.selected = None;
        self.focus = Focus::Status;
        true
    }

    /// Apply a worker result. Only meaningful while `Loading`.
    pub fn apply(&mut self, message: WorkerMessage) {
        if self.state != LoadState::Loading {
            tracing::debug!("Ignoring worker message outside Loading: {:?}", message);
            return;
        }
        match message {
            WorkerMessage::Loaded(tree) if tree.is_empty() => {
                self.state = LoadState::Failed("No file data to display.".to_string());
            }
            WorkerMessage::Loaded(tree) => {
                let root = tree.root();
                self.expanded.insert(root);
                self.selected = Some(root);
                self.tree = Some(tree);
                self.state = LoadState::Populated;
                self.focus = Focus::Tree;
            }
            WorkerMessage::Failed(reason) => {
                self.state = LoadState::Failed(reason);
            }
        }
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expanded.contains(&id)
    }

    /// Root plus the children of every expanded directory, depth-first.
    pub fn visible_rows(&self) -> Vec<Row> {
        let Some(tree) = &self.tree else {
            return Vec::new();
        };
        let mut rows = Vec::new();
        let mut stack = vec![Row { id: tree.root(), depth: 0 }];
        while let Some(row) = stack.pop() {
            rows.push(row);
            if self.expanded.contains(&row.id) {
                stack.extend(
                    tree.children(row.id)
                        .iter()
                        .rev()
                        .map(|child| Row { id: *child, depth: row.depth + 1 }),
                );
            }
        }
        rows
    }

    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected?;
        self.visible_rows().iter().position(|row| row.id == selected)
    }

    pub fn row_label(&self, row: &Row) -> String {
        let Some(tree) = &self.tree else {
            return String::new();
        };
        if row.id == tree.root() {
            return format!("📂 {}", self.repo_label);
        }
        let node = tree.node(row.id);
        let icon = match node.kind {
            EntryKind::File => "📄",
            EntryKind::Directory if self.is_expanded(row.id) => "📂",
            EntryKind::Directory => "📁",
        };
        format!("{}{} {}", "  ".repeat(row.depth), icon, node.name)
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Char('t') => {
                self.theme = self.theme.toggled();
                return Action::None;
            }
            KeyCode::Char('r') => {
                return if self.begin_fetch() { Action::Refetch } else { Action::None };
            }
            _ => {}
        }

        if self.focus != Focus::Tree {
            return Action::None;
        }

        match code {
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::PageDown => self.move_selection(10),
            KeyCode::PageUp => self.move_selection(-10),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Right | KeyCode::Char('l') => self.expand_selected(),
            KeyCode::Left | KeyCode::Char('h') => self.collapse_or_ascend(),
            _ => {}
        }
        Action::None
    }

    fn move_selection(&mut self, delta: isize) {
        let rows = self.visible_rows();
        if rows.is_empty() {
            return;
        }
        let current = self.selected_index().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, rows.len() as isize - 1) as usize;
        self.selected = Some(rows[next].id);
    }

    fn selected_dir(&self) -> Option<NodeId> {
        let tree = self.tree.as_ref()?;
        let id = self.selected?;
        tree.node(id).is_dir().then_some(id)
    }

    fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_dir() {
            if !self.expanded.remove(&id) {
                self.expanded.insert(id);
            }
        }
    }

    fn expand_selected(&mut self) {
        if let Some(id) = self.selected_dir() {
            self.expanded.insert(id);
        }
    }

    fn collapse_or_ascend(&mut self) {
        let Some(id) = self.selected else {
            return;
        };
        if self.expanded.remove(&id) {
            return;
        }
        if let Some(parent) = self.tree.as_ref().and_then(|tree| tree.parent(id)) {
            self.selected = Some(parent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entry;
    use crate::scan::build_tree;

    fn sample_tree() -> RepoTree {
        build_tree(&[
            Entry::directory("src"),
            Entry::file("src/main.rs"),
            Entry::file("src/lib.rs"),
            Entry::file("README.md"),
        ])
    }

    fn populated() -> App {
        let mut app = App::new("octo/demo");
        app.apply(WorkerMessage::Loaded(sample_tree()));
        app
    }

    #[test]
    fn test_starts_loading_with_status_visible() {
        let app = App::new("octo/demo");
        assert_eq!(app.state(), &LoadState::Loading);
        assert!(app.status_visible());
        assert!(!app.tree_visible());
        assert_eq!(app.focus(), Focus::Status);
        assert!(app.status_text().contains("Fetching data for octo/demo"));
    }

    #[test]
    fn test_loaded_tree_populates_and_takes_focus() {
        let app = populated();
        assert_eq!(app.state(), &LoadState::Populated);
        assert!(app.tree_visible());
        assert!(!app.status_visible());
        assert_eq!(app.focus(), Focus::Tree);

        let labels: Vec<String> = app.visible_rows().iter().map(|r| app.row_label(r)).collect();
        assert_eq!(labels, vec!["📂 octo/demo", "  📄 README.md", "  📁 src"]);
    }

    #[test]
    fn test_empty_tree_fails() {
        let mut app = App::new("octo/demo");
        app.apply(WorkerMessage::Loaded(build_tree(&[])));
        assert_eq!(app.state(), &LoadState::Failed("No file data to display.".to_string()));
        assert!(!app.tree_visible());
    }

    #[test]
    fn test_failure_updates_status_and_keeps_tree_hidden() {
        let mut app = App::new("octo/demo");
        app.apply(WorkerMessage::Failed("Could not load repository: octo/demo".to_string()));
        assert!(app.status_visible());
        assert!(!app.tree_visible());
        assert_eq!(app.status_text(), "Could not load repository: octo/demo");
        assert_eq!(app.focus(), Focus::Status);
    }

    #[test]
    fn test_terminal_states_ignore_further_messages() {
        let mut app = populated();
        app.apply(WorkerMessage::Failed("late".to_string()));
        assert_eq!(app.state(), &LoadState::Populated);
    }

    #[test]
    fn test_refetch_is_ignored_while_loading() {
        let mut app = App::new("octo/demo");
        assert_eq!(app.handle_key(KeyCode::Char('r')), Action::None);

        app.apply(WorkerMessage::Failed("boom".to_string()));
        assert_eq!(app.handle_key(KeyCode::Char('r')), Action::Refetch);
        assert_eq!(app.state(), &LoadState::Loading);
        assert_eq!(app.handle_key(KeyCode::Char('r')), Action::None);
    }

    #[test]
    fn test_refetch_from_populated_hides_tree() {
        let mut app = populated();
        assert_eq!(app.handle_key(KeyCode::Char('r')), Action::Refetch);
        assert!(app.tree().is_none());
        assert!(app.status_visible());
        assert_eq!(app.focus(), Focus::Status);
    }

    #[test]
    fn test_navigation_expand_and_collapse() {
        let mut app = populated();
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.selected_index(), Some(2));

        app.handle_key(KeyCode::Enter);
        assert_eq!(app.visible_rows().len(), 5);
        let labels: Vec<String> = app.visible_rows().iter().map(|r| app.row_label(r)).collect();
        assert_eq!(labels[2], "  📂 src");
        assert_eq!(labels[3], "    📄 lib.rs");

        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.selected_index(), Some(2), "left on a file jumps to its parent");

        app.handle_key(KeyCode::Left);
        assert_eq!(app.visible_rows().len(), 3);
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut app = populated();
        app.handle_key(KeyCode::Up);
        assert_eq!(app.selected_index(), Some(0));
        app.handle_key(KeyCode::PageDown);
        assert_eq!(app.selected_index(), Some(2));
    }

    #[test]
    fn test_navigation_needs_tree_focus() {
        let mut app = App::new("octo/demo");
        assert_eq!(app.handle_key(KeyCode::Down), Action::None);
        assert!(app.selected().is_none());
    }

    #[test]
    fn test_theme_toggle_and_quit() {
        let mut app = App::new("octo/demo");
        assert_eq!(app.theme(), Theme::Dark);
        app.handle_key(KeyCode::Char('t'));
        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Action::Quit);
    }
}
