//! Directory tree reconstruction from a flat repository listing.

use crate::domain::{Entry, EntryKind};
use crate::utils::{normalize_path, split_parent};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Index of a node inside a [`RepoTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Final path segment (empty for the root)
    pub name: String,
    pub full_path: String,
    pub kind: EntryKind,
    /// Directory synthesized because the listing never named it
    pub implicit: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl TreeNode {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Arena-backed repository tree. Node 0 is the synthetic root (`full_path == ""`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoTree {
    nodes: Vec<TreeNode>,
}

impl Default for RepoTree {
    fn default() -> Self {
        Self::new()
    }
}

impl RepoTree {
    fn new() -> Self {
        let root = TreeNode {
            name: String::new(),
            full_path: String::new(),
            kind: EntryKind::Directory,
            implicit: false,
            parent: None,
            children: Vec::new(),
        };
        Self { nodes: vec![root] }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// A tree is empty when the root has no children.
    pub fn is_empty(&self) -> bool {
        self.nodes[0].children.is_empty()
    }

    pub fn file_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.kind == EntryKind::File).count()
    }

    /// Directory count, root excluded.
    pub fn dir_count(&self) -> usize {
        self.nodes.len() - 1 - self.file_count()
    }

    /// Rebuild a node's path by walking parent links up to the root.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut segments = Vec::new();
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node(node_id);
            if node.parent.is_some() {
                segments.push(node.name.as_str());
            }
            current = node.parent;
        }
        segments.reverse();
        segments.join("/")
    }

    /// Follow path segments from the root.
    #[cfg(test)]
    pub fn find(&self, path: &str) -> Option<NodeId> {
        let mut current = self.root();
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = *self
                .children(current)
                .iter()
                .find(|child| self.node(**child).name == segment)?;
        }
        Some(current)
    }

    /// Directories synthesized for gaps in the listing.
    pub fn implicit_dirs(&self) -> Vec<&str> {
        self.iter_depth_first()
            .into_iter()
            .map(|id| self.node(id))
            .filter(|node| node.implicit)
            .map(|node| node.full_path.as_str())
            .collect()
    }

    /// Every node except the root, in depth-first order.
    pub fn iter_depth_first(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len().saturating_sub(1));
        let mut stack: Vec<NodeId> = self.children(self.root()).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        order
    }

    /// Order every child list by full path, so synthesized directories sit
    /// where a listed one would.
    fn sort_children(&mut self) {
        for idx in 0..self.nodes.len() {
            let mut children = std::mem::take(&mut self.nodes[idx].children);
            children.sort_by(|a, b| self.nodes[a.0].full_path.cmp(&self.nodes[b.0].full_path));
            self.nodes[idx].children = children;
        }
    }

    fn attach(
        &mut self,
        parent: NodeId,
        name: &str,
        full_path: &str,
        kind: EntryKind,
        implicit: bool,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            name: name.to_string(),
            full_path: full_path.to_string(),
            kind,
            implicit,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }
}

struct TreeBuilder {
    tree: RepoTree,
    dirs: HashMap<String, NodeId>,
    files: HashSet<String>,
}

impl TreeBuilder {
    fn new() -> Self {
        let tree = RepoTree::new();
        let mut dirs = HashMap::new();
        dirs.insert(String::new(), tree.root());
        Self { tree, dirs, files: HashSet::new() }
    }

    fn insert(&mut self, path: &str, kind: EntryKind) {
        if self.files.contains(path) {
            debug!("Skipping duplicate listing entry: {}", path);
            return;
        }
        if let Some(existing) = self.dirs.get(path).copied() {
            if kind == EntryKind::Directory {
                self.tree.nodes[existing.0].implicit = false;
            } else {
                warn!("Skipping file entry that collides with a directory: {}", path);
            }
            return;
        }

        let (parent_path, name) = split_parent(path);
        let Some(parent) = self.resolve_dir(parent_path) else {
            warn!("Skipping entry nested under a file: {}", path);
            return;
        };

        let id = self.tree.attach(parent, name, path, kind, false);
        match kind {
            EntryKind::Directory => {
                self.dirs.insert(path.to_string(), id);
            }
            EntryKind::File => {
                self.files.insert(path.to_string());
            }
        }
    }

    /// Find the directory node for `path`, synthesizing any missing ancestors
    /// below the nearest known one. `None` if a file sits on the path.
    fn resolve_dir(&mut self, path: &str) -> Option<NodeId> {
        if let Some(id) = self.dirs.get(path) {
            return Some(*id);
        }
        if self.files.contains(path) {
            return None;
        }

        let (parent_path, name) = split_parent(path);
        let parent = self.resolve_dir(parent_path)?;
        debug!("Synthesizing implicit directory: {}", path);
        let id = self.tree.attach(parent, name, path, EntryKind::Directory, true);
        self.dirs.insert(path.to_string(), id);
        Some(id)
    }
}

/// Build a tree from an unordered flat listing.
///
/// Entries are sorted byte-wise by path, so a directory is always visited
/// before anything beneath it. Malformed entries (empty paths, empty segments,
/// duplicates, children of files) are skipped.
pub fn build_tree(entries: &[Entry]) -> RepoTree {
    let mut sorted: Vec<(String, EntryKind)> = entries
        .iter()
        .filter_map(|entry| {
            let path = normalize_path(&entry.path);
            if path.is_empty() || path.split('/').any(str::is_empty) {
                debug!("Skipping malformed listing entry: {:?}", entry.path);
                return None;
            }
            Some((path, entry.kind))
        })
        .collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));

    let mut builder = TreeBuilder::new();
    for (path, kind) in &sorted {
        builder.insert(path, *kind);
    }
    builder.tree.sort_children();
    builder.tree
}

/// Render the tree as text with box-drawing connectors.
///
/// Directories get a trailing `/`; children keep their stored order.
pub fn render_tree(tree: &RepoTree, label: &str, max_depth: usize) -> String {
    let mut lines = vec![format!("{}/", label)];
    walk_tree(tree, tree.root(), "", 1, max_depth, &mut lines);
    lines.join("\n")
}

fn walk_tree(
    tree: &RepoTree,
    current: NodeId,
    prefix: &str,
    depth: usize,
    max_depth: usize,
    lines: &mut Vec<String>,
) {
    if depth > max_depth {
        return;
    }

    let children = tree.children(current);
    let total_entries = children.len();
    for (idx, child) in children.iter().enumerate() {
        let node = tree.node(*child);
        let is_last = idx == total_entries - 1;
        let connector = if is_last { "└── " } else { "├── " };

        if node.is_dir() {
            lines.push(format!("{}{}{}/", prefix, connector, node.name));
            let extension = if is_last { "    " } else { "│   " };
            walk_tree(tree, *child, &format!("{}{}", prefix, extension), depth + 1, max_depth, lines);
        } else {
            lines.push(format!("{}{}{}", prefix, connector, node.name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape(tree: &RepoTree) -> Vec<(String, EntryKind, Vec<String>)> {
        tree.iter_depth_first()
            .into_iter()
            .map(|id| {
                let node = tree.node(id);
                let children =
                    tree.children(id).iter().map(|c| tree.node(*c).name.clone()).collect();
                (node.full_path.clone(), node.kind, children)
            })
            .collect()
    }

    #[test]
    fn test_directory_then_file() {
        let tree = build_tree(&[Entry::directory("a"), Entry::file("a/b.txt")]);
        let root_children = tree.children(tree.root());
        assert_eq!(root_children.len(), 1);

        let a = tree.node(root_children[0]);
        assert_eq!(a.name, "a");
        assert!(a.is_dir());
        assert!(!a.implicit);

        let b_id = tree.children(root_children[0])[0];
        let b = tree.node(b_id);
        assert_eq!(b.name, "b.txt");
        assert_eq!(b.kind, EntryKind::File);
        assert_eq!(tree.parent(b_id), Some(root_children[0]));
    }

    #[test]
    fn test_missing_parent_is_synthesized() {
        let tree = build_tree(&[Entry::file("x/y.txt")]);
        let root_children = tree.children(tree.root());
        assert_eq!(root_children.len(), 1, "y.txt must not be attached to the root");

        let x = tree.node(root_children[0]);
        assert_eq!(x.name, "x");
        assert!(x.is_dir());
        assert!(x.implicit);
        assert_eq!(tree.node(tree.children(root_children[0])[0]).name, "y.txt");
        assert_eq!(tree.implicit_dirs(), vec!["x"]);
        assert_eq!(tree.find("x/y.txt").map(|id| tree.path_of(id)), Some("x/y.txt".to_string()));
    }

    #[test]
    fn test_deep_gap_synthesizes_every_level_under_nearest_ancestor() {
        let tree = build_tree(&[Entry::directory("a"), Entry::file("a/b/c/d.rs")]);
        let a = tree.find("a").expect("a");
        assert!(!tree.node(a).implicit);
        let b = tree.find("a/b").expect("a/b");
        assert!(tree.node(b).implicit);
        assert_eq!(tree.parent(b), Some(a));
        assert!(tree.find("a/b/c/d.rs").is_some());
        assert_eq!(tree.children(tree.root()).len(), 1);
    }

    #[test]
    fn test_order_of_input_does_not_matter() {
        let forward = vec![
            Entry::directory("src"),
            Entry::file("src/main.rs"),
            Entry::directory("src/bin"),
            Entry::file("src/bin/tool.rs"),
            Entry::file("Cargo.toml"),
            Entry::file("src-extra.txt"),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        let a = build_tree(&forward);
        let b = build_tree(&backward);
        assert_eq!(shape(&a), shape(&b));
        assert_eq!(a, build_tree(&forward));
    }

    #[test]
    fn test_every_file_is_one_reachable_leaf() {
        let entries = vec![
            Entry::file("docs/guide/intro.md"),
            Entry::directory("docs"),
            Entry::file("README.md"),
            Entry::file("lib/util.py"),
            Entry::directory("lib"),
            Entry::file("lib.py"),
        ];
        let tree = build_tree(&entries);

        for entry in entries.iter().filter(|e| e.is_file()) {
            let id = tree.find(&entry.path).expect("file reachable");
            let node = tree.node(id);
            assert_eq!(node.kind, EntryKind::File);
            assert!(tree.children(id).is_empty());
            assert_eq!(tree.path_of(id), entry.path);
            assert_eq!(node.full_path, entry.path);
        }
        assert_eq!(tree.file_count(), 4);
    }

    #[test]
    fn test_children_follow_path_sort_order() {
        let tree = build_tree(&[
            Entry::file("b.txt"),
            Entry::directory("a"),
            Entry::file("a-b.txt"),
            Entry::file("a/z.txt"),
        ]);
        let names: Vec<&str> = tree
            .children(tree.root())
            .iter()
            .map(|id| tree.node(*id).name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "a-b.txt", "b.txt"]);
    }

    #[test]
    fn test_synthesized_directory_sorts_like_a_listed_one() {
        let implicit =
            build_tree(&[Entry::file("a-b.txt"), Entry::file("a/z.txt"), Entry::file("a.txt")]);
        let explicit = build_tree(&[
            Entry::file("a-b.txt"),
            Entry::file("a/z.txt"),
            Entry::file("a.txt"),
            Entry::directory("a"),
        ]);

        let names = |tree: &RepoTree| -> Vec<String> {
            tree.children(tree.root()).iter().map(|id| tree.node(*id).name.clone()).collect()
        };
        assert_eq!(names(&implicit), vec!["a", "a-b.txt", "a.txt"]);
        assert_eq!(names(&implicit), names(&explicit));
        assert_eq!(shape(&implicit), shape(&explicit));
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let tree = build_tree(&[
            Entry::file(""),
            Entry::file("a//b.txt"),
            Entry::file("ok.txt"),
            Entry::file("ok.txt"),
            Entry::file("ok.txt/nested.txt"),
        ]);
        assert_eq!(tree.children(tree.root()).len(), 1);
        assert_eq!(tree.file_count(), 1);
        assert_eq!(tree.dir_count(), 0);
    }

    #[test]
    fn test_empty_listing_gives_empty_tree() {
        let tree = build_tree(&[]);
        assert!(tree.is_empty());
        assert_eq!(tree.file_count() + tree.dir_count(), 0);
        assert_eq!(tree.node(tree.root()).full_path, "");
        assert!(tree.parent(tree.root()).is_none());
    }

    #[test]
    fn test_render_tree_draws_connectors() {
        let tree = build_tree(&[
            Entry::directory("src"),
            Entry::file("src/lib.rs"),
            Entry::file("src/main.rs"),
            Entry::file("README.md"),
        ]);
        let expected = "demo/\n├── README.md\n└── src/\n    ├── lib.rs\n    └── main.rs";
        similar_asserts::assert_eq!(render_tree(&tree, "demo", 4), expected);
    }

    #[test]
    fn test_render_tree_respects_depth() {
        let tree = build_tree(&[Entry::file("a/b/c.txt")]);
        let rendered = render_tree(&tree, "demo", 1);
        assert!(rendered.contains("a/"));
        assert!(!rendered.contains("b/"));
    }
}
