//! Tree reconstruction from flat repository listings

pub mod tree;

pub use tree::{build_tree, render_tree, NodeId, RepoTree};
