//! Remote repository data (metadata and flat path listings)

pub mod github;
pub mod transport;

pub use github::{GitHubClient, Listing};
