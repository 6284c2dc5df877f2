//! Configuration loading
//!
//! Layers defaults, an optional config file, and `GIT_SEER_*` environment
//! variables (Env > File > Defaults). CLI flags are applied by each command.

pub mod loader;

pub use loader::load_config;
