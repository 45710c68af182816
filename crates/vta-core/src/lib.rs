//! # vta-core
//!
//! Core library for the vta CLI providing:
//! - Hierarchical configuration loading (embedded defaults, user file, env)
//! - Configuration types for template fetching, installation and git
//! - Shared path utilities

pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use config::HierarchicalConfigLoader;
pub use error::{Error, Result};
pub use types::ScaffoldConfig;
pub use utils::get_home_dir;
