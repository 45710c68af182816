//! Type definitions for vta configuration

mod scaffold_config;

pub use scaffold_config::*;
