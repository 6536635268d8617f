//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Base directory resolution
//! - User preference persistence

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::{Settings, ThemeMode};
