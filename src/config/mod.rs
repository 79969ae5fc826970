//! Configuration module for tally
//!
//! This module provides XDG-compliant path resolution for the expense file.

pub mod paths;

pub use paths::TallyPaths;
