//! Core module - Shared data structures and utilities
//!
//! This module provides:
//! - Typed errors for the rewrite engine
//! - The run report model
//! - Rendering of reports in different output formats
//! - Path normalization utilities

pub mod error;
pub mod model;
pub mod paths;
pub mod render;
