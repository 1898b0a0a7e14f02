//! Core module - include flattening
//!
//! This module provides:
//! - Include directive recognition
//! - Search path resolution
//! - The depth-first flattening traversal
//! - Error types

pub mod directive;
pub mod error;
pub mod includer;
pub mod search;
