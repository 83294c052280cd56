//! Nested key-value trees and the shared traversal engine
//!
//! This module provides the building blocks every operation is made of:
//!
//! - `Node`: the tree model, classified once at ingestion
//! - `traverse`: visits every entry in shallow-first or deep-first order
//! - `walk` / `walk_mut`: resolve (or create) the container a key path points at

mod config;
mod node;
mod traversal;
mod walker;

// Re-export public types
pub use config::{Order, TraversalConfig};
pub use node::{Container, Node, Path};
pub use traversal::{Visit, traverse, traverse_container};
pub use walker::{OnMissing, walk, walk_mut};
