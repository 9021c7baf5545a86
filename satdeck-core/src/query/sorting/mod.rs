//! Sorting module for client-side table sorting
//!
//! This module provides:
//! - Owned sort keys with missing-value handling
//! - The direct comparator used by table views
//! - Strategy pattern for composable, multi-key sorting

pub mod keys;
pub mod simple;
pub mod strategy;
pub mod traits;


pub use keys::*;
pub use simple::*;
pub use strategy::*;
pub use traits::*;
