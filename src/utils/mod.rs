//! # Utility Modules
//!
//! - **Constants** (`constant`) - Route paths, response bodies and defaults

pub mod constant;
