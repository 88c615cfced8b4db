//! # HTTP Request Handlers
//!
//! ## Available Handlers
//!
//! - **Hello** (`hello`) - Root greeting
//! - **Health Check** (`health_check`) - Application health monitoring
//! - **Not Found** (`not_found`) - Fallback for unmatched routes and methods

mod health_check;
mod hello;
mod not_found;

pub use health_check::*;
pub use hello::*;
pub use not_found::*;
