//! Configuration types
//!
//! Validated configuration trees and the static schema descriptions they
//! are validated against.

pub mod ids;
pub mod schema;
pub mod tree;

pub use ids::*;
pub use schema::*;
pub use tree::*;
