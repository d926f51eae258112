//! JSON serialization for the on-disk response cache.

mod json;

pub use json::*;
