//! HTTP Request domain types

mod method;

pub use method::HttpMethod;
