//! Network layer: request/response types and REST API helpers.

pub mod api;
pub mod types;
