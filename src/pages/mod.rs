//! Top-level routed pages.

pub mod account;
