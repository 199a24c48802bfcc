//! Cross-cutting helpers.

pub mod notify;
