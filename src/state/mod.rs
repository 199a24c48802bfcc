//! Per-form client-side state.
//!
//! DESIGN
//! ======
//! Each form owns a plain, serializable struct mutated only through
//! transition methods (`set_*`, `begin_submit`, `resolve_submit`), so the
//! whole submission flow is testable without a rendering layer. Components
//! wrap these structs in `RwSignal`s.

pub mod login;
pub mod password;
pub mod signup;
