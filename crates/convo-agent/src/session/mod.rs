//! Session resolution.
//!
//! A `Session` ties successive exchanges of one user together. The
//! `SessionManager` finds it in the local store, else in the remote
//! registry, else asks the registry for a new one.

mod manager;

pub use manager::{Session, SessionManager};
