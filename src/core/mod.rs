//! Core picker logic – the directory cursor, the session committer, and the
//! collaborator contracts they drive.
//!
//! Nothing in this module depends on any TUI, rendering or HTTP crate.
//! Every type is `Send + Sync` so it can be shared across async tasks.

pub mod cursor;
pub mod entry;
pub mod remote;
pub mod session;

#[cfg(test)]
pub mod testing;
