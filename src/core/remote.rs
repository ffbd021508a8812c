//! Contracts for the collaborators the picker drives.
//!
//! The picker does not know how listings are fetched, how sessions are
//! created, or what "navigating" means for the host; it only speaks these
//! traits. The HTTP implementation lives in [`crate::client`].
//!
//! # Dyn-compatibility
//!
//! Async methods return `Pin<Box<dyn Future>>` so the app can hold the
//! backend as `Arc<dyn ...>` and move it into spawned tasks. All input
//! references share one lifetime `'a` so the future may borrow both `&self`
//! and its arguments.

use std::future::Future;
use std::pin::Pin;

use super::entry::DirectoryListing;
use super::session::SessionId;
use crate::error::BoxError;

/// Boxed, Send future — the return type of every async collaborator call.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Lists the children of a remote directory.
///
/// Must be idempotent and free of side effects.
pub trait DirectoryLister: Send + Sync {
    /// List `path`, or the server's default root when `path` is `None`.
    fn list<'a>(&'a self, path: Option<&'a str>) -> BoxFuture<'a, Result<DirectoryListing, BoxError>>;
}

/// Materialises a session rooted at a path.
pub trait SessionService: Send + Sync {
    fn create_session<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<SessionId, BoxError>>;
}

/// Transfers control to a destination derived from a session id.
///
/// Fire-and-forget: the picker never inspects what happens next.
pub trait Navigator: Send + Sync {
    fn navigate(&self, destination: &str);
}
