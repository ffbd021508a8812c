//! In-memory collaborators for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use super::entry::{DirectoryListing, FsEntry};
use super::remote::{BoxFuture, DirectoryLister, Navigator, SessionService};
use super::session::SessionId;
use crate::error::BoxError;

/// Directory lister backed by a map of canned listings.
#[derive(Default)]
pub struct FakeDisk {
    listings: HashMap<String, DirectoryListing>,
    fail: bool,
    calls: Mutex<Vec<Option<String>>>,
}

impl FakeDisk {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_listing(self, path: &str, entries: Vec<FsEntry>) -> Self {
        self.with_normalised(path, path, entries)
    }

    /// Answer requests for `requested` with a listing reported as `listed`.
    pub fn with_normalised(mut self, requested: &str, listed: &str, entries: Vec<FsEntry>) -> Self {
        self.listings.insert(
            requested.to_string(),
            DirectoryListing {
                path: listed.to_string(),
                entries,
            },
        );
        self
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    pub fn calls(&self) -> Vec<Option<String>> {
        self.calls.lock().unwrap().clone()
    }
}

impl DirectoryLister for FakeDisk {
    fn list<'a>(&'a self, path: Option<&'a str>) -> BoxFuture<'a, Result<DirectoryListing, BoxError>> {
        Box::pin(async move {
            self.calls.lock().unwrap().push(path.map(str::to_string));
            if self.fail {
                return Err("disk unavailable".into());
            }
            let key = path.unwrap_or("/");
            self.listings
                .get(key)
                .cloned()
                .ok_or_else(|| format!("no such directory: {key}").into())
        })
    }
}

/// Session service that returns a fixed id, or always fails.
pub struct FakeSessions {
    id: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeSessions {
    pub fn returning(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            id: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl SessionService for FakeSessions {
    fn create_session<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<SessionId, BoxError>> {
        Box::pin(async move {
            self.calls.lock().unwrap().push(path.to_string());
            match &self.id {
                Some(id) => Ok(SessionId::from(id.as_str())),
                None => Err("session service down".into()),
            }
        })
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, destination: &str) {
        self.visited.lock().unwrap().push(destination.to_string());
    }
}
