//! The directory cursor — "where the user currently is".
//!
//! A [`CursorState`] bundles the viewed path, the entries on display and the
//! selected file into one value. Nothing outside this module can set the
//! fields individually: new states come from [`CursorState::from_listing`] or
//! from activating an entry, so all three always move together.
//!
//! Activation rules, in precedence order:
//!
//! 1. Activating the selected file again deselects it and backs `path` out to
//!    the file's parent. No refetch.
//! 2. Activating any other file selects it; `path` becomes the file's own
//!    path. No refetch.
//! 3. Activating a directory lists it and replaces everything. This always
//!    refetches, even for the directory already on display.

use super::entry::{DirectoryListing, FsEntry};
use super::remote::DirectoryLister;
use crate::error::{PickerError, PickerResult};

// ───────────────────────────────────────── state ─────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorState {
    /// Directory on display, or the selected file's own path.
    path: String,
    /// Entries of the directory on display. Kept while a file is selected.
    entries: Vec<FsEntry>,
    selected: Option<FsEntry>,
}

/// Outcome of planning an activation without touching the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Branches 1 and 2: the next state is known immediately.
    Ready(CursorState),
    /// Branch 3: `path` must be listed; the next state is
    /// [`CursorState::from_listing`] of the result.
    Fetch { path: String },
}

impl CursorState {
    /// Fresh cursor over a listing, with nothing selected.
    pub fn from_listing(listing: DirectoryListing) -> Self {
        Self {
            path: listing.path,
            entries: listing.entries,
            selected: None,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn entries(&self) -> &[FsEntry] {
        &self.entries
    }

    pub fn selected(&self) -> Option<&FsEntry> {
        self.selected.as_ref()
    }

    pub fn is_selected(&self, entry: &FsEntry) -> bool {
        self.selected.as_ref().is_some_and(|s| s.path == entry.path)
    }

    /// A session can only be opened once a file is selected.
    pub fn can_commit(&self) -> bool {
        self.selected.is_some()
    }

    /// Index of the displayed entry with the given path.
    pub fn position_of(&self, path: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.path == path)
    }

    /// Plan the transition for activating `entry`.
    pub fn step(&self, entry: &FsEntry) -> Step {
        if self.is_selected(entry) {
            return Step::Ready(Self {
                path: entry.parent_path.clone(),
                entries: self.entries.clone(),
                selected: None,
            });
        }

        if !entry.is_directory {
            return Step::Ready(Self {
                path: entry.path.clone(),
                entries: self.entries.clone(),
                selected: Some(entry.clone()),
            });
        }

        Step::Fetch {
            path: entry.path.clone(),
        }
    }

    /// Activate `entry`, listing it through `lister` when it is a directory.
    ///
    /// On a listing failure `self` is left as it was and the error is
    /// returned unchanged; there is no optimistic update.
    pub async fn activate<L>(&self, entry: &FsEntry, lister: &L) -> PickerResult<CursorState>
    where
        L: DirectoryLister + ?Sized,
    {
        match self.step(entry) {
            Step::Ready(next) => Ok(next),
            Step::Fetch { path } => {
                let listing = lister
                    .list(Some(path.as_str()))
                    .await
                    .map_err(|e| PickerError::listing(Some(path.as_str()), e))?;
                tracing::debug!(requested = %path, listed = %listing.path, "descended");
                Ok(Self::from_listing(listing))
            }
        }
    }
}
