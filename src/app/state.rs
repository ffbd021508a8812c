//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::cursor::CursorState;
use crate::error::PickerResult;
use crate::ui::entry_list::EntryListState;

/// Top-level application state.
pub struct AppState {
    /// Path, entries and selection. Only ever replaced as a whole.
    pub cursor: CursorState,
    /// Highlighted row and scroll offset in the entry list.
    pub list_state: EntryListState,
    pub config: AppConfig,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Bumped on every applied activation. Listing results tagged with an
    /// older generation are dropped.
    pub listing_generation: u64,
    /// Directory currently being listed, if any.
    pub pending_listing: Option<String>,
    /// `true` while a session-creation request is in flight.
    pub committing: bool,
    /// Set once a session exists; printed on stdout after teardown.
    pub destination: Option<String>,
    /// Drives the spinner.
    pub tick: u64,
    /// Last drawn terminal area, for mouse hit-testing.
    pub terminal_area: Rect,
}

impl AppState {
    pub fn new(cursor: CursorState, config: AppConfig) -> Self {
        Self {
            cursor,
            list_state: EntryListState::default(),
            config,
            should_quit: false,
            status_message: None,
            listing_generation: 0,
            pending_listing: None,
            committing: false,
            destination: None,
            tick: 0,
            terminal_area: Rect::default(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending_listing.is_some() || self.committing
    }

    /// Replace the cursor after a synchronous select/deselect.
    ///
    /// Any listing still in flight is superseded by this newer activation.
    pub fn apply(&mut self, next: CursorState) {
        self.listing_generation = self.listing_generation.wrapping_add(1);
        if let Some(path) = self.pending_listing.take() {
            tracing::debug!(%path, "listing superseded by newer activation");
        }
        self.cursor = next;
        self.status_message = None;
        self.list_state.clamp(self.cursor.entries().len());
    }

    /// Record that `path` is being listed; returns the generation the result
    /// must carry to be applied.
    pub fn begin_listing(&mut self, path: &str) -> u64 {
        self.listing_generation = self.listing_generation.wrapping_add(1);
        self.pending_listing = Some(path.to_string());
        self.listing_generation
    }

    /// Apply a finished listing unless a newer activation superseded it.
    /// Returns `true` when the result was current.
    pub fn finish_listing(&mut self, generation: u64, result: PickerResult<CursorState>) -> bool {
        if generation != self.listing_generation {
            tracing::debug!(generation, current = self.listing_generation, "dropping stale listing");
            return false;
        }
        self.pending_listing = None;

        match result {
            Ok(next) => {
                self.cursor = next;
                self.status_message = None;
                self.list_state = EntryListState::default();
            }
            Err(e) => {
                tracing::warn!(error = %e, "listing failed");
                self.status_message = Some(e.to_string());
            }
        }
        true
    }

    /// Mark a commit as failed; the cursor is left as it was.
    pub fn fail_commit(&mut self, message: String) {
        self.committing = false;
        self.status_message = Some(message);
    }

    /// The navigator fired: leave the picker and report `destination`.
    pub fn navigate(&mut self, destination: String) {
        self.committing = false;
        self.destination = Some(destination);
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cursor::Step;
    use crate::core::entry::{DirectoryListing, FsEntry};
    use crate::error::PickerError;

    fn listing(path: &str, entries: Vec<FsEntry>) -> CursorState {
        CursorState::from_listing(DirectoryListing {
            path: path.into(),
            entries,
        })
    }

    fn root() -> AppState {
        AppState::new(
            listing(
                "/root",
                vec![
                    FsEntry::directory("/root/dirA", "/root", "dirA"),
                    FsEntry::file("/root/fileB", "/root", "fileB"),
                ],
            ),
            AppConfig::default(),
        )
    }

    #[test]
    fn test_current_listing_is_applied() {
        let mut state = root();
        let generation = state.begin_listing("/root/dirA");
        assert!(state.is_busy());

        let next = listing("/root/dirA", vec![FsEntry::file("/root/dirA/fileC", "/root/dirA", "fileC")]);
        assert!(state.finish_listing(generation, Ok(next.clone())));
        assert_eq!(state.cursor, next);
        assert!(!state.is_busy());
    }

    #[test]
    fn test_older_listing_is_dropped() {
        let mut state = root();
        let first = state.begin_listing("/root/dirA");
        let second = state.begin_listing("/root/dirB");

        assert!(!state.finish_listing(first, Ok(listing("/root/dirA", vec![]))));
        assert_eq!(state.cursor.path(), "/root");
        assert_eq!(state.pending_listing.as_deref(), Some("/root/dirB"));

        assert!(state.finish_listing(second, Ok(listing("/root/dirB", vec![]))));
        assert_eq!(state.cursor.path(), "/root/dirB");
    }

    #[test]
    fn test_selection_supersedes_pending_listing() {
        let mut state = root();
        let generation = state.begin_listing("/root/dirA");

        let file_b = state.cursor.entries()[1].clone();
        let Step::Ready(next) = state.cursor.step(&file_b) else {
            panic!("file selection is synchronous");
        };
        state.apply(next);

        assert!(!state.finish_listing(generation, Ok(listing("/root/dirA", vec![]))));
        assert_eq!(state.cursor.selected(), Some(&file_b));
    }

    #[test]
    fn test_failed_listing_keeps_cursor_and_reports() {
        let mut state = root();
        let before = state.cursor.clone();
        let generation = state.begin_listing("/root/dirA");

        let err = PickerError::listing(Some("/root/dirA"), "boom");
        assert!(state.finish_listing(generation, Err(err)));
        assert_eq!(state.cursor, before);
        assert!(state.status_message.as_deref().is_some_and(|m| m.contains("/root/dirA")));
    }

    #[test]
    fn test_navigate_quits_with_destination() {
        let mut state = root();
        state.committing = true;
        state.navigate("/sessions/42".into());
        assert!(state.should_quit);
        assert!(!state.committing);
        assert_eq!(state.destination.as_deref(), Some("/sessions/42"));
    }
}
