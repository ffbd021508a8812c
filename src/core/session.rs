//! Session committer — turns the cursor's selection into a remote session.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cursor::CursorState;
use super::remote::{Navigator, SessionService};
use crate::error::{PickerError, PickerResult};

/// Opaque session identifier handed out by the session service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Route the navigator is sent to once the session exists.
    pub fn destination(&self) -> String {
        format!("/sessions/{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Open a session rooted at the cursor's path and navigate into it.
///
/// Refuses with [`PickerError::NothingSelected`] before contacting the
/// service when no file is selected. The cursor is only borrowed, so a
/// failed commit leaves it exactly as it was and the caller may retry.
pub async fn commit<S, N>(cursor: &CursorState, service: &S, navigator: &N) -> PickerResult<SessionId>
where
    S: SessionService + ?Sized,
    N: Navigator + ?Sized,
{
    if !cursor.can_commit() {
        return Err(PickerError::NothingSelected);
    }

    let path = cursor.path();
    let id = service
        .create_session(path)
        .await
        .map_err(|e| PickerError::commit(path, e))?;

    tracing::debug!(%path, session = %id, "session created");
    navigator.navigate(&id.destination());
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::{DirectoryListing, FsEntry};
    use crate::core::testing::{FakeDisk, FakeSessions, RecordingNavigator};

    fn file_c() -> FsEntry {
        FsEntry::file("/root/dirA/fileC", "/root/dirA", "fileC")
    }

    fn in_dir_a() -> CursorState {
        CursorState::from_listing(DirectoryListing {
            path: "/root/dirA".into(),
            entries: vec![file_c()],
        })
    }

    async fn with_file_c_selected() -> CursorState {
        in_dir_a().activate(&file_c(), &FakeDisk::new()).await.unwrap()
    }

    #[test]
    fn test_destination_contains_id() {
        assert_eq!(SessionId::from("42").destination(), "/sessions/42");
    }

    #[tokio::test]
    async fn test_scenario_d_commit_navigates() {
        let cursor = with_file_c_selected().await;
        let sessions = FakeSessions::returning("42");
        let navigator = RecordingNavigator::default();

        let id = commit(&cursor, &sessions, &navigator).await.unwrap();

        assert_eq!(id.to_string(), "42");
        assert_eq!(sessions.calls(), vec!["/root/dirA/fileC".to_string()]);
        let visited = navigator.visited();
        assert_eq!(visited.len(), 1);
        assert!(visited[0].contains("42"));
    }

    #[tokio::test]
    async fn test_scenario_e_commit_without_selection_is_rejected() {
        let cursor = in_dir_a();
        let sessions = FakeSessions::returning("42");
        let navigator = RecordingNavigator::default();

        let err = commit(&cursor, &sessions, &navigator).await.unwrap_err();

        assert!(matches!(err, PickerError::NothingSelected));
        assert!(sessions.calls().is_empty());
        assert!(navigator.visited().is_empty());
    }

    #[tokio::test]
    async fn test_commit_does_not_mutate_cursor() {
        let cursor = with_file_c_selected().await;
        let before = cursor.clone();

        commit(&cursor, &FakeSessions::returning("7"), &RecordingNavigator::default())
            .await
            .unwrap();
        assert_eq!(cursor, before);
    }

    #[tokio::test]
    async fn test_commit_failure_skips_navigation() {
        let cursor = with_file_c_selected().await;
        let sessions = FakeSessions::failing();
        let navigator = RecordingNavigator::default();

        let err = commit(&cursor, &sessions, &navigator).await.unwrap_err();

        assert!(matches!(err, PickerError::Commit { ref path, .. } if path == "/root/dirA/fileC"));
        assert!(navigator.visited().is_empty());

        // Still selected, so the user can retry.
        assert!(cursor.can_commit());
    }
}
