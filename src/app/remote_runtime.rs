//! Background collaborator requests, keeping the UI thread responsive.
//!
//! Each request runs on its own task and reports back through a
//! [`RemoteUpdate`]. Nothing here touches [`AppState`](super::state::AppState);
//! the main loop applies updates in arrival order.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::core::cursor::CursorState;
use crate::core::entry::FsEntry;
use crate::core::remote::{DirectoryLister, Navigator, SessionService};
use crate::core::session;
use crate::error::{PickerError, PickerResult};

pub enum RemoteUpdate {
    /// A directory activation finished (or failed) under `generation`.
    Activated {
        generation: u64,
        result: PickerResult<CursorState>,
    },
    /// A session was created; the picker should hand over to `destination`.
    Navigate { destination: String },
    CommitFailed(PickerError),
}

/// Navigator for the TUI: "navigating" means leaving the picker, which the
/// main loop does when it receives [`RemoteUpdate::Navigate`].
pub struct ExitNavigator {
    tx: mpsc::UnboundedSender<RemoteUpdate>,
}

impl Navigator for ExitNavigator {
    fn navigate(&self, destination: &str) {
        let _ = self.tx.send(RemoteUpdate::Navigate {
            destination: destination.to_string(),
        });
    }
}

/// Activate a directory entry off the UI thread.
pub fn spawn_activation(
    tx: mpsc::UnboundedSender<RemoteUpdate>,
    lister: Arc<dyn DirectoryLister>,
    generation: u64,
    from: CursorState,
    entry: FsEntry,
) {
    tokio::spawn(async move {
        let result = from.activate(&entry, lister.as_ref()).await;
        let _ = tx.send(RemoteUpdate::Activated { generation, result });
    });
}

/// Commit the cursor off the UI thread.
pub fn spawn_commit(
    tx: mpsc::UnboundedSender<RemoteUpdate>,
    service: Arc<dyn SessionService>,
    cursor: CursorState,
) {
    tokio::spawn(async move {
        let navigator = ExitNavigator { tx: tx.clone() };
        if let Err(e) = session::commit(&cursor, service.as_ref(), &navigator).await {
            tracing::warn!(error = %e, "commit failed");
            let _ = tx.send(RemoteUpdate::CommitFailed(e));
        }
    });
}
