//! Input handling — maps key/mouse events to cursor transitions.
//!
//! Select and deselect are applied right here. Descending into a directory
//! and opening a session need a collaborator, so they come back as a
//! [`Command`] for the main loop to run in the background.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::config::Action;
use crate::core::cursor::{CursorState, Step};
use crate::core::entry::FsEntry;
use crate::ui::layout::{point_in_rect, AppLayout};

use super::state::AppState;

/// Background work requested by an input event.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// List `entry` starting from `from`; the result must carry `generation`.
    Activate {
        generation: u64,
        from: CursorState,
        entry: FsEntry,
    },
    /// Open a session for the given cursor.
    Commit(CursorState),
}

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) -> Option<Command> {
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return None;
    }

    let len = state.cursor.entries().len();
    match key.code {
        KeyCode::Home => {
            state.list_state.highlighted = 0;
            return None;
        }
        KeyCode::End => {
            state.list_state.select_last(len);
            return None;
        }
        _ => {}
    }

    match state.config.match_key(key)? {
        Action::Quit => {
            state.should_quit = true;
            None
        }
        Action::MoveUp => {
            state.list_state.select_prev();
            None
        }
        Action::MoveDown => {
            state.list_state.select_next(len);
            None
        }
        Action::Activate => activate_highlighted(state),
        Action::Open => request_commit(state),
    }
}

/// Process a mouse event: a left click on a row activates it, a click on the
/// open button commits, the wheel moves the highlight.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Option<Command> {
    let len = state.cursor.entries().len();
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let layout = AppLayout::from_area(state.terminal_area);
            if point_in_rect(layout.open_button_area, mouse.column, mouse.row) {
                return request_commit(state);
            }

            let inner = layout.list_inner();
            if !point_in_rect(inner, mouse.column, mouse.row) {
                return None;
            }
            let row = (mouse.row - inner.y) as usize;
            let idx = state.list_state.row_to_index(row, len)?;
            state.list_state.highlighted = idx;
            activate_highlighted(state)
        }
        MouseEventKind::ScrollUp => {
            state.list_state.select_prev();
            None
        }
        MouseEventKind::ScrollDown => {
            state.list_state.select_next(len);
            None
        }
        _ => None,
    }
}

fn activate_highlighted(state: &mut AppState) -> Option<Command> {
    let entry = state.cursor.entries().get(state.list_state.highlighted)?.clone();
    activate(state, entry)
}

/// Activate `entry`. Ignored while a session is being opened.
pub fn activate(state: &mut AppState, entry: FsEntry) -> Option<Command> {
    if state.committing {
        return None;
    }

    match state.cursor.step(&entry) {
        Step::Ready(next) => {
            tracing::debug!(path = %next.path(), selected = next.can_commit(), "cursor moved");
            state.apply(next);
            if let Some(idx) = state.cursor.position_of(&entry.path) {
                state.list_state.highlighted = idx;
            }
            None
        }
        Step::Fetch { path } => {
            let generation = state.begin_listing(&path);
            tracing::debug!(%path, generation, "listing requested");
            Some(Command::Activate {
                generation,
                from: state.cursor.clone(),
                entry,
            })
        }
    }
}

/// Gate a commit on "a file is selected" and on nothing in flight. A pending
/// listing will replace the selection, so Open waits for it.
pub fn request_commit(state: &mut AppState) -> Option<Command> {
    if state.is_busy() {
        return None;
    }
    if !state.cursor.can_commit() {
        state.status_message = Some("Select a file to open".into());
        return None;
    }

    state.committing = true;
    state.status_message = None;
    Some(Command::Commit(state.cursor.clone()))
}
