//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer takes the cursor and app state and turns them into cells on
//! the terminal.  No network I/O happens here.

pub mod entry_list;
pub mod layout;
pub mod path_bar;
pub mod spinner;
pub mod theme;
