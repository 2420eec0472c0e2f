#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. search::SearchState)
    clippy::module_name_repetitions
)]

//! # Quill
//!
//! A small terminal text editor.
//!
//! Quill edits one file at a time in a raw-mode terminal with:
//! - Syntax highlighting for C and Rust, including multi-line comments
//! - Incremental search with wrap-around
//! - Atomic saves and a save-as prompt
//!
//! ## Architecture
//!
//! Quill uses The Elm Architecture (TEA) pattern:
//! - **Model**: Editor state
//! - **Message**: Editor actions decoded from keys
//! - **Update**: Pure state transitions
//! - **View**: One escape-sequence frame per update
//!
//! ## Modules
//!
//! - [`app`]: Main loop, state and key bindings
//! - [`editor`]: Rows, the document and the cursor
//! - [`highlight`]: Syntax profiles and row classification
//! - [`input`]: Key decoding from raw terminal bytes
//! - [`search`]: Incremental search
//! - [`ui`]: Viewport and frame composition
//! - [`terminal`]: Raw mode, window size and I/O
//! - [`storage`]: Loading and saving files
//! - [`config`]: Saved defaults and effective settings

pub mod app;
pub mod config;
pub mod editor;
pub mod highlight;
pub mod input;
pub mod search;
pub mod storage;
pub mod terminal;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model, update};
    pub use crate::editor::{Cursor, Direction, Document};
    pub use crate::input::Key;
    pub use crate::ui::viewport::Viewport;
}
