//! In-memory text model.
//!
//! A [`Document`] owns its [`Row`]s; each row keeps its raw bytes, the
//! tab-expanded rendering and per-byte highlight classes in sync.
//! [`Cursor`] addresses the document in buffer coordinates.

mod cursor;
mod document;
mod row;

pub use cursor::{Cursor, Direction};
pub use document::Document;
pub use row::{Row, TAB_STOP};
