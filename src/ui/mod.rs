//! Terminal UI.
//!
//! Frames are composed as raw VT100 bytes:
//! - [`viewport`]: Scroll offsets and the visible row range
//! - [`style`]: Escape sequences and highlight colours
//! - [`render`]: Text rows, status bar and message line in one buffer

pub mod style;
pub mod viewport;

mod render;
mod status;

pub use render::{WELCOME, render};

#[cfg(test)]
mod tests;
