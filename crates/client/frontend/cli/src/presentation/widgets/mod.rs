//! Panel widgets composed by [`super::ui`].
pub mod board;
pub mod header;
pub mod input;
pub mod log;
