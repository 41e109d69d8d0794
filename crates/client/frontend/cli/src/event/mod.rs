//! Event loop coordinating view changes, keyboard input and redraws.
mod r#loop;

pub use r#loop::EventLoop;
