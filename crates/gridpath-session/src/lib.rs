//! Session controller for the gridpath visualizer.
//!
//! A [`Session`] owns the [`Grid`](gridpath_core::Grid), remembers which cells
//! hold the start and end roles, and turns front-end [`Command`]s (paint,
//! erase, run, clear, reset) into grid edits and search runs. It has no
//! knowledge of windows or terminals: rendering happens in the `draw`
//! callback the front-end passes along with each command.

mod config;
mod error;
mod session;

pub use config::SessionConfig;
pub use error::{InvalidSearch, SessionError};
pub use session::{Command, Session};
