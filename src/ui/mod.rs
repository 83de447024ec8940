//! Interactive terminal UI for `ignr`.
//!
//! [`Picker`] configures and runs the UI. The remaining submodules implement
//! the event loop, key and mouse handling, the draw pass, and the widgets and
//! themes they use. All state changes go through the [`Session`] held by
//! [`App`].
//!
//! [`Session`]: crate::session::Session

mod actions;
mod builder;
pub mod components;
pub mod input;
mod render;
mod runtime;
mod state;
pub mod theme;

pub use builder::Picker;
pub use state::App;
