//! Configuration loading and resolution utilities.
//!
//! `load` layers config files, `IGNR__SECTION__KEY` environment variables and
//! CLI flags, then validates the result into a [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;
mod util;

pub use loader::load;
pub use resolved::ResolvedConfig;
pub(crate) use util::sanitize_names;
