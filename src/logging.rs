//! In-UI log capture backed by `tui-logger`.
//!
//! Library code logs through the `log` macros. The binary installs the
//! `tui-logger` backend before launching the picker so records land in the
//! toggleable log pane instead of the alternate screen. The backend moves
//! records into the widget buffer on its own thread.

use anyhow::{Result, anyhow};
use log::LevelFilter;

/// Install the `tui-logger` backend at `level`.
pub fn initialize(level: LevelFilter) -> Result<()> {
	tui_logger::init_logger(level).map_err(|err| anyhow!("failed to install logger: {err}"))?;
	tui_logger::set_default_level(level);
	Ok(())
}
