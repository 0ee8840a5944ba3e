//! Console Logging
//!
//! Installs the `console_log` backend so `log` macros reach the browser
//! console. The level is applied through `log::set_max_level` and can be
//! raised or lowered later once the page config is known.

use log::{LevelFilter, SetLoggerError};

/// Install the console logger. Call once, before anything logs.
#[cfg(target_arch = "wasm32")]
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    // Register at the most verbose level; the max level does the filtering.
    console_log::init_with_level(log::Level::Trace)?;
    log::set_max_level(level);
    Ok(())
}

/// Off the browser there is no console; only the level is applied.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_max_level(level);
    Ok(())
}
