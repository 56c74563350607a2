// SPDX-License-Identifier: MIT OR Apache-2.0

//! The process-wide default logger used by `qq::log!`.
//!
//! The default logger is created lazily on first use, from [`Config::default`]
//! unless a configuration was installed before then.  It writes to
//! `qq.log` in the system temporary directory.
//!
//! # Examples
//!
//! ```
//! // Nothing has logged yet, so the path can still be chosen.
//! let path = std::env::temp_dir().join("qq-doc-default.log");
//! assert!(qq::global_logger::set_default_path(&path));
//! assert_eq!(qq::global_logger::default_logger().path(), path);
//!
//! // Once the logger exists its configuration is fixed.
//! assert!(!qq::global_logger::set_default_path("/elsewhere.log"));
//! ```

use crate::config::Config;
use crate::logger::Logger;
use std::path::PathBuf;
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Returns the default logger, creating it if needed.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(|| Logger::with_config(Config::default()))
}

/// Installs the configuration of the default logger.
///
/// Returns `false`, leaving the logger unchanged, if the default logger was
/// already created.
pub fn set_default_config(config: Config) -> bool {
    let mut installed = false;
    DEFAULT_LOGGER.get_or_init(|| {
        installed = true;
        Logger::with_config(config)
    });
    installed
}

/// Sets the file the default logger writes to.  See [set_default_config].
pub fn set_default_path(path: impl Into<PathBuf>) -> bool {
    set_default_config(Config::new(path))
}
