// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logger configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Idle time after which the next line starts a new group with its own header.
pub const GROUPING_WINDOW: Duration = Duration::from_secs(2);

/// File name of the default log, inside the system temporary directory.
pub const DEFAULT_FILE_NAME: &str = "qq.log";

/// Path of the default log file, e.g. `/tmp/qq.log`.
pub fn default_path() -> PathBuf {
    std::env::temp_dir().join(DEFAULT_FILE_NAME)
}

/**
Settings for a [Logger](crate::Logger).

```
use std::time::Duration;
let config = qq::Config::new("/tmp/debug.log")
    .with_window(Duration::from_millis(500))
    .with_color(false);
assert!(!config.color);
```
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Config {
    /// File the logger appends to.  Created on first write.
    pub path: PathBuf,
    /// Grouping window, see [GROUPING_WINDOW].
    pub window: Duration,
    /// Whether lines carry ANSI color escapes.
    pub color: bool,
}

impl Config {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            window: GROUPING_WINDOW,
            color: true,
        }
    }

    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(default_path())
    }
}
