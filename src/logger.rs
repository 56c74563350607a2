// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
The file-appending logger.

A [Logger] owns a path, not an open file.  Every write opens the file in
append mode, writes, and closes it again, so log files never need to be
managed by the caller.

Lines are grouped: a header of the form `[14:00:36 main.rs app::main]` is
written before a line whenever the logger has been idle for longer than the
grouping window, or when the line comes from a different file or function
than the previous one.
*/

use crate::call_site::CallSite;
use crate::color::{Color, Paint};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{bare_args, format_args};
use crate::log_record::LogRecord;
use crate::names::names_at;
use parking_lot::Mutex;
use std::fmt::{Debug, Display};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

/**
Writes pretty log lines to a file.

Loggers are safe for concurrent use.  One call holds the logger's lock from
the window check to the end of the line write, so lines from different threads
never interleave and headers are decided atomically.

```no_run
let logger = qq::Logger::new("/tmp/debug.log");
let port = 443;
qq::log_to!(&logger, port, "listening");
// appends e.g. `0.000s port=443 "listening"` (colorized)
```
*/
#[derive(Debug)]
pub struct Logger {
    config: Config,
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    // start of the current group; stamps are relative to it
    start: Option<Instant>,
    deadline: Option<Instant>,
    last: Option<(&'static str, &'static str)>,
}

impl State {
    /// Restarts the grouping window.  Returns whether the previous window had
    /// already run out, in which case a new group starts now.
    fn reset_window(&mut self, now: Instant, window: Duration) -> bool {
        let expired = self.deadline.is_none_or(|deadline| now >= deadline);
        self.deadline = Some(now + window);
        if expired {
            self.start = Some(now);
        }
        expired
    }

    fn elapsed(&mut self, now: Instant) -> Duration {
        let start = *self.start.get_or_insert(now);
        now.saturating_duration_since(start)
    }
}

impl Logger {
    /// Creates a logger for the file at `path`.  The file is not touched until
    /// the first write.
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self::with_config(Config::new(path))
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            state: Mutex::new(State::default()),
        }
    }

    /// The file this logger appends to.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /**
    Logs `values`, naming each one by its source text at `site`.

    This is what `qq::log!` and `qq::log_to!` expand to.  If the source can't be
    inspected the values are still logged, just without names.

    # Panics

    Panics if the log file can't be opened or written.  Use [Logger::try_log]
    to handle that instead.
    */
    pub fn log(&self, site: &CallSite, values: &[&dyn Debug]) {
        self.try_log(site, values)
            .unwrap_or_else(|err| panic!("qq: {err}"));
    }

    /// Like [Logger::log], but returns file errors instead of panicking.
    pub fn try_log(&self, site: &CallSite, values: &[&dyn Debug]) -> Result<()> {
        let mut state = self.state.lock();
        let now = Instant::now();
        let expired = state.reset_window(now, self.config.window);
        let paint = self.paint();

        if !site.is_known() {
            log::debug!("qq: call site unknown, logging values without names");
            return self.write_line(&mut state, now, bare_args(values, paint));
        }

        let location = (site.file(), site.function());
        if expired || state.last != Some(location) {
            state.last = Some(location);
            self.write_header(site)?;
        }

        let formatted = match names_at(site) {
            Ok(names) if names.len() == values.len() => format_args(&names, values, paint),
            Ok(names) => {
                log::warn!(
                    "qq: {}:{} has {} argument names for {} values, logging values without names",
                    site.file(),
                    site.line(),
                    names.len(),
                    values.len()
                );
                bare_args(values, paint)
            }
            Err(err) => {
                log::debug!("qq: {err}, logging values without names");
                bare_args(values, paint)
            }
        };
        self.write_line(&mut state, now, formatted)
    }

    /**
    Writes `args` space-joined on one line, after the elapsed-time stamp.

    No names are looked up and no header is written.

    # Panics

    Panics if the log file can't be opened or written.
    */
    pub fn output(&self, args: &[&dyn Display]) {
        let mut state = self.state.lock();
        let parts = args.iter().map(|arg| arg.to_string()).collect();
        self.write_line(&mut state, Instant::now(), parts)
            .unwrap_or_else(|err| panic!("qq: {err}"));
    }

    fn paint(&self) -> Paint {
        Paint::from(self.config.color)
    }

    fn write_line(&self, state: &mut State, now: Instant, parts: Vec<String>) -> Result<()> {
        let stamp = format!("{:.3}s", state.elapsed(now).as_secs_f64());
        let mut record = LogRecord::new();
        record.log_owned(self.paint().paint(&stamp, Color::Yellow));
        record.extend(parts);
        self.append(&format!("{record}\n"))
    }

    fn write_header(&self, site: &CallSite) -> Result<()> {
        let time = chrono::Local::now().format("%H:%M:%S");
        self.append(&format!(
            "\n[{} {} {}]\n",
            time,
            site.short_file(),
            site.function()
        ))
    }

    fn append(&self, text: &str) -> Result<()> {
        let mut file = self.open()?;
        file.write_all(text.as_bytes()).map_err(|source| Error::Io {
            path: self.config.path.clone(),
            source,
        })
    }

    fn open(&self) -> Result<File> {
        let mut options = OpenOptions::new();
        options.create(true).append(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        options.open(&self.config.path).map_err(|source| Error::Io {
            path: self.config.path.clone(),
            source,
        })
    }
}

/*
Boilerplate notes.

Clone would give two loggers with separate locks appending to one file, which
defeats the point of the lock.  Not implemented.
PartialEq/Eq/Hash: loggers are identified by provenance, not data.  Not implemented.
Default: the process-wide default logger lives in global_logger.  Not implemented here.
Send/Sync: automatic through parking_lot::Mutex.
*/
