// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error type for qq.
//!
//! Only [`Error::Io`] is fatal to a log call.  Every other variant describes a
//! failure to recover argument names, and [`Logger::log`](crate::Logger::log)
//! answers it by writing the values without names.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The log file could not be opened, created or written.
    #[error("can't write log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The source file of the call site could not be read.
    #[error("can't read source file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The source file of the call site is not valid Rust.
    #[error("can't parse source file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },
    /// No qq invocation starts on the call-site line.
    #[error("no qq invocation found at {file}:{line}")]
    NoMatch { file: String, line: u32 },
    /// Names can't be looked up from inside a procedural macro.
    #[error("call site is inside a procedural macro")]
    InsideProcMacro,
    /// The call site carries no usable file or line.
    #[error("call site is unknown")]
    UnknownCallSite,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_location() {
        let err = Error::NoMatch {
            file: "src/main.rs".to_string(),
            line: 12,
        };
        assert_eq!(err.to_string(), "no qq invocation found at src/main.rs:12");

        let err = Error::Io {
            path: PathBuf::from("/nonexistent/qq.log"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("can't write log file /nonexistent/qq.log"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
