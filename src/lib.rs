//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# qq

qq is quick and dirty debug output for Rust.

# The problem

Print-style debugging usually looks like this:

```text
println!("port={:?} retries={:?} len={:?}", port, retries, buf.len());
```

Every variable is typed twice, and the output lands in the middle of whatever
the program itself prints.

# The solution

```no_run
# let (port, retries, buf) = (443, 3, vec![0u8; 4]);
qq::log!(port, retries, buf.len(), "connected");
```

appends this to `qq.log` in the system temporary directory:

```text
[14:00:36 main.rs app::connect]
0.000s port=443 retries=3 buf.len()=4 "connected"
```

qq finds the names by reading the source file of the call site, locating the
`qq::log!` invocation on that line and looking at its arguments:

* a variable is named by its identifier;
* an expression such as `a + b`, `f(x)` or `m[k]` is named by its source text;
* a literal, constant or type gets no name and is printed bare.

If the source can't be read or the invocation can't be found, the values are
logged anyway, without names.

# Grouping

Lines written within two seconds of each other from the same file and
function share one header.  The header shows the wall-clock time, the file
name and the fully-qualified function name; each line starts with the time
elapsed since the header.

# Loggers

`qq::log!` writes to the default logger (see [global_logger]).  Use
[Logger] and `qq::log_to!` to write somewhere else.  Loggers open and close
their file on every write, and are safe to share between threads.
*/

extern crate proc_macro;

mod call_site;
pub mod color;
mod config;
mod error;
pub mod format;
pub mod global_logger;
mod log_record;
mod logger;
mod macros;
pub mod matcher;
pub mod names;
pub mod source;

pub use call_site::{CallSite, Entry, NAMESPACE};
pub use config::{Config, DEFAULT_FILE_NAME, GROUPING_WINDOW, default_path};
pub use error::{Error, Result};
pub use log_record::LogRecord;
pub use logger::Logger;
