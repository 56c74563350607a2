// SPDX-License-Identifier: MIT OR Apache-2.0

//! The logging entry points.
//!
//! Both macros capture their [`CallSite`](crate::CallSite) and hand the
//! arguments to [`Logger::log`](crate::Logger::log) as `&dyn Debug`.  The
//! argument names are recovered later from the source file, so the macros
//! must be invoked through the `qq::` path for them to be found.

/// Logs its arguments to the default logger.
///
/// Variables and expressions are printed as `name=value`, literals as the
/// bare value.
///
/// ```no_run
/// let (a, b) = (2, 3);
/// qq::log!(a, b, a + b, "sum");
/// // 0.000s a=2 b=3 a+b=5 "sum"
/// ```
#[macro_export]
macro_rules! log {
    ($($arg:expr),* $(,)?) => {
        $crate::global_logger::default_logger().log(
            &$crate::call_site!($crate::Entry::Default),
            &[$(&$arg as &dyn ::core::fmt::Debug),*],
        )
    };
}

/// Logs its arguments to an explicit [`Logger`](crate::Logger).
///
/// The first argument is the logger (anything that derefs to one); it is not
/// logged.
///
/// ```no_run
/// let logger = qq::Logger::new("/tmp/debug.log");
/// let retries = 3;
/// qq::log_to!(&logger, retries);
/// ```
#[macro_export]
macro_rules! log_to {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        ($logger).log(
            &$crate::call_site!($crate::Entry::Explicit),
            &[$(&$arg as &dyn ::core::fmt::Debug),*],
        )
    };
}
