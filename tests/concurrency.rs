// SPDX-License-Identifier: MIT OR Apache-2.0
use qq::{Config, Logger};
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const LINES: usize = 100;

#[test]
fn lines_never_interleave() {
    let dir = tempfile::tempdir().unwrap();
    let logger = Arc::new(Logger::with_config(
        Config::new(dir.path().join("qq.log")).with_color(false),
    ));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..LINES {
                    qq::log_to!(logger, t, i);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let text = std::fs::read_to_string(logger.path()).unwrap();
    let mut seen = vec![0usize; THREADS];
    for line in text.lines() {
        if line.is_empty() || line.starts_with('[') {
            assert!(line.is_empty() || line.ends_with(']'), "{line}");
            continue;
        }
        let parts: Vec<&str> = line.split(' ').collect();
        assert_eq!(parts.len(), 3, "{line}");
        assert!(parts[0].ends_with('s'), "{line}");
        let t: usize = parts[1].strip_prefix("t=").unwrap().parse().unwrap();
        let i: usize = parts[2].strip_prefix("i=").unwrap().parse().unwrap();
        // per-thread order is kept
        assert_eq!(i, seen[t], "{line}");
        seen[t] += 1;
    }
    assert_eq!(seen, vec![LINES; THREADS]);
}
