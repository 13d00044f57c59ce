//! Reading raw SVG content from disk

use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::thread;
use std::time::Duration;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n|\r").expect("line break pattern is valid"));

/// EMFILE / ENFILE
const TOO_MANY_OPEN_FILES: [i32; 2] = [24, 23];

/// A file could not be read
#[derive(Debug, Error)]
#[error("failed to read '{}': {source}", path.display())]
pub struct ReadError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Bounded retry with exponential backoff for transient read failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one
    pub attempts: u32,
    /// Delay before the first retry, doubled for every following retry
    pub backoff_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 3,
            backoff_ms: 10,
        }
    }
}

impl RetryPolicy {
    /// A policy that never retries
    pub fn none() -> Self {
        Self {
            attempts: 1,
            backoff_ms: 0,
        }
    }

    fn delay(&self, retry: u32) -> Duration {
        Duration::from_millis(self.backoff_ms.saturating_mul(1 << retry.min(16)))
    }
}

fn is_transient(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
    ) || err
        .raw_os_error()
        .is_some_and(|code| TOO_MANY_OPEN_FILES.contains(&code))
}

/// Read a file as text, retrying transient failures according to `policy`
pub fn read_with_retry(path: &Path, policy: &RetryPolicy) -> Result<String, ReadError> {
    read_with(path, policy, |path| std::fs::read_to_string(path))
}

fn read_with(
    path: &Path,
    policy: &RetryPolicy,
    mut read: impl FnMut(&Path) -> io::Result<String>,
) -> Result<String, ReadError> {
    let attempts = policy.attempts.max(1);
    let mut retry = 0;
    loop {
        match read(path) {
            Ok(content) => return Ok(content),
            Err(err) if is_transient(&err) && retry + 1 < attempts => {
                let delay = policy.delay(retry);
                tracing::debug!(path = %path.display(), error = %err, ?delay, "retrying read");
                thread::sleep(delay);
                retry += 1;
            }
            Err(source) => {
                return Err(ReadError {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
}

/// Read an SVG file with every line break collapsed into a single space
pub fn read_svg_content(path: &Path, policy: &RetryPolicy) -> Result<String, ReadError> {
    let raw = read_with_retry(path, policy)?;
    Ok(collapse_line_breaks(&raw))
}

/// Replace `\r\n`, `\n` and `\r` with one space each
pub fn collapse_line_breaks(text: &str) -> String {
    LINE_BREAKS.replace_all(text, " ").into_owned()
}
