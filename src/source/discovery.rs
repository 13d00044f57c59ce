//! Resolving source selectors into candidate file paths
//!
//! A selector is a file path, a directory (every file below it) or a glob
//! pattern such as `icons/**/*.svg`. Discovery does not filter by
//! extension; the builder decides which candidates are SVG files.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

use regex::Regex;
use thiserror::Error;
use walkdir::WalkDir;

/// Errors that can occur while resolving selectors
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Selectors matched nothing
    #[error("no files matched {}", .0.join(", "))]
    NoFiles(Vec<String>),

    /// Glob could not be compiled
    #[error("invalid source pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Directory walk failed
    #[error("failed to walk '{}': {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

const WILDCARDS: [char; 3] = ['*', '?', '{'];

fn has_wildcard(component: &str) -> bool {
    component.contains(WILDCARDS)
}

/// Resolve every selector, in order, dropping duplicates
pub fn discover(selectors: &[String]) -> Result<Vec<PathBuf>, DiscoveryError> {
    let mut seen = HashSet::new();
    let mut paths = Vec::new();

    for selector in selectors {
        for path in resolve_selector(selector)? {
            if seen.insert(path.clone()) {
                paths.push(path);
            }
        }
    }

    if paths.is_empty() {
        return Err(DiscoveryError::NoFiles(selectors.to_vec()));
    }
    tracing::debug!(count = paths.len(), "discovered candidate files");
    Ok(paths)
}

fn resolve_selector(selector: &str) -> Result<Vec<PathBuf>, DiscoveryError> {
    let path = Path::new(selector);
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if path.is_dir() {
        return walk(path, None, None, false);
    }

    let (root, pattern) = split_glob(selector);
    let implicit_root = root.as_os_str().is_empty();
    let root = if implicit_root {
        PathBuf::from(".")
    } else {
        root
    };
    let regex = glob_to_regex(&pattern).map_err(|source| DiscoveryError::Pattern {
        pattern: selector.to_string(),
        source,
    })?;

    if !root.is_dir() {
        return Ok(Vec::new());
    }
    walk(&root, Some(&regex), pattern_depth(&pattern), implicit_root)
}

/// Deepest level a pattern can match below its root, `None` when `**` is unbounded
fn pattern_depth(pattern: &str) -> Option<usize> {
    if pattern.contains("**") {
        return None;
    }
    Some(pattern.split('/').count())
}

/// Split `a/b/*/c.svg` into the walk root `a/b` and the pattern `*/c.svg`
fn split_glob(selector: &str) -> (PathBuf, String) {
    let mut root = PathBuf::new();
    let mut rest = Vec::new();

    for (i, part) in selector.split('/').enumerate() {
        if !rest.is_empty() || has_wildcard(part) {
            rest.push(part);
        } else if i == 0 && part.is_empty() {
            root.push("/");
        } else if !part.is_empty() {
            root.push(part);
        }
    }

    if rest.is_empty() {
        // no wildcard at all: match the last component literally
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        root.pop();
        return (root, name);
    }
    (root, rest.join("/"))
}

/// Translate a glob into an anchored regex over `/`-separated relative paths
fn glob_to_regex(pattern: &str) -> Result<Regex, regex::Error> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut re = String::from("^");
    let mut in_group = false;
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' if chars.get(i + 1) == Some(&'*') => {
                if chars.get(i + 2) == Some(&'/') {
                    re.push_str("(?:[^/]*/)*");
                    i += 3;
                } else {
                    re.push_str(".*");
                    i += 2;
                }
                continue;
            }
            '*' => re.push_str("[^/]*"),
            '?' => re.push_str("[^/]"),
            '{' => {
                re.push_str("(?:");
                in_group = true;
            }
            '}' if in_group => {
                re.push(')');
                in_group = false;
            }
            ',' if in_group => re.push('|'),
            c => re.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
        i += 1;
    }

    if in_group {
        // unbalanced brace, let the regex parser report it
        re.push('(');
    }
    re.push('$');
    Regex::new(&re)
}

fn relative_key(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn walk(
    root: &Path,
    pattern: Option<&Regex>,
    max_depth: Option<usize>,
    implicit_root: bool,
) -> Result<Vec<PathBuf>, DiscoveryError> {
    let mut files = Vec::new();
    let mut walker = WalkDir::new(root).sort_by_file_name();
    if let Some(depth) = max_depth {
        walker = walker.max_depth(depth);
    }

    for entry in walker {
        let entry = entry.map_err(|source| DiscoveryError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if let Some(regex) = pattern {
            if !regex.is_match(&relative_key(relative)) {
                continue;
            }
        }

        if implicit_root {
            files.push(relative.to_path_buf());
        } else {
            files.push(entry.path().to_path_buf());
        }
    }

    Ok(files)
}
