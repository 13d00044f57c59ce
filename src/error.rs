//! Error types for the conversion pipeline

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::options::OptionsError;
use crate::source::{DiscoveryError, OptimizeError, ReadError};

/// Which generated identifier collided
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Type,
    Variable,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::Type => f.write_str("type name"),
            NameKind::Variable => f.write_str("variable name"),
        }
    }
}

/// A generated file could not be written
#[derive(Debug, Error)]
#[error("failed to write '{}': {source}", path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Errors that can occur during a conversion run
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Invalid or unreadable configuration
    #[error("configuration error: {0}")]
    Options(#[from] OptionsError),

    /// Source selectors could not be resolved
    #[error("discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    /// A source file could not be read
    #[error("read error: {0}")]
    Read(#[from] ReadError),

    /// A source file is not valid SVG markup
    #[error("optimize error: {0}")]
    Optimize(#[from] OptimizeError),

    /// Two icons produced the same identifier (only with `strict_names`)
    #[error("duplicate {kind} '{name}' generated from '{first}' and '{second}'")]
    DuplicateName {
        kind: NameKind,
        name: String,
        first: String,
        second: String,
    },

    /// Output could not be written
    #[error("write error: {0}")]
    Write(#[from] WriteError),
}

impl ConvertError {
    /// Create a duplicate name error
    pub fn duplicate(kind: NameKind, name: &str, first: &str, second: &str) -> Self {
        Self::DuplicateName {
            kind,
            name: name.to_string(),
            first: first.to_string(),
            second: second.to_string(),
        }
    }
}
