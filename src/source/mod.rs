//! Building `SvgDefinition`s from source files
//!
//! Discovery yields candidate paths, every candidate with an `.svg` name is
//! read, optimized and named in parallel, and the definitions come back in
//! discovery order.

pub mod discovery;
pub mod optimizer;
pub mod reader;

pub use discovery::{discover, DiscoveryError};
pub use optimizer::{OptimizeError, OptimizerConfig, SvgOptimizer, XmlOptimizer};
pub use reader::{read_svg_content, ReadError, RetryPolicy};

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::{ConvertError, NameKind};
use crate::naming;
use crate::options::ConversionOptions;

/// One optimized SVG together with the identifiers derived from its name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgDefinition {
    /// File stem, the icon's identity (`arrow-left` for `arrow-left.svg`)
    pub filename_without_ending: String,
    /// Optimized markup
    pub data: String,
    /// Union member / enum value derived with the configured delimiter
    pub type_name: String,
    /// Name of the exported constant
    pub variable_name: String,
    /// Interface the constant conforms to
    pub interface_name: String,
    pub prefix: String,
    pub suffix: String,
}

impl SvgDefinition {
    /// Derive names for `stem` and wrap already optimized `data`
    pub fn new(stem: &str, data: String, options: &ConversionOptions) -> Self {
        Self {
            filename_without_ending: stem.to_string(),
            data,
            type_name: naming::type_name(stem, options.delimiter),
            variable_name: naming::variable_name(&options.prefix, stem, &options.suffix),
            interface_name: options.interface_name.clone(),
            prefix: options.prefix.clone(),
            suffix: options.suffix.clone(),
        }
    }
}

/// Stem of an SVG candidate, `None` for anything that is not an SVG.
///
/// The first `'` is removed from the file name, which is then split on `.`;
/// the second segment must be exactly `svg`.
pub fn svg_stem(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_string_lossy().replacen('\'', "", 1);
    let mut segments = file_name.split('.');
    let stem = segments.next()?;
    (segments.next()? == "svg").then(|| stem.to_string())
}

/// Discover, read and optimize every configured source with the default optimizer
pub fn build_definitions(options: &ConversionOptions) -> Result<Vec<SvgDefinition>, ConvertError> {
    let optimizer = XmlOptimizer::new(options.optimizer.clone());
    build_definitions_with(options, &optimizer)
}

/// Same as [`build_definitions`] with a custom optimizer
pub fn build_definitions_with(
    options: &ConversionOptions,
    optimizer: &dyn SvgOptimizer,
) -> Result<Vec<SvgDefinition>, ConvertError> {
    let paths = discover(&options.src_files)?;
    definitions_from_paths(&paths, options, optimizer)
}

/// Build definitions for already discovered paths.
///
/// Files are processed in parallel; the result keeps the order of `paths`.
/// The first read or optimize failure fails the whole batch.
pub fn definitions_from_paths(
    paths: &[PathBuf],
    options: &ConversionOptions,
    optimizer: &dyn SvgOptimizer,
) -> Result<Vec<SvgDefinition>, ConvertError> {
    let processed = paths
        .par_iter()
        .map(|path| process_file(path, options, optimizer))
        .collect::<Result<Vec<_>, _>>()?;

    let definitions: Vec<SvgDefinition> = processed.into_iter().flatten().collect();
    tracing::debug!(
        candidates = paths.len(),
        definitions = definitions.len(),
        "built svg definitions"
    );

    if options.strict_names {
        ensure_unique_names(&definitions)?;
    }
    Ok(definitions)
}

fn process_file(
    path: &Path,
    options: &ConversionOptions,
    optimizer: &dyn SvgOptimizer,
) -> Result<Option<SvgDefinition>, ConvertError> {
    let Some(stem) = svg_stem(path) else {
        tracing::trace!(path = %path.display(), "skipping non-svg file");
        return Ok(None);
    };

    let raw = read_svg_content(path, &options.retry)?;
    tracing::debug!(path = %path.display(), "optimize svg");
    let data = optimizer.optimize(&raw, path)?;
    Ok(Some(SvgDefinition::new(&stem, data, options)))
}

/// Fail on the first type or variable name produced by two icons
pub fn ensure_unique_names(definitions: &[SvgDefinition]) -> Result<(), ConvertError> {
    let mut type_names: HashMap<&str, &str> = HashMap::new();
    let mut variable_names: HashMap<&str, &str> = HashMap::new();

    for def in definitions {
        let stem = def.filename_without_ending.as_str();
        if let Some(first) = type_names.insert(&def.type_name, stem) {
            return Err(ConvertError::duplicate(NameKind::Type, &def.type_name, first, stem));
        }
        if let Some(first) = variable_names.insert(&def.variable_name, stem) {
            return Err(ConvertError::duplicate(
                NameKind::Variable,
                &def.variable_name,
                first,
                stem,
            ));
        }
    }
    Ok(())
}
