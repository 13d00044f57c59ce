//! SVG markup optimization
//!
//! The optimizer is a seam: the builder only needs something that turns raw
//! markup into smaller markup. [`XmlOptimizer`] is the streaming
//! implementation used by default; it removes content that never renders
//! (declarations, comments, metadata, editor data) and whitespace between
//! elements.

use std::path::{Path, PathBuf};

use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use serde::Deserialize;
use thiserror::Error;

/// Optimizer rejected the input markup
#[derive(Debug, Error)]
#[error("failed to optimize '{}': {message}", path.display())]
pub struct OptimizeError {
    pub path: PathBuf,
    pub message: String,
}

impl OptimizeError {
    pub fn new(path: &Path, message: impl Into<String>) -> Self {
        Self {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}

/// Turns raw SVG markup into optimized markup
pub trait SvgOptimizer: Sync {
    /// `path` is only a hint used for error messages
    fn optimize(&self, svg: &str, path: &Path) -> Result<String, OptimizeError>;
}

/// Which optimizations [`XmlOptimizer`] applies
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptimizerConfig {
    /// Remove `<?xml ... ?>`
    pub remove_xml_declaration: bool,
    /// Remove `<!DOCTYPE ...>`
    pub remove_doctype: bool,
    /// Remove `<!-- ... -->`
    pub remove_comments: bool,
    /// Remove processing instructions other than the XML declaration
    pub remove_processing_instructions: bool,
    /// Remove `<metadata>` elements with their content
    pub remove_metadata: bool,
    /// Remove Inkscape/Sodipodi elements and attributes
    pub remove_editor_data: bool,
    /// Drop whitespace-only text between elements
    pub collapse_whitespace: bool,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            remove_xml_declaration: true,
            remove_doctype: true,
            remove_comments: true,
            remove_processing_instructions: true,
            remove_metadata: true,
            remove_editor_data: true,
            collapse_whitespace: true,
        }
    }
}

impl OptimizerConfig {
    /// A configuration that keeps everything
    pub fn passthrough() -> Self {
        Self {
            remove_xml_declaration: false,
            remove_doctype: false,
            remove_comments: false,
            remove_processing_instructions: false,
            remove_metadata: false,
            remove_editor_data: false,
            collapse_whitespace: false,
        }
    }
}

const EDITOR_PREFIXES: [&[u8]; 2] = [b"sodipodi:", b"inkscape:"];
const EDITOR_NAMESPACES: [&[u8]; 2] = [b"xmlns:sodipodi", b"xmlns:inkscape"];

fn is_editor_name(name: &[u8]) -> bool {
    EDITOR_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

fn is_editor_attribute(key: &[u8]) -> bool {
    is_editor_name(key) || EDITOR_NAMESPACES.contains(&key)
}

/// Streaming optimizer built on quick-xml
#[derive(Debug, Clone, Default)]
pub struct XmlOptimizer {
    config: OptimizerConfig,
}

impl XmlOptimizer {
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    fn skip_element(&self, elem: &BytesStart<'_>) -> bool {
        let name = elem.name();
        (self.config.remove_metadata && name.as_ref() == b"metadata")
            || (self.config.remove_editor_data && is_editor_name(name.as_ref()))
    }

    fn clean_start(
        &self,
        elem: BytesStart<'_>,
        path: &Path,
    ) -> Result<BytesStart<'static>, OptimizeError> {
        let has_editor_attributes = elem
            .attributes()
            .flatten()
            .any(|attr| is_editor_attribute(attr.key.as_ref()));
        if !self.config.remove_editor_data || !has_editor_attributes {
            return Ok(elem.into_owned());
        }

        // rebuilt elements always use double quotes
        let name = String::from_utf8_lossy(elem.name().as_ref()).into_owned();
        let mut cleaned = BytesStart::new(name);
        for attr in elem.attributes() {
            let attr = attr.map_err(|e| OptimizeError::new(path, e.to_string()))?;
            if !is_editor_attribute(attr.key.as_ref()) {
                cleaned.push_attribute(attr);
            }
        }
        Ok(cleaned)
    }
}

impl SvgOptimizer for XmlOptimizer {
    fn optimize(&self, svg: &str, path: &Path) -> Result<String, OptimizeError> {
        let mut reader = Reader::from_str(svg);
        let mut writer = Writer::new(Vec::with_capacity(svg.len()));
        let mut depth = 0usize;
        let mut seen_element = false;

        loop {
            let event = reader.read_event().map_err(|e| {
                OptimizeError::new(
                    path,
                    format!("XML error at position {}: {}", reader.error_position(), e),
                )
            })?;

            let output = match event {
                Event::Eof => break,
                Event::Start(elem) => {
                    seen_element = true;
                    if self.skip_element(&elem) {
                        let end = elem.to_end().into_owned();
                        reader
                            .read_to_end(end.name())
                            .map_err(|e| OptimizeError::new(path, e.to_string()))?;
                        continue;
                    }
                    depth += 1;
                    Event::Start(self.clean_start(elem, path)?)
                }
                Event::Empty(elem) => {
                    seen_element = true;
                    if self.skip_element(&elem) {
                        continue;
                    }
                    Event::Empty(self.clean_start(elem, path)?)
                }
                Event::End(elem) => {
                    depth = depth.saturating_sub(1);
                    Event::End(elem)
                }
                Event::Text(text)
                    if self.config.collapse_whitespace
                        && text.iter().all(u8::is_ascii_whitespace) =>
                {
                    continue;
                }
                Event::Decl(_) if self.config.remove_xml_declaration => continue,
                Event::DocType(_) if self.config.remove_doctype => continue,
                Event::Comment(_) if self.config.remove_comments => continue,
                Event::PI(_) if self.config.remove_processing_instructions => continue,
                other => other,
            };

            writer
                .write_event(output)
                .map_err(|e| OptimizeError::new(path, e.to_string()))?;
        }

        if !seen_element {
            return Err(OptimizeError::new(path, "document contains no element"));
        }
        if depth != 0 {
            return Err(OptimizeError::new(path, "unclosed element at end of document"));
        }

        String::from_utf8(writer.into_inner()).map_err(|e| OptimizeError::new(path, e.to_string()))
    }
}
