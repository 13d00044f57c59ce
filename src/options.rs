//! Conversion options
//!
//! Options are loaded from a TOML file (every key optional) and can then be
//! adjusted with the `with_*` setters, which is how the command line
//! overrides file values.
//!
//! ```toml
//! src_files = ["icons/**/*.svg"]
//! output_directory = "src/generated"
//! conversion_type = "constants"
//! prefix = "icon"
//! delimiter = "KEBAB"
//! generate_type = true
//!
//! [optimizer]
//! remove_comments = true
//!
//! [retry]
//! attempts = 5
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use crate::source::{OptimizerConfig, RetryPolicy};

/// Errors that can occur when loading or parsing options
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("unknown delimiter '{0}' (expected CAMEL, KEBAB, SNAKE or UPPER)")]
    UnknownDelimiter(String),
    #[error("unknown conversion type '{0}' (expected constants, files or object)")]
    UnknownConversionType(String),
}

/// Naming convention applied to a filename stem to produce its type name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Delimiter {
    Camel,
    Kebab,
    #[default]
    Snake,
    Upper,
}

impl FromStr for Delimiter {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CAMEL" => Ok(Delimiter::Camel),
            "KEBAB" => Ok(Delimiter::Kebab),
            "SNAKE" => Ok(Delimiter::Snake),
            "UPPER" => Ok(Delimiter::Upper),
            _ => Err(OptionsError::UnknownDelimiter(s.to_string())),
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Delimiter::Camel => "CAMEL",
            Delimiter::Kebab => "KEBAB",
            Delimiter::Snake => "SNAKE",
            Delimiter::Upper => "UPPER",
        };
        f.write_str(name)
    }
}

/// Layout of the generated output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionType {
    /// A single file with the interface, types and every constant
    #[default]
    Constants,
    /// One file per icon plus a model file and an index
    Files,
    /// A single object mapping type names to markup
    Object,
}

impl FromStr for ConversionType {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "constants" => Ok(ConversionType::Constants),
            "files" => Ok(ConversionType::Files),
            "object" => Ok(ConversionType::Object),
            _ => Err(OptionsError::UnknownConversionType(s.to_string())),
        }
    }
}

impl fmt::Display for ConversionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConversionType::Constants => "constants",
            ConversionType::Files => "files",
            ConversionType::Object => "object",
        };
        f.write_str(name)
    }
}

/// Complete configuration for one conversion run
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConversionOptions {
    /// Source selectors: files, directories or glob patterns
    pub src_files: Vec<String>,
    /// Directory the generated files are written to
    pub output_directory: PathBuf,
    /// Output layout
    pub conversion_type: ConversionType,

    /// Prefix of every constant name
    pub prefix: String,
    /// Suffix of every constant name
    pub suffix: String,
    /// Naming convention for type names
    pub delimiter: Delimiter,

    /// Interface every generated constant conforms to
    pub interface_name: String,
    /// Name of the union type and type object
    pub type_name: String,
    /// Name of the enum
    pub enum_name: String,
    pub generate_type: bool,
    pub generate_type_object: bool,
    pub generate_enum: bool,

    /// Output base name for the `constants` and `object` layouts
    pub file_name: String,
    /// Exported object name for the `object` layout
    pub object_name: String,
    /// Sub folder holding one file per icon (`files` layout)
    pub icons_folder_name: String,
    /// Base name of the model file (`files` layout)
    pub model_file_name: String,
    pub export_complete_icon_set: bool,
    pub complete_icon_set_name: String,

    /// Fail when two icons end up with the same type or variable name
    pub strict_names: bool,

    pub optimizer: OptimizerConfig,
    pub retry: RetryPolicy,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            src_files: vec!["*.svg".to_string()],
            output_directory: PathBuf::from("./dist"),
            conversion_type: ConversionType::default(),
            prefix: "myIcon".to_string(),
            suffix: String::new(),
            delimiter: Delimiter::default(),
            interface_name: "MyIcon".to_string(),
            type_name: "myIcons".to_string(),
            enum_name: "MyIcons".to_string(),
            generate_type: false,
            generate_type_object: false,
            generate_enum: false,
            file_name: "my-icons".to_string(),
            object_name: "icons".to_string(),
            icons_folder_name: "build".to_string(),
            model_file_name: "my-icons".to_string(),
            export_complete_icon_set: true,
            complete_icon_set_name: "completeIconSet".to_string(),
            strict_names: false,
            optimizer: OptimizerConfig::default(),
            retry: RetryPolicy::default(),
        }
    }
}

impl ConversionOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load options from a TOML string
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(content)?)
    }

    pub fn with_src_files(mut self, src_files: Vec<String>) -> Self {
        self.src_files = src_files;
        self
    }

    pub fn with_output_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_directory = dir.into();
        self
    }

    pub fn with_conversion_type(mut self, conversion_type: ConversionType) -> Self {
        self.conversion_type = conversion_type;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_interface_name(mut self, name: impl Into<String>) -> Self {
        self.interface_name = name.into();
        self
    }

    /// Set the type name and enable the union type
    pub fn with_type(mut self, name: impl Into<String>) -> Self {
        self.type_name = name.into();
        self.generate_type = true;
        self
    }

    /// Set the type name and enable the type object
    pub fn with_type_object(mut self, name: impl Into<String>) -> Self {
        self.type_name = name.into();
        self.generate_type_object = true;
        self
    }

    /// Set the enum name and enable the enum
    pub fn with_enum(mut self, name: impl Into<String>) -> Self {
        self.enum_name = name.into();
        self.generate_enum = true;
        self
    }

    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = name.into();
        self
    }

    pub fn with_strict_names(mut self, strict: bool) -> Self {
        self.strict_names = strict;
        self
    }

    pub fn with_optimizer(mut self, config: OptimizerConfig) -> Self {
        self.optimizer = config;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}
