//! svg-to-ts - typed TypeScript constants from SVG files
//!
//! This library discovers SVG files, optimizes their markup and generates
//! TypeScript source exposing every icon as a constant with a typed `name`,
//! together with optional union types, type objects and enums.
//!
//! # Example
//!
//! ```rust
//! use svg_to_ts::{generator, ConversionOptions, Delimiter, SvgDefinition};
//!
//! let options = ConversionOptions::new()
//!     .with_delimiter(Delimiter::Camel)
//!     .with_prefix("icon")
//!     .with_type("IconName");
//!
//! let home = SvgDefinition::new("home", "<svg/>".to_string(), &options);
//! assert_eq!(home.variable_name, "iconHome");
//!
//! let union = generator::type_definition(&options, &[home]);
//! assert_eq!(union, "export type IconName = 'home';");
//! ```

pub mod convert;
pub mod error;
pub mod generator;
pub mod naming;
pub mod options;
pub mod output;
pub mod source;

pub use convert::{convert, convert_with, load_options, write_output, ConversionReport};
pub use error::{ConvertError, NameKind, WriteError};
pub use options::{ConversionOptions, ConversionType, Delimiter, OptionsError};
pub use source::{
    build_definitions, build_definitions_with, definitions_from_paths, OptimizerConfig,
    RetryPolicy, SvgDefinition, SvgOptimizer, XmlOptimizer,
};
