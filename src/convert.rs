//! Conversion runs
//!
//! Builds the definitions once, then lays the generated fragments out on
//! disk according to the configured [`ConversionType`].

use std::path::{Path, PathBuf};

use crate::error::ConvertError;
use crate::generator;
use crate::options::{ConversionOptions, ConversionType};
use crate::output::{assemble, delete_folder, write_file};
use crate::source::{build_definitions, build_definitions_with, SvgDefinition, SvgOptimizer};

/// What a conversion run produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    /// Number of icons converted
    pub icons: usize,
    /// Every file written, in write order
    pub written: Vec<PathBuf>,
}

/// Options from an optional TOML file, defaults when there is none
pub fn load_options(config: Option<&Path>) -> Result<ConversionOptions, ConvertError> {
    match config {
        Some(path) => Ok(ConversionOptions::from_file(path)?),
        None => Ok(ConversionOptions::default()),
    }
}

/// Run a complete conversion with the default optimizer
pub fn convert(options: &ConversionOptions) -> Result<ConversionReport, ConvertError> {
    let definitions = build_definitions(options)?;
    write_output(options, &definitions)
}

/// Run a complete conversion with a custom optimizer
pub fn convert_with(
    options: &ConversionOptions,
    optimizer: &dyn SvgOptimizer,
) -> Result<ConversionReport, ConvertError> {
    let definitions = build_definitions_with(options, optimizer)?;
    write_output(options, &definitions)
}

/// Write already built definitions according to `options.conversion_type`
pub fn write_output(
    options: &ConversionOptions,
    definitions: &[SvgDefinition],
) -> Result<ConversionReport, ConvertError> {
    tracing::info!(
        icons = definitions.len(),
        conversion_type = %options.conversion_type,
        output = %options.output_directory.display(),
        "generating"
    );

    let written = match options.conversion_type {
        ConversionType::Constants => write_constants(options, definitions)?,
        ConversionType::Files => write_files(options, definitions)?,
        ConversionType::Object => write_object(options, definitions)?,
    };

    tracing::info!(files = written.len(), "done");
    Ok(ConversionReport {
        icons: definitions.len(),
        written,
    })
}

/// Interface, type and enum fragments shared by the constants file and the model file
fn model_fragments(options: &ConversionOptions, definitions: &[SvgDefinition]) -> Vec<String> {
    vec![
        generator::interface_definition(options),
        generator::type_definition(options, definitions),
        generator::enum_definition(options, definitions),
    ]
}

/// Source of the single file written in the `constants` layout
pub fn constants_file(options: &ConversionOptions, definitions: &[SvgDefinition]) -> String {
    let mut fragments = model_fragments(options, definitions);
    fragments.extend(definitions.iter().map(generator::definition_constant));
    assemble(&fragments)
}

fn write_constants(
    options: &ConversionOptions,
    definitions: &[SvgDefinition],
) -> Result<Vec<PathBuf>, ConvertError> {
    let content = constants_file(options, definitions);
    let path = write_file(&options.output_directory, &options.file_name, &content)?;
    Ok(vec![path])
}

/// Source of the index file written in the `files` layout
pub fn index_file(options: &ConversionOptions, definitions: &[SvgDefinition]) -> String {
    let folder = Some(options.icons_folder_name.as_str());
    let mut exports: Vec<String> = definitions
        .iter()
        .map(|def| generator::export_statement(&def.filename_without_ending, folder))
        .collect();
    exports.push(generator::export_statement(&options.model_file_name, folder));
    if options.export_complete_icon_set {
        exports.push(generator::export_statement(
            &options.complete_icon_set_name,
            folder,
        ));
    }

    assemble(&[
        exports.join("\n"),
        generator::type_helper_with_import(
            &options.interface_name,
            &options.icons_folder_name,
            &options.model_file_name,
        ),
    ])
}

fn write_files(
    options: &ConversionOptions,
    definitions: &[SvgDefinition],
) -> Result<Vec<PathBuf>, ConvertError> {
    let icons_dir = options.output_directory.join(&options.icons_folder_name);
    delete_folder(&icons_dir)?;

    let mut written = Vec::with_capacity(definitions.len() + 3);
    for def in definitions {
        let constant = generator::definition_constant(def);
        written.push(write_file(&icons_dir, &def.filename_without_ending, &constant)?);
    }

    let model = assemble(&model_fragments(options, definitions));
    written.push(write_file(&icons_dir, &options.model_file_name, &model)?);

    if options.export_complete_icon_set {
        let set = generator::complete_icon_set(&options.complete_icon_set_name, definitions);
        written.push(write_file(
            &icons_dir,
            &options.complete_icon_set_name,
            &set,
        )?);
    }

    let index = index_file(options, definitions);
    written.push(write_file(&options.output_directory, "index", &index)?);
    Ok(written)
}

/// Source of the single file written in the `object` layout
pub fn object_file(options: &ConversionOptions, definitions: &[SvgDefinition]) -> String {
    assemble(&[
        generator::type_definition(options, definitions),
        generator::svg_object(&options.object_name, definitions),
    ])
}

fn write_object(
    options: &ConversionOptions,
    definitions: &[SvgDefinition],
) -> Result<Vec<PathBuf>, ConvertError> {
    let content = object_file(options, definitions);
    let path = write_file(&options.output_directory, &options.file_name, &content)?;
    Ok(vec![path])
}
