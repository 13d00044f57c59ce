//! svg-to-ts CLI
//!
//! Usage:
//!   svg-to-ts [OPTIONS] [SRC]...
//!
//! Options are read from `--config` (TOML) first; command line flags
//! override the file.

use std::path::PathBuf;

use clap::Parser;

use svg_to_ts::{
    convert, load_options, ConversionOptions, ConversionType, ConvertError, Delimiter,
};

#[derive(Parser)]
#[command(name = "svg-to-ts")]
#[command(about = "Generate typed TypeScript constants from SVG files")]
struct Cli {
    /// Source files, directories or glob patterns
    src: Vec<String>,

    /// Config file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for the generated files
    #[arg(short, long)]
    output_directory: Option<PathBuf>,

    /// Output layout: constants, files or object
    #[arg(short = 't', long)]
    conversion_type: Option<ConversionType>,

    /// Prefix of every constant name
    #[arg(long)]
    prefix: Option<String>,

    /// Suffix of every constant name
    #[arg(long)]
    suffix: Option<String>,

    /// Naming convention for type names: CAMEL, KEBAB, SNAKE or UPPER
    #[arg(short, long)]
    delimiter: Option<Delimiter>,

    /// Name of the shared interface
    #[arg(long)]
    interface_name: Option<String>,

    /// Name of the union type and type object
    #[arg(long)]
    type_name: Option<String>,

    /// Name of the enum
    #[arg(long)]
    enum_name: Option<String>,

    /// Generate a union type of all icon names
    #[arg(long)]
    generate_type: bool,

    /// Generate an object mapping every icon name to itself
    #[arg(long)]
    generate_type_object: bool,

    /// Generate an enum of all icon names
    #[arg(long)]
    generate_enum: bool,

    /// Output file name (constants and object layouts)
    #[arg(long)]
    file_name: Option<String>,

    /// Fail when two icons get the same type or variable name
    #[arg(long)]
    strict_names: bool,

    /// Log every processed file
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Apply command line overrides on top of file options
    fn apply(self, mut options: ConversionOptions) -> ConversionOptions {
        if !self.src.is_empty() {
            options.src_files = self.src;
        }
        if let Some(dir) = self.output_directory {
            options.output_directory = dir;
        }
        if let Some(conversion_type) = self.conversion_type {
            options.conversion_type = conversion_type;
        }
        if let Some(prefix) = self.prefix {
            options.prefix = prefix;
        }
        if let Some(suffix) = self.suffix {
            options.suffix = suffix;
        }
        if let Some(delimiter) = self.delimiter {
            options.delimiter = delimiter;
        }
        if let Some(name) = self.interface_name {
            options.interface_name = name;
        }
        if let Some(name) = self.type_name {
            options.type_name = name;
        }
        if let Some(name) = self.enum_name {
            options.enum_name = name;
        }
        if let Some(name) = self.file_name {
            options.file_name = name;
        }
        options.generate_type |= self.generate_type;
        options.generate_type_object |= self.generate_type_object;
        options.generate_enum |= self.generate_enum;
        options.strict_names |= self.strict_names;
        options
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), ConvertError> {
    let options = load_options(cli.config.as_deref())?;
    let options = cli.apply(options);
    let report = convert(&options)?;
    for path in &report.written {
        println!("{}", path.display());
    }
    Ok(())
}
