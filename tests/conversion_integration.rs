//! End-to-end conversion tests writing into temporary directories

use std::fs;
use std::path::Path;

use svg_to_ts::output::GENERATED_HEADER;
use svg_to_ts::{convert, ConversionOptions, ConversionType, Delimiter};

fn icons_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("home.svg"),
        "<svg viewBox=\"0 0 24 24\">\n  <path d=\"M3 12l9-9 9 9\"/>\n</svg>\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("search.svg"),
        "<!-- search -->\n<svg viewBox=\"0 0 24 24\"><circle cx=\"11\" cy=\"11\" r=\"8\"/></svg>",
    )
    .unwrap();
    fs::write(dir.path().join("readme.md"), "icons").unwrap();
    dir
}

fn base_options(src: &Path, out: &Path) -> ConversionOptions {
    ConversionOptions::new()
        .with_src_files(vec![format!("{}/*", src.display())])
        .with_output_directory(out)
        .with_delimiter(Delimiter::Camel)
        .with_prefix("icon")
        .with_suffix("")
        .with_interface_name("Icon")
}

#[test]
fn test_constants_conversion() {
    let src = icons_dir();
    let out = tempfile::tempdir().unwrap();
    let options = base_options(src.path(), out.path()).with_type("IconName");

    let report = convert(&options).expect("Should convert");
    assert_eq!(report.icons, 2);
    assert_eq!(report.written, vec![out.path().join("my-icons.ts")]);

    let content = fs::read_to_string(out.path().join("my-icons.ts")).unwrap();
    assert!(content.starts_with(GENERATED_HEADER));
    assert!(content.contains("export interface Icon {\n  name: IconName;\n  data: string;\n}"));
    assert!(content.contains("export type IconName = 'home' | 'search';"));
    assert!(content.contains("export const iconHome: {"));
    assert!(content.contains("export const iconSearch: {"));
    assert!(content
        .contains("data: `<svg viewBox=\"0 0 24 24\"><path d=\"M3 12l9-9 9 9\"/></svg>`"));
    assert!(!content.contains("<!--"));
    assert_eq!(content.matches("export const icon").count(), 2);
}

#[test]
fn test_constants_conversion_with_enum_and_type_object() {
    let src = icons_dir();
    let out = tempfile::tempdir().unwrap();
    let options = base_options(src.path(), out.path())
        .with_type("IconName")
        .with_type_object("IconName")
        .with_enum("IconEnum");

    convert(&options).unwrap();
    let content = fs::read_to_string(out.path().join("my-icons.ts")).unwrap();

    assert!(content.contains("name: IconEnum;"));
    assert!(content.contains("'home': 'home' as IconName,"));
    assert!(content.contains("  HOME = 'home',\n  SEARCH = 'search'\n}"));
}

#[test]
fn test_files_conversion() {
    let src = icons_dir();
    let out = tempfile::tempdir().unwrap();
    let stale = out.path().join("build/removed-icon.ts");
    fs::create_dir_all(stale.parent().unwrap()).unwrap();
    fs::write(&stale, "old").unwrap();

    let mut options = base_options(src.path(), out.path()).with_enum("IconName");
    options.conversion_type = ConversionType::Files;
    let report = convert(&options).unwrap();

    assert!(!stale.exists(), "icons folder is regenerated from scratch");
    assert_eq!(report.written.len(), 5);
    for file in [
        "build/home.ts",
        "build/search.ts",
        "build/my-icons.ts",
        "build/completeIconSet.ts",
        "index.ts",
    ] {
        assert!(out.path().join(file).is_file(), "missing {}", file);
    }

    let home = fs::read_to_string(out.path().join("build/home.ts")).unwrap();
    assert!(home.contains("export const iconHome: {"));
    assert!(!home.contains("iconSearch"));

    let model = fs::read_to_string(out.path().join("build/my-icons.ts")).unwrap();
    assert!(model.contains("export interface Icon {"));
    assert!(model.contains("export enum IconName {"));

    let set = fs::read_to_string(out.path().join("build/completeIconSet.ts")).unwrap();
    assert!(set.contains("import { iconHome } from './home';"));
    assert!(set.contains("export const completeIconSet = [iconHome, iconSearch];"));

    let index = fs::read_to_string(out.path().join("index.ts")).unwrap();
    assert!(index.contains("export * from './build/home';"));
    assert!(index.contains("export * from './build/search';"));
    assert!(index.contains("export * from './build/my-icons';"));
    assert!(index.contains("import { Icon } from './build/my-icons';"));
    assert!(index.contains("export type IconNameSubset<T extends Readonly<Icon[]>>"));
}

#[test]
fn test_files_conversion_without_complete_icon_set() {
    let src = icons_dir();
    let out = tempfile::tempdir().unwrap();
    let mut options = base_options(src.path(), out.path());
    options.conversion_type = ConversionType::Files;
    options.export_complete_icon_set = false;

    let report = convert(&options).unwrap();
    assert_eq!(report.written.len(), 4);
    assert!(!out.path().join("build/completeIconSet.ts").exists());
    let index = fs::read_to_string(out.path().join("index.ts")).unwrap();
    assert!(!index.contains("completeIconSet"));
}

#[test]
fn test_object_conversion() {
    let src = icons_dir();
    let out = tempfile::tempdir().unwrap();
    let mut options = base_options(src.path(), out.path()).with_file_name("icons");
    options.conversion_type = ConversionType::Object;

    convert(&options).unwrap();
    let content = fs::read_to_string(out.path().join("icons.ts")).unwrap();
    assert!(content.contains("export const icons = {\n  'home': `<svg"));
    assert!(!content.contains("export interface"));
}

#[test]
fn test_conversion_from_toml_config() {
    let src = icons_dir();
    let out = tempfile::tempdir().unwrap();
    let config = format!(
        r#"
src_files = ["{src}/*.svg"]
output_directory = "{out}"
prefix = ""
suffix = "icon"
delimiter = "UPPER"
generate_type = true
type_name = "IconName"
file_name = "generated"
"#,
        src = src.path().display(),
        out = out.path().display()
    );
    let config_path = out.path().join("svg-to-ts.toml");
    fs::write(&config_path, config).unwrap();

    let options = ConversionOptions::from_file(&config_path).expect("Should load config");
    convert(&options).unwrap();

    let content = fs::read_to_string(out.path().join("generated.ts")).unwrap();
    assert!(content.contains("export type IconName = 'HOME' | 'SEARCH';"));
    assert!(content.contains("export const homeIcon: {"));
    assert!(content.contains("export const searchIcon: {"));
}

#[test]
fn test_failed_conversion_writes_nothing() {
    let src = icons_dir();
    fs::write(src.path().join("broken.svg"), "<svg><g></svg>").unwrap();
    let out = tempfile::tempdir().unwrap();
    let options = base_options(src.path(), &out.path().join("dist"));

    assert!(convert(&options).is_err());
    assert!(!out.path().join("dist").exists());
}
