//! TypeScript snippet generation
//!
//! Every function here is pure and returns one self-contained fragment.
//! Callers concatenate fragments into files; see [`crate::convert`].

use crate::naming;
use crate::options::ConversionOptions;
use crate::source::SvgDefinition;

/// Type of the `name` field in the generated interface.
///
/// Precedence, highest first: the enum when `generate_enum` is set, then the
/// union/type-object name when `generate_type` or `generate_type_object` is
/// set, otherwise plain `string`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameType<'a> {
    Enum(&'a str),
    Alias(&'a str),
    String,
}

impl<'a> NameType<'a> {
    pub fn resolve(options: &'a ConversionOptions) -> Self {
        if options.generate_enum {
            NameType::Enum(&options.enum_name)
        } else if options.generate_type || options.generate_type_object {
            NameType::Alias(&options.type_name)
        } else {
            NameType::String
        }
    }

    pub fn as_str(&self) -> &'a str {
        match *self {
            NameType::Enum(name) | NameType::Alias(name) => name,
            NameType::String => "string",
        }
    }
}

/// Wrap `entries` in `open`/`close`, one indented entry per line
fn block(open: &str, entries: &[String], separator: &str, close: &str) -> String {
    if entries.is_empty() {
        return format!("{}{}", open, close);
    }
    let body = entries
        .iter()
        .map(|entry| format!("  {}", entry))
        .collect::<Vec<_>>()
        .join(&format!("{}\n", separator));
    format!("{}\n{}\n{}", open, body, close)
}

/// `export interface <Interface> { name: ...; data: string; }`
pub fn interface_definition(options: &ConversionOptions) -> String {
    let name_type = NameType::resolve(options);
    format!(
        "export interface {} {{\n  name: {};\n  data: string;\n}}",
        options.interface_name,
        name_type.as_str()
    )
}

/// Union type and/or type object, empty when neither is enabled
pub fn type_definition(options: &ConversionOptions, definitions: &[SvgDefinition]) -> String {
    let mut fragments = Vec::new();

    if options.generate_type {
        let members = if definitions.is_empty() {
            "never".to_string()
        } else {
            definitions
                .iter()
                .map(|def| format!("'{}'", def.type_name))
                .collect::<Vec<_>>()
                .join(" | ")
        };
        fragments.push(format!("export type {} = {};", options.type_name, members));
    }

    if options.generate_type_object {
        let annotation = if options.generate_type {
            format!(" as {}", options.type_name)
        } else {
            String::new()
        };
        let entries: Vec<String> = definitions
            .iter()
            .map(|def| format!("'{0}': '{0}'{1}", def.type_name, annotation))
            .collect();
        fragments.push(block(
            &format!("export const {} = {{", options.type_name),
            &entries,
            ",",
            "};",
        ));
    }

    fragments.join("\n")
}

/// Enum keyed by the upper snake case of each type name, empty unless enabled
pub fn enum_definition(options: &ConversionOptions, definitions: &[SvgDefinition]) -> String {
    if !options.generate_enum {
        return String::new();
    }
    let members: Vec<String> = definitions
        .iter()
        .map(|def| format!("{} = '{}'", naming::enum_key(&def.type_name), def.type_name))
        .collect();
    block(
        &format!("export enum {} {{", options.enum_name),
        &members,
        ",",
        "}",
    )
}

/// Exported constant for one icon; `data` is embedded verbatim in a template literal
pub fn svg_constant(variable_name: &str, filename_without_ending: &str, data: &str) -> String {
    format!(
        "export const {variable_name}: {{\n  name: '{filename_without_ending}';\n  data: string;\n}} = {{\n  name: '{filename_without_ending}',\n  data: `{data}`\n}};"
    )
}

/// [`svg_constant`] for a definition
pub fn definition_constant(definition: &SvgDefinition) -> String {
    svg_constant(
        &definition.variable_name,
        &definition.filename_without_ending,
        &definition.data,
    )
}

/// `export * from './<folder>/<file>';`
pub fn export_statement(file_name: &str, generated_icons_folder: Option<&str>) -> String {
    match generated_icons_folder {
        Some(folder) => format!("export * from './{}/{}';", folder, file_name),
        None => format!("export * from './{}';", file_name),
    }
}

/// `import { <name> } from '<module>';` followed by a newline
pub fn named_import_statement(name: &str, module: &str) -> String {
    format!("import {{ {} }} from '{}';\n", name, module)
}

/// Narrows a readonly array of icons to the union of their names
pub fn type_helper(interface_name: &str) -> String {
    format!(
        "export type {0}NameSubset<T extends Readonly<{0}[]>> = T[number]['name'];",
        interface_name
    )
}

/// [`type_helper`] preceded by an import of the interface from the model file
pub fn type_helper_with_import(
    interface_name: &str,
    icons_folder_name: &str,
    model_file_name: &str,
) -> String {
    format!(
        "{}\n{}",
        named_import_statement(
            interface_name,
            &format!("./{}/{}", icons_folder_name, model_file_name)
        ),
        type_helper(interface_name)
    )
}

/// Array of every icon constant, importing each from `./<file>`
pub fn complete_icon_set(set_name: &str, definitions: &[SvgDefinition]) -> String {
    let imports: String = definitions
        .iter()
        .map(|def| {
            named_import_statement(
                &def.variable_name,
                &format!("./{}", def.filename_without_ending),
            )
        })
        .collect();
    let names = definitions
        .iter()
        .map(|def| def.variable_name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{}\nexport const {} = [{}];", imports, set_name, names)
}

/// Object mapping each type name to its markup
pub fn svg_object(object_name: &str, definitions: &[SvgDefinition]) -> String {
    let entries: Vec<String> = definitions
        .iter()
        .map(|def| format!("'{}': `{}`", def.type_name, def.data))
        .collect();
    block(
        &format!("export const {} = {{", object_name),
        &entries,
        ",",
        "};",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Delimiter;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    fn definitions(options: &ConversionOptions, stems: &[&str]) -> Vec<SvgDefinition> {
        stems
            .iter()
            .map(|stem| SvgDefinition::new(stem, format!("<svg id=\"{}\"/>", stem), options))
            .collect()
    }

    fn camel() -> ConversionOptions {
        ConversionOptions::new()
            .with_delimiter(Delimiter::Camel)
            .with_prefix("icon")
            .with_interface_name("Icon")
    }

    #[test]
    fn test_interface_with_plain_string_name() {
        let options = camel();
        assert_eq!(
            interface_definition(&options),
            "export interface Icon {\n  name: string;\n  data: string;\n}"
        );
    }

    #[test]
    fn test_interface_uses_type_name() {
        let options = camel().with_type("IconName");
        assert!(interface_definition(&options).contains("name: IconName;"));

        let options = camel().with_type_object("IconName");
        assert!(interface_definition(&options).contains("name: IconName;"));
    }

    #[test]
    fn test_enum_takes_precedence_over_type() {
        let options = camel().with_type("IconName").with_enum("IconEnum");
        assert_eq!(NameType::resolve(&options), NameType::Enum("IconEnum"));
        assert!(interface_definition(&options).contains("name: IconEnum;"));
    }

    #[test]
    fn test_type_fragment_empty_when_disabled() {
        let options = camel();
        let defs = definitions(&options, &["home"]);
        assert_eq!(type_definition(&options, &defs), "");
        assert_eq!(enum_definition(&options, &defs), "");
    }

    #[test]
    fn test_union_type_in_order() {
        let options = camel().with_type("IconName");
        let defs = definitions(&options, &["search", "home", "arrow-left"]);
        assert_snapshot!(
            type_definition(&options, &defs),
            @"export type IconName = 'search' | 'home' | 'arrowLeft';"
        );
    }

    #[test]
    fn test_union_type_single_member_has_no_separator() {
        let options = camel().with_type("IconName");
        let defs = definitions(&options, &["home"]);
        assert_eq!(
            type_definition(&options, &defs),
            "export type IconName = 'home';"
        );
    }

    #[test]
    fn test_union_type_without_definitions() {
        let options = camel().with_type("IconName");
        assert_eq!(
            type_definition(&options, &[]),
            "export type IconName = never;"
        );
    }

    #[test]
    fn test_type_object_without_union() {
        let options = camel().with_type_object("IconName");
        let defs = definitions(&options, &["home", "search"]);
        assert_eq!(
            type_definition(&options, &defs),
            "export const IconName = {\n  'home': 'home',\n  'search': 'search'\n};"
        );
    }

    #[test]
    fn test_type_and_type_object_together() {
        let options = camel().with_type("IconName").with_type_object("IconName");
        let defs = definitions(&options, &["home", "search"]);
        assert_eq!(
            type_definition(&options, &defs),
            "export type IconName = 'home' | 'search';\n\
             export const IconName = {\n  \
             'home': 'home' as IconName,\n  \
             'search': 'search' as IconName\n\
             };"
        );
    }

    #[test]
    fn test_enum_members() {
        let options = camel().with_enum("IconName");
        let defs = definitions(&options, &["arrow-left", "arrow-right"]);
        assert_eq!(
            enum_definition(&options, &defs),
            "export enum IconName {\n  ARROW_LEFT = 'arrowLeft',\n  ARROW_RIGHT = 'arrowRight'\n}"
        );
    }

    #[test]
    fn test_enum_without_definitions() {
        let options = camel().with_enum("IconName");
        assert_eq!(enum_definition(&options, &[]), "export enum IconName {}");
    }

    #[test]
    fn test_constant_embeds_data_verbatim() {
        let data = r#"<svg viewBox="0 0 24 24"><path d='M0 0'/></svg>"#;
        let constant = svg_constant("iconHome", "home", data);
        assert_eq!(
            constant,
            format!(
                "export const iconHome: {{\n  name: 'home';\n  data: string;\n}} = {{\n  name: 'home',\n  data: `{}`\n}};",
                data
            )
        );
        assert!(constant.contains(data));
    }

    #[test]
    fn test_definition_constant() {
        let options = camel();
        let defs = definitions(&options, &["arrow-left"]);
        let constant = definition_constant(&defs[0]);
        assert!(constant.starts_with("export const iconArrowLeft: {"));
        assert!(constant.contains("name: 'arrow-left',"));
    }

    #[test]
    fn test_export_statements() {
        assert_snapshot!(export_statement("home", None), @"export * from './home';");
        assert_snapshot!(
            export_statement("home", Some("build")),
            @"export * from './build/home';"
        );
    }

    #[test]
    fn test_named_import() {
        assert_eq!(
            named_import_statement("Icon", "./build/my-icons"),
            "import { Icon } from './build/my-icons';\n"
        );
    }

    #[test]
    fn test_type_helper() {
        assert_snapshot!(
            type_helper("Icon"),
            @"export type IconNameSubset<T extends Readonly<Icon[]>> = T[number]['name'];"
        );
        assert_eq!(
            type_helper_with_import("Icon", "build", "model"),
            "import { Icon } from './build/model';\n\n\
             export type IconNameSubset<T extends Readonly<Icon[]>> = T[number]['name'];"
        );
    }

    #[test]
    fn test_complete_icon_set() {
        let options = camel();
        let defs = definitions(&options, &["home", "search"]);
        assert_eq!(
            complete_icon_set("completeIconSet", &defs),
            "import { iconHome } from './home';\n\
             import { iconSearch } from './search';\n\
             \n\
             export const completeIconSet = [iconHome, iconSearch];"
        );
    }

    #[test]
    fn test_svg_object() {
        let options = camel();
        let defs = definitions(&options, &["home", "search"]);
        assert_eq!(
            svg_object("icons", &defs),
            "export const icons = {\n  'home': `<svg id=\"home\"/>`,\n  'search': `<svg id=\"search\"/>`\n};"
        );
    }

    #[test]
    fn test_generation_is_deterministic() {
        let options = camel().with_type("IconName").with_enum("IconEnum");
        let defs = definitions(&options, &["home", "search"]);
        assert_eq!(
            type_definition(&options, &defs),
            type_definition(&options, &defs)
        );
        assert_eq!(
            enum_definition(&options, &defs),
            enum_definition(&options, &defs)
        );
    }
}
