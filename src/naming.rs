//! Naming conventions for generated identifiers
//!
//! Turns a filename stem such as `arrow-left` into the member name used in
//! unions and enums (`arrowLeft`, `arrow_left`, ...) and into the constant
//! identifier (`myIconArrowLeft`).

use crate::options::Delimiter;

/// Split a raw stem into words.
///
/// Apostrophes are dropped before splitting (`don't` is one word).
/// Boundaries are any other non-alphanumeric character, a lower to upper case
/// transition, the last capital of an upper-case run that is followed by a
/// lower-case letter (`XMLHttp` -> `XML`, `Http`) and letter/digit
/// transitions.
pub fn words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input
        .chars()
        .filter(|c| !matches!(c, '\'' | '\u{2019}'))
        .collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() {
            let prev = chars[i - 1];
            let next = chars.get(i + 1).copied();
            let boundary = (prev.is_lowercase() && c.is_uppercase())
                || (prev.is_numeric() != c.is_numeric())
                || (prev.is_uppercase()
                    && c.is_uppercase()
                    && next.is_some_and(|n| n.is_lowercase()));
            if boundary {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Upper-case the first character, leave the rest untouched
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn capitalize_word(word: &str) -> String {
    capitalize(&word.to_lowercase())
}

/// `arrow-left` -> `arrowLeft`
pub fn camel_case(input: &str) -> String {
    words(input)
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                word.to_lowercase()
            } else {
                capitalize_word(word)
            }
        })
        .collect()
}

/// `arrowLeft` -> `arrow-left`
pub fn kebab_case(input: &str) -> String {
    join_words(input, "-", str::to_lowercase)
}

/// `arrowLeft` -> `arrow_left`
pub fn snake_case(input: &str) -> String {
    join_words(input, "_", str::to_lowercase)
}

/// `arrowLeft` -> `ARROW_LEFT`
pub fn upper_snake_case(input: &str) -> String {
    join_words(input, "_", str::to_uppercase)
}

fn join_words(input: &str, separator: &str, case: fn(&str) -> String) -> String {
    words(input)
        .iter()
        .map(|w| case(w))
        .collect::<Vec<_>>()
        .join(separator)
}

/// Name used as union member, type-object key and enum value
pub fn type_name(stem: &str, delimiter: Delimiter) -> String {
    match delimiter {
        Delimiter::Camel => camel_case(stem),
        Delimiter::Kebab => kebab_case(stem),
        Delimiter::Snake => snake_case(stem),
        Delimiter::Upper => upper_snake_case(stem),
    }
}

/// Identifier of the exported constant.
///
/// The stem is camel-cased. A non-empty prefix is prepended and the stem's
/// first letter capitalized; a non-empty suffix is appended capitalized.
pub fn variable_name(prefix: &str, stem: &str, suffix: &str) -> String {
    let camel = camel_case(stem);
    let mut name = if prefix.is_empty() {
        camel
    } else {
        format!("{}{}", prefix, capitalize(&camel))
    };
    if !suffix.is_empty() {
        name.push_str(&capitalize(suffix));
    }
    name
}

/// Enum member key for a type name (`arrowLeft` -> `ARROW_LEFT`)
pub fn enum_key(type_name: &str) -> String {
    upper_snake_case(type_name)
}
