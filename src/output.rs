//! Writing generated files

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::WriteError;

/// First line of every generated file
pub const GENERATED_HEADER: &str = "/* this file was generated by svg-to-ts, do not edit */";

/// Extension of generated files
pub const EXTENSION: &str = "ts";

fn write_error(path: &Path) -> impl FnOnce(std::io::Error) -> WriteError + '_ {
    move |source| WriteError {
        path: path.to_path_buf(),
        source,
    }
}

/// Header, content and exactly one trailing newline
pub fn with_header(content: &str) -> String {
    format!("{}\n{}\n", GENERATED_HEADER, content.trim_end())
}

/// Write `<dir>/<base_name>.ts`, creating `dir` if needed
pub fn write_file(dir: &Path, base_name: &str, content: &str) -> Result<PathBuf, WriteError> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(write_error(dir))?;
    }
    let path = dir.join(format!("{}.{}", base_name, EXTENSION));
    fs::write(&path, with_header(content)).map_err(write_error(&path))?;
    tracing::debug!(path = %path.display(), "wrote file");
    Ok(path)
}

/// Remove `dir` and everything in it; missing directories are fine
pub fn delete_folder(dir: &Path) -> Result<(), WriteError> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(write_error(dir))?;
        tracing::debug!(path = %dir.display(), "removed folder");
    }
    Ok(())
}

/// Join non-empty fragments with a blank line between them
pub fn assemble<S: AsRef<str>>(fragments: &[S]) -> String {
    fragments
        .iter()
        .map(|f| f.as_ref().trim())
        .filter(|f| !f.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_header() {
        assert_eq!(
            with_header("export const a = 1;\n\n"),
            format!("{}\nexport const a = 1;\n", GENERATED_HEADER)
        );
    }

    #[test]
    fn test_assemble_skips_empty_fragments() {
        let fragments = ["export type A = 'a';", "", "  ", "export const a = 1;"];
        assert_eq!(
            assemble(&fragments),
            "export type A = 'a';\n\nexport const a = 1;"
        );
    }

    #[test]
    fn test_write_file_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested/out");

        let path = write_file(&target, "icons", "export const a = 1;").unwrap();
        assert_eq!(path, target.join("icons.ts"));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with(GENERATED_HEADER));
        assert!(written.ends_with("export const a = 1;\n"));
    }

    #[test]
    fn test_delete_folder() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("build");
        write_file(&target.join("deep"), "a", "x").unwrap();

        delete_folder(&target).unwrap();
        assert!(!target.exists());
        // second call is a no-op
        delete_folder(&target).unwrap();
    }
}
