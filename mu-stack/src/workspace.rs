//! Mufile discovery.

use std::path::{Path, PathBuf};

use crate::Syntax;

/// Base name of every Mufile; the extension selects its syntax.
pub const MUFILE: &str = "Mufile";

/// Locate the Mufile for `path`.
///
/// If `path` is a file it is used as-is. If it is a directory, that directory
/// and then each of its parents is searched for `Mufile.toml` or
/// `Mufile.json` (in that order). Returns `None` when nothing is found.
pub fn detect_mufile(path: impl AsRef<Path>) -> Option<PathBuf> {
    let path = path.as_ref();
    if path.is_file() {
        return Some(path.to_path_buf());
    }
    if !path.is_dir() {
        return None;
    }

    path.ancestors().find_map(mufile_in)
}

/// The Mufile directly inside `dir`, if any.
pub fn mufile_in(dir: &Path) -> Option<PathBuf> {
    Syntax::ALL
        .iter()
        .map(|syntax| dir.join(format!("{}{}", MUFILE, syntax.extension())))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Mufile.json"), "{}").unwrap();

        assert_eq!(
            detect_mufile(dir.path()),
            Some(dir.path().join("Mufile.json"))
        );
    }

    #[test]
    fn test_detect_prefers_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Mufile.json"), "{}").unwrap();
        std::fs::write(dir.path().join("Mufile.toml"), "").unwrap();

        assert_eq!(
            detect_mufile(dir.path()),
            Some(dir.path().join("Mufile.toml"))
        );
    }

    #[test]
    fn test_detect_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("services").join("web");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(dir.path().join("Mufile.toml"), "").unwrap();

        assert_eq!(detect_mufile(&nested), Some(dir.path().join("Mufile.toml")));
    }

    #[test]
    fn test_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("custom.toml");
        std::fs::write(&file, "").unwrap();

        assert_eq!(detect_mufile(&file), Some(file));
    }

    #[test]
    fn test_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(detect_mufile(dir.path().join("nope")), None);
    }
}
