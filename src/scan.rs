//! Source directory scanning.
//!
//! Lists the regular files of a single directory (no recursion) and keeps
//! those whose extension, case-insensitively, is a recognized photograph
//! format. Subdirectories and non-matching files are ignored silently.
//!
//! The allow-list is wider than the set of formats we can decode: HEIC and
//! HEIF are accepted here so that camera exports show up in the run at all —
//! they fail at decode time and surface as per-file `error` outcomes rather
//! than vanishing without a trace.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Extensions recognized as source photographs (compared case-insensitively).
pub const SOURCE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "webp", "heic", "heif", "tif", "tiff",
];

/// Whether a path carries a recognized source-photo extension.
pub fn is_source_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            SOURCE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

/// List the source photographs in `dir`, in directory-listing order.
///
/// The order is whatever the filesystem yields — callers must not rely on it
/// being stable across runs. Fails only when the directory itself cannot be
/// read; unreadable entries within it are skipped.
pub fn scan(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for entry in fs::read_dir(dir)? {
        let Ok(entry) = entry else { continue };
        let path = entry.path();
        if path.is_file() && is_source_image(&path) {
            sources.push(path);
        }
    }
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn recognizes_all_listed_extensions() {
        for ext in SOURCE_EXTENSIONS {
            assert!(is_source_image(Path::new(&format!("photo.{ext}"))));
        }
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        assert!(is_source_image(Path::new("IMG_0001.JPG")));
        assert!(is_source_image(Path::new("scan.TIFF")));
        assert!(is_source_image(Path::new("export.HeIc")));
    }

    #[test]
    fn rejects_unknown_and_missing_extensions() {
        assert!(!is_source_image(Path::new("notes.txt")));
        assert!(!is_source_image(Path::new("archive.zip")));
        assert!(!is_source_image(Path::new("README")));
        assert!(!is_source_image(Path::new(".hidden")));
    }

    #[test]
    fn scan_keeps_only_image_files() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.jpg"), "x").unwrap();
        fs::write(tmp.path().join("b.PNG"), "x").unwrap();
        fs::write(tmp.path().join("c.txt"), "x").unwrap();
        fs::write(tmp.path().join("d.heic"), "x").unwrap();

        let mut names: Vec<String> = scan(tmp.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        names.sort();
        assert_eq!(names, vec!["a.jpg", "b.PNG", "d.heic"]);
    }

    #[test]
    fn scan_ignores_subdirectories() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("small")).unwrap();
        fs::write(tmp.path().join("small").join("nested.jpg"), "x").unwrap();
        fs::write(tmp.path().join("top.jpg"), "x").unwrap();

        let sources = scan(tmp.path()).unwrap();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].file_name().unwrap(), "top.jpg");
    }

    #[test]
    fn scan_empty_directory_is_empty() {
        let tmp = TempDir::new().unwrap();
        assert!(scan(tmp.path()).unwrap().is_empty());
    }

    #[test]
    fn scan_missing_directory_errors() {
        assert!(scan(Path::new("/nonexistent/thumbgen-src")).is_err());
    }
}
