//! Recursive file-extension renamer.
//!
//! Walks a directory tree and renames every file ending in `.{from}` to the
//! same stem with `.{to}`. Existing destinations are never overwritten: a
//! file whose target name is taken is skipped and reported.

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use walkdir::WalkDir;

use crate::error::ToolsError;

/// What a rename pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenameReport {
    /// `(from, to)` pairs, in walk order. In a dry run these are the
    /// renames that would have happened.
    pub renamed: Vec<(PathBuf, PathBuf)>,
    /// Files left alone because the destination already existed.
    pub skipped: Vec<PathBuf>,
}

/// Rename every `*.{from_ext}` file under `root` to `*.{to_ext}`.
///
/// Extensions are given without the leading dot. Directory entries are
/// visited in name order so the report is deterministic. With `dry_run`
/// nothing on disk changes.
///
/// # Errors
///
/// Returns [`ToolsError::Io`] if a directory cannot be read or a rename
/// fails. Renames already performed are not rolled back.
pub fn rename_extensions(
    root: &Path,
    from_ext: &str,
    to_ext: &str,
    dry_run: bool,
) -> Result<RenameReport, ToolsError> {
    let from_suffix = format!(".{from_ext}");
    let mut report = RenameReport::default();

    // Sorting buffers each directory before it is yielded, so files renamed
    // during the walk are not visited again. Symlinks are not followed.
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.into_path();
        let Some(target) = renamed_path(&path, &from_suffix, to_ext) else {
            continue;
        };

        if target.exists() {
            warn!(
                from = %path.display(),
                to = %target.display(),
                "destination exists, skipping"
            );
            report.skipped.push(path);
            continue;
        }

        if !dry_run {
            std::fs::rename(&path, &target).map_err(|e| ToolsError::io(&path, e))?;
        }
        info!(from = %path.display(), to = %target.display(), dry_run, "renamed");
        report.renamed.push((path, target));
    }

    info!(
        root = %root.display(),
        renamed = report.renamed.len(),
        skipped = report.skipped.len(),
        dry_run,
        "rename pass complete"
    );
    Ok(report)
}

fn walk_error(root: &Path, err: walkdir::Error) -> ToolsError {
    let path = err.path().unwrap_or(root).to_path_buf();
    ToolsError::io(path, std::io::Error::from(err))
}

/// The new path for `path` if its file name ends in `from_suffix`.
///
/// A file named exactly `from_suffix` (e.g. `.hpp`) has no stem and is
/// left alone.
fn renamed_path(path: &Path, from_suffix: &str, to_ext: &str) -> Option<PathBuf> {
    let file_name = path.file_name()?.to_str()?;
    let stem = file_name.strip_suffix(from_suffix)?;
    if stem.is_empty() {
        return None;
    }
    Some(path.with_file_name(format!("{stem}.{to_ext}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(label: &str) -> PathBuf {
        let unique = format!(
            "aetk_rename_{label}_{}_{:?}",
            std::process::id(),
            std::thread::current().id(),
        );
        let dir = std::env::temp_dir().join(unique);
        std::fs::remove_dir_all(&dir).ok();
        std::fs::create_dir_all(dir.join("nested").join("deeper")).ok();
        dir
    }

    #[test]
    fn renamed_path_swaps_suffix() {
        let p = renamed_path(Path::new("src/layer.hpp"), ".hpp", "cpp");
        assert_eq!(p, Some(PathBuf::from("src/layer.cpp")));
        assert_eq!(renamed_path(Path::new("src/layer.h"), ".hpp", "cpp"), None);
        assert_eq!(renamed_path(Path::new("src/.hpp"), ".hpp", "cpp"), None);
    }

    #[test]
    fn renames_nested_files_only_with_matching_suffix() {
        let dir = scratch_dir("nested");
        std::fs::write(dir.join("a.hpp"), "a").ok();
        std::fs::write(dir.join("nested").join("b.hpp"), "b").ok();
        std::fs::write(dir.join("nested").join("deeper").join("c.hpp"), "c").ok();
        std::fs::write(dir.join("nested").join("keep.txt"), "k").ok();

        let report = rename_extensions(&dir, "hpp", "cpp", false);
        assert!(report.is_ok());
        let report = report.ok().unwrap_or_default();

        assert_eq!(report.renamed.len(), 3);
        assert!(report.skipped.is_empty());
        assert!(dir.join("a.cpp").exists());
        assert!(dir.join("nested").join("b.cpp").exists());
        assert!(dir.join("nested").join("deeper").join("c.cpp").exists());
        assert!(!dir.join("a.hpp").exists());
        assert!(dir.join("nested").join("keep.txt").exists());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn existing_destination_is_skipped() {
        let dir = scratch_dir("collision");
        std::fs::write(dir.join("x.hpp"), "header").ok();
        std::fs::write(dir.join("x.cpp"), "source").ok();

        let report = rename_extensions(&dir, "hpp", "cpp", false).ok().unwrap_or_default();

        assert!(report.renamed.is_empty());
        assert_eq!(report.skipped, vec![dir.join("x.hpp")]);
        assert_eq!(std::fs::read_to_string(dir.join("x.cpp")).ok().as_deref(), Some("source"));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn dry_run_leaves_files_in_place() {
        let dir = scratch_dir("dry");
        std::fs::write(dir.join("y.hpp"), "y").ok();

        let report = rename_extensions(&dir, "hpp", "cpp", true).ok().unwrap_or_default();

        assert_eq!(report.renamed.len(), 1);
        assert!(dir.join("y.hpp").exists());
        assert!(!dir.join("y.cpp").exists());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[cfg(unix)]
    #[test]
    fn directory_symlinks_are_not_followed() {
        let dir = scratch_dir("symlink");
        std::fs::write(dir.join("nested").join("a.hpp"), "a").ok();
        std::os::unix::fs::symlink(&dir, dir.join("nested").join("loop")).ok();

        let report = rename_extensions(&dir, "hpp", "cpp", true).ok().unwrap_or_default();

        assert_eq!(
            report.renamed,
            vec![(dir.join("nested").join("a.hpp"), dir.join("nested").join("a.cpp"))]
        );

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = std::env::temp_dir().join("aetk_rename_does_not_exist_9f2c");
        let result = rename_extensions(&dir, "hpp", "cpp", false);
        assert!(matches!(result, Err(ToolsError::Io { .. })));
    }
}
