use std::ffi::OsString;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lazily list every file under `root` as `(directory, filename)`.
///
/// Unreadable entries are skipped. Symlinks to files are listed like any
/// other file; symlinked directories are neither listed nor descended
/// into. Entries are sorted by name within each directory, but callers
/// should not rely on any particular order.
pub fn walk_files(root: &Path) -> impl Iterator<Item = (PathBuf, OsString)> {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| !entry.file_type().is_dir())
        .filter(|entry| !(entry.path_is_symlink() && entry.path().is_dir()))
        .map(|entry| {
            let dir = entry
                .path()
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            (dir, entry.file_name().to_os_string())
        })
}
