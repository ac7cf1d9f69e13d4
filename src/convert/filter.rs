use std::ffi::OsStr;

/// Decide whether a file should be replaced by a JPEG thumbnail.
///
/// Anything mentioning "old" is rejected first, so files already moved
/// aside by a previous run are never picked up again. Otherwise the name
/// must contain "thumb" and end in ".png". Matching is case-insensitive.
pub fn is_candidate(file_name: impl AsRef<OsStr>) -> bool {
    let name = file_name.as_ref().to_string_lossy().to_lowercase();

    if name.contains("old") {
        return false;
    }

    name.contains("thumb") && name.ends_with(".png")
}
