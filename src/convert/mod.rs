/// Thumbnail conversion module
///
/// This module handles:
/// - Walking a directory tree for regular files (walker.rs)
/// - Deciding which filenames are PNG thumbnails to replace (filter.rs)
/// - Renaming the original and writing the resized JPEG (converter.rs)

pub mod walker;
pub mod filter;
pub mod converter;

pub use converter::convert_tree;
