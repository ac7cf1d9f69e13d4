/// Errors that can stop a single file from being converted
///
/// None of these abort a run: the converter downgrades each one to a
/// failed outcome and moves on to the next candidate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The "(old)" name is already taken, so renaming would clobber a file
    #[error("cannot rename to {}: destination already exists", .destination.display())]
    DestinationExists { destination: PathBuf },

    /// The filesystem refused the rename (permissions, path too long, ...)
    #[error("cannot rename to {}: {source}", .destination.display())]
    Rename {
        destination: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The renamed PNG could not be opened or decoded
    #[error("cannot decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The JPEG encoder rejected the pixels
    #[error("cannot encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: jpeg_encoder::EncodingError,
    },

    /// The encoded JPEG could not be written (disk full, permissions, ...)
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
