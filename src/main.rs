use std::path::Path;

mod convert;
mod error;
mod state;

use state::config::ConvertConfig;

/// Directory scanned when the tool is run
const ROOT_DIRECTORY: &str = ".";

fn main() {
    let config = ConvertConfig::default();

    // Per-file failures are reported as they happen; the exit code stays 0
    convert::convert_tree(Path::new(ROOT_DIRECTORY), &config);
}
