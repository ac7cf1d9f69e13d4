/// Data structures that flow between the walker, the converter and `main`

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// A file picked up by the filename filter, about to be converted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Directory the file lives in
    pub dir: PathBuf,
    /// Filename only, case preserved (e.g., "icon_thumb.PNG")
    pub file_name: OsString,
}

impl CandidateFile {
    pub fn new(dir: impl Into<PathBuf>, file_name: impl Into<OsString>) -> Self {
        Self {
            dir: dir.into(),
            file_name: file_name.into(),
        }
    }

    /// Full path of the file as it was found
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    /// Filename without its extension, case preserved.
    /// A leading dot does not count as an extension separator.
    pub fn base_name(&self) -> &OsStr {
        Path::new(&self.file_name)
            .file_stem()
            .unwrap_or(self.file_name.as_os_str())
    }

    /// Where the original PNG is moved to: `{base}(old).png`
    pub fn old_png_path(&self) -> PathBuf {
        self.sibling("(old).png")
    }

    /// Where the resized JPEG is written: `{base}.jpg`
    pub fn jpg_path(&self) -> PathBuf {
        self.sibling(".jpg")
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self.base_name().to_os_string();
        name.push(suffix);
        self.dir.join(name)
    }
}

/// What happened to one candidate file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// The JPEG was written; the original now lives under its "(old)" name
    Converted { source: PathBuf, jpg: PathBuf },
    /// Something went wrong; `error` is the rendered error text
    Failed { source: PathBuf, error: String },
}

impl FileOutcome {
    pub fn is_converted(&self) -> bool {
        matches!(self, FileOutcome::Converted { .. })
    }
}

/// Result of a whole run, one outcome per attempted file in visiting order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub outcomes: Vec<FileOutcome>,
}

impl RunSummary {
    pub fn record(&mut self, outcome: FileOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn converted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_converted()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.converted_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_paths_keep_original_case() {
        let candidate = CandidateFile::new("shots", "Icon_THUMB.PNG");

        assert_eq!(candidate.base_name(), "Icon_THUMB");
        assert_eq!(candidate.path(), Path::new("shots").join("Icon_THUMB.PNG"));
        assert_eq!(
            candidate.old_png_path(),
            Path::new("shots").join("Icon_THUMB(old).png")
        );
        assert_eq!(candidate.jpg_path(), Path::new("shots").join("Icon_THUMB.jpg"));
    }

    #[test]
    fn test_base_name_strips_only_last_extension() {
        let candidate = CandidateFile::new(".", "hero.thumb.png");
        assert_eq!(candidate.base_name(), "hero.thumb");

        let hidden = CandidateFile::new(".", ".thumb.png");
        assert_eq!(hidden.base_name(), ".thumb");
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = RunSummary::default();
        summary.record(FileOutcome::Converted {
            source: PathBuf::from("a_thumb.png"),
            jpg: PathBuf::from("a_thumb.jpg"),
        });
        summary.record(FileOutcome::Failed {
            source: PathBuf::from("b_thumb.png"),
            error: "boom".to_string(),
        });
        summary.record(FileOutcome::Failed {
            source: PathBuf::from("c_thumb.png"),
            error: "boom".to_string(),
        });

        assert_eq!(summary.converted_count(), 1);
        assert_eq!(summary.failed_count(), 2);
        assert!(!summary.outcomes[1].is_converted());
    }
}
