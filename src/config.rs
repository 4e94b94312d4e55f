use std::path::{Path, PathBuf};

/// Longest base name kept when deriving the destination.
pub const MAX_STEM_LEN: usize = 48;

pub const TARGET_EXTENSION: &str = "c";

/// Resolved paths of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl Options {
    pub fn new(source: PathBuf, destination: Option<PathBuf>) -> Self {
        let destination = destination.unwrap_or_else(|| default_destination(&source));
        Self {
            source,
            destination,
        }
    }
}

/// The source's file name up to its first `.` (at most [`MAX_STEM_LEN`]
/// characters) with `.c` appended, next to the source.
pub fn default_destination(source: &Path) -> PathBuf {
    let file_name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem: String = file_name
        .chars()
        .take_while(|&c| c != '.')
        .take(MAX_STEM_LEN)
        .collect();

    source.with_file_name(format!("{stem}.{TARGET_EXTENSION}"))
}
