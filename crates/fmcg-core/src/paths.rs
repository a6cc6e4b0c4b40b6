use std::path::PathBuf;

/// Directory layout for raw and cleaned datasets.
///
/// Raw files live in `<root>/raw`, cleaned files in the sibling
/// `<root>/cleaned`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub root: PathBuf,
    pub raw_dir: PathBuf,
    pub cleaned_dir: PathBuf,
}

impl DataPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let raw_dir = root.join("raw");
        let cleaned_dir = root.join("cleaned");
        Self {
            root,
            raw_dir,
            cleaned_dir,
        }
    }
}
