use crate::layout;
use std::path::PathBuf;

/// A directory or file staged for creation under the base directory.
#[derive(Debug, Clone)]
pub struct PlanEntry {
    /// Target path, relative to the base directory.
    pub destination: PathBuf,
    /// Contents to seed the file with. `None` for directories.
    pub content: Option<&'static str>,
    /// Whether this entry is a file (`true`) or a directory (`false`).
    pub is_file: bool,
}

/// The full set of [`PlanEntry`] values to create, in creation order:
/// directories first, then files.
#[derive(Debug, Clone)]
pub struct Plan {
    pub entries: Vec<PlanEntry>,
}

impl Plan {
    /// Builds the plan from the constant data in [`layout`].
    pub fn project_layout() -> Self {
        let mut entries = Vec::new();

        for dir in layout::DIRECTORIES {
            entries.push(PlanEntry {
                destination: PathBuf::from(dir),
                content: None,
                is_file: false,
            });
        }

        for (path, seed) in layout::placeholder_files() {
            entries.push(PlanEntry {
                destination: PathBuf::from(path),
                content: Some(seed.contents()),
                is_file: true,
            });
        }

        Self { entries }
    }

    pub fn directories(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(|e| !e.is_file)
    }

    pub fn files(&self) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(|e| e.is_file)
    }
}
