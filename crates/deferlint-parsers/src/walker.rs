use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

/// Enumerates candidate modules under a repository root.
///
/// Matching is glob-based rather than gitignore-based: the audit targets
/// fixed subtrees (`sensors/`, `operators/`) regardless of ignore files.
/// Patterns are matched against paths relative to the root.
pub struct CandidateWalker {
    root: PathBuf,
    globs: GlobSet,
}

#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    #[error("invalid glob pattern: {0}")]
    Pattern(String),
}

impl CandidateWalker {
    pub fn new(root: &Path, patterns: &[&str]) -> Result<Self, WalkError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(Glob::new(pattern).map_err(|e| WalkError::Pattern(format!("{e}")))?);
        }
        let globs = builder
            .build()
            .map_err(|e| WalkError::Pattern(format!("{e}")))?;
        Ok(Self {
            root: root.to_path_buf(),
            globs,
        })
    }

    /// Walk the root and return matching files in a stable name order.
    pub fn walk(&self) -> Vec<PathBuf> {
        let mut entries = Vec::new();
        for result in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = match result {
                Ok(e) => e,
                Err(_) => continue,
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.into_path();
            let rel = path.strip_prefix(&self.root).unwrap_or(&path);
            if self.globs.is_match(rel) {
                entries.push(path);
            }
        }
        entries
    }
}
