/// Shared helpers for deferlint integration tests.
///
/// Import from any integration test file with:
///   `#[path = "common/mod.rs"] mod common;`
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Lay out a scratch repository from `(relative path, content)` pairs.
///
/// Returns (TempDir, repository root). Hold the TempDir to keep the
/// directory alive.
#[allow(dead_code)]
pub fn setup_repo(files: &[(&str, &str)]) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    for (rel, content) in files {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    let root = dir.path().to_path_buf();
    (dir, root)
}

#[allow(dead_code)]
pub fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

#[allow(dead_code)]
pub const WRONG_DEFAULT_OPERATOR: &str = r#"from airflow.models import BaseOperator


class ExampleOperator(BaseOperator):
    def __init__(self, *, wait_for_completion: bool = True, deferrable: bool = False, **kwargs):
        super().__init__(**kwargs)
        self.wait_for_completion = wait_for_completion
        self.deferrable = deferrable
"#;

#[allow(dead_code)]
pub const CANONICAL_OPERATOR: &str = r#"from airflow.configuration import conf
from airflow.models import BaseOperator


class ExampleOperator(BaseOperator):
    def __init__(
        self,
        *,
        deferrable: bool = conf.getboolean("operators", "default_deferrable", fallback=False),
        **kwargs,
    ):
        super().__init__(**kwargs)
        self.deferrable = deferrable
"#;
