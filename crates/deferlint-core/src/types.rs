use serde::{Deserialize, Serialize};

/// Why a `deferrable` parameter failed the audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// The parameter carries no default value at all.
    MissingDefault,
    /// The default value is not the expected configuration lookup.
    WrongDefault,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::MissingDefault => "missing_default",
            ViolationKind::WrongDefault => "wrong_default",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single non-conforming `deferrable` parameter.
///
/// `line` is 1-based: the parameter's own line for a missing default, the
/// default expression's line otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub file: String,
    pub line: u32,
    pub kind: ViolationKind,
}

impl Violation {
    /// `path:line`, the form the report prints.
    pub fn location(&self) -> String {
        format!("{}:{}", self.file, self.line)
    }
}

/// Aggregated result of auditing a set of files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditReport {
    pub files_scanned: u32,
    pub files_rewritten: u32,
    pub violations: Vec<Violation>,
}

impl AuditReport {
    /// Process exit code: the total violation count, zero when clean.
    pub fn exit_code(&self) -> i32 {
        self.violations.len() as i32
    }

    pub fn merge(&mut self, other: AuditReport) {
        self.files_scanned += other.files_scanned;
        self.files_rewritten += other.files_rewritten;
        self.violations.extend(other.violations);
    }
}
