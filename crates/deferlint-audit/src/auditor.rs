use std::fs;
use std::path::{Path, PathBuf};

use deferlint_core::rule;
use deferlint_core::types::{Violation, ViolationKind};
use deferlint_parsers::python::{Param, ParseError, PythonParser, SourceModule};

/// Fatal errors that abort a run. Semantic non-conformances are
/// [`Violation`] values, never errors.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A byte-range splice into the original source text.
struct Edit {
    start: usize,
    end: usize,
    text: String,
}

/// Checks that every `__init__` taking a `deferrable` parameter defaults it
/// to the expected configuration lookup, and can rewrite fixable
/// occurrences in place.
///
/// Rewrites are localized splices over the offending default's byte range;
/// all surrounding text is preserved byte-for-byte.
pub struct DefaultValueAuditor {
    parser: PythonParser,
    expected_canonical: String,
}

impl DefaultValueAuditor {
    pub fn new() -> Result<Self, AuditError> {
        let mut parser = PythonParser::new()?;
        let expected_canonical = parser.canonical_expression(rule::EXPECTED_DEFAULT)?;
        Ok(Self {
            parser,
            expected_canonical,
        })
    }

    /// Scan one file without touching it.
    pub fn scan_file(&mut self, path: &Path) -> Result<Vec<Violation>, AuditError> {
        let module = self.read_module(path)?;
        Ok(self.scan_module(&module))
    }

    /// Scan one file and rewrite fixable violations in place. Returns all
    /// violations found (fixed ones included) and whether the file was
    /// rewritten.
    pub fn fix_file(&mut self, path: &Path) -> Result<(Vec<Violation>, bool), AuditError> {
        let module = self.read_module(path)?;
        let (violations, rewritten) = self.fix_module(&module);
        match rewritten {
            Some(source) => {
                fs::write(path, source).map_err(|e| AuditError::Write {
                    path: path.to_path_buf(),
                    source: e,
                })?;
                Ok((violations, true))
            }
            None => Ok((violations, false)),
        }
    }

    pub fn scan_module(&self, module: &SourceModule) -> Vec<Violation> {
        self.audit(module).0
    }

    /// Violations plus, when anything was fixable, the rewritten source.
    pub fn fix_module(&self, module: &SourceModule) -> (Vec<Violation>, Option<String>) {
        let (violations, mut edits) = self.audit(module);
        if edits.is_empty() {
            return (violations, None);
        }
        // Apply back-to-front so earlier byte offsets stay valid.
        edits.sort_by(|a, b| b.start.cmp(&a.start));
        let mut source = module.source.clone();
        for edit in &edits {
            source.replace_range(edit.start..edit.end, &edit.text);
        }
        (violations, Some(source))
    }

    fn read_module(&mut self, path: &Path) -> Result<SourceModule, AuditError> {
        let source = fs::read_to_string(path).map_err(|e| AuditError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(self.parser.parse_module(path, source)?)
    }

    fn audit(&self, module: &SourceModule) -> (Vec<Violation>, Vec<Edit>) {
        let file = module.path.to_string_lossy().to_string();
        let mut violations = Vec::new();
        let mut edits = Vec::new();

        for ctor in self.parser.constructors(module) {
            let mut fix_candidate: Option<usize> = None;
            for (index, param) in ctor.params.iter().enumerate() {
                if param.name != rule::TARGET_PARAM || param.is_splat {
                    continue;
                }
                match &param.default {
                    None => {
                        violations.push(Violation {
                            file: file.clone(),
                            line: param.line,
                            kind: ViolationKind::MissingDefault,
                        });
                        fix_candidate = Some(index);
                    }
                    Some(default) if default.canonical != self.expected_canonical => {
                        violations.push(Violation {
                            file: file.clone(),
                            line: default.line,
                            kind: ViolationKind::WrongDefault,
                        });
                        fix_candidate = Some(index);
                    }
                    Some(_) => {}
                }
            }
            // Last violating occurrence governs the fix attempt. Duplicate
            // parameter names are malformed input; earlier occurrences stay
            // reported but untouched.
            let Some(index) = fix_candidate else { continue };
            if fixable(&ctor.params, index) {
                edits.push(fix_edit(&ctor.params[index]));
            }
        }

        (violations, edits)
    }
}

/// Inserting or overwriting a default at `index` must not leave a later
/// defaultless parameter behind it, so every non-splat parameter after
/// `index` has to carry a default already.
fn fixable(params: &[Param], index: usize) -> bool {
    params[index + 1..]
        .iter()
        .all(|p| p.is_splat || p.default.is_some())
}

fn fix_edit(param: &Param) -> Edit {
    match &param.default {
        Some(default) => Edit {
            start: default.start_byte,
            end: default.end_byte,
            text: rule::EXPECTED_DEFAULT.to_string(),
        },
        // No default to overwrite: append one after the parameter, spaced
        // when an annotation is present.
        None => {
            let text = if param.annotated {
                format!(" = {}", rule::EXPECTED_DEFAULT)
            } else {
                format!("={}", rule::EXPECTED_DEFAULT)
            };
            Edit {
                start: param.end_byte,
                end: param.end_byte,
                text,
            }
        }
    }
}

#[cfg(test)]
#[path = "auditor_tests.rs"]
mod tests;
