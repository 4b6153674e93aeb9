//! The deferrable-default rule.
//!
//! Operators and sensors that accept a `deferrable` flag must default it to
//! the `default_deferrable` configuration lookup rather than a literal
//! boolean, so that a deployment can flip every operator to deferrable mode
//! from one config entry.

/// Constructor parameter the audit looks for.
pub const TARGET_PARAM: &str = "deferrable";

/// The exact default expression a `deferrable` parameter must carry.
///
/// Comparison happens on canonical forms, so quote style and spacing are
/// forgiven; argument order, names, and the fallback value are not.
pub const EXPECTED_DEFAULT: &str =
    r#"conf.getboolean("operators", "default_deferrable", fallback=False)"#;

/// Where the convention is documented.
pub const DEFERRABLE_DOC: &str =
    "https://github.com/apache/airflow/blob/main/docs/apache-airflow/\
     authoring-and-scheduling/deferring.rst#writing-deferrable-operators";

/// Recursive glob patterns selecting the audited subtrees, relative to the
/// repository root.
pub const CANDIDATE_GLOBS: &[&str] = &["**/sensors/**/*.py", "**/operators/**/*.py"];
