//! Output formatters for deferlint audit reports.
//!
//! Two modes:
//! - **Human** (default): the violation list plus a remediation hint
//! - **JSON** (`--json`): machine-readable structured output

pub mod human;
pub mod json;

use deferlint_core::types::AuditReport;

pub trait OutputFormatter {
    fn format_report(&self, report: &AuditReport, verbose: bool) -> String;
}
