use deferlint_core::rule;
use deferlint_core::types::AuditReport;

use crate::OutputFormatter;

pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format_report(&self, report: &AuditReport, verbose: bool) -> String {
        let mut out = String::new();

        if !report.violations.is_empty() {
            out.push_str("Incorrect deferrable default values detected at:\n");
            for v in &report.violations {
                out.push_str(&format!("  {}\n", v.location()));
            }
            out.push_str(&format!(
                "Please set the default value of deferrable to \"{}\"\n",
                rule::EXPECTED_DEFAULT,
            ));
            out.push_str(&format!("See: {}\n", rule::DEFERRABLE_DOC));
        }

        if verbose {
            out.push_str(&format!(
                "\n{} violation(s) in {} file(s) scanned, {} file(s) rewritten\n",
                report.violations.len(),
                report.files_scanned,
                report.files_rewritten,
            ));
        }

        out
    }
}
