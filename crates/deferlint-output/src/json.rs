use deferlint_core::types::AuditReport;

use crate::OutputFormatter;

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AuditReport, _verbose: bool) -> String {
        serde_json::to_string_pretty(report).unwrap_or_default()
    }
}
