use std::path::Path;

use deferlint_audit::DefaultValueAuditor;
use deferlint_core::rule;
use deferlint_core::types::AuditReport;
use deferlint_output::OutputFormatter;
use deferlint_parsers::walker::CandidateWalker;

/// Run the audit over every candidate module under `root`.
///
/// Returns the process exit code: the total violation count, or 2 on an
/// operational failure (bad pattern, unreadable file, syntax error).
pub fn run(formatter: &dyn OutputFormatter, verbose: bool, root: &Path, fix: bool) -> i32 {
    let walker = match CandidateWalker::new(root, rule::CANDIDATE_GLOBS) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("deferlint: {}", e);
            return 2;
        }
    };

    let mut auditor = match DefaultValueAuditor::new() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("deferlint: {}", e);
            return 2;
        }
    };

    let mut report = AuditReport::default();
    for path in walker.walk() {
        // Fail fast: an unreadable or unparsable file aborts the whole run
        // rather than being reported as a violation.
        let result = if fix {
            auditor.fix_file(&path)
        } else {
            auditor.scan_file(&path).map(|violations| (violations, false))
        };
        match result {
            Ok((violations, rewritten)) => {
                report.files_scanned += 1;
                if rewritten {
                    report.files_rewritten += 1;
                }
                report.violations.extend(violations);
            }
            Err(e) => {
                eprintln!("deferlint: {}", e);
                return 2;
            }
        }
    }

    let output = formatter.format_report(&report, verbose);
    if !output.is_empty() {
        print!("{}", output);
    }
    report.exit_code()
}
