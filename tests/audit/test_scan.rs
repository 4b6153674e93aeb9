use deferlint_audit::DefaultValueAuditor;
use deferlint_core::rule;
use deferlint_core::types::{AuditReport, ViolationKind};
use deferlint_output::human::HumanFormatter;
use deferlint_output::OutputFormatter;
use deferlint_parsers::walker::CandidateWalker;

#[path = "../common/mod.rs"]
mod common;

fn scan(root: &std::path::Path) -> AuditReport {
    let walker = CandidateWalker::new(root, rule::CANDIDATE_GLOBS).unwrap();
    let mut auditor = DefaultValueAuditor::new().unwrap();
    let mut report = AuditReport::default();
    for path in walker.walk() {
        let violations = auditor.scan_file(&path).unwrap();
        report.files_scanned += 1;
        report.violations.extend(violations);
    }
    report
}

#[test]
fn test_wrong_default_reported_at_its_line() {
    let (_dir, root) = common::setup_repo(&[(
        "airflow/operators/example.py",
        common::WRONG_DEFAULT_OPERATOR,
    )]);

    let report = scan(&root);
    assert_eq!(report.files_scanned, 1);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].line, 5);
    assert_eq!(report.violations[0].kind, ViolationKind::WrongDefault);
    assert_eq!(report.exit_code(), 1);
}

#[test]
fn test_canonical_default_is_clean() {
    let (_dir, root) = common::setup_repo(&[(
        "airflow/operators/example.py",
        common::CANONICAL_OPERATOR,
    )]);

    let report = scan(&root);
    assert_eq!(report.files_scanned, 1);
    assert!(report.violations.is_empty());
    assert_eq!(report.exit_code(), 0);
}

#[test]
fn test_violations_aggregate_across_files() {
    let (_dir, root) = common::setup_repo(&[
        (
            "airflow/operators/wrong.py",
            "class A:\n    def __init__(self, deferrable=False):\n        pass\n",
        ),
        (
            "airflow/sensors/missing.py",
            "class B:\n    def __init__(self, *, deferrable):\n        pass\n",
        ),
        ("airflow/operators/clean.py", common::CANONICAL_OPERATOR),
        (
            "airflow/hooks/ignored.py",
            "class C:\n    def __init__(self, deferrable=True):\n        pass\n",
        ),
    ]);

    let report = scan(&root);
    assert_eq!(report.files_scanned, 3);
    assert_eq!(report.violations.len(), 2);
    assert_eq!(report.exit_code(), 2);
}

#[test]
fn test_report_prints_hint_and_doc_url() {
    let (_dir, root) = common::setup_repo(&[(
        "airflow/operators/wrong.py",
        "class A:\n    def __init__(self, deferrable=False):\n        pass\n",
    )]);

    let report = scan(&root);
    let out = HumanFormatter.format_report(&report, false);
    assert!(out.starts_with("Incorrect deferrable default values detected at:\n"));
    assert!(out.contains(":2\n"));
    assert!(out.contains(rule::EXPECTED_DEFAULT));
    assert!(out.contains(rule::DEFERRABLE_DOC));
}

#[test]
fn test_scan_does_not_modify_files() {
    let (_dir, root) = common::setup_repo(&[(
        "airflow/operators/example.py",
        common::WRONG_DEFAULT_OPERATOR,
    )]);

    scan(&root);
    assert_eq!(
        common::read(&root, "airflow/operators/example.py"),
        common::WRONG_DEFAULT_OPERATOR,
    );
}
