//! The deferrable-default audit.
//!
//! [`auditor::DefaultValueAuditor`] scans parsed modules for `__init__`
//! definitions whose `deferrable` parameter is missing the expected default
//! expression, and can rewrite fixable occurrences in place.

pub mod auditor;

pub use auditor::{AuditError, DefaultValueAuditor};
