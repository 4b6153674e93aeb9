//! Tree-sitter parsing of Python sources for deferlint.
//!
//! - [`python`] — Parsing a module and extracting constructor signatures
//! - [`canon`] — Canonical textual rendering of expressions
//! - [`walker`] — Glob-based enumeration of candidate modules

pub mod canon;
pub mod python;
pub mod walker;
