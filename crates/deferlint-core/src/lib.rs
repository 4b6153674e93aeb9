//! Core types and rule definition for deferlint.
//!
//! This crate provides the data shared across all deferlint crates:
//! - [`types`] — Violations and audit reports
//! - [`rule`] — The deferrable-default rule constants

pub mod rule;
pub mod types;
