//! Construction-time error type.
//!
//! A small, explicit enum with a hand-written `Display` impl and a manual
//! `impl std::error::Error`, no `thiserror` dependency.
//!
//! This is the *only* error kind the algebra itself raises: domain errors
//! (log of a negative number, etc.) are the operand type's own concern and
//! never surface here.

use crate::op_code::OpCode;
use std::fmt;

/// A gap in a per-operand-type dispatch table, detected at construction.
///
/// A missing entry is a programming error and must be detected at build
/// time. [`crate::table::OpTable::try_build`] returns this so the
/// exhaustiveness check is itself testable; every public entry point in
/// this crate builds its table through [`crate::table::OpTable::build`],
/// which turns this into a panic, since it is fatal and non-recoverable
/// by design.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableBuildError {
    /// The op whose evaluator or partials entry was missing.
    pub op: OpCode,
    /// Which entry was missing.
    pub kind: MissingEntry,
}

/// Which of an op's table entries was absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingEntry {
    /// The numeric evaluator.
    Evaluator,
    /// The partial-derivative rule.
    Partials,
}

impl fmt::Display for TableBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            MissingEntry::Evaluator => "evaluator",
            MissingEntry::Partials => "partials rule",
        };
        write!(
            f,
            "missing {what} for op {} (ordinal {}); every OpCode must have a populated table entry",
            self.op.name(),
            self.op.ordinal()
        )
    }
}

impl std::error::Error for TableBuildError {}
