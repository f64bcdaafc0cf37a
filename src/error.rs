//! Unified error types for the harness.
//!
//! `SubjectError` covers every fault that can cross the subject boundary:
//! unknown types, unknown methods, bad values, failed constructors. The
//! conformance checks convert these into Fail entries rather than letting
//! them propagate, so a broken subject type can never abort a run.
//! `HarnessError` covers environment and orchestration faults.

use miette::Diagnostic;
use thiserror::Error;

/// A fault raised at the subject boundary.
#[derive(Debug, Error, Diagnostic)]
pub enum SubjectError {
    #[error("no type named `{name}` is registered")]
    #[diagnostic(code(menagerie::subject::unknown_type))]
    UnknownType { name: String },

    #[error("type `{type_name}` has no method `{method}` on its own surface or its parent chain")]
    #[diagnostic(code(menagerie::subject::unknown_method))]
    UnknownMethod { type_name: String, method: String },

    #[error("expected {expected} in {context}, found {found}")]
    #[diagnostic(code(menagerie::subject::type_mismatch))]
    TypeMismatch {
        context: String,
        expected: &'static str,
        found: String,
    },

    #[error("constructing `{type_name}` failed: {message}")]
    #[diagnostic(code(menagerie::subject::construction))]
    Construction { type_name: String, message: String },

    #[error("{message}")]
    #[diagnostic(code(menagerie::stage::draw_fault))]
    DrawFault { message: String },
}

/// A fault in the environment or the orchestration of a run.
#[derive(Debug, Error, Diagnostic)]
pub enum HarnessError {
    #[error("the environment was dropped before signalling readiness")]
    #[diagnostic(
        code(menagerie::harness::environment_lost),
        help("call `Stage::create_canvas` before waiting on the readiness signal")
    )]
    EnvironmentLost,

    #[error("failed to export the report as JSON")]
    #[diagnostic(code(menagerie::harness::report_export))]
    ReportExport(#[from] serde_json::Error),
}
