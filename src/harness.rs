//! The orchestrator: waits for the environment, runs the assertion sequence
//! once, and renders the report.
//!
//! Control flow mirrors a single manually-launched run: await readiness →
//! disable interaction → install the draw shim → surface any draw faults
//! already captured → run the checks → render. The run itself never fails
//! on account of the subjects; the only error here is an environment that
//! disappears before signalling readiness.

use crate::checks;
use crate::error::HarnessError;
use crate::recorder::{Recorder, ReportSink, ReportStyle};
use crate::stage::{Readiness, Stage};
use crate::subject::SubjectRegistry;

/// Configuration for one harness run.
pub struct HarnessConfig {
    pub style: ReportStyle,
    /// Also run the Animal / FurryAnimal base-contract checks before the
    /// exercise sequence.
    pub check_base_contract: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            style: ReportStyle::default(),
            check_base_contract: false,
        }
    }
}

/// Runs the conformance checks once the environment is ready and returns
/// the populated recorder. Rendering is left to the caller.
pub fn run(
    stage: &mut Stage,
    readiness: Readiness,
    registry: &SubjectRegistry,
    config: &HarnessConfig,
) -> Result<Recorder, HarnessError> {
    readiness.wait()?;
    stage.set_interactive(false);
    stage.substitute_draw();

    let mut results = Recorder::new();
    for fault in stage.drain_faults() {
        results.add_fail(format!("In frame {}, {}", fault.frame, fault.message));
    }

    if config.check_base_contract {
        checks::run_base_checks(registry, &mut results);
    }
    checks::run_exercise_checks(registry, &mut results);

    Ok(results)
}

/// Runs the checks and renders the report into the sink. The render happens
/// exactly once, after the full sequence.
pub fn run_and_render(
    stage: &mut Stage,
    readiness: Readiness,
    registry: &SubjectRegistry,
    config: &HarnessConfig,
    sink: &mut dyn ReportSink,
) -> Result<Recorder, HarnessError> {
    let results = run(stage, readiness, registry, config)?;
    results.render(sink, &config.style);
    Ok(results)
}
