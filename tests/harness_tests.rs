//! End-to-end tests for the orchestrator and the environment shims:
//! readiness, the draw shim, fault attribution, and the rendered report.

use menagerie::harness::{self, HarnessConfig};
use menagerie::recorder::{OutcomeKind, ReportBuffer, ReportStyle};
use menagerie::sample;
use menagerie::stage::Stage;
use menagerie::subject::SubjectRegistry;
use menagerie::SubjectError;

fn reference_registry() -> SubjectRegistry {
    let mut registry = SubjectRegistry::from_seed([4; 32]);
    sample::register_reference_subjects(&mut registry);
    registry
}

fn plain_config() -> HarnessConfig {
    HarnessConfig {
        style: ReportStyle::plain(),
        check_base_contract: false,
    }
}

#[test]
fn a_ready_environment_runs_to_a_clean_report() {
    let registry = reference_registry();
    let mut stage = Stage::new();
    let readiness = stage.ready_signal();
    stage.create_canvas(600, 500);

    let mut buffer = ReportBuffer::new();
    let results =
        harness::run_and_render(&mut stage, readiness, &registry, &plain_config(), &mut buffer)
            .unwrap();

    assert!(!results.has_failures());
    assert!(buffer.as_str().contains("Conformance summary"));
    assert!(!buffer.as_str().contains("FAIL:"));
}

#[test]
fn readiness_resolves_even_when_signalled_first() {
    let mut stage = Stage::new();
    stage.create_canvas(600, 500);
    // Subscribing after the canvas exists must not block.
    let readiness = stage.ready_signal();
    assert!(readiness.wait().is_ok());
}

#[test]
fn a_dropped_environment_surfaces_as_an_error() {
    let mut stage = Stage::new();
    let readiness = stage.ready_signal();
    drop(stage);
    assert!(readiness.wait().is_err());
}

#[test]
fn the_run_disables_interaction_and_silences_drawing() {
    let registry = reference_registry();
    let mut stage = Stage::new();
    stage.install_draw(|_| {
        Err(SubjectError::DrawFault {
            message: "the sketch touched a missing shape".to_string(),
        })
    });
    let readiness = stage.ready_signal();
    stage.create_canvas(600, 500);

    harness::run(&mut stage, readiness, &registry, &plain_config()).unwrap();

    assert!(!stage.interactive());
    // The shim replaced the faulty callback, so further frames stay clean.
    stage.advance_to_frame(10);
    assert!(stage.canvas_status().is_empty());
}

#[test]
fn draw_faults_are_attributed_to_their_frame() {
    let registry = reference_registry();
    let mut stage = Stage::new();
    stage.install_draw(|frame| {
        if frame == 3 {
            Err(SubjectError::DrawFault {
                message: "the canvas reference is gone".to_string(),
            })
        } else {
            Ok(())
        }
    });
    let readiness = stage.ready_signal();
    stage.create_canvas(600, 500);
    stage.advance_to_frame(5);
    assert_eq!(stage.canvas_status().len(), 1);

    let results = harness::run(&mut stage, readiness, &registry, &plain_config()).unwrap();

    assert!(results
        .entries()
        .iter()
        .any(|o| o.kind == OutcomeKind::Fail
            && o.message == "In frame 3, the canvas reference is gone"));
    // The signal is consumed at the start of the run.
    assert!(stage.canvas_status().is_empty());
}

#[test]
fn ticking_without_faults_just_advances_the_counter() {
    let mut stage = Stage::new();
    stage.advance_to_frame(7);
    assert_eq!(stage.frame(), 7);
    assert!(stage.canvas_status().is_empty());
    // Advancing to an earlier frame is a no-op, not a rewind.
    stage.advance_to_frame(2);
    assert_eq!(stage.frame(), 7);
}

#[test]
fn an_empty_environment_still_produces_a_full_report() {
    let registry = SubjectRegistry::from_seed([4; 32]);
    let mut stage = Stage::new();
    let readiness = stage.ready_signal();
    stage.create_canvas(600, 500);

    let mut buffer = ReportBuffer::new();
    let results =
        harness::run_and_render(&mut stage, readiness, &registry, &plain_config(), &mut buffer)
            .unwrap();

    let (passed, failed, warnings) = results.counts();
    assert_eq!((passed, failed), (0, 0));
    assert_eq!(warnings, 3);
    assert!(buffer.as_str().contains("total 3, passed 0, failed 0, warnings 3"));
}

#[test]
fn base_contract_checks_run_when_configured() {
    let registry = reference_registry();
    let mut stage = Stage::new();
    let readiness = stage.ready_signal();
    stage.create_canvas(600, 500);

    let config = HarnessConfig {
        style: ReportStyle::plain(),
        check_base_contract: true,
    };
    let results = harness::run(&mut stage, readiness, &registry, &config).unwrap();

    assert!(results
        .entries()
        .iter()
        .any(|o| o.message == "The `Animal` class is defined."));
    assert!(!results.has_failures());
}
