//! The Menagerie command-line interface.
//!
//! The demo runner: registers the reference subjects, stands up a stage,
//! runs the conformance checks, and renders the report to stdout.

use clap::Parser;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::harness::{self, HarnessConfig};
use crate::recorder::{ReportStyle, StdoutSink};
use crate::sample;
use crate::stage::Stage;
use crate::subject::SubjectRegistry;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "menagerie",
    version,
    about = "Runs the animal-inheritance conformance checks against the bundled reference subjects."
)]
pub struct HarnessArgs {
    /// Emit the outcome list as JSON instead of the text report.
    #[arg(long)]
    pub json: bool,

    /// Disable coloured output.
    #[arg(long)]
    pub no_color: bool,

    /// Include the Animal / FurryAnimal base-contract checks.
    #[arg(long)]
    pub base: bool,

    /// Advance the stage by this many frames before the checks run.
    #[arg(long, default_value_t = 0)]
    pub frames: u64,
}

/// Runs the demo and returns the process exit code: 1 when any check
/// failed, 0 otherwise.
pub fn run() -> i32 {
    let args = HarnessArgs::parse();

    let mut registry = SubjectRegistry::new();
    sample::register_reference_subjects(&mut registry);

    let mut stage = Stage::new();
    let readiness = stage.ready_signal();
    stage.create_canvas(sample::SPAWN_WIDTH as u32, sample::SPAWN_HEIGHT as u32);
    stage.advance_to_frame(args.frames);

    let config = HarnessConfig {
        style: if args.no_color {
            ReportStyle::plain()
        } else {
            ReportStyle::default()
        },
        check_base_contract: args.base,
    };

    let results = match harness::run(&mut stage, readiness, &registry, &config) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("{:?}", miette::Report::new(e));
            return 1;
        }
    };

    if args.json {
        match results.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                return 1;
            }
        }
    } else {
        print_title(args.no_color);
        results.render(&mut StdoutSink, &config.style);
    }

    if results.has_failures() {
        1
    } else {
        0
    }
}

/// Prints the report headline in bold.
fn print_title(no_color: bool) {
    let choice = if no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    let mut stdout = StandardStream::stdout(choice);
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true));
    println!("--- Animal inheritance exercise: conformance report ---");
    let _ = stdout.reset();
}
