// Menagerie demo runner: registers the reference subjects and runs the
// conformance checks against them.
// Usage: cargo run --bin harness_runner [--json] [--no-color] [--base] [--frames N]

use std::process;

fn main() {
    let code = menagerie::cli::run();
    if code != 0 {
        process::exit(code);
    }
}
