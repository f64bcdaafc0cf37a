//! Environment shims.
//!
//! `Stage` stands in for the drawing environment: it owns the frame counter,
//! the per-frame draw callback, and the canvas lifecycle. The harness never
//! waits on a real animation loop; `advance_to_frame` is an explicit
//! synchronous tick, and readiness is a one-shot channel the environment
//! fires when the canvas is created, in place of a timer poll.
//!
//! Draw faults never propagate out of a tick: they are captured with the
//! frame they occurred in and surfaced once, at the start of a run.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::error::{HarnessError, SubjectError};

/// Per-frame draw callback. Receives the current frame number.
pub type DrawFn = Box<dyn FnMut(u64) -> Result<(), SubjectError>>;

/// One captured draw fault, attributed to the frame it occurred in.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameFault {
    pub frame: u64,
    pub message: String,
}

pub struct Stage {
    frame: u64,
    draw: DrawFn,
    faults: Vec<FrameFault>,
    interactive: bool,
    canvas: Option<(u32, u32)>,
    ready_txs: Vec<Sender<()>>,
}

impl Stage {
    pub fn new() -> Self {
        Self {
            frame: 0,
            draw: Box::new(|_| Ok(())),
            faults: Vec::new(),
            interactive: true,
            canvas: None,
            ready_txs: Vec::new(),
        }
    }

    /// Installs the environment's draw callback.
    pub fn install_draw(&mut self, draw: impl FnMut(u64) -> Result<(), SubjectError> + 'static) {
        self.draw = Box::new(draw);
    }

    /// Replaces the installed draw callback with a no-op, silencing
    /// subject-driven drawing for the rest of the run.
    pub fn substitute_draw(&mut self) {
        self.draw = Box::new(|_| Ok(()));
    }

    /// Marks the environment ready and fires every outstanding readiness
    /// signal. Readiness fires at most once; a second call only updates the
    /// canvas size.
    pub fn create_canvas(&mut self, width: u32, height: u32) {
        let already_ready = self.canvas.is_some();
        self.canvas = Some((width, height));
        if !already_ready {
            for tx in self.ready_txs.drain(..) {
                let _ = tx.send(());
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.canvas.is_some()
    }

    pub fn canvas_size(&self) -> Option<(u32, u32)> {
        self.canvas
    }

    /// Returns a one-shot readiness handle. If the canvas already exists the
    /// handle is pre-signalled, so a late subscriber never blocks.
    pub fn ready_signal(&mut self) -> Readiness {
        let (tx, rx) = mpsc::channel();
        if self.is_ready() {
            let _ = tx.send(());
        } else {
            self.ready_txs.push(tx);
        }
        Readiness { rx }
    }

    /// The pointer-events shim: the harness disables interaction so the
    /// environment cannot react to input mid-run.
    pub fn set_interactive(&mut self, on: bool) {
        self.interactive = on;
    }

    pub fn interactive(&self) -> bool {
        self.interactive
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Ticks the environment until the frame counter reaches `target`,
    /// running the installed draw callback once per frame. A fault from the
    /// callback is captured with its frame number and the ticking continues.
    pub fn advance_to_frame(&mut self, target: u64) {
        while self.frame < target {
            self.frame += 1;
            if let Err(e) = (self.draw)(self.frame) {
                self.faults.push(FrameFault {
                    frame: self.frame,
                    message: e.to_string(),
                });
            }
        }
    }

    /// The environment signal: draw faults captured so far.
    pub fn canvas_status(&self) -> &[FrameFault] {
        &self.faults
    }

    /// Consumes the environment signal. The orchestrator drains it exactly
    /// once, at the start of a run.
    pub fn drain_faults(&mut self) -> Vec<FrameFault> {
        std::mem::take(&mut self.faults)
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot readiness handle. Awaiting it parks until the environment
/// creates its canvas; if the environment is dropped first, the wait
/// resolves to an error instead of hanging.
pub struct Readiness {
    rx: Receiver<()>,
}

impl Readiness {
    pub fn wait(self) -> Result<(), HarnessError> {
        self.rx.recv().map_err(|_| HarnessError::EnvironmentLost)
    }
}
