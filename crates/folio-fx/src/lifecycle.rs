//! Lifecycle handles for continuous effect loops
//!
//! A frame loop checks its handle once per frame and exits when the handle
//! has been stopped. Clones share the same state, so the loop and whoever
//! owns the effect observe the same transitions.

use std::cell::Cell;
use std::rc::Rc;

/// Lifecycle of a continuous loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleState {
    /// Created, not yet started
    Idle,
    /// Loop is scheduled
    Running,
    /// Loop exits at its next frame; terminal
    Stopped,
}

/// Shared start/stop handle for one effect
#[derive(Clone, Debug)]
pub struct EffectHandle {
    name: &'static str,
    state: Rc<Cell<LifecycleState>>,
}

impl EffectHandle {
    /// Create an idle handle
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: Rc::new(Cell::new(LifecycleState::Idle)),
        }
    }

    /// Effect name, used in logs
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Current state
    pub fn state(&self) -> LifecycleState {
        self.state.get()
    }

    /// Move `Idle -> Running`
    ///
    /// Returns false if the effect was already started or has been stopped;
    /// the caller must not schedule a second loop in that case.
    pub fn start(&self) -> bool {
        if self.state.get() == LifecycleState::Idle {
            self.state.set(LifecycleState::Running);
            true
        } else {
            false
        }
    }

    /// Stop the effect. Idempotent.
    pub fn stop(&self) {
        self.state.set(LifecycleState::Stopped);
    }

    /// Whether the loop should keep scheduling frames
    pub fn is_running(&self) -> bool {
        self.state.get() == LifecycleState::Running
    }
}
