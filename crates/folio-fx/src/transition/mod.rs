//! Animation timing: easing curves and the stat counter ramp

mod counter;
mod easing;

pub use counter::{CounterFrame, CounterRamp, CounterTarget, Precision};
pub use easing::{ease_out_cubic, ease_out_expo};
