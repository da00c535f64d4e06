//! Background tasks module
//!
//! One practice timer task runs per exercise; instances are replaced, not
//! reused, when the session moves on.

pub mod practice_timer;

// Re-export main items
pub use practice_timer::{PracticeTimer, SessionEvent, TimerCommand};
