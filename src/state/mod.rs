//! State management module
//!
//! Holds the countdown state machine, the session's progress through the
//! practice plan, and the state shared with the console.

pub mod app_state;
pub mod session_state;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use session_state::{SessionState, TempoUpdate};
pub use timer_state::{TickOutcome, TimerPhase, TimerState};
