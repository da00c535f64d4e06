//! Woodshed - a terminal session timer for guitar practice plans
//!
//! The library carries the countdown state machine, the per-exercise timer
//! task, the tone/alert collaborators and the console front end; the binary
//! wires them to a practice plan file.

pub mod config;
pub mod console;
pub mod plan;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use plan::{Exercise, PracticePlan};
pub use services::ToneSink;
pub use state::{AppState, SessionState, TimerPhase, TimerState};
pub use tasks::{PracticeTimer, SessionEvent};
pub use utils::shutdown_signal;
