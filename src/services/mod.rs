//! External collaborators of the timer
//!
//! The only one is sound: the tone sink the expiry alert plays through.

pub mod alert;
pub mod audio;

// Re-export main items
pub use alert::spawn_expiry_alert;
pub use audio::{check_audio_output, RodioTone, SilentTone, ToneSink};
