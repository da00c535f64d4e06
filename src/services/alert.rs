//! The "time's up" alert: three short tones, evenly staggered

use std::{sync::Arc, time::Duration};

use tokio::time::sleep;
use tracing::debug;

use super::audio::ToneSink;

/// Frequency of each alert tone
pub const ALERT_TONE_HZ: f32 = 800.0;
/// Length of each tone
pub const ALERT_TONE_MS: u64 = 500;
/// Offset between the starts of consecutive tones
pub const ALERT_TONE_SPACING_MS: u64 = 700;
/// Tones per alert
pub const ALERT_TONE_COUNT: u64 = 3;

/// Schedule the three-tone expiry alert and return immediately
///
/// Each tone is an independent one-shot delayed task. They are not
/// cancelled when the timer is stopped or skipped mid-alert; the alert is
/// best-effort and never feeds back into timer state.
pub fn spawn_expiry_alert(tone: Arc<dyn ToneSink>) {
    debug!("scheduling expiry alert");
    for i in 0..ALERT_TONE_COUNT {
        let tone = Arc::clone(&tone);
        let delay = Duration::from_millis(i * ALERT_TONE_SPACING_MS);
        tokio::spawn(async move {
            if !delay.is_zero() {
                sleep(delay).await;
            }
            tone.play_tone(ALERT_TONE_HZ, ALERT_TONE_MS);
        });
    }
}
