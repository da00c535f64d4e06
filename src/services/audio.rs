//! Tone playback behind the alert

use std::{thread, time::Duration};

use rodio::{source::SineWave, OutputStream, Sink, Source};
use tracing::{debug, info};

/// Loudness applied to alert tones
const TONE_GAIN: f32 = 0.3;

/// Fire-and-forget tone playback
///
/// Implementations return immediately and report nothing back; the timer
/// never depends on whether a tone was actually heard.
pub trait ToneSink: Send + Sync {
    /// Play a single tone of the given frequency and length
    fn play_tone(&self, frequency_hz: f32, duration_ms: u64);
}

/// Plays sine tones through the default audio output
///
/// Each call acquires its own output stream on a short-lived thread and
/// releases it when the tone finishes, so no audio handle outlives the
/// alert that needed it.
#[derive(Debug, Default)]
pub struct RodioTone;

impl ToneSink for RodioTone {
    fn play_tone(&self, frequency_hz: f32, duration_ms: u64) {
        thread::spawn(move || {
            if let Err(e) = play_blocking(frequency_hz, duration_ms) {
                debug!("tone playback failed: {}", e);
            }
        });
    }
}

fn play_blocking(frequency_hz: f32, duration_ms: u64) -> Result<(), String> {
    let (_stream, handle) =
        OutputStream::try_default().map_err(|e| format!("no audio output available: {}", e))?;
    let sink =
        Sink::try_new(&handle).map_err(|e| format!("failed to open audio sink: {}", e))?;

    let tone = SineWave::new(frequency_hz)
        .take_duration(Duration::from_millis(duration_ms))
        .amplify(TONE_GAIN);
    sink.append(tone);
    sink.sleep_until_end();
    Ok(())
}

/// Discards every tone; used with --silent or when no device is available
#[derive(Debug, Default)]
pub struct SilentTone;

impl ToneSink for SilentTone {
    fn play_tone(&self, _frequency_hz: f32, _duration_ms: u64) {}
}

/// Probe the default audio output once at startup
pub fn check_audio_output() -> Result<(), String> {
    let _stream =
        OutputStream::try_default().map_err(|e| format!("no default audio output: {}", e))?;
    info!("audio output is available");
    Ok(())
}
