//! Console front end
//!
//! A line-oriented loop over stdin that plays the part of the exercise UI:
//! it owns the current timer instance, swaps in a fresh one whenever the
//! session moves to the next exercise, and renders countdown snapshots.

pub mod command;
pub mod view;

use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::{
    services::audio::ToneSink,
    state::{AppState, TimerPhase},
    tasks::{PracticeTimer, SessionEvent},
};

use command::ConsoleCommand;

enum Flow {
    Continue,
    Quit,
}

/// Run the practice session until the plan ends, the user quits, or stdin
/// closes
pub async fn run_console(state: Arc<AppState>, tone: Arc<dyn ToneSink>) -> Result<()> {
    let (events_tx, mut events_rx) = mpsc::unbounded_channel();

    let first = state
        .with_session(|s| s.current_exercise().cloned())
        .map_err(anyhow::Error::msg)?;
    let Some(mut current) = first else {
        // plans are validated as non-empty before a session starts
        return Ok(());
    };

    let intro = state
        .with_session(|s| view::session_intro(s))
        .map_err(anyhow::Error::msg)?;
    println!("{}", intro);
    println!("{}", view::help_text());
    println!("up first: {}", current.describe());

    let mut timer = PracticeTimer::spawn(
        current.duration_seconds,
        Arc::clone(&tone),
        events_tx.clone(),
    );
    let mut snapshots = timer.watch();
    let mut alert_announced = false;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // stdin closed; end the session
                    break;
                };
                match command::parse(&line) {
                    Ok(None) => {}
                    Ok(Some(parsed)) => {
                        if let Flow::Quit = handle_command(parsed, &timer, &state) {
                            break;
                        }
                    }
                    Err(hint) => println!("{}", hint),
                }
            }

            changed = snapshots.changed() => {
                if changed.is_err() {
                    continue;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                println!("{}", view::countdown_line(&current, &snapshot));

                if snapshot.alert_visible() && snapshot.phase() == TimerPhase::Expired {
                    if !alert_announced {
                        println!("{}", view::expiry_banner(&current));
                        alert_announced = true;
                    }
                } else {
                    alert_announced = false;
                }
            }

            event = events_rx.recv() => {
                let Some(event) = event else { continue };
                match event {
                    SessionEvent::Stopped => {
                        info!("timer stopped and reset");
                    }
                    SessionEvent::Skipped => {
                        let next = state
                            .with_session(|s| s.advance().cloned())
                            .map_err(anyhow::Error::msg)?;
                        match next {
                            Some(next) => {
                                println!("next up: {}", next.describe());
                                timer = PracticeTimer::spawn(
                                    next.duration_seconds,
                                    Arc::clone(&tone),
                                    events_tx.clone(),
                                );
                                snapshots = timer.watch();
                                alert_announced = false;
                                current = next;
                            }
                            None => {
                                // the whole plan has been worked through
                                break;
                            }
                        }
                    }
                }
            }
        }
    }

    let summary = state
        .with_session(|s| view::session_summary(s, &state.practice_elapsed()))
        .map_err(anyhow::Error::msg)?;
    println!("{}", summary);
    Ok(())
}

/// Apply one parsed command to the current timer instance
fn handle_command(parsed: ConsoleCommand, timer: &PracticeTimer, state: &Arc<AppState>) -> Flow {
    match parsed {
        ConsoleCommand::Start => {
            state.record_action("start");
            timer.start();
        }
        ConsoleCommand::Pause => {
            state.record_action("pause");
            timer.toggle_pause();
        }
        ConsoleCommand::Stop => {
            state.record_action("stop");
            timer.stop();
        }
        ConsoleCommand::Skip => {
            state.record_action("skip");
            timer.skip();
        }
        ConsoleCommand::Dismiss => {
            state.record_action("dismiss");
            timer.dismiss_alert();
        }
        ConsoleCommand::Tempo(bpm) => {
            state.record_action("tempo");
            match state.with_session(|s| s.record_tempo(bpm)) {
                Ok(Some(update)) if update.new_record => {
                    println!("new record: {} bpm", update.best_bpm);
                }
                Ok(Some(update)) => {
                    println!("recorded {} bpm (best is {})", update.bpm, update.best_bpm);
                }
                Ok(None) => println!("no exercise to record a tempo for"),
                Err(e) => warn!("failed to record tempo: {}", e),
            }
        }
        ConsoleCommand::Status => {
            let snapshot = timer.snapshot();
            match state.with_session(|s| {
                view::status_block(s, &snapshot, &state.practice_elapsed(), state.last_action())
            }) {
                Ok(block) => println!("{}", block),
                Err(e) => warn!("failed to read session state: {}", e),
            }
        }
        ConsoleCommand::Help => println!("{}", view::help_text()),
        ConsoleCommand::Quit => return Flow::Quit,
    }
    Flow::Continue
}
