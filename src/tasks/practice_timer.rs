//! Practice timer background task: one countdown instance per exercise

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::{mpsc, watch},
    task::JoinHandle,
    time::{self, Interval, MissedTickBehavior},
};
use tracing::{debug, info};

use crate::{
    services::{alert::spawn_expiry_alert, audio::ToneSink},
    state::{TickOutcome, TimerState},
};

/// Time between countdown decrements
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Control messages accepted by a running timer instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Start,
    TogglePause,
    Stop,
    Skip,
    DismissAlert,
}

/// Notifications the timer sends back to its caller
///
/// Only explicit stop/skip requests are reported; expiry shows up in the
/// state snapshots instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The timer was stopped and reset to its configured duration
    Stopped,
    /// The caller asked to move on; a new instance should replace this one
    Skipped,
}

/// Handle to one spawned practice timer instance
///
/// Commands are fire-and-forget, matching the total operations of the
/// underlying state machine. Dropping the handle aborts the task, which
/// cancels the active tick interval, so a discarded instance can never
/// decrement again.
pub struct PracticeTimer {
    commands: mpsc::UnboundedSender<TimerCommand>,
    snapshot: watch::Receiver<TimerState>,
    task: JoinHandle<()>,
}

impl PracticeTimer {
    /// Spawn a timer instance for one exercise's duration
    pub fn spawn(
        duration_seconds: u64,
        tone: Arc<dyn ToneSink>,
        events: mpsc::UnboundedSender<SessionEvent>,
    ) -> Self {
        let state = TimerState::new(duration_seconds);
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(state.clone());

        let task = tokio::spawn(practice_timer_task(
            state,
            command_rx,
            snapshot_tx,
            events,
            tone,
        ));

        Self {
            commands: command_tx,
            snapshot: snapshot_rx,
            task,
        }
    }

    /// Begin the countdown
    pub fn start(&self) {
        self.send(TimerCommand::Start);
    }

    /// Play/pause toggle
    pub fn toggle_pause(&self) {
        self.send(TimerCommand::TogglePause);
    }

    /// Reset the countdown to its configured duration
    pub fn stop(&self) {
        self.send(TimerCommand::Stop);
    }

    /// Halt this instance so the caller can move to the next exercise
    pub fn skip(&self) {
        self.send(TimerCommand::Skip);
    }

    /// Hide the "time's up" alert
    pub fn dismiss_alert(&self) {
        self.send(TimerCommand::DismissAlert);
    }

    /// Current state of the countdown
    pub fn snapshot(&self) -> TimerState {
        self.snapshot.borrow().clone()
    }

    /// Watch channel with a snapshot per command and per tick
    pub fn watch(&self) -> watch::Receiver<TimerState> {
        self.snapshot.clone()
    }

    fn send(&self, command: TimerCommand) {
        // a closed channel means the task is gone; nothing left to control
        let _ = self.commands.send(command);
    }
}

impl Drop for PracticeTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Interval whose first tick fires one full period from now
fn tick_interval() -> Interval {
    let mut interval = time::interval_at(time::Instant::now() + TICK_PERIOD, TICK_PERIOD);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval
}

/// Task owning one countdown from creation to teardown
///
/// The ticker is polled only while armed, and every transition into the
/// running phase replaces it with a fresh interval, so at most one
/// periodic schedule is ever live per instance and a resume never inherits
/// a partially elapsed period.
async fn practice_timer_task(
    mut state: TimerState,
    mut commands: mpsc::UnboundedReceiver<TimerCommand>,
    snapshot_tx: watch::Sender<TimerState>,
    events: mpsc::UnboundedSender<SessionEvent>,
    tone: Arc<dyn ToneSink>,
) {
    debug!(
        "practice timer task started for {}s",
        state.configured_seconds()
    );
    let mut ticker = tick_interval();
    let mut armed = false;

    loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else {
                    // caller dropped the handle's sender half; tear down
                    break;
                };

                match command {
                    TimerCommand::Start => {
                        if state.start() {
                            ticker = tick_interval();
                            armed = true;
                            debug!("countdown started: {}s", state.remaining_seconds());
                        }
                    }
                    TimerCommand::TogglePause => {
                        state.toggle_pause();
                        if state.is_ticking() {
                            ticker = tick_interval();
                            armed = true;
                        } else {
                            armed = false;
                        }
                    }
                    TimerCommand::Stop => {
                        state.stop();
                        armed = false;
                        let _ = events.send(SessionEvent::Stopped);
                    }
                    TimerCommand::Skip => {
                        state.skip();
                        armed = false;
                        let _ = events.send(SessionEvent::Skipped);
                    }
                    TimerCommand::DismissAlert => {
                        state.dismiss_alert();
                    }
                }

                let _ = snapshot_tx.send(state.clone());
            }

            _ = ticker.tick(), if armed => {
                match state.tick() {
                    TickOutcome::Decremented => {}
                    TickOutcome::Expired => {
                        info!(
                            "time is up after {}s of practice",
                            state.configured_seconds()
                        );
                        armed = false;
                        spawn_expiry_alert(Arc::clone(&tone));
                    }
                    TickOutcome::Halted => {
                        // the ticker is only armed while running
                        armed = false;
                    }
                }

                let _ = snapshot_tx.send(state.clone());
            }
        }
    }

    debug!("practice timer task finished");
}
