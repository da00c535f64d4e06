//! Text rendering for the practice console

use chrono::{DateTime, Utc};

use crate::plan::Exercise;
use crate::state::{SessionState, TimerPhase, TimerState};

/// Dots in the progress bar, one per 5% of the exercise
const PROGRESS_DOTS: usize = 20;

/// Format seconds as mm:ss
pub fn format_time(total_seconds: u64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Progress through the countdown as a fixed-width dot bar
pub fn progress_bar(timer: &TimerState) -> String {
    let filled = ((timer.elapsed_fraction() * PROGRESS_DOTS as f64).floor() as usize)
        .min(PROGRESS_DOTS);

    let mut bar = String::with_capacity(PROGRESS_DOTS * 3 + 2);
    bar.push('[');
    for i in 0..PROGRESS_DOTS {
        bar.push(if i < filled { '●' } else { '○' });
    }
    bar.push(']');
    bar
}

fn phase_name(phase: TimerPhase) -> &'static str {
    match phase {
        TimerPhase::Idle => "ready",
        TimerPhase::Running => "running",
        TimerPhase::Paused => "paused",
        TimerPhase::Expired => "done",
    }
}

/// One-line countdown display, refreshed on every tick
pub fn countdown_line(exercise: &Exercise, timer: &TimerState) -> String {
    let suffix = match timer.phase() {
        TimerPhase::Running => String::new(),
        phase => format!(" ({})", phase_name(phase)),
    };
    format!(
        "{} {} {}{}",
        progress_bar(timer),
        format_time(timer.remaining_seconds()),
        exercise.name,
        suffix
    )
}

/// Banner shown when an exercise's time runs out
pub fn expiry_banner(exercise: &Exercise) -> String {
    format!(
        "Time's up! {} completed. `dismiss` clears this, `skip` moves on.",
        exercise.name
    )
}

/// Intro printed when the session opens
pub fn session_intro(session: &SessionState) -> String {
    let total: u64 = session.exercises().iter().map(|e| e.duration_seconds).sum();
    let name = session.plan_name().unwrap_or("practice plan");
    format!(
        "{}: {} exercises, {} planned",
        name,
        session.exercise_count(),
        format_time(total)
    )
}

/// Multi-line answer to the `status` command
pub fn status_block(
    session: &SessionState,
    timer: &TimerState,
    elapsed: &str,
    last_action: Option<(String, DateTime<Utc>)>,
) -> String {
    let mut out = String::new();
    match session.current_exercise() {
        Some(exercise) => {
            out.push_str(&format!(
                "exercise {}/{}: {}\n",
                session.current_index() + 1,
                session.exercise_count(),
                exercise.describe()
            ));
        }
        None => out.push_str("plan finished\n"),
    }
    out.push_str(&format!(
        "timer: {} remaining ({})\n",
        format_time(timer.remaining_seconds()),
        phase_name(timer.phase())
    ));
    out.push_str(&format!("practiced for {}", elapsed));
    if let Some((action, at)) = last_action {
        out.push_str(&format!("\nlast action: {} at {}", action, at.format("%H:%M:%S")));
    }
    out
}

/// Wrap-up printed when the plan is finished or the console quits
pub fn session_summary(session: &SessionState, elapsed: &str) -> String {
    let mut out = format!(
        "session over after {}: {} of {} exercises done",
        elapsed,
        session.current_index() + usize::from(session.is_finished()),
        session.exercise_count()
    );
    if session.records_this_session() > 0 {
        out.push_str(&format!(
            ", {} tempo record(s) made",
            session.records_this_session()
        ));
    }
    for exercise in session.exercises() {
        out.push_str(&format!("\n  - {}", exercise.describe()));
    }
    out
}

/// The command list shown by `help`
pub fn help_text() -> &'static str {
    "commands: start | pause | stop | skip | dismiss | tempo <bpm> | status | help | quit"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(name: &str, seconds: u64) -> Exercise {
        Exercise {
            name: name.to_string(),
            duration_seconds: seconds,
            tempo_bpm: None,
            goal_bpm: None,
            history: Vec::new(),
        }
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(600), "10:00");
        assert_eq!(format_time(3599), "59:59");
    }

    #[test]
    fn progress_bar_fills_with_elapsed_time() {
        let mut timer = TimerState::new(4);
        assert_eq!(progress_bar(&timer), format!("[{}]", "○".repeat(20)));

        timer.start();
        timer.tick();
        assert_eq!(
            progress_bar(&timer),
            format!("[{}{}]", "●".repeat(5), "○".repeat(15))
        );

        timer.tick();
        timer.tick();
        timer.tick();
        assert_eq!(progress_bar(&timer), format!("[{}]", "●".repeat(20)));
    }

    #[test]
    fn countdown_line_names_the_exercise() {
        let ex = exercise("Sweep picking", 90);
        let mut timer = TimerState::new(90);
        let line = countdown_line(&ex, &timer);
        assert!(line.contains("01:30"));
        assert!(line.contains("Sweep picking"));
        assert!(line.contains("(ready)"));

        timer.start();
        assert!(!countdown_line(&ex, &timer).contains('('));
    }
}
