//! Session progress through a practice plan

use chrono::Utc;

use crate::plan::{Exercise, PracticePlan, TempoRecord};

/// Result of recording a tempo for the current exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TempoUpdate {
    /// The tempo that was just recorded
    pub bpm: u32,
    /// Best tempo for the exercise after this record
    pub best_bpm: u32,
    /// Whether this record beat the previous best
    pub new_record: bool,
}

/// Position and per-exercise records for one practice session
///
/// The session owns its copy of the plan's exercises; tempo records made
/// while practicing only live here for the lifetime of the session.
#[derive(Debug)]
pub struct SessionState {
    plan_name: Option<String>,
    exercises: Vec<Exercise>,
    current: usize,
    finished: bool,
    records_this_session: usize,
}

impl SessionState {
    /// Start a session at the first exercise of the plan
    pub fn new(plan: PracticePlan) -> Self {
        Self {
            plan_name: plan.name,
            exercises: plan.exercises,
            current: 0,
            finished: false,
            records_this_session: 0,
        }
    }

    /// Plan name, if the plan file carried one
    pub fn plan_name(&self) -> Option<&str> {
        self.plan_name.as_deref()
    }

    /// The exercise currently being practiced
    pub fn current_exercise(&self) -> Option<&Exercise> {
        if self.finished {
            None
        } else {
            self.exercises.get(self.current)
        }
    }

    /// Zero-based position in the plan
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Number of exercises in the plan
    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the plan has been worked through
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Move to the next exercise; returns it, or None when the plan is done
    pub fn advance(&mut self) -> Option<&Exercise> {
        if self.finished {
            return None;
        }
        if self.current + 1 < self.exercises.len() {
            self.current += 1;
            self.exercises.get(self.current)
        } else {
            self.finished = true;
            None
        }
    }

    /// Record a tempo for the current exercise
    ///
    /// Keeps the best tempo on the exercise and appends a dated history
    /// entry. Returns None when the session is already finished.
    pub fn record_tempo(&mut self, bpm: u32) -> Option<TempoUpdate> {
        if self.finished {
            return None;
        }
        let exercise = self.exercises.get_mut(self.current)?;

        let previous_best = exercise.tempo_bpm.unwrap_or(0);
        let new_record = bpm > previous_best;
        let best_bpm = previous_best.max(bpm);
        exercise.tempo_bpm = Some(best_bpm);
        exercise.history.push(TempoRecord {
            bpm,
            recorded_at: Utc::now(),
        });
        self.records_this_session += 1;

        Some(TempoUpdate {
            bpm,
            best_bpm,
            new_record,
        })
    }

    /// Tempo records made during this session
    pub fn records_this_session(&self) -> usize {
        self.records_this_session
    }

    /// All exercises with their current records, for the session summary
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }
}
