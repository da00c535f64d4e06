//! Practice plan loading and the exercise model

use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded practice tempo for an exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TempoRecord {
    pub bpm: u32,
    pub recorded_at: DateTime<Utc>,
}

/// A single exercise in the practice plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Display name, e.g. "Spider chromatics"
    pub name: String,
    /// Practice duration for one session of this exercise
    pub duration_seconds: u64,
    /// Best tempo reached so far
    #[serde(default)]
    pub tempo_bpm: Option<u32>,
    /// Tempo the player is working towards
    #[serde(default)]
    pub goal_bpm: Option<u32>,
    /// Past tempo records, oldest first
    #[serde(default)]
    pub history: Vec<TempoRecord>,
}

impl Exercise {
    /// One-line description used by the console and the plan check
    pub fn describe(&self) -> String {
        let tempo = match (self.tempo_bpm, self.goal_bpm) {
            (Some(now), Some(goal)) => format!(" [{} -> {} bpm]", now, goal),
            (Some(now), None) => format!(" [{} bpm]", now),
            (None, Some(goal)) => format!(" [goal {} bpm]", goal),
            (None, None) => String::new(),
        };
        format!("{} ({}s){}", self.name, self.duration_seconds, tempo)
    }
}

/// An ordered list of exercises making up one practice session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticePlan {
    #[serde(default)]
    pub name: Option<String>,
    pub exercises: Vec<Exercise>,
}

impl PracticePlan {
    /// Load and validate a plan from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read plan file {}", path.display()))?;
        let plan: PracticePlan = serde_json::from_str(&raw)
            .with_context(|| format!("invalid JSON in plan file {}", path.display()))?;
        plan.validate()?;
        Ok(plan)
    }

    /// Reject plans a timer instance could not be built from
    pub fn validate(&self) -> Result<()> {
        if self.exercises.is_empty() {
            bail!("practice plan has no exercises");
        }
        for exercise in &self.exercises {
            if exercise.duration_seconds == 0 {
                bail!("exercise \"{}\" must have a positive duration", exercise.name);
            }
        }
        Ok(())
    }

    /// Total planned practice time in seconds
    pub fn total_seconds(&self) -> u64 {
        self.exercises.iter().map(|e| e.duration_seconds).sum()
    }
}
