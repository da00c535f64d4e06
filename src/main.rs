//! Woodshed - terminal session timer for guitar practice plans
//!
//! This is the main entry point for the woodshed binary.

use std::sync::Arc;

use tracing::{info, warn};

use woodshed::{
    config::Config,
    console::{run_console, view},
    plan::PracticePlan,
    services::{check_audio_output, RodioTone, SilentTone, ToneSink},
    state::{AppState, SessionState},
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_env_filter(format!("woodshed={}", config.log_level()))
        .init();

    let plan = PracticePlan::load(&config.plan)?;

    if config.check_plan {
        println!(
            "plan ok: {} exercises, {} planned",
            plan.exercises.len(),
            view::format_time(plan.total_seconds())
        );
        for exercise in &plan.exercises {
            println!("  - {}", exercise.describe());
        }
        return Ok(());
    }

    info!("starting woodshed v0.1.0");
    info!(
        "plan: {} ({} exercises)",
        config.plan.display(),
        plan.exercises.len()
    );

    let tone: Arc<dyn ToneSink> = if config.silent {
        Arc::new(SilentTone)
    } else {
        match check_audio_output() {
            Ok(()) => Arc::new(RodioTone),
            Err(e) => {
                warn!("{}; alert tones disabled", e);
                Arc::new(SilentTone)
            }
        }
    };

    let state = Arc::new(AppState::new(SessionState::new(plan)));

    tokio::select! {
        result = run_console(Arc::clone(&state), tone) => {
            result?;
        }
        _ = shutdown_signal() => {
            info!("shutdown signal received");
        }
    }

    info!("practiced for {}", state.practice_elapsed());
    Ok(())
}
