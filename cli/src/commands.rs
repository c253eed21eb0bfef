use std::io::Write;

use steep_core::schedule::{stage_strip, target_label};
use steep_core::timer::{TimerSnapshot, TimerStatus, VisualState};
use steep_core::{AppConfigExt, Stage, parse_config};
use tokio::task::JoinHandle;

use crate::CliContext;
use crate::clock::TickReceiver;
use crate::context::CliEngine;

/// Shown for any configuration the timer cannot use
pub const CONFIG_ERROR: &str = "Incorrect configuration, please follow guidelines";

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Parse for the timer: text that is not blank must yield at least one stage.
pub fn parse_for_timer(text: &str) -> Result<Vec<Stage>, String> {
    let stages = parse_config(text).map_err(|e| {
        tracing::debug!(error = %e, "configuration rejected");
        CONFIG_ERROR.to_string()
    })?;
    if stages.is_empty() && !text.trim().is_empty() {
        return Err(CONFIG_ERROR.to_string());
    }
    Ok(stages)
}

/// Load a configuration into the engine. A rejected configuration leaves
/// the engine without stages.
pub async fn load_config(text: &str, ctx: &CliContext) {
    let result = parse_for_timer(text);
    *ctx.current_config.write().await = text.to_string();

    let mut engine = ctx.engine.lock().await;
    match result {
        Ok(stages) => {
            engine.load(stages);
            println!("{}", render_status(&engine.snapshot(), engine.stages()));
        }
        Err(message) => {
            engine.load(Vec::new());
            println!("{message}");
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Timer Controls
// ─────────────────────────────────────────────────────────────────────────────

/// Apply a transition and print the resulting status line
pub async fn transition(ctx: &CliContext, op: impl FnOnce(&mut CliEngine)) {
    let mut engine = ctx.engine.lock().await;
    if engine.stages().is_empty() {
        println!("No stages loaded");
        return;
    }
    op(&mut *engine);
    println!("{}", status_line(&engine.snapshot()));
}

/// Step back one stage, or say why nothing happened
pub async fn retreat(ctx: &CliContext) {
    let mut engine = ctx.engine.lock().await;
    if !engine.snapshot().can_retreat() {
        println!("Already at the first stage");
        return;
    }
    engine.retreat_stage();
    println!("{}", status_line(&engine.snapshot()));
}

/// Jump to a 1-based stage and start it fresh, as clicking the stage bar does
pub async fn jump_to_stage(number: usize, ctx: &CliContext) {
    let mut engine = ctx.engine.lock().await;
    let count = engine.stages().len();
    if number == 0 || !engine.set_stage(number - 1) {
        println!("No stage {number} (have {count})");
        return;
    }
    engine.reset();
    println!("{}", render_status(&engine.snapshot(), engine.stages()));
}

pub async fn silence(ctx: &CliContext) {
    ctx.engine.lock().await.silence();
}

pub async fn show_status(ctx: &CliContext) {
    let engine = ctx.engine.lock().await;
    println!("{}", render_status(&engine.snapshot(), engine.stages()));
}

// ─────────────────────────────────────────────────────────────────────────────
// Presets
// ─────────────────────────────────────────────────────────────────────────────

pub async fn list_presets(ctx: &CliContext) {
    let config = ctx.config.read().await;
    if config.presets.is_empty() {
        println!("No saved presets");
        return;
    }

    for preset in &config.presets {
        let marker = if config.active_preset_name.as_deref() == Some(preset.name.as_str()) {
            "*"
        } else {
            " "
        };
        println!("{} {:<24} {}", marker, preset.name, preset.config);
    }
}

/// Save the currently loaded configuration under `name`
pub async fn save_preset(name: &str, ctx: &CliContext) {
    let text = ctx.current_config.read().await.clone();
    let mut config = ctx.config.write().await;
    match config.save_preset(name, &text).and_then(|_| config.save()) {
        Ok(()) => println!("Saved preset '{}'", name.trim()),
        Err(e) => println!("{e}"),
    }
}

pub async fn use_preset(name: &str, ctx: &CliContext) {
    let text = {
        let mut config = ctx.config.write().await;
        let text = match config.activate_preset(name) {
            Ok(preset) => preset.config.clone(),
            Err(e) => {
                println!("{e}");
                return;
            }
        };
        if let Err(e) = config.save() {
            tracing::warn!(error = %e, "failed to persist active preset");
        }
        text
    };
    load_config(&text, ctx).await;
}

pub async fn rename_preset(old_name: &str, new_name: &str, ctx: &CliContext) {
    let mut config = ctx.config.write().await;
    match config
        .rename_preset(old_name, new_name)
        .and_then(|_| config.save())
    {
        Ok(()) => println!("Renamed '{old_name}' to '{}'", new_name.trim()),
        Err(e) => println!("{e}"),
    }
}

pub async fn delete_preset(name: &str, ctx: &CliContext) {
    let mut config = ctx.config.write().await;
    match config.delete_preset(name).and_then(|_| config.save()) {
        Ok(()) => println!("Deleted preset '{name}'"),
        Err(e) => println!("{e}"),
    }
}

pub async fn show_settings(ctx: &CliContext) {
    if let Some(path) = steep_core::AppConfig::config_path() {
        println!("config file: {}", path.display());
    }
    let config = ctx.config.read().await;
    println!("default config: {}", config.default_config);
    println!("presets: {}", config.presets.len());
    println!("{:#?}", config.audio);
}

pub fn exit() {
    let mut out = std::io::stdout();
    let _ = write!(out, "quitting...");
    let _ = out.flush();
}

// ─────────────────────────────────────────────────────────────────────────────
// Tick Driver
// ─────────────────────────────────────────────────────────────────────────────

/// Forward clock ticks to the engine and echo cue boundaries.
pub fn spawn_tick_driver(ctx: CliContext, mut ticks: TickReceiver) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(generation) = ticks.recv().await {
            let mut engine = ctx.engine.lock().await;
            let before = engine.snapshot();
            if engine.tick(generation)
                && let Some(message) = notice(&before, &engine.snapshot())
            {
                println!("{message}");
            }
        }
    })
}

/// One-line notice for a tick that crossed a cue boundary
pub fn notice(before: &TimerSnapshot, after: &TimerSnapshot) -> Option<String> {
    let stage = after.current_stage.as_ref()?;

    if after.continuous_cue_active && !before.continuous_cue_active {
        return Some(format!("[steep] {}s  steep done", after.elapsed_secs));
    }

    if after.visual_state == VisualState::Yellow && before.visual_state != VisualState::Yellow {
        let what = if stage.is_range() {
            "window open"
        } else {
            "almost there"
        };
        return Some(format!("[steep] {}s  {what}", after.elapsed_secs));
    }

    None
}

// ─────────────────────────────────────────────────────────────────────────────
// Rendering
// ─────────────────────────────────────────────────────────────────────────────

fn status_label(status: TimerStatus) -> &'static str {
    match status {
        TimerStatus::Idle => "idle",
        TimerStatus::Running => "running",
        TimerStatus::Paused => "paused",
        TimerStatus::Finished => "finished",
    }
}

pub fn status_line(snapshot: &TimerSnapshot) -> String {
    let stage_no = snapshot.current_stage_index.map(|i| i + 1).unwrap_or(0);
    let mut line = format!(
        "Stage {} of {}  {}  {}s  {}",
        stage_no,
        snapshot.stage_count,
        target_label(snapshot.current_stage.as_ref()),
        snapshot.elapsed_secs,
        status_label(snapshot.status),
    );
    if snapshot.current_stage.as_ref().is_some_and(|s| s.is_rinse) {
        line.push_str("  RINSE");
    }
    if snapshot.visual_state == VisualState::Blinking {
        line.push_str("  !!");
    }
    line
}

pub fn render_status(snapshot: &TimerSnapshot, stages: &[Stage]) -> String {
    format!(
        "{}\n{}",
        status_line(snapshot),
        stage_strip(stages, snapshot.current_stage_index)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use steep_core::timer::{TimerEngine, Cue};
    use steep_core::timer::NoClock;

    #[test]
    fn parse_for_timer_applies_empty_result_policy() {
        assert!(parse_for_timer("").unwrap().is_empty());
        assert_eq!(parse_for_timer(" -> ").unwrap_err(), CONFIG_ERROR);
        assert_eq!(parse_for_timer("abc").unwrap_err(), CONFIG_ERROR);
        assert_eq!(parse_for_timer("10 -> 20").unwrap().len(), 2);
    }

    #[test]
    fn notice_reports_boundaries_once() {
        let stages = parse_config("2-4").unwrap();
        let mut engine: TimerEngine<NoClock, Vec<Cue>> =
            TimerEngine::new(stages, NoClock, Vec::new());
        engine.start();

        let mut notices = Vec::new();
        for _ in 0..6 {
            let before = engine.snapshot();
            assert!(engine.tick(engine.generation()));
            notices.extend(notice(&before, &engine.snapshot()));
        }

        assert_eq!(
            notices,
            vec![
                "[steep] 2s  window open".to_string(),
                "[steep] 4s  steep done".to_string(),
            ]
        );
    }

    #[test]
    fn status_line_shows_stage_and_rinse() {
        let stages = parse_config("(5) -> 10").unwrap();
        let engine: TimerEngine<NoClock, Vec<Cue>> =
            TimerEngine::new(stages, NoClock, Vec::new());
        assert_eq!(
            status_line(&engine.snapshot()),
            "Stage 1 of 2  Target: 5s  0s  idle  RINSE"
        );
        assert_eq!(
            render_status(&engine.snapshot(), engine.stages()),
            "Stage 1 of 2  Target: 5s  0s  idle  RINSE\n[5] | 10"
        );
    }
}
