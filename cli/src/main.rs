use clap::{Parser, Subcommand};
use std::io::Write;
use std::sync::Arc;

use steep_cli::audio::{AudioCueSink, AudioService, create_audio_channel, default_player};
use steep_cli::clock::{IntervalClock, tick_channel};
use steep_cli::commands;
use steep_cli::context::CliEngine;
use steep_cli::logging;
use steep_cli::repl::{accept, readline};
use steep_cli::CliContext;
use steep_core::{AppConfig, AppConfigExt};

#[tokio::main]
async fn main() -> Result<(), String> {
    let _log_guard = logging::init();

    let config = AppConfig::load();
    let startup_config = config.startup_config().to_string();

    let (tick_tx, tick_rx) = tick_channel();
    let (audio_tx, audio_rx) = create_audio_channel();
    let ctx = CliContext::new(
        config,
        IntervalClock::new(tick_tx),
        AudioCueSink::new(audio_tx),
    );

    {
        let audio = AudioService::new(audio_rx, Arc::clone(&ctx.audio_settings), default_player());
        let mut tasks = ctx.tasks.lock().await;
        tasks.audio = Some(tokio::spawn(audio.run()));
        tasks.tick_driver = Some(commands::spawn_tick_driver(ctx.clone(), tick_rx));
    }

    commands::load_config(&startup_config, &ctx).await;

    loop {
        let line = match readline() {
            Ok(line) => line,
            Err(e) => {
                tracing::info!(reason = %e, "input closed");
                break;
            }
        };
        let Some(line) = accept(&line, &ctx).await else {
            continue;
        };

        match respond(line, &ctx).await {
            Ok(quit) => {
                if quit {
                    break;
                }
            }
            Err(err) => {
                write!(std::io::stdout(), "{err}").map_err(|e| e.to_string())?;
                std::io::stdout().flush().map_err(|e| e.to_string())?;
            }
        }
    }

    ctx.engine.lock().await.reset();
    ctx.tasks.lock().await.abort_all();
    Ok(())
}

#[derive(Parser)]
#[command(version, about = "Steeping timer for multi-infusion tea sessions")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a configuration, e.g. "(3-5 -> 5-7) -> 10 -> 25-30"
    Load { config: String },
    Start,
    Pause,
    /// Start or pause
    #[command(visible_aliases = ["k", "space"])]
    Toggle,
    /// Next stage (finishes on the last one)
    #[command(visible_alias = "l")]
    Next,
    /// Previous stage
    #[command(visible_alias = "j")]
    Prev,
    /// Restart the current stage
    #[command(visible_alias = "r")]
    Reset,
    /// Back to the first stage
    Restart,
    /// Jump to a stage (1-based)
    Stage { number: usize },
    Status,
    /// Stop the repeating tone
    Silence,
    Presets {
        #[command(subcommand)]
        action: PresetAction,
    },
    Config,
    Exit,
}

#[derive(Subcommand)]
enum PresetAction {
    List,
    /// Save the loaded configuration under a name
    Save { name: String },
    /// Load a saved preset
    Use { name: String },
    Rename { old_name: String, new_name: String },
    Delete { name: String },
}

async fn respond(line: &str, ctx: &CliContext) -> Result<bool, String> {
    let mut args = shlex::split(line).ok_or("error: Invalid quoting")?;
    args.insert(0, "steep".to_string());
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;

    match &cli.command {
        Some(Commands::Load { config }) => commands::load_config(config, ctx).await,
        Some(Commands::Start) => commands::transition(ctx, CliEngine::start).await,
        Some(Commands::Pause) => commands::transition(ctx, CliEngine::pause).await,
        Some(Commands::Toggle) => commands::transition(ctx, CliEngine::toggle).await,
        Some(Commands::Next) => commands::transition(ctx, CliEngine::advance_stage).await,
        Some(Commands::Prev) => commands::retreat(ctx).await,
        Some(Commands::Reset) => commands::transition(ctx, CliEngine::reset).await,
        Some(Commands::Restart) => commands::transition(ctx, CliEngine::restart).await,
        Some(Commands::Stage { number }) => commands::jump_to_stage(*number, ctx).await,
        Some(Commands::Status) => commands::show_status(ctx).await,
        Some(Commands::Silence) => {}
        Some(Commands::Presets { action }) => match action {
            PresetAction::List => commands::list_presets(ctx).await,
            PresetAction::Save { name } => commands::save_preset(name, ctx).await,
            PresetAction::Use { name } => commands::use_preset(name, ctx).await,
            PresetAction::Rename { old_name, new_name } => {
                commands::rename_preset(old_name, new_name, ctx).await
            }
            PresetAction::Delete { name } => commands::delete_preset(name, ctx).await,
        },
        Some(Commands::Config) => commands::show_settings(ctx).await,
        Some(Commands::Exit) => {
            commands::exit();
            return Ok(true);
        }
        None => {}
    }
    Ok(false)
}
