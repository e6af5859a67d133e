use clap::Parser;
use std::path::PathBuf;
use voice_guidance::app::guidance::{GuidanceApp, GuidanceAppError};
use voice_guidance_core::model::unit::LengthUnit;

/// replays a recorded guidance trace and prints the spoken notifications
/// as JSON lines.
#[derive(Parser)]
#[command(name = "voice-guidance")]
#[command(about = "Replay a turn-by-turn trace through the voice guidance engine")]
struct CliArgs {
    /// guidance configuration file (TOML, JSON or YAML)
    #[arg(short, long)]
    config: PathBuf,
    /// CSV trace of distance updates
    #[arg(short, long)]
    trace: PathBuf,
    /// overrides the length unit of the configuration file (meters or feet)
    #[arg(long)]
    length_unit: Option<LengthUnit>,
}

fn main() {
    env_logger::init();
    let args = CliArgs::parse();
    if let Err(e) = run(&args) {
        log::error!("{e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<(), GuidanceAppError> {
    let mut app = GuidanceApp::try_from(args.config.as_path())?;
    if let Some(unit) = args.length_unit {
        app.set_length_unit(unit)?;
    }
    let outputs = app.replay(&args.trace)?;
    for output in outputs.iter() {
        let line = serde_json::to_string(output).map_err(|e| {
            GuidanceAppError::InternalError(format!("failed to serialize replay output: {e}"))
        })?;
        println!("{line}");
    }
    log::info!("{} rows produced notifications", outputs.len());
    Ok(())
}
