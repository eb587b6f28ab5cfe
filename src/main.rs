//! Virtual Mouse - Gesture-Driven Cursor Control Engine
//!
//! Replays recorded hand-landmark traces through the gesture pipeline and
//! manages engine configuration.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use virtual_mouse::app::cli::{Cli, Commands, ConfigAction};
use virtual_mouse::app::config::{GestureConfig, Preset};
use virtual_mouse::cursor::ScreenBounds;
use virtual_mouse::landmark::{LandmarkId, LandmarkSnapshot};
use virtual_mouse::session::{ActionDispatcher, LogDispatcher, Session};
use virtual_mouse::trace::LandmarkTrace;

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments first so we can use --verbose to set log level
    let cli = Cli::parse_args();

    // Initialize tracing (--verbose enables debug-level output)
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // Load config
    let config = if let Some(path) = &cli.config {
        GestureConfig::load(path)?
    } else {
        GestureConfig::load_default()?
    };

    // Execute command
    match cli.command {
        Commands::Replay {
            input,
            preset,
            width,
            height,
        } => {
            run_replay(&input, preset, width, height, config)?;
        }
        Commands::Bench { input, repeat } => {
            run_bench(&input, repeat, config)?;
        }
        Commands::Demo { output } => {
            run_demo(&output)?;
        }
        Commands::Init { force } => {
            run_init(force, &config)?;
        }
        Commands::Presets => {
            run_presets();
        }
        Commands::Config { action } => {
            run_config(action, &config)?;
        }
    }

    Ok(())
}

fn run_replay(
    input: &Path,
    preset: Option<String>,
    width: u32,
    height: u32,
    config: GestureConfig,
) -> anyhow::Result<()> {
    let config = match preset {
        Some(name) => GestureConfig::preset(Preset::from_str(&name)?),
        None => config,
    };

    let trace = LandmarkTrace::load(input)?;
    if trace.is_empty() {
        warn!("trace contains no frames");
        return Ok(());
    }
    info!(
        name = %trace.metadata.name,
        frames = trace.len(),
        duration = ?trace.duration(),
        "replaying trace"
    );

    let mut session = Session::new(config, ScreenBounds::new(width as f64, height as f64))?;
    let mut dispatcher = LogDispatcher::new();

    for frame in &trace.frames {
        let out = session.process_frame(frame.snapshot.as_ref(), frame.timestamp());
        if let Some(action) = &out.action {
            dispatcher.dispatch(action)?;
        }
    }

    println!("\nReplay complete");
    println!("  Frames: {}", trace.len());
    println!("  Actions dispatched: {}", dispatcher.count());
    if let Some((x, y)) = session.cursor_position() {
        println!("  Final cursor: ({x:.1}, {y:.1})");
    }

    Ok(())
}

fn run_bench(input: &Path, repeat: u32, config: GestureConfig) -> anyhow::Result<()> {
    let trace = LandmarkTrace::load(input)?;
    if trace.is_empty() {
        anyhow::bail!("trace contains no frames, nothing to benchmark");
    }
    info!(frames = trace.len(), repeat, "benchmarking trace");

    let mut samples: Vec<Duration> = Vec::with_capacity(trace.len() * repeat as usize);
    for _ in 0..repeat {
        let mut session = Session::new(config, ScreenBounds::new(1920.0, 1080.0))?;
        for frame in &trace.frames {
            let out = session.process_frame(frame.snapshot.as_ref(), frame.timestamp());
            samples.push(out.processing);
        }
    }

    samples.sort_unstable();
    let total: Duration = samples.iter().sum();
    let mean = total / samples.len() as u32;
    let p95 = samples[(samples.len() * 95 / 100).min(samples.len() - 1)];
    let max = *samples.last().unwrap_or(&Duration::ZERO);
    let effective_fps = if mean.as_secs_f64() > 0.0 {
        1.0 / mean.as_secs_f64()
    } else {
        f64::INFINITY
    };

    println!("\nBenchmark Results");
    println!("  Frames processed: {}", samples.len());
    println!("  Mean:  {:?}", mean);
    println!("  P95:   {:?}", p95);
    println!("  Max:   {:?}", max);
    println!("  Effective FPS (engine only): {:.0}", effective_fps);

    Ok(())
}

/// Build a short synthetic trace: a cursor sweep, a click pinch, and a
/// scroll pinch, at ~30 fps.
fn run_demo(output: &Path) -> anyhow::Result<()> {
    let mut trace = LandmarkTrace::new("demo");
    let dt = 1.0 / 30.0;
    let mut t = 0.0;

    // Sweep the index finger left to right across the frame
    for i in 0..30 {
        let x = 0.2 + 0.02 * i as f64;
        trace.push_frame(t, Some(open_hand(x, 0.5)));
        t += dt;
    }
    // Pinch thumb and index together for a left click
    trace.push_frame(t, Some(pinch_hand(0.8, 0.5)));
    t += dt;
    // Hand briefly lost
    trace.push_frame(t, None);
    t += dt;
    // Thumb-ring pinch for a scroll up, spaced past the cooldown
    t += 0.5;
    trace.push_frame(t, Some(scroll_hand(0.8, 0.5)));

    trace.save(output)?;
    println!("Wrote demo trace to {:?} ({} frames)", output, trace.len());
    println!("Replay it with: virtual-mouse replay --input {:?}", output);
    Ok(())
}

fn open_hand(x: f64, y: f64) -> LandmarkSnapshot {
    let mut s = LandmarkSnapshot::new();
    s.set(LandmarkId::ThumbTip, x - 0.08, y);
    s.set(LandmarkId::IndexTip, x, y);
    s.set(LandmarkId::IndexBase, x, y - 0.25);
    s.set(LandmarkId::MiddleTip, x + 0.10, y);
    s.set(LandmarkId::RingTip, x + 0.18, y);
    s.set(LandmarkId::PinkyTip, x + 0.26, y);
    s
}

fn pinch_hand(x: f64, y: f64) -> LandmarkSnapshot {
    let mut s = open_hand(x, y);
    s.set(LandmarkId::ThumbTip, x - 0.01, y);
    s
}

fn scroll_hand(x: f64, y: f64) -> LandmarkSnapshot {
    let mut s = open_hand(x, y);
    s.set(LandmarkId::ThumbTip, x + 0.17, y);
    s
}

fn run_init(force: bool, config: &GestureConfig) -> anyhow::Result<()> {
    let config_path = GestureConfig::default_path();

    if config_path.exists() && !force {
        anyhow::bail!(
            "Config already exists at {:?}. Use --force to overwrite.",
            config_path
        );
    }

    config.save_default()?;
    println!("Created config at {:?}", config_path);
    println!("\nConfig content:\n{}", config.to_toml()?);

    std::fs::create_dir_all(Cli::traces_dir())?;
    println!("\nCreated directories:");
    println!("  Traces: {:?}", Cli::traces_dir());

    Ok(())
}

fn run_presets() {
    println!("Available presets:\n");
    for preset in Preset::ALL {
        let config = GestureConfig::preset(preset);
        println!("  {}", preset);
        println!("    click_threshold:     {}", config.click_threshold);
        println!("    move_threshold:      {}", config.move_threshold);
        println!("    smoothing_factor:    {}", config.smoothing_factor);
        println!("    action_cooldown:     {}s", config.action_cooldown);
        println!();
    }
}

fn run_config(action: ConfigAction, config: &GestureConfig) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            let toml_str = config.to_toml()?;
            println!("Configuration ({:?}):\n", GestureConfig::default_path());
            println!("{}", toml_str);
        }
        ConfigAction::Get { key } => {
            let table: toml::Value = toml::from_str(&config.to_toml()?)
                .map_err(|e| anyhow::anyhow!("config serialization failed: {e}"))?;
            match table.get(&key) {
                Some(v) => println!("{} = {}", key, v),
                None => {
                    anyhow::bail!("Configuration key '{}' not found", key);
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let config_path = GestureConfig::default_path();
            if !config_path.exists() {
                anyhow::bail!("No config file found. Run 'virtual-mouse init' first.");
            }

            // Load, modify through the typed config so validation still
            // applies, and save.
            let mut table: toml::Value =
                toml::from_str(&std::fs::read_to_string(&config_path)?)?;
            let entry = table
                .get_mut(&key)
                .ok_or_else(|| anyhow::anyhow!("Configuration key '{}' not found", key))?;
            *entry = parse_toml_scalar(&value, entry);

            let updated: GestureConfig = table
                .try_into()
                .map_err(|e| anyhow::anyhow!("invalid value for '{}': {}", key, e))?;
            updated.validate()?;
            updated.save(&config_path)?;
            println!("Set {} = {}", key, value);
        }
        ConfigAction::Reset { preset } => {
            let preset = Preset::from_str(&preset)?;
            let config = GestureConfig::preset(preset);
            config.save_default()?;
            println!(
                "Configuration reset to '{}' preset at {:?}",
                preset,
                GestureConfig::default_path()
            );
        }
    }

    Ok(())
}

/// Coerce a CLI string to the TOML type of the value it replaces.
fn parse_toml_scalar(raw: &str, current: &toml::Value) -> toml::Value {
    match current {
        toml::Value::Integer(_) => raw
            .parse::<i64>()
            .map(toml::Value::Integer)
            .unwrap_or_else(|_| toml::Value::String(raw.to_string())),
        toml::Value::Float(_) => raw
            .parse::<f64>()
            .map(toml::Value::Float)
            .unwrap_or_else(|_| toml::Value::String(raw.to_string())),
        toml::Value::Boolean(_) => raw
            .parse::<bool>()
            .map(toml::Value::Boolean)
            .unwrap_or_else(|_| toml::Value::String(raw.to_string())),
        _ => toml::Value::String(raw.to_string()),
    }
}
