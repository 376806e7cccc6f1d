//! TouchPad Controls Simulator
//!
//! Host-side tool for exercising the on-screen controls without a device.
//!
//! # Features
//!
//! - **Zone listing**: Print the active zone table in percent and pixels
//! - **Hit testing**: Resolve a single coordinate to a zone
//! - **Replay**: Run a touch script, print button state, menu requests and
//!   edge events, then render the final overlay
//!
//! # Usage
//!
//! ```bash
//! # Show the built-in layout
//! touchpad-sim zones
//!
//! # Which zone is under (80, 250)?
//! touchpad-sim resolve 80 250
//!
//! # Replay a script and save the overlay
//! touchpad-sim replay tap.txt --config sim.toml --output overlay.png
//! ```

mod config;
mod replay;
mod script;
mod snapshot;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

use touchpad_input::{ButtonState, EdgeEvent, MenuAction, TouchControls, ZoneTarget};
use touchpad_overlay::{OverlayRenderer, PixelRect};

use config::SimConfig;
use replay::Step;
use snapshot::Frame;

/// TouchPad Controls Simulator
///
/// Replay and inspection tool for the virtual controller layer
#[derive(Parser)]
#[command(name = "touchpad-sim")]
#[command(version = "0.1.0")]
#[command(about = "Replay touch scripts against the on-screen controller")]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the active zone table
    Zones {
        /// Simulator config (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Hit-test one coordinate
    Resolve {
        /// X in screen pixels
        #[arg(allow_hyphen_values = true)]
        x: i32,

        /// Y in screen pixels
        #[arg(allow_hyphen_values = true)]
        y: i32,

        /// Simulator config (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Replay a touch script
    Replay {
        /// Script file
        script: PathBuf,

        /// Simulator config (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the final overlay frame as PNG
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logger
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Zones { config } => handle_zones(&SimConfig::load(config.as_deref())?),
        Commands::Resolve { x, y, config } => {
            handle_resolve(&SimConfig::load(config.as_deref())?, x, y)
        }
        Commands::Replay {
            script,
            config,
            output,
        } => handle_replay(&SimConfig::load(config.as_deref())?, script, output),
    }
}

/// Controls configured for the screen size in `config`
fn build_controls(config: &SimConfig) -> Result<TouchControls> {
    let table = config.zone_table().context("Invalid zone layout")?;
    let mut controls = TouchControls::new(table);
    controls.set_screen_geometry(config.screen.width, config.screen.height);
    Ok(controls)
}

fn target_name(target: ZoneTarget) -> String {
    match target {
        ZoneTarget::Button(button) => button.to_string(),
        ZoneTarget::Menu => "menu".to_string(),
    }
}

fn handle_zones(config: &SimConfig) -> Result<()> {
    let controls = build_controls(config)?;
    let (w, h) = (config.screen.width, config.screen.height);

    println!("{}", "=".repeat(70));
    println!(
        "{}",
        format!("Touch Zones ({}x{})", w, h).cyan().bold()
    );
    println!("{}", "=".repeat(70));

    for (index, zone) in controls.table().iter().enumerate() {
        let px = PixelRect::from_percent(&zone.rect, w, h);
        let label = zone.label.map(|l| l.to_string()).unwrap_or_default();
        println!(
            "  {:>2}  {:<9} {:<5} {:<18} px {},{} {}x{}",
            index,
            target_name(zone.target).white().bold(),
            label.dimmed(),
            zone.rect.to_string(),
            px.x,
            px.y,
            px.width,
            px.height
        );
    }

    println!("{}", "=".repeat(70));
    Ok(())
}

fn handle_resolve(config: &SimConfig, x: i32, y: i32) -> Result<()> {
    let controls = build_controls(config)?;
    let (px, py) = controls.geometry().to_percent(x, y);

    match controls.resolve(x, y).and_then(|i| controls.table().get(i).map(|z| (i, z))) {
        Some((index, zone)) => println!(
            "{} ({}, {}) -> ({}%, {}%) -> zone {} [{}]",
            "[HIT]".green().bold(),
            x,
            y,
            px,
            py,
            index,
            target_name(zone.target).white().bold()
        ),
        None => println!(
            "{} ({}, {}) -> ({}%, {}%) -> no zone",
            "[MISS]".yellow().bold(),
            x,
            y,
            px,
            py
        ),
    }
    Ok(())
}

fn handle_replay(config: &SimConfig, script_path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let content = fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read script: {}", script_path.display()))?;
    let lines = script::parse(&content)
        .with_context(|| format!("Invalid script: {}", script_path.display()))?;

    let mut controls = build_controls(config)?;
    println!(
        "{} Replaying {} commands from {}",
        "[*]".cyan().bold(),
        lines.len(),
        script_path.display().to_string().white()
    );

    for step in replay::run(&mut controls, &lines) {
        print_step(&step);
    }

    let stats = controls.edge_stats();
    println!(
        "\n{} {} edge events, {} lagged updates, {} coalesced taps",
        "[*]".cyan().bold(),
        stats.emitted,
        stats.lagged_updates,
        stats.coalesced_taps
    );

    // Final overlay frame at the configured screen size
    let mut renderer = OverlayRenderer::new(config.overlay_options());
    let geometry = controls.geometry();
    let (frame, report) = snapshot::render(
        config.overlay.surface,
        geometry.width,
        geometry.height,
        &mut renderer,
        controls.table(),
        &controls.snapshot(),
        config.render_mode(),
    )?;
    println!(
        "{} {} overlay: {} zones drawn, {} hidden by video, {} labels",
        "[*]".cyan().bold(),
        config.overlay.surface,
        report.zones_drawn,
        report.zones_skipped,
        report.labels_drawn
    );

    match (frame, output) {
        (Frame::Pixels(image), Some(path)) => {
            snapshot::save_png(&image, &path)?;
            println!("{} Wrote {}", "[OK]".green().bold(), path.display());
        }
        (Frame::Pixels(_), None) => {}
        (Frame::Lines(lines), output) => {
            println!(
                "  {} line batches, {} vertices",
                lines.batches().len(),
                lines.vertex_count()
            );
            if output.is_some() {
                println!(
                    "{} line-list surfaces have no pixels to write",
                    "[WARN]".yellow().bold()
                );
            }
        }
    }

    Ok(())
}

fn print_step(step: &Step) {
    match step {
        Step::Contact {
            line,
            command,
            state,
        } => {
            println!(
                "  {:>4}  {:<28} {}",
                line,
                format!("{:?}", command).dimmed(),
                format_state(state)
            );
        }
        Step::MenuRequested { line } => {
            println!("  {:>4}  {}", line, "menu requested".magenta().bold());
        }
        Step::Edges { line, events } if events.is_empty() => {
            println!("  {:>4}  {}", line, "poll: no events".dimmed());
        }
        Step::Edges { line, events } => {
            let rendered: Vec<String> = events.iter().map(format_edge).collect();
            println!("  {:>4}  poll: {}", line, rendered.join(", "));
        }
        Step::State { line, state } => {
            println!(
                "  {:>4}  pressed {}  just pressed {}  just released {}",
                line,
                state.pressed.to_string().white().bold(),
                state.just_pressed.to_string().green(),
                state.just_released.to_string().red()
            );
        }
        Step::Geometry {
            line,
            width,
            height,
        } => {
            println!("  {:>4}  geometry {}x{}", line, width, height);
        }
        Step::Reset { line } => {
            println!("  {:>4}  {}", line, "reset".yellow());
        }
    }
}

fn format_state(state: &ButtonState) -> String {
    format!("pressed {}", state.pressed.to_string().white().bold())
}

fn format_edge((event, action): &(EdgeEvent, Option<MenuAction>)) -> String {
    let edge = if event.is_down {
        format!("{} down", event.button).green()
    } else {
        format!("{} up", event.button).red()
    };
    match action {
        Some(action) => format!("{} ({:?})", edge, action),
        None => edge.to_string(),
    }
}
