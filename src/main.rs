use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use bevy::prelude::*;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nexus_chess::core::{default_config_path, load_config, save_config, MoveStyle};
use nexus_chess::game::{ChessGame, ChessGamePlugin, PickEvent, Square};

/// Frames a single move may take before the replay gives up
const MAX_FRAMES_PER_MOVE: u32 = 10_000;

/// Replay moves on a headless chess board and print the result
#[derive(Parser, Debug)]
#[command(name = "nexus_chess", version, about)]
struct Args {
    /// Config file; defaults to the per-user chess.json
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured move animation
    #[arg(long)]
    style: Option<MoveStyle>,

    /// Virtual time advanced per frame, in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Write the effective config back to the config file before playing
    #[arg(long)]
    write_config: bool,

    /// Moves in coordinate notation, e.g. e2e4 d7d5 e4d5
    moves: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    if args.frame_ms == 0 {
        bail!("--frame-ms must be at least 1");
    }
    let frame = Duration::from_millis(args.frame_ms);

    let mut config = load_config(args.config.as_deref());
    if let Some(style) = args.style {
        config.animation.style = style;
    }
    if args.write_config {
        let path = args.config.clone().unwrap_or_else(default_config_path);
        save_config(&config, &path)
            .with_context(|| format!("writing config to {}", path.display()))?;
    }

    let moves = args
        .moves
        .iter()
        .map(|text| parse_move(text))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut app = App::new();
    app.insert_resource(Time::<()>::default())
        .add_plugins(ChessGamePlugin::new(config));
    app.update();

    for (from, to) in moves {
        play_move(&mut app, from, to, frame)?;
    }

    let game = app.world().resource::<ChessGame>();
    println!("{}", game.board().to_diagram());

    let turn = game.current_turn();
    println!("{} to move, move {}", turn.color, turn.move_number);

    let history: Vec<String> = game.history().moves.iter().map(|m| m.notation()).collect();
    println!("moves: {}", history.join(" "));

    let captured: Vec<String> = game
        .captured_pieces()
        .entries()
        .iter()
        .map(|entry| format!("{} {:?}", entry.color, entry.kind))
        .collect();
    println!("captured: {}", if captured.is_empty() { "-".to_string() } else { captured.join(", ") });
    println!("material: {:+}", game.captured_pieces().material_advantage());

    Ok(())
}

fn parse_move(text: &str) -> anyhow::Result<(Square, Square)> {
    if text.len() != 4 || !text.is_ascii() {
        bail!("move '{text}' must look like e2e4");
    }
    let (from, to) = text.split_at(2);
    let from: Square = from.parse().with_context(|| format!("bad origin in '{text}'"))?;
    let to: Square = to.parse().with_context(|| format!("bad destination in '{text}'"))?;
    Ok((from, to))
}

fn play_move(app: &mut App, from: Square, to: Square, frame: Duration) -> anyhow::Result<()> {
    let before = app.world().resource::<ChessGame>().history().len();

    app.world_mut().write_message(PickEvent::square(from));
    app.world_mut().write_message(PickEvent::square(to));
    step(app, frame);

    if app.world().resource::<ChessGame>().history().len() == before {
        bail!("move {from}{to} is not playable in this position");
    }

    let mut frames = 0;
    while app.world().resource::<ChessGame>().has_active_animations() {
        if frames >= MAX_FRAMES_PER_MOVE {
            bail!("move {from}{to} did not finish animating");
        }
        step(app, frame);
        frames += 1;
    }
    info!("[MOVE] {from}{to} settled after {} frames", frames + 1);
    Ok(())
}

fn step(app: &mut App, frame: Duration) {
    app.world_mut().resource_mut::<Time>().advance_by(frame);
    app.update();
}
