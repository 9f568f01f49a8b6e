//! panorama-replay: headless replay of a scripted viewer session.
//!
//! Usage:
//!   panorama-replay replay --config viewer.json --rate 90
//!   panorama-replay dump-config --output viewer.json

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Context};
use glam::Vec3;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use panorama_core::config::ViewerConfig;
use panorama_core::enums::{ButtonKind, Handedness};
use panorama_sim::scene::{RecordingAudio, SimulatedHand, SimulatedHead, ViewerScene};
use panorama_sim::{Collaborators, SimConfig, Simulation};

/// Head position reported once tracking comes up.
const HEAD_POSITION: Vec3 = Vec3::new(0.0, 1.6, 0.0);
/// Fingertip height above the button surface at the start and end of a poke.
const HOVER_HEIGHT: f32 = 0.03;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "replay" => cmd_replay(&args[2..]),
        "dump-config" => cmd_dump_config(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "panorama-replay: headless panorama viewer session replay\n\
         \n\
         Commands:\n\
         \n\
         replay       Run the scripted session and print events as JSON lines\n\
         \n\
           --config <path>    Viewer config JSON (default: stock layout)\n\
           --rate <hz>        Frame rate (default: 72)\n\
           --max-secs <s>     Stop after this much session time (default: 30)\n\
         \n\
         dump-config  Write the stock viewer config as JSON\n\
         \n\
           --output <path>    Output file (default: stdout)\n\
         \n\
         Set RUST_LOG=debug to trace button edges and sound cues.\n"
    );
}

fn parse_flag<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|pair| pair[0] == flag)
        .map(|pair| pair[1].as_str())
}

fn parse_number(args: &[String], flag: &str, default: f32) -> anyhow::Result<f32> {
    match parse_flag(args, flag) {
        Some(raw) => {
            let value: f32 = raw
                .parse()
                .with_context(|| format!("{flag} expects a number, got {raw:?}"))?;
            if !(value.is_finite() && value > 0.0) {
                bail!("{flag} must be positive, got {value}");
            }
            Ok(value)
        }
        None => Ok(default),
    }
}

fn load_config(args: &[String]) -> anyhow::Result<ViewerConfig> {
    match parse_flag(args, "--config") {
        Some(path) => {
            let path = PathBuf::from(path);
            let json = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            let config = ViewerConfig::from_json(&json)
                .with_context(|| format!("loading {}", path.display()))?;
            info!(path = %path.display(), buttons = config.buttons.len(), "loaded viewer config");
            Ok(config)
        }
        None => Ok(ViewerConfig::default()),
    }
}

fn cmd_dump_config(args: &[String]) -> anyhow::Result<()> {
    let json = ViewerConfig::default().to_json_pretty()?;
    match parse_flag(args, "--output") {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("writing {path}"))?;
            info!(path, "wrote stock viewer config");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// What the right hand does during one phase of the script.
enum Motion {
    Hidden,
    /// Hand visible but well away from the console.
    Idle,
    /// Fingertip travels straight down (or up) over a button, from one
    /// depth below its surface to another. Negative depths are above it.
    Sweep { kind: ButtonKind, from: f32, to: f32 },
}

struct Phase {
    secs: f32,
    motion: Motion,
}

impl Phase {
    fn new(secs: f32, motion: Motion) -> Self {
        Self { secs, motion }
    }
}

/// Press a button past its full-press distance, hold, and pull away.
fn poke(script: &mut Vec<Phase>, kind: ButtonKind, depth: f32) {
    script.push(Phase::new(0.3, Motion::Sweep { kind, from: -HOVER_HEIGHT, to: depth }));
    script.push(Phase::new(0.15, Motion::Sweep { kind, from: depth, to: depth }));
    script.push(Phase::new(0.2, Motion::Sweep { kind, from: depth, to: -HOVER_HEIGHT }));
    script.push(Phase::new(0.4, Motion::Idle));
}

fn build_script(config: &ViewerConfig) -> Vec<Phase> {
    let depth = |kind: ButtonKind| {
        config
            .buttons
            .iter()
            .find(|b| b.kind == kind)
            .map(|b| b.full_press_distance * 1.5)
    };

    let mut script = vec![Phase::new(0.5, Motion::Hidden), Phase::new(0.5, Motion::Idle)];
    for kind in [
        ButtonKind::NextPanorama,
        ButtonKind::NextPanorama,
        ButtonKind::PreviousPanorama,
        ButtonKind::ToggleInstructions,
        ButtonKind::ToggleInstructions,
        ButtonKind::ExitSession,
    ] {
        match depth(kind) {
            Some(d) => poke(&mut script, kind, d),
            None => warn!(kind = kind.as_str(), "no such button in config, skipping poke"),
        }
    }
    script
}

fn cmd_replay(args: &[String]) -> anyhow::Result<()> {
    let config = load_config(args)?;
    let rate = parse_number(args, "--rate", 72.0)?;
    let max_secs = parse_number(args, "--max-secs", 30.0)? as f64;
    let delta = 1.0 / rate;

    let scene = ViewerScene::build(&config);
    let head = SimulatedHead::new();
    let hand = SimulatedHand::new(Handedness::Right);
    let audio = RecordingAudio::new();

    let mut sim = Simulation::new(
        SimConfig::default(),
        Collaborators {
            hands: vec![hand.clone()],
            head: Some(head.clone()),
            audio: Some(audio.clone()),
        },
    );
    sim.setup_viewer(&config, scene.nodes());

    let script = build_script(&config);
    let mut phases = script.iter();
    let mut phase = phases.next();
    let mut phase_time = 0.0f32;
    let mut elapsed = 0.0f64;

    while !sim.session_ended() && elapsed < max_secs {
        // Tracking and audio come up after the opening phase.
        if elapsed >= 0.25 {
            head.set_pose(HEAD_POSITION);
            audio.set_ready(true);
        }

        match phase.map(|p| &p.motion) {
            Some(Motion::Hidden) => hand.hide(),
            Some(Motion::Idle) | None => hand.track(HEAD_POSITION + Vec3::new(0.3, -0.6, 0.0)),
            Some(Motion::Sweep { kind, from, to }) => {
                if let Some(button) = config.buttons.iter().find(|b| b.kind == *kind) {
                    let t = phase.map_or(1.0, |p| (phase_time / p.secs).min(1.0));
                    let depth = *from + (*to - *from) * t;
                    let rest = scene.console.world_position() + button.position;
                    hand.track(rest + Vec3::new(0.0, button.surface_y - depth, 0.0));
                }
            }
        }

        elapsed += delta as f64;
        let snapshot = sim.tick(delta, elapsed);
        for event in &snapshot.events {
            let line = serde_json::json!({
                "frame": snapshot.frame,
                "elapsed_secs": snapshot.elapsed_secs,
                "event": event,
            });
            println!("{line}");
        }

        phase_time += delta;
        if let Some(p) = phase {
            if phase_time >= p.secs {
                phase_time = 0.0;
                phase = phases.next();
            }
        }
    }

    info!(
        frames = sim.time().frame,
        ended = sim.session_ended(),
        sounds = audio.played().len(),
        "replay finished"
    );
    Ok(())
}
