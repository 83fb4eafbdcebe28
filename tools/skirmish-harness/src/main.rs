//! skirmish-harness: headless match runner and config scaffolding tool.
//!
//! Usage:
//!   skirmish-harness run --config match.json --seed 7 --ticks 3000 --squad 6
//!   skirmish-harness default-config > match.json

use std::path::PathBuf;
use std::process;

use tracing::info;
use tracing_subscriber::EnvFilter;

use outpost_core::actions::Action;
use outpost_core::commands::PlayerCommand;
use outpost_core::config::MatchConfig;
use outpost_core::faction::FactionId;
use outpost_sim::{SimConfig, SimulationEngine};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "default-config" => cmd_default_config(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "skirmish-harness: OUTPOST headless match runner\n\
         \n\
         Commands:\n\
         \n\
         run             Play a seeded skirmish and print the final control points\n\
         \n\
           --config <path>  Match config JSON (optional, default: built-in map)\n\
           --seed <N>       RNG seed (default: 42)\n\
           --ticks <N>      Ticks to simulate (default: 3000)\n\
           --squad <N>      Units per faction (default: 6)\n\
         \n\
         default-config  Print the built-in match config as JSON\n\
         \n\
         Set RUST_LOG (e.g. RUST_LOG=debug) to control log output.\n"
    );
}

fn parse_flag<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    match parse_flag(args, flag) {
        Some(raw) => match raw.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Error: {flag} expects a number, got {raw:?}");
                process::exit(1);
            }
        },
        None => default,
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<PathBuf>) -> MatchConfig {
    let Some(path) = path else {
        return MatchConfig::default();
    };

    let text = match std::fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            process::exit(1);
        }
    };

    match MatchConfig::from_json_str(&text) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid match config {}: {e}", path.display());
            process::exit(1);
        }
    }
}

// --- Run command ---

fn cmd_run(args: &[String]) {
    init_tracing();

    let config = load_config(parse_flag(args, "--config").map(PathBuf::from));
    let seed: u64 = parse_number(args, "--seed", 42);
    let ticks: u64 = parse_number(args, "--ticks", 3000);
    let squad: usize = parse_number(args, "--squad", 6);
    let local_faction = config.local_faction;

    let mut engine = SimulationEngine::new(SimConfig {
        seed,
        match_config: config,
        ..Default::default()
    });
    engine.queue_command(PlayerCommand::StartMatch);
    let spawned = engine.spawn_skirmish(squad);
    info!(seed, ticks, spawned, "skirmish started");

    let mut owners: Vec<Option<FactionId>> = Vec::new();
    let mut captures = 0usize;
    let mut generated = 0usize;
    let mut last = None;

    for _ in 0..ticks {
        let snap = engine.tick();

        // Generated units join the local faction at the requested spot.
        for action in &snap.actions {
            let Action::Create(create) = action;
            engine.queue_command(PlayerCommand::SpawnUnit {
                faction: local_faction,
                x: create.x,
                y: create.y,
            });
            generated += 1;
        }

        let current: Vec<Option<FactionId>> =
            snap.control_points.iter().map(|p| p.owner).collect();
        if !owners.is_empty() {
            for (view, previous) in snap.control_points.iter().zip(&owners) {
                if view.owner != *previous {
                    captures += 1;
                    info!(
                        tick = snap.time.tick,
                        point_id = view.point_id,
                        owner = ?view.owner.map(|f| f.get()),
                        "ownership changed"
                    );
                }
            }
        }
        owners = current;
        last = Some(snap);
    }

    info!(captures, generated, "skirmish finished");

    let Some(snap) = last else {
        return;
    };
    match serde_json::to_string_pretty(&snap.control_points) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing control points: {e}");
            process::exit(1);
        }
    }
}

// --- Default config command ---

fn cmd_default_config() {
    match serde_json::to_string_pretty(&MatchConfig::default()) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing config: {e}");
            process::exit(1);
        }
    }
}
