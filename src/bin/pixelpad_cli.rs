//! CLI tool for pixelpad - replays a sketch script against a headless grid
//! and prints the resulting scene as JSON
//!
//! Usage:
//!   pixelpad_cli <script.txt>              # Output JSON to stdout
//!   pixelpad_cli <script.txt> -o out.json  # Output JSON to file
//!   pixelpad_cli - < script.txt            # Read the script from stdin
//!
//! Script lines (blank lines and `#` comments are skipped):
//!   size <text>    type <text> into the size input and fire `change`
//!   create         click the create button
//!   random         click the random-mode button
//!   default        click the default-mode button
//!   color <css>    set the Default-mode paint color
//!   key <key>      press a key (the draw toggle is `d`)
//!   hover <index>  move the pointer onto a square

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Read, Write};

use pixelpad::app::{AppState, Event, Session};
use pixelpad::color::OsRandom;
use pixelpad::config::PadOptions;
use pixelpad::controls::MemoryControls;
use pixelpad::render::MemorySurface;
use serde::Serialize;

/// Canvas width used for headless runs.
const CLI_CANVAS_WIDTH: f64 = 800.0;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a> {
    grid: &'a pixelpad::GridConfig,
    draw_enabled: bool,
    notifications: &'a [String],
    scene: pixelpad::render::SceneSnapshot,
}

type CliSession = Session<MemorySurface, MemoryControls, OsRandom>;

fn run_line(session: &mut CliSession, line: &str) -> Result<(), String> {
    let (command, arg) = match line.split_once(char::is_whitespace) {
        Some((command, arg)) => (command, arg.trim()),
        None => (line, ""),
    };
    let result = match command {
        "size" => {
            session.controls_mut().type_size(arg);
            session.size_changed()
        }
        "create" => session.create(),
        "random" => session.dispatch(Event::RandomMode),
        "default" => session.dispatch(Event::DefaultMode),
        "color" => session.dispatch(Event::SetColor(arg.to_string())),
        "key" => session.dispatch(Event::KeyPressed(arg.to_string())),
        "hover" => {
            let square = arg
                .parse::<u32>()
                .map_err(|e| format!("bad square index {arg:?}: {e}"))?;
            let bound_mode = session.surface().bound_mode();
            session.dispatch(Event::Hover { square, bound_mode })
        }
        other => return Err(format!("unknown command {other:?}")),
    };
    result.map_err(|e| e.to_string())
}

/// `RUST_LOG`-driven stderr logging. wasm32 builds of the binary stay silent.
#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {}

fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: pixelpad_cli <script.txt|-> [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = if args.len() > 3 && args[2] == "-o" {
        Some(&args[3])
    } else {
        None
    };

    // Read script
    let script = if input_path == "-" {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("Error reading stdin: {}", e);
            std::process::exit(1);
        }
        buf
    } else {
        match fs::read_to_string(input_path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error reading {}: {}", input_path, e);
                std::process::exit(1);
            }
        }
    };

    let options = PadOptions::default();
    let state = AppState::new(options, CLI_CANVAS_WIDTH);
    let mut session = Session::new(state, MemorySurface::new(), MemoryControls::new(), OsRandom);
    session.dispatch(Event::Startup).unwrap();
    log::info!("replaying {input_path}");

    for (number, line) in script.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Err(e) = run_line(&mut session, line) {
            eprintln!("Error on line {}: {}", number + 1, e);
            std::process::exit(1);
        }
    }

    let report = Report {
        grid: &session.state().grid,
        draw_enabled: session.state().draw_enabled,
        notifications: &session.controls().notifications,
        scene: session.surface().snapshot(),
    };

    // Serialize to JSON
    let json = match serde_json::to_string_pretty(&report) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    // Output
    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
