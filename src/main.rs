// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use tracing::{info, warn, Level};

use scales::config::{validate_reference, ReferenceTables, Settings};
use scales::display::render_mode_list;
use scales::session::{Reply, Session, INSTRUCTIONS, INVALID_MESSAGE};

const DIVIDER: &str =
    "---------------------------------------------------------------------------------------------";

fn print_usage() {
    println!("SCALES - Spell out the notes of a musical scale");
    println!();
    println!("Usage: scales [OPTIONS] [SCALE...]");
    println!();
    println!("Options:");
    println!("  --config <FILE>         Load settings from a TOML file");
    println!("  --reference <FILE>      Load reference tables from a YAML file");
    println!("  --check <FILE>          Validate a reference YAML file and exit");
    println!("  --modes                 List available modes");
    println!("  --help                  Show this help message");
    println!();
    println!("With a SCALE (e.g. scales f sharp mixolydian) the scale is printed once.");
    println!("Without one an interactive session starts.");
}

/// Parsed command line
#[derive(Debug, Default)]
struct Options {
    config: Option<PathBuf>,
    reference: Option<PathBuf>,
    check: Option<PathBuf>,
    list_modes: bool,
    help: bool,
    words: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow!("--config requires a file path"))?;
                options.config = Some(PathBuf::from(path));
            }
            "--reference" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow!("--reference requires a file path"))?;
                options.reference = Some(PathBuf::from(path));
            }
            "--check" => {
                let path = iter
                    .next()
                    .ok_or_else(|| anyhow!("--check requires a file path"))?;
                options.check = Some(PathBuf::from(path));
            }
            "--modes" => options.list_modes = true,
            "--help" | "-h" => options.help = true,
            other if other.starts_with("--") => {
                return Err(anyhow!("Unknown option: {}", other));
            }
            word => options.words.push(word.to_string()),
        }
    }

    Ok(options)
}

fn init_logging(settings: &Settings) {
    let level = settings.level();
    tracing_subscriber::fmt()
        .with_max_level(level.unwrap_or(Level::WARN))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    if level.is_none() {
        warn!(log_level = %settings.log_level, "unknown log level, using warn");
    }
}

fn print_divider() {
    println!();
    println!("{}", DIVIDER);
    println!();
}

fn clear_screen() -> Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::All), MoveTo(0, 0)).context("Failed to clear the screen")
}

fn print_instructions() {
    println!("{}", INSTRUCTIONS);
    print_divider();
}

/// Answer a single request given on the command line
fn run_once(session: &Session, text: &str) -> Result<bool> {
    match session.respond(text)? {
        Reply::Scale(line) | Reply::Modes(line) => {
            println!("{}", line);
            Ok(true)
        }
        Reply::Invalid => {
            eprintln!("{}", INVALID_MESSAGE);
            Ok(false)
        }
        Reply::Exit => Ok(true),
    }
}

/// Prompt for scales until "-1" or end of input
fn run_interactive(session: &Session, settings: &Settings) -> Result<()> {
    let clear = settings.clear_screen && io::stdout().is_terminal();
    if clear {
        clear_screen()?;
    }
    print_instructions();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("Enter a scale: ");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            return Ok(());
        }

        let reply = session.respond(&line)?;
        if reply == Reply::Exit {
            return Ok(());
        }

        if clear {
            clear_screen()?;
        }
        print_instructions();

        match reply {
            Reply::Scale(text) | Reply::Modes(text) => println!("{}", text),
            Reply::Invalid => println!("{}", INVALID_MESSAGE),
            Reply::Exit => {}
        }
        print_divider();
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args).map_err(|e| {
        print_usage();
        e
    })?;

    if options.help {
        print_usage();
        return Ok(());
    }

    let settings = match &options.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    init_logging(&settings);

    if let Some(path) = &options.check {
        let tables = validate_reference(path)?;
        println!(
            "{:?}: {} roots, {} modes",
            path,
            tables.majors().len(),
            tables.modes().len()
        );
        return Ok(());
    }

    // Bad reference data stops here, before any request is answered
    let tables = match options.reference.as_ref().or(settings.reference.as_ref()) {
        Some(path) => ReferenceTables::load(path)?,
        None => ReferenceTables::builtin()?,
    };
    info!(modes = tables.modes().len(), "reference tables ready");

    if options.list_modes {
        println!("{}", render_mode_list(tables.modes()));
        return Ok(());
    }

    let session = Session::new(&tables);

    if !options.words.is_empty() {
        let answered = run_once(&session, &options.words.join(" "))?;
        if !answered {
            std::process::exit(1);
        }
        return Ok(());
    }

    run_interactive(&session, &settings)
}
