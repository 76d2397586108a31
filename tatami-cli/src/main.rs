mod command;
mod config;
mod output;

use clap::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use tatami_core::{constants::DEFAULT_ROSTER_SIZE, Roster};

use crate::command::Command;

pub fn bail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

#[derive(Parser)]
#[command(name = "tatami", version, about = "Rank and score competitors in a live judging session")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run an interactive scoring session
    Run(RunArgs),
    /// Create a default config file at ~/.config/tatami/config.toml
    Init,
}

#[derive(Parser)]
struct RunArgs {
    /// Number of competitors to start with
    #[arg(long)]
    roster: Option<usize>,

    /// File with one competitor name per line (or a JSON array of names)
    #[arg(long)]
    names: Option<PathBuf>,

    /// Print snapshots as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Echo session events to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Path to config file (default: ~/.config/tatami/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Parse a names file as either a JSON array of strings or plain text
/// (one name per line).
fn parse_names_from_str(content: &str) -> Vec<String> {
    let trimmed = content.trim();
    if trimmed.starts_with('[') {
        // Try JSON array
        let names: Vec<String> = serde_json::from_str(trimmed)
            .unwrap_or_else(|e| bail(format!("Names file looks like JSON but failed to parse: {e}")));
        names.into_iter().filter(|s| !s.trim().is_empty()).collect()
    } else {
        // Plain text, one name per line
        trimmed
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }
}

/// Build the starting roster from CLI args and config (CLI wins).
fn build_roster(args: &RunArgs, cfg: &config::TatamiConfig) -> Roster {
    let names_path = args
        .names
        .clone()
        .or_else(|| cfg.names.clone().map(PathBuf::from));

    if let Some(path) = names_path {
        let content = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| bail(format!("Failed to read names file {}: {e}", path.display())));
        let names = parse_names_from_str(&content);
        if names.is_empty() {
            bail(format!("Names file {} contains no names", path.display()));
        }
        return Roster::with_names(names);
    }

    let size = args.roster.or(cfg.roster_size).unwrap_or(DEFAULT_ROSTER_SIZE);
    Roster::new(size)
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run_session(args),
        Commands::Init => {
            let path = config::create_default_config();
            println!("Created config at {}", path.display());
            println!("Edit it to set your default roster size or names file.");
        }
    }
}

fn run_session(args: RunArgs) {
    let config_path = args.config.clone().unwrap_or_else(config::config_path);
    let cfg = config::load_config(&config_path);

    let mut roster = build_roster(&args, &cfg);

    if args.verbose {
        eprintln!(
            "Scoring session with {} competitors. Type \"help\" for commands.",
            roster.competitors().len()
        );
    }

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    output::print_snapshot(roster.competitors(), args.json);

    let mut lines = stdin.lock().lines();
    loop {
        // A pending confirmation swallows the next input line: it resolves
        // to exactly one of confirm/cancel, never to a command.
        if let Some(message) = roster.pending_message() {
            if interactive {
                print!("{message} [y/N] ");
                let _ = io::stdout().flush();
            } else {
                println!("{message} [y/N]");
            }

            let line = match lines.next() {
                Some(Ok(line)) => line,
                _ => break,
            };

            let answer = line.trim().to_lowercase();
            if answer == "y" || answer == "yes" {
                roster.confirm();
                if args.verbose {
                    eprintln!("confirmed");
                }
            } else {
                roster.cancel();
                if args.verbose {
                    eprintln!("cancelled");
                }
            }
            output::print_snapshot(roster.competitors(), args.json);
            continue;
        }

        if interactive {
            print!("> ");
            let _ = io::stdout().flush();
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            _ => break,
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let cmd = match command::parse_command(trimmed) {
            Ok(cmd) => cmd,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        match cmd {
            Command::Quit => break,
            Command::Help => output::print_help(),
            Command::Show => output::print_snapshot(roster.competitors(), false),
            Command::Json => output::print_snapshot(roster.competitors(), true),
            Command::Add => output::print_snapshot(roster.add(), args.json),
            Command::Adjust { id, delta } => {
                output::print_snapshot(roster.adjust(id, delta), args.json)
            }
            Command::SetRank { id, rank } => {
                output::print_snapshot(roster.set_exact(id, rank), args.json)
            }
            Command::Bottom { id } => output::print_snapshot(roster.set_to_bottom(id), args.json),
            Command::Update => output::print_snapshot(roster.finalize(), args.json),
            Command::Score => output::print_snapshot(roster.assign_scores(), args.json),
            Command::Edit { id } => {
                output::print_snapshot(roster.revert_to_provisional(id), args.json)
            }
            Command::Remove { id } => {
                roster.remove(id);
            }
            Command::Reset => {
                roster.reset();
            }
        }
    }

    if args.verbose {
        eprintln!("Session ended.");
    }
}
