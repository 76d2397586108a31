/// Session input parsing: one line in, one `Command` out.
///
/// The grammar is deliberately tiny: a keyword plus up to two integer
/// arguments, split on whitespace. `+` and `-` are the rank nudge buttons.
use std::str::SplitWhitespace;

use tatami_core::CompetitorId;

/// One operation the session can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Append a fresh competitor.
    Add,
    /// Nudge a competitor's rank counter by +1 or -1.
    Adjust { id: CompetitorId, delta: i32 },
    /// Set an exact rank.
    SetRank { id: CompetitorId, rank: u32 },
    /// Push a competitor below every current rank.
    Bottom { id: CompetitorId },
    /// Finalize provisional ranks.
    Update,
    /// Finalize if needed, then assign scores.
    Score,
    /// Reopen a finalized competitor for rank edits.
    Edit { id: CompetitorId },
    /// Request removal of a competitor (asks for confirmation).
    Remove { id: CompetitorId },
    /// Request a roster reset (asks for confirmation).
    Reset,
    /// Print the roster table.
    Show,
    /// Print the roster as JSON.
    Json,
    Help,
    Quit,
}

/// Parse one input line. Errors are messages for the user, not failures;
/// the session prints them and keeps going.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let keyword = match parts.next() {
        Some(k) => k,
        None => return Err("Empty command. Type \"help\" for the command list.".to_string()),
    };

    let command = match keyword {
        "add" => Command::Add,
        "+" => Command::Adjust {
            id: parse_id(&mut parts, keyword)?,
            delta: 1,
        },
        "-" => Command::Adjust {
            id: parse_id(&mut parts, keyword)?,
            delta: -1,
        },
        "rank" => {
            let id = parse_id(&mut parts, keyword)?;
            let rank = parse_rank(&mut parts)?;
            Command::SetRank { id, rank }
        }
        "bottom" => Command::Bottom {
            id: parse_id(&mut parts, keyword)?,
        },
        "update" => Command::Update,
        "score" | "scores" => Command::Score,
        "edit" => Command::Edit {
            id: parse_id(&mut parts, keyword)?,
        },
        "del" | "remove" => Command::Remove {
            id: parse_id(&mut parts, keyword)?,
        },
        "reset" => Command::Reset,
        "show" => Command::Show,
        "json" => Command::Json,
        "help" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        other => {
            return Err(format!(
                "Unknown command \"{other}\". Type \"help\" for the command list."
            ))
        }
    };

    if let Some(extra) = parts.next() {
        return Err(format!("Unexpected argument \"{extra}\" after \"{keyword}\""));
    }

    Ok(command)
}

fn parse_id(parts: &mut SplitWhitespace<'_>, keyword: &str) -> Result<CompetitorId, String> {
    let raw = parts
        .next()
        .ok_or_else(|| format!("\"{keyword}\" needs a competitor id"))?;
    raw.parse()
        .map_err(|_| format!("Invalid competitor id \"{raw}\""))
}

fn parse_rank(parts: &mut SplitWhitespace<'_>) -> Result<u32, String> {
    let raw = parts
        .next()
        .ok_or_else(|| "\"rank\" needs a competitor id and a rank".to_string())?;
    raw.parse().map_err(|_| format!("Invalid rank \"{raw}\""))
}
