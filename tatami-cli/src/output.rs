/// Output formatting: terminal table and JSON.
use serde::Serialize;
use tatami_core::Competitor;

#[derive(Serialize)]
struct JsonSnapshot<'a> {
    competitors: &'a [Competitor],
}

/// Render a snapshot in the session's chosen format.
pub fn print_snapshot(competitors: &[Competitor], json: bool) {
    if json {
        print_json(competitors);
    } else {
        print_table(competitors);
    }
}

/// Print the roster as a formatted terminal table.
pub fn print_table(competitors: &[Competitor]) {
    // Find the widest competitor name for padding
    let name_width = competitors
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(4)
        .max(4); // at least "Name"

    println!(" Id | {:<name_width$} | Ticks | Status      | Score", "Name");
    println!("----|-{}-|-------|-------------|------", "-".repeat(name_width));

    for c in competitors {
        let score = match c.score {
            Some(s) => format!("{s:.2}"),
            None => String::new(),
        };
        println!(
            "{:>3} | {:<name_width$} | {:>5} | {:<11} | {:>5}",
            c.id, c.name, c.ticks, c.status, score,
        );
    }
}

/// Print the roster as JSON.
pub fn print_json(competitors: &[Competitor]) {
    let snapshot = JsonSnapshot { competitors };
    println!("{}", serde_json::to_string_pretty(&snapshot).unwrap());
}

/// Print the session command list.
pub fn print_help() {
    println!(
        "\
Commands:
  add            add a competitor
  + <id>         add one tick to a competitor's rank counter
  - <id>         take one tick off a competitor's rank counter
  rank <id> <n>  set an exact rank
  bottom <id>    push a competitor below every current rank
  update         finalize provisional ranks
  score          finalize if needed, then assign scores
  edit <id>      reopen a finalized competitor
  del <id>       remove a competitor (asks first)
  reset          start over with a fresh roster (asks first)
  show           print the roster table
  json           print the roster as JSON
  help           this text
  quit           end the session"
    );
}
