use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use tickbox_client::Snapshot;

use crate::types::OutputFormat;

pub fn print_snapshot(snapshot: &Snapshot, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&snapshot.visible)?);
        }
        OutputFormat::Plain => print_plain(snapshot),
    }
    Ok(())
}

fn print_plain(snapshot: &Snapshot) {
    if !snapshot.has_any && snapshot.draft.is_none() {
        println!("Nothing to do.");
        return;
    }

    let color = std::io::stdout().is_terminal();
    for todo in &snapshot.visible {
        let mark = if todo.completed { "[x]" } else { "[ ]" };
        if color && todo.completed {
            println!("{} {:>4}  {}", mark.green(), todo.id, todo.title.dimmed());
        } else {
            println!("{} {:>4}  {}", mark, todo.id, todo.title);
        }
    }

    println!();
    println!(
        "{} items left ({} shown as {})",
        snapshot.active_count,
        snapshot.visible.len(),
        snapshot.filter.as_str()
    );
}
