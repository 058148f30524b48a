//! `ripple impact` command implementation.

use colored::Colorize;
use ripple::{find_compile_impact, DependencyGraph};

use super::display::{warn_if_unknown, Output};

/// Run the impact command.
pub fn run(graph: &DependencyGraph<String>, unit: &str, output: &Output) -> ripple::Result<()> {
    warn_if_unknown(graph, unit);

    let root = unit.to_string();
    let mut affected: Vec<String> = find_compile_impact(graph, &root)
        .into_iter()
        .filter(|id| *id != root)
        .collect();
    affected.sort();

    if output.json {
        return output.print_json(&affected);
    }

    println!(
        "{} of \"{}\":",
        "Compile impact".white().bold(),
        unit.cyan().bold()
    );
    println!();
    output.print_units(&affected, "(a change to no other unit recompiles it)");
    println!();
    println!(
        "{}: {} units can force a recompile",
        "Summary".dimmed(),
        affected.len().to_string().green()
    );

    Ok(())
}
