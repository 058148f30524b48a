//! `ripple affected` command implementation.

use std::collections::BTreeMap;

use colored::Colorize;
use ripple::{affected_map, DependencyGraph};
use tracing::info;

use super::display::Output;

/// Run the affected command.
///
/// With no units given, every unit in the graph is analyzed.
pub fn run(
    graph: &DependencyGraph<String>,
    units: Vec<String>,
    output: &Output,
) -> ripple::Result<()> {
    let roots = if units.is_empty() {
        let mut all: Vec<String> = graph.units().into_iter().cloned().collect();
        all.sort();
        info!(roots = all.len(), "No units given, analyzing the whole graph");
        all
    } else {
        units
    };

    let affected: BTreeMap<String, Vec<String>> = affected_map(graph, &roots)
        .into_iter()
        .map(|(unit, mut recompiled)| {
            recompiled.retain(|root| *root != unit);
            (unit, recompiled)
        })
        .filter(|(_, recompiled)| !recompiled.is_empty())
        .collect();

    if output.json {
        return output.print_json(&affected);
    }

    if affected.is_empty() {
        println!("{}", "No unit forces another to recompile".dimmed());
        return Ok(());
    }

    for (unit, recompiled) in &affected {
        println!(
            "  {} {}:",
            unit.white().bold(),
            format!("({} recompile)", recompiled.len()).dimmed()
        );
        output.print_units(recompiled, "(none)");
    }

    println!();
    println!(
        "{}: {} units force a recompile across {} roots",
        "Summary".dimmed(),
        affected.len().to_string().green(),
        roots.len()
    );

    Ok(())
}
