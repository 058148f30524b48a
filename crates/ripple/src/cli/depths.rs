//! `ripple depths` command implementation.

use std::collections::BTreeMap;

use colored::Colorize;
use ripple::{find_depth_map, DependencyGraph};

use super::display::{warn_if_unknown, Output};

/// Run the depths command.
pub fn run(graph: &DependencyGraph<String>, unit: &str, output: &Output) -> ripple::Result<()> {
    warn_if_unknown(graph, unit);

    let depths: BTreeMap<String, usize> = find_depth_map(graph, &unit.to_string())
        .into_iter()
        .collect();

    if output.json {
        return output.print_json(&depths);
    }

    // Group by depth for clearer output
    let mut by_depth: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for (id, depth) in &depths {
        if *depth > 0 {
            by_depth.entry(*depth).or_default().push(id);
        }
    }

    println!(
        "{} from \"{}\":",
        "Reachable units".white().bold(),
        unit.cyan().bold()
    );
    println!();

    if by_depth.is_empty() {
        println!("    {}", "(no dependencies)".dimmed());
    }

    for (depth, units) in &by_depth {
        let depth_label = if *depth == 1 { "direct" } else { "transitive" };
        println!(
            "  {} {} ({}):",
            format!("Depth {depth}").yellow(),
            depth_label.dimmed(),
            units.len()
        );
        output.print_units(units, "(none)");
    }

    println!();
    println!(
        "{}: {} units (max depth: {})",
        "Summary".dimmed(),
        (depths.len() - 1).to_string().green(),
        by_depth.keys().next_back().copied().unwrap_or(0)
    );

    Ok(())
}
