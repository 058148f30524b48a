//! `ripple closure` command implementation.

use std::collections::BTreeMap;

use colored::Colorize;
use ripple::{find_typed_closure, DependencyGraph, DependencyKind};

use super::display::{warn_if_unknown, Output};

/// Run the closure command.
pub fn run(graph: &DependencyGraph<String>, unit: &str, output: &Output) -> ripple::Result<()> {
    warn_if_unknown(graph, unit);

    let root = unit.to_string();
    let closure: BTreeMap<String, DependencyKind> = find_typed_closure(graph, &root)
        .into_iter()
        .filter(|(id, _)| *id != root)
        .collect();

    if output.json {
        return output.print_json(&closure);
    }

    println!(
        "{} of \"{}\":",
        "Dependencies".white().bold(),
        unit.cyan().bold()
    );

    for kind in DependencyKind::ALL {
        let units: Vec<&str> = closure
            .iter()
            .filter(|(_, k)| **k == kind)
            .map(|(id, _)| id.as_str())
            .collect();

        println!();
        println!("  {} ({}):", kind_label(kind), units.len());
        output.print_units(&units, "(none)");
    }

    Ok(())
}

fn kind_label(kind: DependencyKind) -> colored::ColoredString {
    match kind {
        DependencyKind::Compile => "Compile".red().bold(),
        DependencyKind::Export => "Export".yellow().bold(),
        DependencyKind::Runtime => "Runtime".green().bold(),
    }
}
