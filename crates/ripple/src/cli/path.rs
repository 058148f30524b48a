//! `ripple path` command implementation.

use colored::Colorize;
use ripple::{find_compile_gated_shortest_path, find_shortest_path, DependencyGraph};

use super::display::{warn_if_unknown, Output};

/// Run the path command.
pub fn run(
    graph: &DependencyGraph<String>,
    from: &str,
    to: &str,
    compile_only: bool,
    output: &Output,
) -> ripple::Result<()> {
    warn_if_unknown(graph, from);
    warn_if_unknown(graph, to);

    let (source, target) = (from.to_string(), to.to_string());
    let path = if compile_only {
        find_compile_gated_shortest_path(graph, &source, &target)
    } else {
        find_shortest_path(graph, &source, &target)
    };

    if output.json {
        return output.print_json(&path);
    }

    let qualifier = if compile_only { "compile path" } else { "path" };
    let Some(path) = path else {
        println!(
            "No {qualifier} from \"{}\" to \"{}\"",
            from.cyan(),
            to.cyan()
        );
        return Ok(());
    };

    println!(
        "Shortest {qualifier} from \"{}\" to \"{}\" ({} hops):",
        from.cyan().bold(),
        to.cyan().bold(),
        path.len() - 1
    );
    println!();
    for (i, unit) in path.iter().enumerate() {
        let marker = if i == 0 { "  " } else { "→ " };
        println!("  {}{}", marker.dimmed(), unit.white());
    }

    Ok(())
}
