//! `wayfind mincut`: randomized minimum cut of an edge list

use serde_json::json;
use std::time::Instant;
use wayfind_core::config::{MinCutConfig, WayfindConfig};
use wayfind_core::error::Result;
use wayfind_core::graph::MinCut;
use wayfind_core::input::parse_edge_list;

use crate::cli::{Cli, MinCutArgs, OutputFormat};
use crate::commands::dispatch::read_input;

pub fn execute(cli: &Cli, config: &WayfindConfig, args: &MinCutArgs) -> Result<()> {
    let settings = merge_settings(&config.min_cut, args)?;

    let content = read_input(&args.edges, "edge list")?;
    let graph = parse_edge_list(&content)?;

    let start = Instant::now();
    let cut = graph.minimum_cut_with(&settings);
    wayfind_core::trace_time!(start, "mincut", iterations = settings.iterations);

    match cli.format {
        OutputFormat::Json => {
            let output = json!({
                "vertices": graph.vertex_count(),
                "edges": graph.edge_count(),
                "iterations": settings.iterations,
                "cut": cut,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => match &cut {
            Some(cut) => print_human(cli, cut),
            None => println!("no cut: graph has fewer than two vertices"),
        },
    }

    Ok(())
}

/// Command-line flags override the configuration file
fn merge_settings(base: &MinCutConfig, args: &MinCutArgs) -> Result<MinCutConfig> {
    let mut settings = base.clone();
    if let Some(iterations) = args.iterations {
        if iterations == 0 {
            wayfind_core::bail_invalid!("iterations", iterations);
        }
        settings.iterations = iterations;
    }
    if let Some(seed) = args.seed {
        settings.seed = Some(seed);
    }
    if args.parallel {
        settings.parallel = true;
    }
    Ok(settings)
}

fn print_human(cli: &Cli, cut: &MinCut<String, u64>) {
    println!("cut size: {}", cut.size);
    let sizes: Vec<String> = cut.groups.iter().map(|g| g.len().to_string()).collect();
    println!("groups: {} (product {})", sizes.join(" x "), cut.group_product());

    if cli.quiet {
        return;
    }
    for edge in &cut.edges {
        println!("  {} -- {}", edge.source, edge.destination);
    }
}
