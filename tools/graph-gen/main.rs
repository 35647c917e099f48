use clap::Parser;
use haichi::prelude::*;
use rand::{Rng, rngs::ThreadRng, thread_rng};
use std::fs;

/// A CLI tool to generate random demo workflow graphs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_graph.json")]
    output: String,

    /// The minimum number of action steps in the workflow
    #[arg(long, default_value_t = 2)]
    min: usize,

    /// The maximum number of action steps in the workflow
    #[arg(long, default_value_t = 8)]
    max: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = thread_rng();

    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }

    let steps = rng.gen_range(cli.min..=cli.max);
    println!("Generating a workflow with {} action steps...", steps);

    let store = generate_workflow(&mut rng, steps)?;

    // Lay the graph out once so the file ships with usable coordinates.
    let engine = LayoutEngine::new();
    let laid_out = engine.layout(store.nodes(), store.edges(), None, false);
    let snapshot = GraphSnapshot {
        nodes: laid_out,
        edges: store.edges().to_vec(),
    };

    let json_output = serde_json::to_string_pretty(&snapshot)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved a workflow to '{}'",
        cli.output
    );

    Ok(())
}

/// Chains randomly picked catalog templates after a start node.
fn generate_workflow(rng: &mut ThreadRng, steps: usize) -> Result<GraphStore> {
    let catalog = Catalog::builtin();
    let templates: Vec<_> = catalog.templates().cloned().collect();

    let mut store = GraphStore::new();
    store.push_node(Node::start("start"));

    let mut tail = "start".to_string();
    for _ in 0..steps {
        let template = &templates[rng.gen_range(0..templates.len())];
        tail = store.append_after(&tail, template)?;
    }

    Ok(store)
}
