use clap::Parser;
use haichi::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

/// A workflow canvas graph editing and layout engine CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a graph file (JSON, or bincode when the extension is .bin)
    graph_path: Option<String>,
    /// Path to a sidebar catalog JSON file
    catalog_path: Option<String>,

    /// Drop a template onto an edge: "template-id@edge-id" ("@end" appends
    /// after the terminal node)
    #[arg(short, long)]
    drop: Vec<String>,

    /// Relocate an existing node onto an edge: "node-id@edge-id"
    #[arg(short = 'm', long = "move")]
    moves: Vec<String>,

    /// Write the resulting graph to this path (JSON, or bincode for .bin)
    #[arg(short, long)]
    output: Option<String>,

    /// Run in interactive mode to be prompted for commands
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.human {
        run_interactive(cli);
    } else {
        run_non_interactive(cli);
    }
}

fn load_catalog(path: Option<&str>) -> Catalog {
    match path {
        Some(p) => Catalog::from_file(p)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load catalog: {}", e))),
        None => {
            println!("No catalog file provided. Using the built-in sidebar catalog.");
            Catalog::builtin()
        }
    }
}

fn load_graph(path: Option<&str>) -> GraphStore {
    let Some(path) = path else {
        println!("No graph file provided. Using the demo workflow.");
        return demo_graph();
    };
    let snapshot = if path.ends_with(".bin") {
        GraphSnapshot::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load snapshot: {}", e)))
    } else {
        let json = fs::read_to_string(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read graph file '{}': {}", path, e))
        });
        serde_json::from_str(&json)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse graph JSON: {}", e)))
    };
    snapshot.restore()
}

/// The canvas the demo boots with: start -> update profile -> notification.
fn demo_graph() -> GraphStore {
    let catalog = Catalog::builtin();
    let mut store = GraphStore::new();
    store.push_node(Node::start("start"));
    for id in ["update-profile", "notification"] {
        if let Some(template) = catalog.get(id) {
            store.push_node(template.materialize(id));
        }
    }
    let _ = store.connect("start", "update-profile");
    let _ = store.connect("update-profile", "notification");
    store
}

fn run_non_interactive(cli: Cli) {
    let total_start = Instant::now();

    let load_start = Instant::now();
    let catalog = load_catalog(cli.catalog_path.as_deref());
    let store = load_graph(cli.graph_path.as_deref());
    let load_duration = load_start.elapsed();

    let mut session = CanvasSession::new(store, catalog);

    let edit_start = Instant::now();
    let mut applied = 0usize;
    for spec in &cli.drop {
        let (template_id, target) = split_spec(spec);
        if apply_drop(&mut session, template_id, target) {
            applied += 1;
        } else {
            eprintln!("Warning: drop '{}' did not apply", spec);
        }
    }
    for spec in &cli.moves {
        let (node_id, target) = split_spec(spec);
        if apply_move(&mut session, node_id, target) {
            applied += 1;
        } else {
            eprintln!("Warning: move '{}' did not apply", spec);
        }
    }
    let edit_duration = edit_start.elapsed();

    print_graph(&session);

    if let Some(output) = &cli.output {
        save_graph(&session, output);
    }

    println!("\n--- Summary ---");
    println!("Nodes: {}", session.nodes().len());
    println!("Edges: {}", session.edges().len());
    println!("Edits applied:  {}", applied);
    println!("File Loading:   {:?}", load_duration);
    println!("Graph Editing:  {:?}", edit_duration);
    println!("Total:          {:?}", total_start.elapsed());
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(cli: Cli) {
    println!("--- Haichi Interactive Mode ---");

    let catalog = load_catalog(cli.catalog_path.as_deref());
    let store = load_graph(cli.graph_path.as_deref());
    let mut session = CanvasSession::new(store, catalog);

    loop {
        print_graph(&session);
        println!("\nCommands: drop <template>@<edge|end>, move <node>@<edge>, save <path>, quit");
        let line = prompt_for_input("Enter command", None);
        let mut parts = line.splitn(2, ' ');
        let command = parts.next().unwrap_or("");
        let argument = parts.next().unwrap_or("").trim();

        match command {
            "drop" => {
                let (template_id, target) = split_spec(argument);
                if !apply_drop(&mut session, template_id, target) {
                    println!("Drop did not apply.");
                }
            }
            "move" => {
                let (node_id, target) = split_spec(argument);
                if !apply_move(&mut session, node_id, target) {
                    println!("Move did not apply.");
                }
            }
            "save" => {
                if argument.is_empty() {
                    println!("Usage: save <path>");
                } else {
                    save_graph(&session, argument);
                }
            }
            "quit" | "exit" | "q" => break,
            "" => continue,
            other => println!("Unknown command '{}'.", other),
        }
    }
}

fn split_spec(spec: &str) -> (&str, &str) {
    match spec.split_once('@') {
        Some((lhs, rhs)) => (lhs, rhs),
        None => (spec, ""),
    }
}

/// Simulates the full drag gesture for a sidebar drop. Returns whether the
/// graph actually changed.
fn apply_drop(session: &mut CanvasSession, template_id: &str, target: &str) -> bool {
    let Some(drop_target) = resolve_target(session, target) else {
        return false;
    };
    let edges_before = session.edges().len();
    let nodes_before = session.nodes().len();

    session.handle(DragEvent::Started(DragSource::SidebarItem(
        template_id.to_string(),
    )));
    session.handle(DragEvent::HoverChanged(Some(drop_target.clone())));
    session.handle(DragEvent::Ended(DragOutcome::Dropped(drop_target)));

    session.nodes().len() != nodes_before || session.edges().len() != edges_before
}

/// Simulates the full drag gesture for a node relocation.
fn apply_move(session: &mut CanvasSession, node_id: &str, target: &str) -> bool {
    let Some(drop_target) = resolve_target(session, target) else {
        return false;
    };
    let before = GraphSnapshot::capture(session.store());

    session.handle(DragEvent::Started(DragSource::CanvasNode(
        node_id.to_string(),
    )));
    session.handle(DragEvent::HoverChanged(Some(drop_target.clone())));
    session.handle(DragEvent::Ended(DragOutcome::Dropped(drop_target)));

    GraphSnapshot::capture(session.store()) != before
}

fn resolve_target(session: &CanvasSession, target: &str) -> Option<DropTarget> {
    if target == "end" {
        session.terminal_connector()
    } else {
        Some(DropTarget::Edge(target.to_string()))
    }
}

fn save_graph(session: &CanvasSession, path: &str) {
    let snapshot = GraphSnapshot::capture(session.store());
    let result = if path.ends_with(".bin") {
        snapshot.save(path).map_err(|e| e.to_string())
    } else {
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| e.to_string())
            .and_then(|json| fs::write(path, json).map_err(|e| e.to_string()))
    };
    match result {
        Ok(()) => println!("Saved graph to '{}'", path),
        Err(e) => eprintln!("Failed to save graph to '{}': {}", path, e),
    }
}

fn print_graph(session: &CanvasSession) {
    println!("\n--- Workflow ---");
    for node in session.nodes() {
        println!(
            "  [{:>7.1},{:>7.1}]  {}  ({})",
            node.position.x,
            node.position.y,
            node.id,
            node.data.label
        );
    }
    println!("--- Connections ---");
    for edge in session.edges() {
        println!("  {}  ({} -> {})", edge.id, edge.source, edge.target);
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    let _ = io::stdout().flush();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
