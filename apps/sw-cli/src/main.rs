use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use sw_app::{AppError, AppResult, SessionScript, Workbench, WorkbenchConfig, run_script};
use sw_core::PanelSet;
use sw_layout::compute_layout;
use sw_params::ParameterRepository;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sw-cli")]
#[command(about = "Servo drive parameter workbench", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the drive navigation tree
    Tree,
    /// Show the parameters and status rows of one node
    Show {
        /// Node name, e.g. "Motor"
        node: String,
        /// External fixture YAML instead of the built-in one
        #[arg(long)]
        fixture: Option<PathBuf>,
    },
    /// Print the grid arrangement for a set of visible panels
    Layout {
        /// Comma-separated panel letters, e.g. "A,C,D"
        panels: String,
    },
    /// Validate a fixture and report tree nodes without data
    Validate {
        /// Fixture YAML to check (defaults to the built-in fixture)
        #[arg(long)]
        fixture: Option<PathBuf>,
    },
    /// Replay a session script against a fresh workbench
    Run {
        /// Path to the script YAML file
        script_path: PathBuf,
        /// Workbench config YAML
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Print the transcript and final snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> AppResult<()> {
    // Logs go to stderr so `run --json` keeps stdout parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Tree => cmd_tree(),
        Commands::Show { node, fixture } => cmd_show(&node, fixture.as_deref()),
        Commands::Layout { panels } => cmd_layout(&panels),
        Commands::Validate { fixture } => cmd_validate(fixture.as_deref()),
        Commands::Run {
            script_path,
            config,
            json,
        } => cmd_run(&script_path, config.as_deref(), json),
    }
}

fn repository_for(fixture: Option<&Path>) -> AppResult<ParameterRepository> {
    WorkbenchConfig {
        fixture_path: fixture.map(Path::to_path_buf),
        ..WorkbenchConfig::default()
    }
    .load_repository()
}

fn cmd_tree() -> AppResult<()> {
    let forest = sw_tree::drive_forest()?;
    for (depth, node) in forest.walk() {
        let marker = if node.is_leaf() {
            " "
        } else if node.expanded {
            "-"
        } else {
            "+"
        };
        println!("{}{} {}", "  ".repeat(depth), marker, node.name);
    }
    Ok(())
}

fn cmd_show(node: &str, fixture: Option<&Path>) -> AppResult<()> {
    let repo = repository_for(fixture)?;
    let params = repo.lookup_parameters(node);

    if params.is_empty() {
        println!("No parameters for node: {}", node);
    } else {
        println!("Parameters of '{}':", node);
        for p in params {
            let access = if p.is_read_only() { " (read-only)" } else { "" };
            println!(
                "  {:<10} {:<24} {:>10} {:<10} [{} .. {}] default {}{}",
                p.ft_number, p.name, p.value, p.unit, p.min, p.max, p.default, access
            );
        }
    }

    println!("\nStatus:");
    for entry in repo.lookup_status(node) {
        println!("  {}: {} {}", entry.label, entry.value, entry.unit);
    }
    Ok(())
}

fn cmd_layout(panels: &str) -> AppResult<()> {
    let visible: PanelSet = panels.parse()?;
    let layout = compute_layout(visible)?;

    println!("{:?} ({} x {})", layout.arrangement, layout.columns, layout.rows);
    for p in &layout.placements {
        let m = p.margin;
        println!(
            "  {} at column {}, row {}  margin {},{},{},{}",
            p.panel.label(),
            p.column,
            p.row,
            m.left,
            m.top,
            m.right,
            m.bottom
        );
    }
    for (column, row) in layout.empty_cells() {
        println!("  empty cell at column {}, row {}", column, row);
    }
    Ok(())
}

fn cmd_validate(fixture: Option<&Path>) -> AppResult<()> {
    match fixture {
        Some(path) => println!("Validating fixture: {}", path.display()),
        None => println!("Validating built-in fixture"),
    }
    let repo = repository_for(fixture)?;
    let forest = sw_tree::drive_forest()?;
    println!(
        "✓ Fixture is valid ({} parameter sets, {} tree nodes)",
        repo.len(),
        forest.len()
    );

    let unbound = forest.unbound_leaves(|name| repo.contains(name));
    if !unbound.is_empty() {
        println!("\nTree leaves without parameter data:");
        for name in unbound {
            println!("  {}", name);
        }
    }
    Ok(())
}

fn cmd_run(script_path: &Path, config: Option<&Path>, json: bool) -> AppResult<()> {
    let config = match config {
        Some(path) => WorkbenchConfig::load_yaml(path)?,
        None => WorkbenchConfig::default(),
    };
    let script = SessionScript::load_yaml(script_path)?;
    info!(steps = script.steps.len(), "replaying session script");
    let mut bench = Workbench::from_config(config)?;
    let transcript = run_script(&mut bench, &script)?;
    let snapshot = bench.snapshot()?;

    if json {
        let out = serde_json::json!({
            "transcript": transcript,
            "snapshot": snapshot,
        });
        let text = serde_json::to_string_pretty(&out)
            .map_err(|e| AppError::Serialization(e.to_string()))?;
        println!("{}", text);
        return Ok(());
    }

    println!("Replaying script: {}", script_path.display());
    for (i, entry) in transcript.entries.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, entry.step);
        if let Some(message) = &entry.message {
            println!("       {}", message);
        }
        for event in &entry.events {
            println!("       -> {}", event);
        }
    }

    println!("\n{}", snapshot.title);
    println!(
        "  Active panel: {}  Visible: {}",
        snapshot.active_panel, snapshot.visible
    );
    for panel in &snapshot.panels {
        if panel.visible {
            println!(
                "  {}: {} ({} parameters)",
                panel.label, panel.bound_node, panel.parameter_count
            );
        }
    }
    println!(
        "  {} | {} | {}",
        snapshot.connection.connection_status, snapshot.drive_info, snapshot.selected_port
    );
    Ok(())
}
