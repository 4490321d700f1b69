//! CLI binary for Linkmap: rank, lay out, and export page graphs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use linkmap_core::config::LinkmapConfig;
use linkmap_core::{PageGraph, RootedView, storage};
use linkmap_layout::export::ExportFormat;
use linkmap_layout::rank::{Layers, rank_layers, unreachable};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "linkmap", about = "Layered 3D layouts for linked page graphs")]
struct Cli {
    /// Project root holding .linkmap/config.toml (defaults to current directory)
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that a page document builds into a valid graph
    Validate {
        /// JSON page document
        input: PathBuf,
    },

    /// Print the breadth-first layers from the root page
    Rank {
        /// JSON page document
        input: PathBuf,

        /// Root page id (defaults to the record marked isIndex)
        #[arg(short, long)]
        root: Option<String>,
    },

    /// Print page positions and link segments as JSON
    Layout {
        /// JSON page document
        input: PathBuf,

        /// Root page id (defaults to the record marked isIndex)
        #[arg(short, long)]
        root: Option<String>,
    },

    /// Print a renderable scene description as JSON
    Scene {
        /// JSON page document
        input: PathBuf,

        /// Root page id (defaults to the record marked isIndex)
        #[arg(short, long)]
        root: Option<String>,
    },

    /// Export the layered graph as DOT (Graphviz) or Mermaid flowchart
    Export {
        /// JSON page document
        input: PathBuf,

        /// Root page id (defaults to the record marked isIndex)
        #[arg(short, long)]
        root: Option<String>,

        /// Output format: dot, mermaid
        #[arg(short, long, default_value = "dot")]
        format: String,
    },

    /// Show graph and layering statistics
    Info {
        /// JSON page document
        input: PathBuf,

        /// Root page id (defaults to the record marked isIndex)
        #[arg(short, long)]
        root: Option<String>,
    },
}

fn get_project_root(cli: &Cli) -> Result<PathBuf> {
    match &cli.project {
        Some(p) => Ok(p.clone()),
        None => std::env::current_dir().context("failed to get current directory"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let project_root = get_project_root(&cli)?;
    let config = LinkmapConfig::load(&project_root)
        .with_context(|| format!("invalid config under {}", project_root.display()))?;

    match cli.command {
        Commands::Validate { input } => cmd_validate(&config, &input),
        Commands::Rank { input, root } => cmd_rank(&config, &input, root.as_deref()),
        Commands::Layout { input, root } => cmd_layout(&config, &input, root.as_deref()),
        Commands::Scene { input, root } => cmd_scene(&config, &input, root.as_deref()),
        Commands::Export {
            input,
            root,
            format,
        } => cmd_export(&config, &input, root.as_deref(), &format),
        Commands::Info { input, root } => cmd_info(&config, &input, root.as_deref()),
    }
}

/// Read a page document and build its rooted view.
///
/// With an explicit `root` the id is checked against the graph; otherwise the root comes from
/// the document's `isIndex` marker. Records without an `id` or `name` are skipped either way.
fn load_rooted(config: &LinkmapConfig, input: &Path, root: Option<&str>) -> Result<RootedView> {
    let records = storage::load_records_checked(input, config)?;
    let view = RootedView::resolve(&records, root)
        .with_context(|| format!("invalid rooted page graph in {}", input.display()))?;

    tracing::info!(
        pages = view.graph().len(),
        links = view.graph().link_count(),
        root = view.root_id(),
        "loaded {}",
        input.display()
    );
    Ok(view)
}

fn load_layers(
    config: &LinkmapConfig,
    input: &Path,
    root: Option<&str>,
) -> Result<(RootedView, Layers)> {
    let view = load_rooted(config, input, root)?;
    let layers = rank_layers(view.graph(), view.root_id())?;
    Ok((view, layers))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn cmd_validate(config: &LinkmapConfig, input: &Path) -> Result<()> {
    let records = storage::load_records_checked(input, config)?;
    // Dropped records are reported through tracing while the graph is assembled.
    let (graph, diagnostics) = PageGraph::deserialize_with_diagnostics(&records)
        .with_context(|| format!("invalid page graph in {}", input.display()))?;

    match RootedView::from_records(&records) {
        Ok(view) => println!("Index page: {}", view.root_id()),
        Err(e) => tracing::warn!("no usable index page: {}", e),
    }

    println!(
        "Graph is valid: {} pages, {} links, {} dropped record(s).",
        graph.len(),
        graph.link_count(),
        diagnostics.len()
    );
    Ok(())
}

fn cmd_rank(config: &LinkmapConfig, input: &Path, root: Option<&str>) -> Result<()> {
    let (view, layers) = load_layers(config, input, root)?;
    for (i, layer) in layers.iter().enumerate() {
        let names: Vec<String> = layer
            .iter()
            .map(|id| match view.get(id) {
                Some(page) if page.name != *id => format!("{} ({})", id, page.name),
                _ => id.clone(),
            })
            .collect();
        println!("{}: {}", i, names.join(", "));
    }
    let omitted = unreachable(view.graph(), &layers);
    if !omitted.is_empty() {
        eprintln!("{} unreachable page(s): {}", omitted.len(), omitted.join(", "));
    }
    Ok(())
}

fn cmd_layout(config: &LinkmapConfig, input: &Path, root: Option<&str>) -> Result<()> {
    let (view, layers) = load_layers(config, input, root)?;
    let layout = linkmap_layout::layout::layout(view.graph(), &layers, &config.layout);
    print_json(&layout)
}

fn cmd_scene(config: &LinkmapConfig, input: &Path, root: Option<&str>) -> Result<()> {
    let (view, layers) = load_layers(config, input, root)?;
    let layout = linkmap_layout::layout::layout(view.graph(), &layers, &config.layout);
    let scene = linkmap_layout::render::scene(&layout, &config.render);
    print_json(&scene)
}

fn cmd_export(
    config: &LinkmapConfig,
    input: &Path,
    root: Option<&str>,
    format: &str,
) -> Result<()> {
    let Some(export_format) = ExportFormat::from_name(format) else {
        anyhow::bail!("Unknown export format: {}. Use 'dot' or 'mermaid'.", format);
    };

    let (view, layers) = load_layers(config, input, root)?;
    let output = linkmap_layout::export::export(view.graph(), &layers, export_format);
    print!("{}", output);
    Ok(())
}

fn cmd_info(config: &LinkmapConfig, input: &Path, root: Option<&str>) -> Result<()> {
    let view = load_rooted(config, input, root)?;
    let graph = view.graph();
    let layers = rank_layers(graph, view.root_id())?;

    println!("Pages: {}", graph.len());
    println!("Links: {}", graph.link_count());
    println!("Dropped records: {}", view.diagnostics().len());
    println!("Root: {} ({})", view.root_id(), view.root().name);
    println!("Layers: {}", layers.len());
    println!("Ranked pages: {}", layers.page_count());
    println!("Unreachable pages: {}", unreachable(graph, &layers).len());
    println!(
        "Ring radius: {}, layer spacing: {}",
        config.layout.radius, config.layout.layer_spacing
    );

    if !layers.is_empty() {
        println!("\nLayer sizes:");
        for (i, layer) in layers.iter().enumerate() {
            println!("  {}: {} page(s)", i, layer.len());
        }
    }
    Ok(())
}
