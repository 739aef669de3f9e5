//! astscope CLI - browse converted-document AST snapshots

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};

use astscope::render::{node_to_json, ValueTone};
use astscope::source::{ENGINE_JAR_ENV, JAVA_ENV};
use astscope::{
    children, resolve_path, DetailInspector, DocumentStats, EngineConfig, InspectorSession,
    JsonFormat, LoadOutcome, NodePath, Point, SourceRegistry, SpatialRenderer, TreeView, Viewport,
};

type CliResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "astscope")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Browse converted-document AST snapshots", long_about = None)]
struct Cli {
    #[command(flatten)]
    engine: EngineArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct EngineArgs {
    /// Engine jar used for non-JSON inputs
    #[arg(long, global = true, env = ENGINE_JAR_ENV, value_name = "JAR")]
    engine_jar: Option<PathBuf>,

    /// Java executable (discovered when not set)
    #[arg(long, global = true, env = JAVA_ENV, value_name = "JAVA")]
    java: Option<PathBuf>,
}

impl EngineArgs {
    fn config(&self) -> EngineConfig {
        let mut config = EngineConfig::new();
        if let Some(jar) = &self.engine_jar {
            config = config.with_jar(jar);
        }
        if let Some(java) = &self.java {
            config = config.with_java(java);
        }
        config
    }
}

#[derive(Args)]
struct CanvasArgs {
    /// Zero-based section (page) index
    #[arg(short, long, default_value = "0")]
    section: usize,

    /// Viewport width in pixels
    #[arg(long, default_value = "400")]
    width: f64,

    /// Viewport height in pixels
    #[arg(long, default_value = "300")]
    height: f64,
}

impl CanvasArgs {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the node tree
    Tree {
        /// Snapshot (.json) or source artifact (.idml)
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Expand every node
        #[arg(short, long)]
        expand_all: bool,

        /// Do not expand below this depth
        #[arg(long, default_value = "16")]
        depth: usize,

        /// Select a path and expand down to it
        #[arg(long, value_name = "PATH")]
        select: Option<String>,
    },

    /// Show the attributes of one node
    Show {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Node path, e.g. root.sections[0].blocks[2]
        #[arg(value_name = "PATH")]
        path: String,

        /// Include child-sequence fields
        #[arg(long)]
        structural: bool,
    },

    /// List the direct children of one node
    Children {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[arg(value_name = "PATH", default_value = "root")]
        path: String,
    },

    /// Draw a page as SVG
    Render {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        canvas: CanvasArgs,

        /// Path to emphasize
        #[arg(long, value_name = "PATH")]
        select: Option<String>,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Report the block under a viewport position
    Hit {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        x: f64,

        y: f64,

        #[command(flatten)]
        canvas: CanvasArgs,
    },

    /// Show snapshot statistics
    Info {
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Print a snapshot or one node of it as JSON
    Json {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[arg(value_name = "PATH")]
        path: Option<String>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let engine = cli.engine.config();
    log::debug!("engine: {:?}", engine);

    let result = match cli.command {
        Commands::Tree {
            input,
            expand_all,
            depth,
            select,
        } => cmd_tree(&input, &engine, expand_all, depth, select.as_deref()),
        Commands::Show {
            input,
            path,
            structural,
        } => cmd_show(&input, &engine, &path, structural),
        Commands::Children { input, path } => cmd_children(&input, &engine, &path),
        Commands::Render {
            input,
            canvas,
            select,
            output,
        } => cmd_render(&input, &engine, &canvas, select.as_deref(), output.as_deref()),
        Commands::Hit {
            input,
            x,
            y,
            canvas,
        } => cmd_hit(&input, &engine, &canvas, x, y),
        Commands::Info { input } => cmd_info(&input, &engine),
        Commands::Json {
            input,
            path,
            compact,
            output,
        } => cmd_json(&input, &engine, path.as_deref(), compact, output.as_deref()),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Load `input` into a fresh session, with a spinner while the source runs.
fn open(input: &Path, engine: &EngineConfig) -> CliResult<InspectorSession> {
    let registry = SourceRegistry::with_defaults(engine.clone());
    let source = registry.get_for_path(input)?;

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.set_message(format!("Loading {} via {}...", input.display(), source.name()));
    pb.enable_steady_tick(Duration::from_millis(100));

    let rt = tokio::runtime::Runtime::new()?;
    let mut session = InspectorSession::new();
    let outcome = rt.block_on(session.load(source.as_ref(), input));
    pb.finish_and_clear();

    match outcome {
        LoadOutcome::Applied => Ok(session),
        _ => Err(session.error().unwrap_or("load did not complete").into()),
    }
}

fn parse_path(path: &str) -> CliResult<NodePath> {
    Ok(NodePath::parse(path)?)
}

fn select_section(session: &mut InspectorSession, index: usize) -> CliResult {
    if session.set_section(index) {
        return Ok(());
    }
    let count = session.document().map_or(0, |doc| doc.section_count());
    Err(format!("section {} out of range ({} sections)", index, count).into())
}

fn cmd_tree(
    input: &Path,
    engine: &EngineConfig,
    expand_all: bool,
    depth: usize,
    select: Option<&str>,
) -> CliResult {
    let mut session = open(input, engine)?;

    if let Some(path) = select {
        let path = parse_path(path)?;
        session.reveal(&path);
        session.select(Some(path));
    }

    let Some(doc) = session.document() else {
        return Ok(());
    };
    let rows = TreeView::new(doc)
        .with_max_depth(depth)
        .with_expand_all(expand_all)
        .rows(session.selection());

    for row in rows {
        let label = if row.selected {
            row.label.reversed().bold()
        } else {
            row.label.normal()
        };
        print!(
            "{}{} {} {}",
            "  ".repeat(row.depth),
            row.marker().dimmed(),
            row.icon,
            label
        );
        if let Some(summary) = &row.summary {
            print!("  {}", summary.dimmed());
        }
        println!();
    }

    Ok(())
}

fn cmd_show(input: &Path, engine: &EngineConfig, path: &str, structural: bool) -> CliResult {
    let session = open(input, engine)?;
    let path = parse_path(path)?;
    let node = session
        .document()
        .and_then(|doc| resolve_path(doc, &path))
        .ok_or_else(|| format!("no node at {}", path))?;

    println!("{} {}", path.to_string().cyan().bold(), format!("({:?})", node.kind()).dimmed());
    println!("{}", "─".repeat(40).dimmed());

    let inspector = DetailInspector::new().with_structural_fields(structural);
    for row in inspector.rows(node) {
        println!("{}: {}", row.key.bold(), tone(&row.value, row.tone));
    }

    Ok(())
}

fn tone(value: &str, tone: ValueTone) -> ColoredString {
    match tone {
        ValueTone::Null | ValueTone::Array | ValueTone::Object => value.dimmed(),
        ValueTone::Boolean(true) => value.green(),
        ValueTone::Boolean(false) => value.red(),
        ValueTone::Number => value.blue(),
        ValueTone::String => value.yellow(),
    }
}

fn cmd_children(input: &Path, engine: &EngineConfig, path: &str) -> CliResult {
    let session = open(input, engine)?;
    let path = parse_path(path)?;
    let node = session
        .document()
        .and_then(|doc| resolve_path(doc, &path))
        .ok_or_else(|| format!("no node at {}", path))?;

    let entries = children(node, &path);
    if entries.is_empty() {
        println!("{}", "(no children)".dimmed());
    }
    for entry in entries {
        print!("{} {}", entry.icon, entry.label.bold());
        if let Some(summary) = &entry.summary {
            print!("  {}", summary.dimmed());
        }
        println!("  {}", entry.path.to_string().dimmed());
    }

    Ok(())
}

fn cmd_render(
    input: &Path,
    engine: &EngineConfig,
    canvas: &CanvasArgs,
    select: Option<&str>,
    output: Option<&Path>,
) -> CliResult {
    let mut session = open(input, engine)?;
    select_section(&mut session, canvas.section)?;
    if let Some(path) = select {
        session.select(Some(parse_path(path)?));
    }

    let renderer = SpatialRenderer::default();
    let scene = session
        .draw(&renderer, canvas.viewport())
        .ok_or("nothing to draw")?;
    let svg = scene.to_svg();

    if let Some(path) = output {
        fs::write(path, &svg)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", svg);
    }

    Ok(())
}

fn cmd_hit(input: &Path, engine: &EngineConfig, canvas: &CanvasArgs, x: f64, y: f64) -> CliResult {
    let mut session = open(input, engine)?;
    select_section(&mut session, canvas.section)?;

    let renderer = SpatialRenderer::default();
    match session.click_canvas(&renderer, canvas.viewport(), Point::new(x, y)) {
        Some(path) => println!("{}", path),
        None => println!("{} ({}, {})", "No block at".yellow(), x, y),
    }

    Ok(())
}

fn cmd_info(input: &Path, engine: &EngineConfig) -> CliResult {
    let session = open(input, engine)?;
    let Some(doc) = session.document() else {
        return Ok(());
    };
    let stats = DocumentStats::collect(doc);

    println!("{}", "Snapshot Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref format) = doc.source_format {
        println!("{}: {}", "Format".bold(), format);
    }
    if let Some(ref source) = doc.source_file {
        println!("{}: {}", "Source".bold(), source);
    }
    if let Some(header) = session.header() {
        println!("{}: {}", "Summary".bold(), header);
    }

    println!();
    println!("{}", "Node Counts".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Sections".bold(), stats.section_count);
    println!(
        "{}: {} ({} text frames, {} tables, {} figures)",
        "Blocks".bold(),
        stats.block_count(),
        stats.text_frame_count,
        stats.table_count,
        stats.figure_count
    );
    println!("{}: {} / {}", "Rows / Cells".bold(), stats.row_count, stats.cell_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!(
        "{}: {} ({} runs, {} objects, {} breaks)",
        "Inline items".bold(),
        stats.item_count(),
        stats.text_run_count,
        stats.inline_object_count,
        stats.break_count
    );
    println!("{}: {}", "Characters".bold(), stats.char_count);
    println!(
        "{}: {} fonts, {} paragraph styles, {} character styles",
        "Styles".bold(),
        stats.font_count,
        stats.paragraph_style_count,
        stats.character_style_count
    );

    Ok(())
}

fn cmd_json(
    input: &Path,
    engine: &EngineConfig,
    path: Option<&str>,
    compact: bool,
    output: Option<&Path>,
) -> CliResult {
    let session = open(input, engine)?;
    let doc = session.document().ok_or("no snapshot loaded")?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = match path {
        Some(path) => {
            let path = parse_path(path)?;
            let node = resolve_path(doc, &path).ok_or_else(|| format!("no node at {}", path))?;
            node_to_json(node, format)?
        }
        None => astscope::to_json(doc, format)?,
    };

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "astscope".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("AST snapshot inspector");
    println!();
    println!("Repository: {}", "https://github.com/iyulab/astscope".dimmed());
    println!("License: MIT");
}
