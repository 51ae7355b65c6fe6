//! mta-route-breadcrumbs CLI
//!
//! Resolves record-management navigation paths into breadcrumb trails.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use mta_route_breadcrumbs_core::{
    format_report, format_trail, BreadcrumbItem, BreadcrumbResolver, LabelTable, OutputFormat,
};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Route breadcrumb resolver
#[derive(Parser)]
#[command(name = "mta-route-breadcrumbs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Resolve navigation paths into breadcrumb trails")]
#[command(long_about = r#"
mta-route-breadcrumbs: Route Breadcrumb Resolution

Turns the navigation path of a record-management application into an ordered
breadcrumb trail. Numeric record ids are labelled from the section before them
and the action after them; unknown segments show their raw text.

Output formats:
  - JSON (default) - The trail as a list of {label, href} items
  - YAML - Human-readable YAML format
  - ANSI - Colorful terminal output
  - Summary - Plain "Home > Clients > Detail" text

Examples:
  mta-route-breadcrumbs /clients/123/edit                 # Resolve one path
  mta-route-breadcrumbs --format ansi /clients/123        # Colorful output
  mta-route-breadcrumbs --labels labels.yaml /clients     # Override labels
  mta-route-breadcrumbs --label clients=People /clients   # Inline override
  mta-route-breadcrumbs --item "History=/h" /clients/1    # Append an item
  mta-route-breadcrumbs batch paths.txt                   # One path per line
  mta-route-breadcrumbs labels                            # Effective labels
"#)]
pub struct Args {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to resolve (default: root)
    #[arg(default_value = "/")]
    pub path: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormatArg::Json, global = true)]
    pub format: OutputFormatArg,

    /// Label override file (.json, .yaml or .yml)
    #[arg(long, global = true)]
    pub labels: Option<PathBuf>,

    /// Inline label override KEY=VALUE (can be specified multiple times)
    #[arg(long = "label", value_parser = parse_label, action = clap::ArgAction::Append, global = true)]
    pub label_overrides: Vec<(String, String)>,

    /// Custom trailing item LABEL[=HREF] (can be specified multiple times)
    #[arg(long = "item", value_parser = parse_item, action = clap::ArgAction::Append, global = true)]
    pub items: Vec<BreadcrumbItem>,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a single path
    Resolve {
        /// Path to resolve
        path: String,
    },

    /// Resolve every path in a file, one per line ("-" reads stdin)
    Batch {
        /// File of paths
        file: PathBuf,

        /// Number of threads for parallel resolution (default: auto)
        #[arg(long)]
        threads: Option<usize>,
    },

    /// Print the effective label table
    Labels,
}

/// Output format argument
#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Ansi,
    Summary,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
            OutputFormatArg::Ansi => OutputFormat::Ansi,
            OutputFormatArg::Summary => OutputFormat::Summary,
        }
    }
}

fn parse_label(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, label)) if !key.is_empty() => Ok((key.to_string(), label.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

fn parse_item(raw: &str) -> Result<BreadcrumbItem, String> {
    match raw.split_once('=') {
        Some((label, href)) if !href.is_empty() => Ok(BreadcrumbItem::linked(label, href)),
        Some((label, _)) => Ok(BreadcrumbItem::current(label)),
        None => Ok(BreadcrumbItem::current(raw)),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    match &args.command {
        Some(Commands::Resolve { path }) => run_resolve(path, &args),
        Some(Commands::Batch { file, threads }) => run_batch(file, *threads, &args),
        Some(Commands::Labels) => run_labels(&args),
        None => run_resolve(&args.path, &args),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Build the override table from the label file and inline flags
fn build_overrides(args: &Args) -> Result<Option<LabelTable>> {
    let mut table = match &args.labels {
        Some(path) => Some(LabelTable::from_file(path).with_context(|| {
            format!("Failed to load label table from {}", path.display())
        })?),
        None => None,
    };

    if !args.label_overrides.is_empty() {
        let inline = table.get_or_insert_with(LabelTable::new);
        for (key, label) in &args.label_overrides {
            inline.insert(key.clone(), label.clone());
        }
    }

    Ok(table)
}

fn run_resolve(path: &str, args: &Args) -> Result<()> {
    let overrides = build_overrides(args)?;
    let resolver = BreadcrumbResolver::new();

    let trail = resolver.resolve(path, overrides.as_ref(), &args.items);

    let output = format_trail(&trail, args.format.clone().into())?;
    write_output(&output, args.output.as_ref())?;

    Ok(())
}

fn run_batch(file: &Path, threads: Option<usize>, args: &Args) -> Result<()> {
    let overrides = build_overrides(args)?;
    let contents = read_paths(file)?;
    let paths: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    tracing::debug!(file = %file.display(), paths = paths.len(), "loaded batch");

    // Show progress spinner
    let spinner = if args.verbose && atty::is(atty::Stream::Stderr) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Invalid spinner template")?,
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(format!("Resolving {} paths...", paths.len()));
        Some(pb)
    } else {
        None
    };

    let resolver = BreadcrumbResolver::new();
    let report = match threads {
        Some(threads) => rayon_pool(threads)?
            .install(|| resolver.resolve_many(&paths, overrides.as_ref(), &args.items)),
        None => resolver.resolve_many(&paths, overrides.as_ref(), &args.items),
    };

    if let Some(ref pb) = spinner {
        pb.finish_with_message(format!(
            "Resolved {} paths in {}ms",
            report.stats.total_paths, report.metadata.duration_ms
        ));
    }

    let output = format_report(&report, args.format.clone().into())?;
    write_output(&output, args.output.as_ref())?;

    Ok(())
}

fn rayon_pool(threads: usize) -> Result<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("Failed to build thread pool")
}

fn run_labels(args: &Args) -> Result<()> {
    let overrides = build_overrides(args)?;
    let labels = BreadcrumbResolver::new().effective_labels(overrides.as_ref());

    let output = match OutputFormat::from(args.format.clone()) {
        OutputFormat::Json => serde_json::to_string_pretty(&labels)?,
        OutputFormat::Yaml => serde_yaml::to_string(&labels)?,
        OutputFormat::Ansi | OutputFormat::Summary => labels
            .sorted()
            .into_iter()
            .map(|(key, label)| format!("{key}: {label}"))
            .collect::<Vec<_>>()
            .join("\n"),
    };

    write_output(&output, args.output.as_ref())?;

    Ok(())
}

fn read_paths(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut contents = String::new();
        io::stdin()
            .read_to_string(&mut contents)
            .context("Failed to read paths from stdin")?;
        Ok(contents)
    } else {
        fs::read_to_string(file)
            .with_context(|| format!("Failed to read paths from {}", file.display()))
    }
}

fn write_output(output: &str, path: Option<&PathBuf>) -> Result<()> {
    if let Some(path) = path {
        fs::write(path, output).context("Failed to write output file")?;
    } else {
        println!("{}", output);
    }
    Ok(())
}
