use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use dashfilter::{match_date_filter_option, merge_filter_context, parser, MergeConfig};

#[derive(Parser)]
#[command(name = "dashfilter-demo")]
#[command(about = "Reconcile dashboard filters: merge incoming filters, match date filter options")]
#[command(version)]
struct Args {
    /// Log every matching and merging step
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge incoming filters (shared link, export) into the dashboard filters
    Merge {
        /// Dashboard filter context (YAML or JSON list of filters)
        #[arg(long)]
        original: PathBuf,

        /// Incoming filters to apply
        #[arg(long)]
        incoming: PathBuf,

        /// Dashboard filter configuration; all filters are active without it
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Find the date filter option shown as selected for a stored date filter
    Match {
        /// Date filter option catalog
        #[arg(long)]
        catalog: PathBuf,

        /// Stored date filter (inner dateFilter object); all time when omitted
        #[arg(long)]
        filter: Option<PathBuf>,

        /// Local identifier of the option the user picked last
        #[arg(long)]
        preferred: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()))
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Commands::Merge { original, incoming, config } => handle_merge(&original, &incoming, config.as_deref()),
        Commands::Match { catalog, filter, preferred } => {
            handle_match(&catalog, filter.as_deref(), preferred.as_deref())
        }
    }
}

/// Handle the 'merge' subcommand
fn handle_merge(original: &Path, incoming: &Path, config: Option<&Path>) -> anyhow::Result<()> {
    let original_filters = parser::parse_filters_file(original)
        .with_context(|| format!("loading dashboard filters from {}", original.display()))?;
    let incoming_filters = parser::parse_filters_file(incoming)
        .with_context(|| format!("loading incoming filters from {}", incoming.display()))?;
    let config = match config {
        Some(path) => parser::parse_merge_config_file(path)
            .with_context(|| format!("loading filter configuration from {}", path.display()))?,
        None => MergeConfig::default(),
    };

    let result = merge_filter_context(&original_filters, &incoming_filters, &config);
    for r in &result.validation_results {
        tracing::warn!(
            filter = r.filter.local_identifier().unwrap_or(r.filter.kind()),
            error = r.error.code(),
            "{}",
            r.error
        );
    }

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Handle the 'match' subcommand
fn handle_match(catalog: &Path, filter: Option<&Path>, preferred: Option<&str>) -> anyhow::Result<()> {
    let catalog_options = parser::parse_catalog_file(catalog)
        .with_context(|| format!("loading date filter options from {}", catalog.display()))?;
    let date_filter = match filter {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading date filter from {}", path.display()))?;
            Some(parser::parse_date_filter_str(&text).with_context(|| format!("parsing {}", path.display()))?)
        }
        None => None,
    };

    let selected = match_date_filter_option(date_filter.as_ref(), &catalog_options, preferred);

    println!("{}", serde_json::to_string_pretty(&selected)?);
    Ok(())
}
