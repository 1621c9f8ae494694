//! Command-line surface and the fetch-then-report flow behind it.

use crate::report;
use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use condo_core::config::Config;
use condo_core::{evaluate, Category, QuerySpec, Snapshot, UnitStore};
use condo_feeds::{FileSource, HttpSource, Loader, Source};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "condo", about = "Condo — condominium residents and vehicles dashboard")]
pub struct Cli {
    /// Write debug logs to /tmp/condo-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    pub debug: bool,

    /// Fetch records from this URL instead of the configured source.
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Read records from a local JSON file. Takes precedence over --url.
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the dashboard counters, vehicle split and recent observations.
    Stats,
    /// Search units by free text, per-field terms and category.
    Search(SearchArgs),
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Matched against block/apt, name, plate, phone, sticker and car model.
    #[arg(default_value = "")]
    pub text: String,
    #[arg(long, default_value = "")]
    pub block: String,
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub plate: String,
    #[arg(long, default_value = "")]
    pub car_model: String,
    /// all, has-vehicle, has-rented-spot or has-observation.
    #[arg(long, default_value_t = Category::All)]
    pub category: Category,
}

impl SearchArgs {
    pub fn to_spec(&self) -> QuerySpec {
        QuerySpec::for_category(self.category)
            .text(self.text.as_str())
            .block(self.block.as_str())
            .name(self.name.as_str())
            .plate(self.plate.as_str())
            .car_model(self.car_model.as_str())
    }
}

/// Pick the source: `--file`, then `--url`, then `[source] url`.
pub fn resolve_source(cli: &Cli, config: &Config) -> anyhow::Result<Box<dyn Source>> {
    if let Some(path) = &cli.file {
        return Ok(Box::new(FileSource::new(path.clone())));
    }
    match cli.url.as_deref().or_else(|| config.source.url()) {
        Some(url) => Ok(Box::new(HttpSource::new(url))),
        None => bail!(
            "no source configured: pass --url or --file, or set [source] url in the config file"
        ),
    }
}

async fn load(loader: &Loader, timeout_secs: u64) -> anyhow::Result<Arc<Snapshot>> {
    let refresh = loader.refresh();
    let result = if timeout_secs == 0 {
        refresh.await
    } else {
        tokio::time::timeout(Duration::from_secs(timeout_secs), refresh)
            .await
            .with_context(|| {
                format!(
                    "timed out after {timeout_secs}s loading {}; try again",
                    loader.source().describe()
                )
            })?
    };
    result.with_context(|| {
        format!(
            "could not load unit records from {}; check the connection and try again",
            loader.source().describe()
        )
    })
}

pub async fn run(cli: Cli, config: Config) -> anyhow::Result<()> {
    let loader = Loader::from_boxed(resolve_source(&cli, &config)?, Arc::new(UnitStore::new()));
    let snapshot = load(&loader, config.source.fetch_timeout_secs).await?;

    let mut out = std::io::stdout().lock();
    match &cli.command {
        Command::Stats => {
            let dashboard = report::Dashboard::new(&snapshot, config.dashboard.recent_observations);
            if cli.json {
                report::write_json(&mut out, &dashboard)?;
            } else {
                report::write_dashboard(&mut out, &dashboard)?;
            }
        }
        Command::Search(args) => {
            let spec = args.to_spec();
            tracing::debug!(?spec, "cli: running search");
            let found = evaluate(&snapshot.units, &spec);
            if cli.json {
                report::write_json(&mut out, &found)?;
            } else {
                report::write_search(&mut out, &spec, &found)?;
            }
        }
    }
    Ok(())
}
