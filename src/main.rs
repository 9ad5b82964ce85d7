mod cli;

use anyhow::Context;
use bug_portal::adapters::outbound::build_system::KojiUrlBuilder;
use bug_portal::adapters::outbound::clock::SystemClock;
use bug_portal::adapters::outbound::network::BugzillaClient;
use bug_portal::application::dto::{BugQueryRequest, OutputFormat};
use bug_portal::application::factories::FormatterFactory;
use bug_portal::application::services::{
    BugHydrator, QueryAggregator, ResultCache, StatsAggregator,
};
use bug_portal::application::use_cases::{BugPortal, QueryBugStatsUseCase, QueryBugsUseCase};
use bug_portal::bug_tracking::domain::BugFilter;
use bug_portal::bug_tracking::policies::SecurityClassification;
use bug_portal::config::{self, ConfigFile, LoggingSection};
use bug_portal::ports::inbound::BugQueryPort;
use bug_portal::shared::error::ExitCode;
use bug_portal::shared::Result;
use cli::{Args, Command};
use std::io::IsTerminal;
use std::process;
use std::sync::Arc;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;
    init_tracing(&config.logging)?;
    config.warn_unknown_fields();

    let format = resolve_format(args.format, &config)?;
    let formatter = FormatterFactory::create(format, std::io::stdout().is_terminal());

    let output = match args.command {
        Command::Bugs {
            package,
            collection,
            version,
            start_row,
            rows,
        } => {
            let request = BugQueryRequest::new(start_row, rows)
                .with_filter(BugFilter::PACKAGE, &package)
                .with_filter(BugFilter::COLLECTION, &collection)
                .with_filter(BugFilter::VERSION, &version);
            let page = build_portal(&config)?.query_bugs(request).await?;
            formatter.format_page(&page)?
        }
        Command::Stats { package } => {
            let stats = build_portal(&config)?.query_bug_stats(&package).await?;
            formatter.format_stats(&package, &stats)?
        }
        Command::Builds { package } => {
            let links = KojiUrlBuilder::new(&config.koji.host).links(&package);
            formatter.format_build_links(&links)?
        }
    };

    println!("{}", output);
    Ok(())
}

fn load_config(args: &Args) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => config::load_config_from_path(path),
        None => {
            let cwd = std::env::current_dir().context("Failed to determine current directory")?;
            Ok(config::discover_config(&cwd)?.unwrap_or_default())
        }
    }
}

/// Command-line format wins over the config file; JSON otherwise.
fn resolve_format(cli_format: Option<OutputFormat>, config: &ConfigFile) -> Result<OutputFormat> {
    if let Some(format) = cli_format {
        return Ok(format);
    }
    match config.format.as_deref() {
        Some(raw) => raw
            .parse::<OutputFormat>()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e)),
        None => Ok(OutputFormat::Json),
    }
}

fn build_portal(config: &ConfigFile) -> Result<BugPortal<BugzillaClient, SystemClock>> {
    let tracker = Arc::new(BugzillaClient::new(
        &config.bugzilla.base_url,
        config.bugzilla.timeout(),
    )?);
    let clock = SystemClock;

    let bugs = QueryBugsUseCase::new(
        QueryAggregator::with_page_size(tracker.clone(), config.bugzilla.page_size),
        BugHydrator::with_chunk_size(
            tracker.clone(),
            clock,
            SecurityClassification::new(config.bugzilla.security_assignee.clone()),
            config.bugzilla.chunk_size,
        ),
        ResultCache::new("bug_lists", config.cache.bug_list_ttl(), clock),
    );

    let stats = QueryBugStatsUseCase::new(
        StatsAggregator::with_blacklist(
            tracker,
            clock,
            config.stats.blacklist.iter().cloned().collect(),
        ),
        ResultCache::new("stats", config.cache.stats_ttl(), clock),
    )
    .with_collection(&config.stats.collection);

    Ok(BugPortal::new(bugs, stats))
}

fn init_tracing(logging: &LoggingSection) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(&logging.level))
        .context("building log filter")?;

    let fmt_layer = if logging.json {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("installing log subscriber")?;
    Ok(())
}
