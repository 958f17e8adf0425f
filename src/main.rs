use clap::Parser;
use upc_image_scraper::core::report;
use upc_image_scraper::domain::ports::ConfigProvider;
use upc_image_scraper::utils::{logger, validation::Validate};
use upc_image_scraper::{
    CatalogClient, CliConfig, LocalStorage, RunSummary, ScrapeEngine, ScrapeError, TomlConfig, Upc,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting upc-image-scraper");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path.display());
            match TomlConfig::from_file(path) {
                Ok(config) => execute(&config, &cli).await,
                Err(e) => Err(e),
            }
        }
        None => execute(&cli, &cli).await,
    };

    let summary = result.unwrap_or_else(|e| exit_with(e));

    if let (Some(summary), Some(path)) = (&summary, &cli.summary_json) {
        if let Err(e) = report::write_summary(path, summary).await {
            exit_with(e);
        }
        println!("🧾 Summary written: {}", path.display());
    }

    Ok(())
}

fn exit_with(e: ScrapeError) -> ! {
    tracing::error!(
        "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

/// Returns `None` for a dry run.
async fn execute<C: ConfigProvider + Validate>(
    config: &C,
    cli: &CliConfig,
) -> Result<Option<RunSummary>, ScrapeError> {
    config.validate()?;
    let upcs = config.upcs()?;
    tracing::info!("✅ Configuration validated: {} UPCs against {}", upcs.len(), config.base_url());

    let catalog = CatalogClient::from_config(config)?;

    if cli.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no requests will be sent");
        print_dry_run(&catalog, &upcs, config)?;
        return Ok(None);
    }

    let storage = LocalStorage::new(config.image_dir());
    let engine = ScrapeEngine::new(catalog, storage, config.report_path());
    let summary = engine.run(&upcs).await?;

    print_summary(&summary);
    Ok(Some(summary))
}

fn print_dry_run<C: ConfigProvider>(
    catalog: &CatalogClient,
    upcs: &[Upc],
    config: &C,
) -> Result<(), ScrapeError> {
    println!("🔍 Dry Run:");
    println!("  Images: {}", config.image_dir());
    println!("  Report: {}", config.report_path());
    println!();
    for line in catalog.search_plan(upcs)? {
        println!("  {}", line);
    }
    println!();
    println!("{} UPCs would be searched.", upcs.len());
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    println!();
    println!("📊 FINAL SUMMARY");
    println!("✔️ Images downloaded: {}", summary.found().len());
    println!("❌ UPCs not found: {}", summary.not_found().len());
    println!("📄 Report written: {}", summary.report_path);
}

