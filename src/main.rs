use chrono::Datelike;
use clap::Parser;
use portfolio_site::config::{Command, RenderArgs, SubmitArgs};
use portfolio_site::core::FormRelay;
use portfolio_site::utils::error::ErrorSeverity;
use portfolio_site::utils::{logger, validation::Validate};
use portfolio_site::{
    CliConfig, ContactSubmission, HttpFormRelay, LocalStorage, SiteConfig, SiteEngine, SiteError,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting portfolio-site");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let site = match cli.site_config() {
        Ok(site) => site,
        Err(e) => exit_with(e),
    };

    // 驗證配置
    if let Err(e) = site.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(e);
    }

    let outcome = match &cli.command {
        Command::Render(args) => render(site, args).await,
        Command::Submit(args) => submit(&site, args).await,
        Command::Inspect => inspect(&site),
    };

    if let Err(e) = outcome {
        exit_with(e);
    }

    Ok(())
}

async fn render(site: SiteConfig, args: &RenderArgs) -> portfolio_site::Result<()> {
    let year = args.year.unwrap_or_else(|| chrono::Local::now().year());
    let output = LocalStorage::new(site.site.output_path.clone());
    let assets = LocalStorage::new(site.site.assets_dir.clone());
    let engine = SiteEngine::new(output, assets, site);

    let page = engine.build(year).await?;
    println!("✅ Portfolio page rendered");
    println!("📁 Output saved to: {}", page.output_path);
    if !page.assets_missing.is_empty() {
        println!("⚠️ Missing assets: {}", page.assets_missing.join(", "));
    }
    Ok(())
}

async fn submit(site: &SiteConfig, args: &SubmitArgs) -> portfolio_site::Result<()> {
    let submission = ContactSubmission::new(&args.name, &args.email, &args.message);
    let relay = HttpFormRelay::new(site.contact.endpoint.clone());

    tracing::info!("📨 Sending contact message to {}", relay.endpoint());
    let response = relay.submit(&submission).await?;
    println!("Form relay answered {} ({})", response.status, response.final_url);
    Ok(())
}

fn inspect(site: &SiteConfig) -> portfolio_site::Result<()> {
    println!("{}", serde_json::to_string_pretty(&site.portfolio)?);
    Ok(())
}

fn exit_with(e: SiteError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    let exit_code = match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
