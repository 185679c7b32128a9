use clap::Parser;
use landing_waitlist::app::terminal;
use landing_waitlist::utils::{logger, validation::Validate};
use landing_waitlist::{CliConfig, LandingPage, PageEvent, TerminalPresenter};
use tokio::io::BufReader;
use tokio::runtime::Handle;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting landing-waitlist");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證配置
    let config = match cli.load_landing_config().and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if !config.effects.enabled {
        tracing::info!("Decorative effects disabled");
    }

    let (presenter, printer) = TerminalPresenter::stdout(Handle::current());
    let mut page = LandingPage::new(config, presenter);

    page.handle_event(PageEvent::Loaded);
    println!("Type your email and press Enter to join the waitlist (:list, :count, :scroll, :quit)");

    terminal::run(&mut page, BufReader::new(tokio::io::stdin())).await?;

    // 頁面釋放後，印表任務會在剩餘動畫播完時結束
    drop(page);
    if let Err(e) = printer.await {
        tracing::warn!("Output task ended abnormally: {}", e);
    }

    Ok(())
}
