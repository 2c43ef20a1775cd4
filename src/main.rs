use clap::Parser;
use lang_showcase::app::demos;
use lang_showcase::utils::{logger, validation::Validate};
use lang_showcase::CliConfig;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting lang-showcase");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    let ctx = config.demo_context();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match config.demo {
        Some(kind) => demos::run(kind, &ctx, &mut out),
        None => demos::run_all(&ctx, &mut out),
    };
    out.flush()?;

    if let Err(e) = result {
        tracing::error!("Demo failed: {} (category: {:?})", e, e.category());
        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}
