use std::fs::File;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use skyword::core::config;
use skyword::scripture::ApiBibleProvider;
use skyword::tui;

#[derive(Parser)]
#[command(name = "skyword", about = "Read and search the Bible from your terminal")]
struct Args {
    /// Bible version id to open once versions have loaded
    #[arg(short, long)]
    bible: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to skyword.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("skyword.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("skyword: {e}");
            return ExitCode::FAILURE;
        }
    };
    let resolved = config::resolve(&file_config, args.bible.as_deref());

    let Some(api_key) = resolved.api_key.clone() else {
        log::error!("No API key configured");
        eprintln!(
            "skyword: no API key. Set SCRIPTURE_API_KEY or api_key under [api] in {}",
            config::config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "~/.skyword/config.toml".to_string())
        );
        return ExitCode::FAILURE;
    };

    log::info!(
        "SkyWord starting up (base_url={}, default_version={:?})",
        resolved.base_url,
        resolved.default_version
    );

    let provider = Arc::new(ApiBibleProvider::new(api_key, Some(resolved.base_url.clone())));

    match tui::run(provider, resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal error: {}", e);
            eprintln!("skyword: {e}");
            ExitCode::FAILURE
        }
    }
}
