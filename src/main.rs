use clap::Parser;
use film_stats::utils::{logger, validation::Validate};
use film_stats::{CliConfig, ConfigProvider, FilmService, HttpFilmSource, Query, TomlConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config.query);

    let output = match &config.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path.display());
            let file_config = match TomlConfig::from_file(path) {
                Ok(file_config) => file_config,
                Err(e) => exit_with_config_error(&e),
            };
            run(file_config, &config.query).await?
        }
        None => run(config.clone(), &config.query).await?,
    };

    println!("{}", output);
    Ok(())
}

async fn run<C: ConfigProvider + Validate>(
    config: C,
    query: &Query,
) -> film_stats::Result<String> {
    if let Err(e) = config.validate() {
        exit_with_config_error(&e);
    }
    if config.api_token().is_empty() {
        tracing::warn!("No API token configured; the films service will likely reject the request");
    }

    tracing::info!("Querying films service at {}", config.api_endpoint());
    let service = FilmService::new(HttpFilmSource::new(config));
    query.execute(&service).await
}

fn exit_with_config_error(e: &film_stats::FilmError) -> ! {
    tracing::error!("❌ Configuration validation failed: {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e);
    std::process::exit(1);
}
