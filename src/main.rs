use clap::Parser;
use farmguard::{cli, client, config, error, pages};
use cli::{Cli, Commands};
use client::ApiClient;
use config::Config;
use error::Result;
use farmguard_common::{CropType, SoilType, CROP_FIELDS, FERTILIZER_FIELDS};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("✗ {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "farmguard=debug,farmguard_common=debug"
    } else {
        "farmguard=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .init();
}

/// 設定を読み込んでAPIクライアントを作る
fn api_client() -> Result<ApiClient> {
    let config = Config::load()?;
    tracing::debug!(api = %config.api_base_url, timeout = config.timeout_seconds, "config loaded");
    Ok(ApiClient::new(&config)?)
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Detect { image, no_render, save_image } => {
            let client = api_client()?;
            pages::detect::run(&client, &image, !no_render, save_image).await?;
        }

        Commands::Crop(args) => {
            let client = api_client()?;
            pages::crop::run(&client, &args).await?;
        }

        Commands::Fertilizer(args) => {
            let client = api_client()?;
            pages::fertilizer::run(&client, &args).await?;
        }

        Commands::Results { query, data, save_image } => {
            let client = api_client()?;
            let payload = pages::results::payload_from_args(query.as_deref(), data.as_deref());
            pages::results::show(&client, payload.as_ref(), save_image.as_deref()).await?;
        }

        Commands::Fields => {
            println!("Crop recommendation:");
            for field in &CROP_FIELDS {
                println!("  {:<12} {:<18} {:>9}  (default {})", field.name, field.label, field.hint(), field.default);
            }
            println!("\nFertilizer guide:");
            for field in &FERTILIZER_FIELDS {
                println!("  {:<12} {:<18} {:>9}  (default {})", field.name, field.label, field.hint(), field.default);
            }
            let crops: Vec<&str> = CropType::ALL.iter().map(|c| c.as_str()).collect();
            let soils: Vec<&str> = SoilType::ALL.iter().map(|s| s.as_str()).collect();
            println!("\nCrop types: {}", crops.join(", "));
            println!("Soil types: {}", soils.join(", "));
        }

        Commands::Config { set_api_url, set_timeout, show } => {
            edit_config(set_api_url, set_timeout, show)?;
        }
    }

    Ok(())
}

/// 設定の表示/編集（設定ファイルが壊れていても上書きできる）
fn edit_config(set_api_url: Option<String>, set_timeout: Option<u64>, show: bool) -> Result<()> {
    let path = Config::config_path()?;
    let mut config = Config::load_or_default(&path);
    let changed = set_api_url.is_some() || set_timeout.is_some();

    if let Some(url) = set_api_url {
        config.set_api_url(url)?;
    }
    if let Some(seconds) = set_timeout {
        config.set_timeout(seconds)?;
    }
    if changed {
        config.save_to(&path)?;
        println!("✔ Config saved: {}", path.display());
    }

    if show || !changed {
        let effective = config.clone().with_env_override();
        println!("Config:");
        println!("  API URL: {}", effective.api_base_url);
        if effective.api_base_url != config.api_base_url {
            println!("    (overridden by {})", config::API_URL_ENV);
        }
        println!("  Timeout: {}s", effective.timeout_seconds);
    }
    Ok(())
}
