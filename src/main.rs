use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use skin_heads::{
    app::{
        convert_service::{convert_skin, ConversionReport},
        upload_service::UploadOrchestrator,
    },
    domain::auth::credential::Credential,
    infrastructure::{
        filesystem::config::{apply_env_overrides, load_config, API_KEY_ENV, DEFAULT_CONFIG_FILE},
        http::mineskin::MineSkinClient,
    },
    shared::result::AppResult,
};

#[derive(Parser)]
#[command(name = "skin-heads")]
#[command(
    about = "Builds four MineSkin player heads from a 64x64 skin and prints the /summon command",
    long_about = None
)]
struct Cli {
    /// 64x64 PNG skin to convert
    skin: PathBuf,

    /// MineSkin API key (overrides the config file and MINESKIN_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// JSON config file (defaults to ./skin-heads.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Also write head_0.png .. head_3.png into this directory
    #[arg(long)]
    export_dir: Option<PathBuf>,

    /// Heads uploaded side by side (1-4, default 1)
    #[arg(long)]
    concurrency: Option<usize>,
}

async fn run(cli: Cli) -> AppResult<ConversionReport> {
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let mut config = apply_env_overrides(load_config(&config_path)?);
    if let Some(api_key) = cli.api_key {
        config.api_key = Some(api_key);
    }
    if let Some(export_dir) = cli.export_dir {
        config.export_dir = Some(export_dir);
    }
    if let Some(concurrency) = cli.concurrency {
        config.max_concurrent_uploads = concurrency;
    }

    let api_key = config
        .api_key
        .clone()
        .ok_or_else(|| format!("Falta la API key de MineSkin. Usa --api-key o {API_KEY_ENV}."))?;
    let credential = Credential::new(api_key)?;

    let bytes = std::fs::read(&cli.skin)
        .map_err(|err| format!("No se pudo abrir skin {}: {err}", cli.skin.display()))?;

    let client = MineSkinClient::new(config.request_timeout())?;
    let orchestrator = UploadOrchestrator::new(client).with_max_concurrent(config.concurrency());

    convert_skin(&bytes, &credential, &orchestrator, config.export_dir.as_deref()).await
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()).await {
        Ok(ConversionReport {
            command: Some(command),
            ..
        }) => {
            println!("{command}");
            ExitCode::SUCCESS
        }
        Ok(report) => {
            eprintln!("{}", report.status);
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
