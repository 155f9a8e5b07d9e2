use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tango_config::Config;
use tango_config::ui::UiLanguage;
use tango_types::MatchMode;
use tokio::io::BufReader;
use tokio::signal;

mod controller;
mod events;
mod io;
mod logging;
mod profile;
mod services;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppState;
use self::ui::Renderer;

#[derive(Parser, Debug)]
#[command(
    name = "tango",
    version,
    about = "Show a word in English and Japanese with matching illustrations"
)]
struct Cli {
    /// Word to look up; reads one word per line from stdin when omitted
    words: Vec<String>,

    /// JSON profile to start from
    #[arg(short = 'p', long = "profile")]
    profile: Option<PathBuf>,

    /// Write a profile with default settings to this path and exit
    #[arg(long = "init-profile")]
    init_profile: Option<PathBuf>,

    /// Match against a local `{image_url, name}` JSON dataset instead of the search service
    #[arg(short = 'c', long = "catalog")]
    catalog: Option<String>,

    /// Keep only the first matching illustration
    #[arg(long = "first")]
    first: bool,

    /// Cap the number of illustrations shown (0 = no cap)
    #[arg(short = 'n', long = "max-results")]
    max_results: Option<usize>,

    /// Print one JSON object per search
    #[arg(long = "json")]
    json: bool,

    /// Message language (ja, en)
    #[arg(long = "lang")]
    lang: Option<String>,

    /// Skip translation; both lines repeat the input
    #[arg(long = "no-translate")]
    no_translate: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long = "log-json")]
    log_json: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    logging::init(cli.verbose, cli.log_json)?;

    if let Some(path) = &cli.init_profile {
        profile::init_profile(path, "main")?;
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    let result = runtime.block_on(run(cli, config));
    // Stdin reads run on a blocking thread that may never return
    runtime.shutdown_timeout(Duration::from_millis(200));
    result
}

/// Defaults < profile < environment < command line
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.profile {
        Some(path) => {
            let mut config = profile::load_profile(path)?.value;
            config.apply_vars(|key| env::var(key).ok());
            config
        }
        None => Config::new(),
    };

    if let Some(catalog) = &cli.catalog {
        config.lookup.catalog_path = Some(catalog.clone());
    }
    if cli.first {
        config.lookup.match_mode = MatchMode::First;
    }
    if let Some(max) = cli.max_results {
        config.lookup.max_results = max;
    }
    if cli.json {
        config.ui.json = true;
    }
    if let Some(lang) = &cli.lang {
        config.ui.language = UiLanguage::parse(lang)
            .with_context(|| format!("unsupported language {lang:?}, expected ja or en"))?;
    }
    if cli.no_translate {
        config.translator.enabled = false;
    }

    Ok(config)
}

async fn run(cli: Cli, config: Config) -> anyhow::Result<ExitCode> {
    let searcher = services::build_searcher(&config)?;

    if !cli.words.is_empty() {
        let word = cli.words.join(" ");
        let Some(outcome) = searcher.search(&word).await else {
            return Ok(ExitCode::SUCCESS);
        };

        let mut renderer = Renderer::new(&config.ui, std::io::stdout(), false);
        renderer.render_outcome(&word, &outcome)?;
        return Ok(if outcome.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let interactive = atty::is(atty::Stream::Stdin);
    let capacity = config.channel_capacity;
    let state = Arc::new(AppState::new(config, searcher));
    let controller = AppController::new(state, capacity);

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    controller
        .run(
            BufReader::new(tokio::io::stdin()),
            std::io::stdout(),
            interactive,
            shutdown,
        )
        .await?;

    Ok(ExitCode::SUCCESS)
}
