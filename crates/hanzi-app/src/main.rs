use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod io;
pub mod profile;
pub mod run;
pub mod status;

#[cfg(test)]
mod tests;

use self::run::RunOutcome;

/// Turn a Chinese text into an HTML study sheet with pinyin, translations and HSK levels
#[derive(Parser, Debug, Default)]
#[command(name = "hanzi", version)]
pub struct Cli {
    /// JSON config file; missing file means defaults
    #[arg(short, long, default_value = "hanzi.json")]
    pub config: PathBuf,

    /// Chinese input text
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Where to write the HTML report
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Persistent word translation cache
    #[arg(long)]
    pub cache: Option<PathBuf>,

    /// Target language for word translations
    #[arg(short, long)]
    pub target: Option<String>,

    /// Render the report in dark mode
    #[arg(long)]
    pub dark: bool,

    /// Never call a translation service, use cached words only
    #[arg(long)]
    pub offline: bool,

    /// Write the effective config to --config and exit
    #[arg(long)]
    pub init_config: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!("No .env file loaded: {e}");
    }

    let cli = Cli::parse();
    let config = profile::load_config(&cli)?;

    if cli.init_config {
        profile::init_config(&cli, &config)?;
        println!("Config written to {}", cli.config.display());
        return Ok(());
    }

    let translator = hanzi_lang_chinese::translator_from_config(&config.translator)?;

    match run::run(&config, translator.as_ref()).await? {
        RunOutcome::Bootstrapped { input } => {
            println!(
                "Created {} with a sample text. Replace it with your own Chinese text and run again.",
                input.display()
            );
        }
        RunOutcome::Rendered(report) => {
            status::print_summary(&report, config.report.preview_words);
        }
    }

    Ok(())
}
