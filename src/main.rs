//! `glossa` - detect the language of text given as arguments or on stdin.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use glossa::model::source::MODEL_DIR_ENV;
use glossa::{DetectorConfig, IsoCode639_1, Language, LanguageDetector, LanguageDetectorBuilder};

#[derive(Debug, Parser)]
#[command(name = "glossa", version, about = "Statistical language identification")]
struct Cli {
    /// Text to classify; each stdin line is classified when omitted
    text: Vec<String>,

    /// Restrict detection to these ISO 639-1 codes (default: all languages)
    #[arg(long, short, value_delimiter = ',')]
    languages: Vec<IsoCode639_1>,

    /// Required gap between the two best candidates, 0.0 to 0.99
    #[arg(long)]
    minimum_relative_distance: Option<f64>,

    /// Load every model before reading input
    #[arg(long)]
    preload: bool,

    /// Root of the `<iso code>/<order>s.json.zip` model tree
    #[arg(long, env = MODEL_DIR_ENV)]
    model_dir: Option<PathBuf>,

    /// JSON detector configuration; flags override its fields
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Print every candidate with its confidence instead of the best code
    #[arg(long)]
    confidence: bool,

    /// Log filter, e.g. `debug` or `glossa=trace` (default: RUST_LOG, else warn)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn detector_config(&self) -> Result<DetectorConfig> {
        let mut config = match &self.config {
            Some(path) => DetectorConfig::from_path(path)?,
            None => DetectorConfig::default(),
        };
        if !self.languages.is_empty() {
            config.languages = self.languages.iter().map(|&code| Language::from_iso_code_639_1(code)).collect();
        }
        if let Some(distance) = self.minimum_relative_distance {
            config.minimum_relative_distance = distance;
        }
        config.preload_models |= self.preload;
        if self.model_dir.is_some() {
            config.model_dir.clone_from(&self.model_dir);
        }
        Ok(config)
    }
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn report(detector: &LanguageDetector, text: &str, confidence: bool, out: &mut impl Write) -> io::Result<()> {
    if confidence {
        for value in detector.compute_language_confidence_values(text) {
            writeln!(out, "{} {:.4}", value.language().name(), value.value())?;
        }
        return Ok(());
    }
    match detector.detect_language_of(text).and_then(Language::iso_code_639_1) {
        Some(code) => writeln!(out, "{code}"),
        None => writeln!(out, "unknown"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let config = cli.detector_config()?;
    let detector = LanguageDetectorBuilder::from_config(&config)
        .build()
        .context("invalid detector configuration")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.text.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("reading stdin")?;
            report(&detector, &line, cli.confidence, &mut out)?;
        }
    } else {
        report(&detector, &cli.text.join(" "), cli.confidence, &mut out)?;
    }
    Ok(())
}
