//! emojify - convert emoji in text from the command line.
//!
//! Reads the text given as arguments, or stdin line by line, and writes the
//! converted text to stdout.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use emojify_common::{EmojiConfig, ReplaceMode};
use emojify_engine::{EmojiConverter, InputSyntax};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "emojify")]
#[command(about = "Convert emoji between colon names, emoticons, Unicode and HTML")]
#[command(version)]
struct Cli {
    /// Syntax to look for in the input
    #[arg(long, value_enum, default_value_t = Via::Colons)]
    via: Via,

    /// Configuration file (defaults to config/default.toml and EMOJIFY_* variables)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Force an output mode instead of detecting it
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Output canonical `:name:` text
    #[arg(long)]
    colons: bool,

    /// Output the written name or the emoji's text form
    #[arg(long)]
    text: bool,

    /// Image set to render from
    #[arg(long)]
    img_set: Option<String>,

    /// Extra short name, as NAME=IDX (repeatable)
    #[arg(long = "alias", value_name = "NAME=IDX", value_parser = parse_alias)]
    aliases: Vec<(String, String)>,

    /// Text to convert; stdin is read when omitted
    input: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Via {
    Colons,
    Unified,
    Emoticons,
    /// Rewrite emoticons as `:name:` without rendering
    EmoticonsToColons,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Img,
    Softbank,
    Google,
    Unified,
}

impl From<Mode> for ReplaceMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Img => Self::Img,
            Mode::Softbank => Self::Softbank,
            Mode::Google => Self::Google,
            Mode::Unified => Self::Unified,
        }
    }
}

fn parse_alias(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((name, idx)) if !name.is_empty() && !idx.is_empty() => {
            Ok((name.to_string(), idx.to_lowercase()))
        }
        _ => Err(format!("expected NAME=IDX, got '{s}'")),
    }
}

impl Cli {
    fn load_config(&self) -> Result<EmojiConfig> {
        let mut config = match &self.config {
            Some(path) => EmojiConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => EmojiConfig::load().context("Failed to load config")?,
        };

        if let Some(mode) = self.mode {
            config.replace_mode = Some(mode.into());
        }
        if let Some(img_set) = &self.img_set {
            config.img_set.clone_from(img_set);
        }
        config.colons_mode |= self.colons;
        config.text_mode |= self.text;

        Ok(config)
    }
}

fn convert(converter: &EmojiConverter, via: Via, text: &str) -> Result<String> {
    let out = match via {
        Via::Colons => converter.replace(text, InputSyntax::Colons)?,
        Via::Unified => converter.replace(text, InputSyntax::Unified)?,
        Via::Emoticons => converter.replace(text, InputSyntax::Emoticons)?,
        Via::EmoticonsToColons => converter.replace_emoticons_with_colons(text),
    };
    Ok(out)
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so converted text can be piped
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emojify=warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.load_config()?;
    tracing::debug!(img_set = %config.img_set, via = ?cli.via, "Starting conversion");

    let mut converter =
        EmojiConverter::with_bundled_catalog(config).context("Failed to load emoji catalog")?;
    for (name, idx) in &cli.aliases {
        if converter.catalog().entry(idx).is_none() {
            bail!("Alias '{name}' points at unknown emoji '{idx}'");
        }
    }
    converter.add_aliases(cli.aliases.iter().cloned());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.input.is_empty() {
        let text = cli.input.join(" ");
        writeln!(out, "{}", convert(&converter, cli.via, &text)?)?;
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read stdin")?;
        writeln!(out, "{}", convert(&converter, cli.via, &line)?)?;
    }

    Ok(())
}
