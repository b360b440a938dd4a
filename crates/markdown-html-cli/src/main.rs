use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use markdown_html_config::Config;
use markdown_html_engine::convert_document;
use std::{
    fs,
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process,
};

/// Convert a Markdown document to HTML.
#[derive(Debug, Parser)]
#[command(name = "markdown-html", version, about)]
struct Cli {
    /// Markdown file to convert. `-` or nothing reads stdin.
    input: Option<PathBuf>,

    /// Write HTML here instead of stdout or the configured output_dir.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Use this config file instead of ~/.config/markdown-html/config.toml.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    }
    .unwrap_or_default();

    init_logging(&cli, &config)?;
    log::debug!(
        "Config path: {}",
        cli.config
            .clone()
            .unwrap_or_else(Config::config_path)
            .display()
    );

    let input = read_input(cli.input.as_deref())?;
    let root = convert_document(&input).context("Failed to parse markdown")?;
    let html = root.render().context("Failed to render HTML")?;

    match output_path(&cli, &config) {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

/// `-v` beats `RUST_LOG`, which beats the config `log_level`, which beats Warn.
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let fallback = default_level(config)?;
    let env = env_logger::Env::default().default_filter_or(fallback.to_string());

    let mut builder = env_logger::Builder::from_env(env);
    if let Some(level) = verbosity_level(cli.verbose) {
        builder.filter_level(level);
    }
    builder.init();
    Ok(())
}

fn default_level(config: &Config) -> Result<LevelFilter> {
    Ok(config.log_level_filter()?.unwrap_or(LevelFilter::Warn))
}

fn verbosity_level(verbose: u8) -> Option<LevelFilter> {
    match verbose {
        0 => None,
        1 => Some(LevelFilter::Info),
        2 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// `--output` wins; otherwise `output_dir/<stem>.html` when reading a file.
fn output_path(cli: &Cli, config: &Config) -> Option<PathBuf> {
    if let Some(output) = &cli.output {
        return Some(output.clone());
    }

    let dir = config.output_dir.as_ref()?;
    let stem = cli
        .input
        .as_deref()
        .filter(|p| *p != Path::new("-"))?
        .file_stem()?;
    Some(dir.join(stem).with_extension("html"))
}
