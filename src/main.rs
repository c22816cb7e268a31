//! Binary entrypoint for mcrender.
//!
//! Delegates all rendering to the library crate; this just wires config
//! to the two builders and writes the results out.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use mcrender::config::PlayerSpec;
use mcrender::text::Span;
use mcrender::{config, encode, playerlist, tooltip};

/// Simple CLI
#[derive(Debug, Parser)]
#[command(name = "mcrender", about = "Bitmap-font tooltip and tab-list renderer")]
struct Cli {
    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE", default_value = "config.yaml")]
    config: PathBuf,

    /// Override the configured output directory
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    // map -v to log level
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env()
        .add_directive(format!("mcrender={}", level).parse().unwrap())
        .add_directive("reqwest=warn".parse().unwrap())
        .add_directive("hyper=warn".parse().unwrap());
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let cfg = config::from_yaml_file(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    cfg.validate().context("validating configuration")?;

    let out_dir = cli.out.unwrap_or_else(|| cfg.output_dir.clone());
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    if let Some(item) = &cfg.tooltip.item {
        let img = tooltip::builder()
            .item(item.to_item())
            .padding(cfg.tooltip.padding)
            .line_spacing(cfg.tooltip.line_spacing)
            .build()
            .await
            .context("rendering tooltip")?;
        let path = out_dir.join("tooltip.png");
        encode::save_png(&img, &path).context("saving tooltip")?;
        info!(path = %path.display(), width = img.width(), height = img.height(), "wrote tooltip");
    }

    let list = &cfg.player_list;
    let mut builder = playerlist::builder()
        .entries(list.players.iter().map(PlayerSpec::to_entry))
        .max_rows_per_column(list.max_rows_per_column)
        .column_spacing(list.column_spacing)
        .padding(list.padding)
        .show_heads(list.show_heads);
    if let Some(header) = &list.header {
        builder = builder.header(Span::text(header.clone()).bold(true));
    }
    let img = builder.build().await.context("rendering player list")?;
    let path = out_dir.join("tab.png");
    encode::save_png(&img, &path).context("saving player list")?;
    info!(path = %path.display(), width = img.width(), height = img.height(), "wrote player list");

    Ok(())
}
