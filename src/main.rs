//! rsudger 命令行：加载数据集并对给定 UA 逐条分类，输出 JSON

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rsudger::{Udger, UdgerConfig, VersionExtraction};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rsudger", version)]
#[command(about = "Classify user-agent strings against a Udger dataset", long_about = None)]
struct Cli {
    /// Dataset file (.json, or .mp/.msgpack for MessagePack)
    dataset: PathBuf,

    /// User-agent strings to classify
    #[arg(required = true)]
    ua: Vec<String>,

    /// Skip browser classification
    #[arg(long)]
    no_browser: bool,

    /// Skip OS classification
    #[arg(long)]
    no_os: bool,

    /// Skip device classification
    #[arg(long)]
    no_device: bool,

    /// Extract browser versions from capture groups
    #[arg(long)]
    with_version: bool,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let version_extraction = if cli.with_version {
        VersionExtraction::CaptureGroup
    } else {
        VersionExtraction::Disabled
    };
    let config = UdgerConfig::builder(&cli.dataset)
        .browser(!cli.no_browser)
        .os(!cli.no_os)
        .device(!cli.no_device)
        .version_extraction(version_extraction)
        .build();

    let udger = Udger::new(config)
        .with_context(|| format!("failed to load dataset {}", cli.dataset.display()))?;
    debug!("dataset stats: {:?}", udger.stats());

    for ua in &cli.ua {
        let info = udger.classify(ua);
        let out = if cli.pretty {
            serde_json::to_string_pretty(&info)?
        } else {
            serde_json::to_string(&info)?
        };
        println!("{}", out);
    }

    Ok(())
}
