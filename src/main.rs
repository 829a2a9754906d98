//! rsgeosite 命令行入口
//! 参数名与默认值兼容原有 geosite 生成工具：--sites / --output / --format

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rsgeosite::config::{DEFAULT_OUTPUT_PATH, DEFAULT_SITES_DIR};
use rsgeosite::{ConfigManager, OutputEncoding, RuleFormat, generate};

#[derive(Debug, Parser)]
#[command(name = "rsgeosite", version, about = "Generate geosite.dat from domain-list files.")]
struct Cli {
    /// Folder storing site files.
    #[arg(long, default_value = DEFAULT_SITES_DIR)]
    sites: PathBuf,

    /// Path of the output .dat file.
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Format of the site files (v2ray | autoproxy).
    #[arg(long, default_value = RuleFormat::default().as_str())]
    format: String,

    /// Encoding of the output file (protobuf | json | msgpack).
    #[arg(long, default_value = OutputEncoding::default().as_str())]
    encoding: String,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

// 日志输出到 stderr，RUST_LOG 优先
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let format: RuleFormat = cli.format.parse()?;
    let encoding: OutputEncoding = cli.encoding.parse()?;

    let config = ConfigManager::custom()
        .sites_dir(cli.sites)
        .output_path(cli.output)
        .format(format)
        .encoding(encoding)
        .build();

    let report = generate(&config)
        .with_context(|| format!("生成规则库失败：{}", config.output_path.display()))?;

    println!("File generated successfully: {}.", report.output_path.display());
    Ok(())
}
