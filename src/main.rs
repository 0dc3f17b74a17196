//! rsuaparser 命令行入口

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rsuaparser::{ConfigManager, GlobalConfig, UaDetector};

/// 基于 UAS 特征库解析 User-Agent
#[derive(Debug, Parser)]
#[command(name = "rsuaparser", version, about)]
struct Cli {
    /// 本地 ini 特征库文件（不指定则使用缓存/远程特征库）
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// 特征库缓存路径
    #[arg(short, long, default_value = "uas_database.mp")]
    cache: PathBuf,

    /// 启动时检查远程版本并更新缓存
    #[arg(short, long)]
    update: bool,

    /// 输出 JSON
    #[arg(long)]
    json: bool,

    /// 详细日志
    #[arg(short, long)]
    verbose: bool,

    /// 待解析的 User-Agent
    #[arg(required = true)]
    user_agents: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = ConfigManager::custom()
        .cache_path(cli.cache.clone())
        .verbose(cli.verbose)
        .build()
        .context("配置无效")?;
    init_logging(&config);

    let detector = match &cli.database {
        Some(path) => UaDetector::from_file(path, config)
            .await
            .with_context(|| format!("加载特征库文件 {} 失败", path.display()))?,
        None if cli.update => UaDetector::with_update(config).await.context("更新特征库失败")?,
        None => UaDetector::new(config).await.context("加载特征库失败")?,
    };

    for ua in &cli.user_agents {
        let info = detector.parse(ua);
        if cli.json {
            println!("{}", info.to_json()?);
            continue;
        }

        println!("{}", ua);
        if info.is_empty() {
            println!("  (unknown)");
        }
        for (field, value) in info.iter() {
            println!("  {}: {}", field, value);
        }
    }

    Ok(())
}

/// 初始化日志输出（stderr），`RUST_LOG` 优先于 `--verbose`
#[cfg(feature = "logging")]
fn init_logging(config: &GlobalConfig) {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_directive())),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(not(feature = "logging"))]
fn init_logging(_config: &GlobalConfig) {}
