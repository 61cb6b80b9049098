//! # Media Gateway 主程序
//!
//! 本地运行令牌授权器、媒体列表和对象公开处理器

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use media_gateway::{
    AppConfig, Result,
    config::ConfigManager,
    gateway::GatewayServer,
    lerror, linfo,
    logging::{self, LogComponent, LogStage},
    storage::S3ObjectStore,
};

/// 命令行参数
#[derive(Debug, Parser)]
#[command(name = "media-gateway", version, about = "Media gateway handlers")]
struct Args {
    /// 配置文件路径
    #[arg(short, long, env = "MEDIA_GATEWAY_CONFIG_PATH")]
    config: Option<PathBuf>,

    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// 覆盖监听端口
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logging(args.log_level.as_deref());

    linfo!(
        "system",
        LogStage::Startup,
        LogComponent::Main,
        "service_starting",
        "服务启动"
    );

    if let Err(e) = run(args).await {
        lerror!(
            "system",
            LogStage::Startup,
            LogComponent::Main,
            "service_start_failed",
            format!("服务启动失败: {e:?}")
        );
        std::process::exit(1);
    }

    linfo!(
        "system",
        LogStage::Shutdown,
        LogComponent::Main,
        "service_shutdown",
        "服务正常关闭"
    );
    Ok(())
}

async fn run(args: Args) -> anyhow::Result<()> {
    let manager = ConfigManager::new(args.config.as_deref())
        .map_err(|e| anyhow::anyhow!("配置管理器初始化失败: {e}"))?;

    let mut config: AppConfig = (*manager.config()).clone();
    if let Some(port) = args.port {
        config.server.port = port;
    }

    linfo!(
        "system",
        LogStage::Configuration,
        LogComponent::Config,
        "config_loaded",
        "配置加载完成",
        source = manager.source(),
        bucket = config.storage.bucket
    );

    let store = S3ObjectStore::from_config(&config.storage).await;
    let server = GatewayServer::new(Arc::new(config), Arc::new(store))?;
    server.serve().await?;
    Ok(())
}
