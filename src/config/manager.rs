//! # 配置管理器
//!
//! 加载 TOML 配置文件，应用环境变量覆盖并校验结果

use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::AppConfig;
use crate::error::{ConfigError, GatewayError, Result};

/// 环境变量到配置路径的映射
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("AUTH0_SECRET", "auth.secret"),
    ("BUCKET", "storage.bucket"),
    ("BASE_URL", "storage.base_url"),
    ("AWS_REGION", "storage.region"),
    ("MEDIA_GATEWAY_S3_ENDPOINT", "storage.endpoint_url"),
    ("MEDIA_GATEWAY_HOST", "server.host"),
    ("MEDIA_GATEWAY_PORT", "server.port"),
];

/// 配置管理器
pub struct ConfigManager {
    /// 当前配置
    config: Arc<AppConfig>,
    /// 配置文件路径（不存在时为 None）
    source: Option<PathBuf>,
}

impl ConfigManager {
    /// 按默认规则定位配置文件并创建配置管理器
    ///
    /// 优先级：显式路径 > `MEDIA_GATEWAY_CONFIG_PATH` > `config/config.{RUST_ENV}.toml`
    pub fn new(explicit_path: Option<&Path>) -> Result<Self> {
        let config_file = explicit_path.map_or_else(
            || {
                env::var("MEDIA_GATEWAY_CONFIG_PATH").map_or_else(
                    |_| {
                        let env = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());
                        PathBuf::from(format!("config/config.{env}.toml"))
                    },
                    PathBuf::from,
                )
            },
            Path::to_path_buf,
        );

        Self::from_file(&config_file, env::vars())
    }

    /// 从指定文件和环境变量创建配置管理器
    pub fn from_file(
        config_path: &Path,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self> {
        let (config, source) = if config_path.exists() {
            (Self::load_config_file(config_path)?, Some(config_path.to_path_buf()))
        } else {
            warn!("配置文件不存在，使用默认配置: {}", config_path.display());
            (AppConfig::default(), None)
        };

        let overrides = Self::build_env_overrides(vars);
        let manager = Self::from_parts(config, &overrides, source)?;

        info!("配置管理器初始化完成");
        info!(
            "- 配置文件: {}",
            manager
                .source
                .as_ref()
                .map_or_else(|| "<默认配置>".to_string(), |p| p.display().to_string())
        );
        info!("- 环境变量覆盖: {} 个", overrides.len());

        Ok(manager)
    }

    /// 由已解析的配置和覆盖项构建，并执行校验
    pub fn from_parts(
        mut config: AppConfig,
        overrides: &HashMap<String, String>,
        source: Option<PathBuf>,
    ) -> Result<Self> {
        Self::apply_env_overrides(&mut config, overrides)?;
        config.validate()?;

        Ok(Self {
            config: Arc::new(config),
            source,
        })
    }

    /// 获取当前配置
    #[must_use]
    pub fn config(&self) -> Arc<AppConfig> {
        Arc::clone(&self.config)
    }

    /// 配置文件路径
    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// 加载配置文件
    fn load_config_file(path: &Path) -> Result<AppConfig> {
        let config_content = std::fs::read_to_string(path).map_err(|e| {
            GatewayError::config_with_source(format!("读取配置文件失败: {}", path.display()), e)
        })?;

        let config: AppConfig = toml::from_str(&config_content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// 构建环境变量覆盖映射
    fn build_env_overrides(
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> HashMap<String, String> {
        let overrides: HashMap<String, String> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                ENV_OVERRIDES
                    .iter()
                    .find(|(name, _)| *name == key)
                    .map(|(_, path)| ((*path).to_string(), value))
            })
            .collect();

        debug!("发现 {} 个环境变量覆盖", overrides.len());
        overrides
    }

    /// 应用环境变量覆盖
    fn apply_env_overrides(
        config: &mut AppConfig,
        overrides: &HashMap<String, String>,
    ) -> Result<()> {
        for (path, value) in overrides {
            debug!(
                "应用环境变量覆盖: {} = {}",
                path,
                if path.contains("secret") { "***" } else { value }
            );

            Self::apply_override_to_config(config, path, value)?;
        }
        Ok(())
    }

    /// 将环境变量覆盖应用到配置对象
    fn apply_override_to_config(config: &mut AppConfig, path: &str, value: &str) -> Result<()> {
        match path {
            "auth.secret" => config.auth.secret = value.to_string(),
            "storage.bucket" => config.storage.bucket = value.to_string(),
            "storage.base_url" => config.storage.base_url = value.to_string(),
            "storage.region" => config.storage.region = value.to_string(),
            "storage.endpoint_url" => {
                config.storage.endpoint_url = Some(value.to_string()).filter(|v| !v.is_empty());
            }
            "server.host" => config.server.host = value.to_string(),
            "server.port" => {
                config.server.port = value.parse().map_err(|e| {
                    GatewayError::config_with_source(format!("无效的端口号: {value}"), e)
                })?;
            }
            _ => {
                warn!("未知的配置路径，忽略环境变量覆盖: {}", path);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_env_only_configuration() {
        let manager = ConfigManager::from_file(
            Path::new("/nonexistent/media-gateway.toml"),
            vars(&[
                ("AUTH0_SECRET", "top-secret"),
                ("BUCKET", "videos"),
                ("BASE_URL", "https://cdn.example.com"),
                ("MEDIA_GATEWAY_PORT", "9000"),
                ("UNRELATED", "ignored"),
            ]),
        )
        .unwrap();

        let config = manager.config();
        assert!(manager.source().is_none());
        assert_eq!(config.auth.secret, "top-secret");
        assert_eq!(config.storage.bucket, "videos");
        assert_eq!(config.storage.base_url, "https://cdn.example.com");
        assert_eq!(config.server.port, 9000);
    }

    #[test]
    fn test_missing_required_values_fail_validation() {
        let result = ConfigManager::from_file(Path::new("/nonexistent/media-gateway.toml"), vars(&[]));
        assert!(matches!(result, Err(GatewayError::Config { .. })));
    }

    #[test]
    fn test_invalid_port_override() {
        let result = ConfigManager::from_file(
            Path::new("/nonexistent/media-gateway.toml"),
            vars(&[
                ("AUTH0_SECRET", "s"),
                ("BUCKET", "b"),
                ("BASE_URL", "d"),
                ("MEDIA_GATEWAY_PORT", "not-a-port"),
            ]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_file_values_overridden_by_env() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[auth]
secret = "from-file"

[storage]
bucket = "file-bucket"
base_url = "https://file.example.com"
endpoint_url = "http://127.0.0.1:9000"
force_path_style = true
"#
        )
        .unwrap();

        let manager =
            ConfigManager::from_file(file.path(), vars(&[("BUCKET", "env-bucket")])).unwrap();
        let config = manager.config();
        assert_eq!(manager.source(), Some(file.path()));
        assert_eq!(config.auth.secret, "from-file");
        assert_eq!(config.storage.bucket, "env-bucket");
        assert_eq!(config.storage.endpoint_url.as_deref(), Some("http://127.0.0.1:9000"));
        assert!(config.storage.force_path_style);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "auth = = broken").unwrap();

        let result = ConfigManager::from_file(file.path(), vars(&[]));
        assert!(matches!(result, Err(GatewayError::Config { .. })));
    }
}
