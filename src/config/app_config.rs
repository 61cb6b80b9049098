//! # 应用配置结构定义

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ConfigError;

/// 应用主配置结构
///
/// 进程启动时构建一次，之后以只读方式注入各个处理器。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP 服务配置
    pub server: ServerConfig,
    /// 令牌校验配置
    pub auth: AuthConfig,
    /// 对象存储配置
    pub storage: StorageConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 监听地址
    pub host: String,
    /// 监听端口
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// 令牌校验配置
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HMAC 共享密钥
    pub secret: String,
    /// 密钥是否为 base64 编码
    pub secret_base64: bool,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("secret", &"***")
            .field("secret_base64", &self.secret_base64)
            .finish()
    }
}

/// 对象存储配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// 媒体文件所在的 bucket
    pub bucket: String,
    /// 对外访问文件使用的域名
    pub base_url: String,
    /// 存储服务区域
    pub region: String,
    /// 自定义服务端点（S3 兼容存储）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,
    /// 是否使用 path-style 寻址
    pub force_path_style: bool,
    /// 单次列举最多跟随的分页数
    pub max_pages: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: String::new(),
            base_url: String::new(),
            region: "us-east-1".to_string(),
            endpoint_url: None,
            force_path_style: false,
            max_pages: 100,
        }
    }
}

impl AppConfig {
    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Invalid("server.port must be greater than 0".to_string()));
        }
        if self.auth.secret.is_empty() {
            return Err(ConfigError::Invalid("auth.secret cannot be empty".to_string()));
        }
        if self.storage.bucket.trim().is_empty() {
            return Err(ConfigError::Invalid("storage.bucket cannot be empty".to_string()));
        }
        if self.storage.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("storage.base_url cannot be empty".to_string()));
        }
        if self.storage.max_pages == 0 {
            return Err(ConfigError::Invalid(
                "storage.max_pages must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// 获取监听地址
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
