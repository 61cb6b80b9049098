//! # Media Gateway Library
//!
//! 令牌授权器、媒体列表与对象公开处理器

pub mod auth;
pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod media;
pub mod notifications;
pub mod storage;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{GatewayError, Result};
