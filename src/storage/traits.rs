//! # 对象存储接口
//!
//! 处理器只通过该接口访问外部存储，便于替换实现和在测试中注入 mock

use async_trait::async_trait;

use super::types::{ListingPage, ListingRequest};
use crate::error::StorageError;

/// 对象存储接口
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// 列举一页对象
    async fn list_page(&self, request: &ListingRequest) -> Result<ListingPage, StorageError>;

    /// 为对象追加所有人可读的授权，保留已有授权
    async fn grant_public_read(&self, bucket: &str, key: &str) -> Result<(), StorageError>;
}
