//! # 存储错误

use thiserror::Error;

/// [`crate::storage::ObjectStore`] 实现返回的错误
///
/// `Display` 文本会作为失败详情返回给调用方，不包含凭据。
#[derive(Debug, Error)]
pub enum StorageError {
    /// 存储请求失败
    #[error("{operation} failed for bucket '{bucket}': {detail}")]
    Request {
        operation: &'static str,
        bucket: String,
        detail: String,
    },

    /// 分页数超过上限
    #[error("listing of bucket '{bucket}' exceeded {max_pages} pages")]
    TooManyPages { bucket: String, max_pages: u32 },
}

impl StorageError {
    /// 创建请求失败错误
    #[must_use]
    pub fn request(
        operation: &'static str,
        bucket: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self::Request {
            operation,
            bucket: bucket.into(),
            detail: detail.into(),
        }
    }
}
