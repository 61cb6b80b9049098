//! # 存储层数据结构

/// 一次列举调用的参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    /// 目标 bucket
    pub bucket: String,
    /// 上一页返回的续传令牌
    pub continuation_token: Option<String>,
}

impl ListingRequest {
    /// 第一页请求
    pub fn first_page(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            continuation_token: None,
        }
    }

    /// 以续传令牌请求下一页
    #[must_use]
    pub fn next_page(&self, continuation_token: String) -> Self {
        Self {
            bucket: self.bucket.clone(),
            continuation_token: Some(continuation_token),
        }
    }
}

/// 存储返回的对象元数据
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// 对象键
    pub key: String,
    /// 原始 ETag，通常带双引号
    pub e_tag: Option<String>,
    /// 字节大小
    pub size: i64,
}

/// 列举结果中的一页
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPage {
    /// 本页对象，保持存储的原始顺序
    pub objects: Vec<StoredObject>,
    /// 还有下一页时的续传令牌
    pub next_continuation_token: Option<String>,
}
