//! # 媒体列表数据结构

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 列表查询参数
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    /// 编码过滤条件，例如 `720p`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

impl ListingQuery {
    /// 以已解码的编码值创建查询
    pub fn with_encoding(encoding: impl Into<String>) -> Self {
        Self {
            encoding: Some(encoding.into()),
        }
    }

    /// 从网关查询参数中解析
    ///
    /// 空值视为未提供；值会再做一次百分号解码，解码失败时保留原值。
    #[must_use]
    pub fn from_query_parameters(parameters: Option<&HashMap<String, String>>) -> Self {
        let encoding = parameters
            .and_then(|params| params.get("encoding"))
            .filter(|value| !value.is_empty())
            .map(|value| {
                urlencoding::decode(value).map_or_else(|_| value.clone(), |decoded| decoded.into_owned())
            });

        Self { encoding }
    }
}

/// 单个媒体文件的摘要
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSummary {
    /// 对象键
    pub filename: String,
    /// 去掉引号的 ETag
    #[serde(rename = "eTag")]
    pub e_tag: String,
    /// 字节大小
    pub size: i64,
}

/// 列表结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingResult {
    /// 对外访问文件使用的域名
    pub domain: String,
    /// bucket 名称
    pub bucket: String,
    /// 匹配的文件，保持存储返回的顺序
    pub files: Vec<ObjectSummary>,
}

/// 错误响应体
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    pub message: String,
    /// 请求中的编码过滤条件，未提供时为 `null`
    pub encoding: Option<String>,
}
