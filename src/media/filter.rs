//! # 媒体文件过滤

use super::types::ObjectSummary;
use crate::storage::StoredObject;

/// 媒体文件扩展名
pub const MEDIA_EXTENSION: &str = ".mp4";

/// 判断对象键是否匹配编码过滤条件
///
/// 有编码时比较最后一个 `-` 之后的部分是否等于 `"<encoding>.mp4"`
/// （没有 `-` 时比较整个键）；没有编码时只要求以 `.mp4` 结尾。
#[must_use]
pub fn matches_encoding(key: &str, encoding: Option<&str>) -> bool {
    match encoding {
        Some(encoding) => {
            let suffix = key.rsplit_once('-').map_or(key, |(_, suffix)| suffix);
            suffix.strip_suffix(MEDIA_EXTENSION) == Some(encoding)
        }
        None => key.ends_with(MEDIA_EXTENSION),
    }
}

/// 去掉 ETag 中所有的双引号
#[must_use]
pub fn strip_quotes(e_tag: &str) -> String {
    e_tag.replace('"', "")
}

/// 过滤并投影为摘要，保持输入顺序
pub fn project<'a>(
    objects: impl IntoIterator<Item = &'a StoredObject>,
    encoding: Option<&str>,
) -> Vec<ObjectSummary> {
    objects
        .into_iter()
        .filter(|object| matches_encoding(&object.key, encoding))
        .map(|object| ObjectSummary {
            filename: object.key.clone(),
            e_tag: object.e_tag.as_deref().map(strip_quotes).unwrap_or_default(),
            size: object.size,
        })
        .collect()
}
