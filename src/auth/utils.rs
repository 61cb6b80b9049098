//! # 认证工具函数

/// 从 `"<scheme> <token>"` 形式的凭据中提取令牌
///
/// 按空白切分后取第二段，不校验 scheme 名称。连续空白视为一个分隔符，
/// 令牌之后多余的段被忽略。
///
/// # 返回
/// - `Some(&str)`: 令牌部分
/// - `None`: 凭据缺失、为空，或只有一段
#[must_use]
pub fn extract_token(credential: Option<&str>) -> Option<&str> {
    credential?.split_whitespace().nth(1)
}
