//! # 认证错误

use thiserror::Error;

/// 单次授权失败的原因
///
/// 两种失败都不附带策略文档，由网关统一转换为拒绝访问。
#[derive(Debug, Error)]
pub enum AuthError {
    /// 凭据缺失，或凭据中没有令牌段
    #[error("missing credential")]
    MissingCredential,

    /// 签名或标准声明校验未通过
    #[error("authorization failed")]
    VerificationFailed(#[source] jsonwebtoken::errors::Error),
}
