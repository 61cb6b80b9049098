//! # 令牌授权器
//!
//! 校验请求中的 bearer 令牌，为请求的资源生成允许调用的策略文档。
//! 任何签名正确的令牌都得到 `allow`，不区分用户或权限范围。

use super::jwt::TokenVerifier;
use super::types::{AuthorizationDecision, AuthorizationRequest, DEFAULT_PRINCIPAL};
use super::utils::extract_token;
use crate::config::AuthConfig;
use crate::error::{AuthError, Result};
use crate::logging::{LogComponent, LogStage};
use crate::lwarn;

/// 令牌授权器
pub struct TokenAuthorizer {
    verifier: TokenVerifier,
}

impl TokenAuthorizer {
    /// 使用认证配置创建授权器
    pub fn new(config: &AuthConfig) -> Result<Self> {
        Ok(Self {
            verifier: TokenVerifier::new(config)?,
        })
    }

    /// 对单个请求做出授权决策
    ///
    /// 成功和凭据缺失时都不写日志；签名校验失败时记录一条包含原始凭据和错误详情的警告。
    pub fn authorize(
        &self,
        request: &AuthorizationRequest,
    ) -> std::result::Result<AuthorizationDecision, AuthError> {
        let token = extract_token(request.authorization_token.as_deref())
            .ok_or(AuthError::MissingCredential)?;

        match self.verifier.verify(token) {
            Ok(_claims) => Ok(AuthorizationDecision::allow(
                DEFAULT_PRINCIPAL,
                &request.method_arn,
            )),
            Err(e) => {
                lwarn!(
                    "authorizer",
                    LogStage::Authentication,
                    LogComponent::Authorizer,
                    "token_verification_failed",
                    "Failed jwt verification",
                    error = e.to_string(),
                    auth = request.authorization_token
                );
                Err(AuthError::VerificationFailed(e))
            }
        }
    }
}
