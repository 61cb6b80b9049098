//! # 认证授权模块
//!
//! 网关令牌授权器：解析 bearer 凭据，校验 HMAC 签名，输出策略文档。

pub mod authorizer;
pub mod jwt;
pub mod types;
pub mod utils;

pub use authorizer::TokenAuthorizer;
pub use jwt::TokenVerifier;
pub use types::{
    AuthorizationDecision, AuthorizationRequest, Effect, PolicyDocument, Statement,
};
