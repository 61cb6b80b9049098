//! # JWT 签名校验
//!
//! 使用配置中的共享密钥校验 HMAC 签名的令牌

use jsonwebtoken::{Algorithm, DecodingKey, TokenData, Validation, decode};
use serde_json::Value;

use crate::config::AuthConfig;
use crate::error::{GatewayError, Result};

/// HMAC 令牌校验器
pub struct TokenVerifier {
    /// 解码密钥
    decoding_key: DecodingKey,
    /// 校验规则
    validation: Validation,
}

impl TokenVerifier {
    /// 根据认证配置创建校验器
    pub fn new(config: &AuthConfig) -> Result<Self> {
        let decoding_key = if config.secret_base64 {
            DecodingKey::from_base64_secret(&config.secret)
                .map_err(|e| GatewayError::config_with_source("auth.secret is not valid base64", e))?
        } else {
            DecodingKey::from_secret(config.secret.as_bytes())
        };

        Ok(Self {
            decoding_key,
            validation: Self::build_validation(),
        })
    }

    /// 标准声明只在令牌携带时校验，不要求必须存在
    fn build_validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.required_spec_claims.clear();
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.leeway = 0;
        validation
    }

    /// 校验令牌签名并返回其中的声明
    pub fn verify(&self, token: &str) -> std::result::Result<Value, jsonwebtoken::errors::Error> {
        let token_data: TokenData<Value> = decode(token, &self.decoding_key, &self.validation)?;
        Ok(token_data.claims)
    }
}
