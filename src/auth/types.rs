//! # 认证类型定义
//!
//! 授权请求、策略文档和授权决策的数据结构。字段名与网关的授权器协议保持一致。

use serde::{Deserialize, Serialize};

/// 策略文档版本
pub const POLICY_VERSION: &str = "2018-02-12";

/// 策略语句授予的动作
pub const INVOKE_ACTION: &str = "execute-api:Invoke";

/// 授权成功时使用的主体标识
pub const DEFAULT_PRINCIPAL: &str = "user";

/// 网关传入的授权请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationRequest {
    /// 授权器类型（通常为 `TOKEN`），仅透传
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub request_type: Option<String>,
    /// 形如 `"<scheme> <token>"` 的凭据
    #[serde(default)]
    pub authorization_token: Option<String>,
    /// 被访问资源的标识
    pub method_arn: String,
}

impl AuthorizationRequest {
    /// 创建授权请求
    pub fn new(authorization_token: Option<String>, method_arn: impl Into<String>) -> Self {
        Self {
            request_type: Some("TOKEN".to_string()),
            authorization_token,
            method_arn: method_arn.into(),
        }
    }
}

/// 策略效果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    Allow,
    Deny,
}

/// 单条策略语句
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Statement {
    pub action: String,
    pub effect: Effect,
    pub resource: String,
}

/// 策略文档
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<Statement>,
}

/// 授权决策
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationDecision {
    /// 主体标识
    pub principal_id: String,
    /// 策略文档，仅在效果和资源都存在时附带
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_document: Option<PolicyDocument>,
}

impl AuthorizationDecision {
    /// 生成授权决策
    ///
    /// 效果和资源任一缺失（或资源为空）时只返回主体，不附带策略文档。
    pub fn generate(
        principal_id: impl Into<String>,
        effect: Option<Effect>,
        resource: Option<&str>,
    ) -> Self {
        let policy_document = match (effect, resource) {
            (Some(effect), Some(resource)) if !resource.is_empty() => Some(PolicyDocument {
                version: POLICY_VERSION.to_string(),
                statement: vec![Statement {
                    action: INVOKE_ACTION.to_string(),
                    effect,
                    resource: resource.to_string(),
                }],
            }),
            _ => None,
        };

        Self {
            principal_id: principal_id.into(),
            policy_document,
        }
    }

    /// 允许主体调用指定资源
    pub fn allow(principal_id: impl Into<String>, resource: &str) -> Self {
        Self::generate(principal_id, Some(Effect::Allow), Some(resource))
    }

    /// 第一条语句的效果
    #[must_use]
    pub fn effect(&self) -> Option<Effect> {
        self.first_statement().map(|s| s.effect)
    }

    /// 第一条语句的资源
    #[must_use]
    pub fn resource(&self) -> Option<&str> {
        self.first_statement().map(|s| s.resource.as_str())
    }

    fn first_statement(&self) -> Option<&Statement> {
        self.policy_document
            .as_ref()
            .and_then(|doc| doc.statement.first())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const ARN: &str = "arn:aws:execute-api:eu-central-1:123456789012:abc123/prod/GET/videos";

    #[test]
    fn test_allow_decision_wire_format() {
        let decision = AuthorizationDecision::allow(DEFAULT_PRINCIPAL, ARN);
        assert_eq!(
            serde_json::to_value(&decision).unwrap(),
            json!({
                "principalId": "user",
                "policyDocument": {
                    "Version": "2018-02-12",
                    "Statement": [{
                        "Action": "execute-api:Invoke",
                        "Effect": "allow",
                        "Resource": ARN
                    }]
                }
            })
        );
    }

    #[test]
    fn test_policy_omitted_without_effect_or_resource() {
        let decision = AuthorizationDecision::generate("user", None, Some(ARN));
        assert!(decision.policy_document.is_none());

        let decision = AuthorizationDecision::generate("user", Some(Effect::Deny), None);
        assert!(decision.policy_document.is_none());

        let decision = AuthorizationDecision::generate("user", Some(Effect::Allow), Some(""));
        assert!(decision.policy_document.is_none());
        assert_eq!(
            serde_json::to_value(&decision).unwrap(),
            json!({ "principalId": "user" })
        );
    }

    #[test]
    fn test_accessors() {
        let decision = AuthorizationDecision::generate("user", Some(Effect::Deny), Some(ARN));
        assert_eq!(decision.effect(), Some(Effect::Deny));
        assert_eq!(decision.resource(), Some(ARN));
    }

    #[test]
    fn test_request_parses_gateway_event() {
        let request: AuthorizationRequest = serde_json::from_value(json!({
            "type": "TOKEN",
            "authorizationToken": "Bearer abc.def.ghi",
            "methodArn": ARN
        }))
        .unwrap();
        assert_eq!(request.authorization_token.as_deref(), Some("Bearer abc.def.ghi"));
        assert_eq!(request.method_arn, ARN);

        let request: AuthorizationRequest =
            serde_json::from_value(json!({ "methodArn": ARN })).unwrap();
        assert!(request.authorization_token.is_none());
        assert!(request.request_type.is_none());
    }
}
