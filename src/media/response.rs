//! # 网关响应结构
//!
//! 网关代理集成使用的 `{statusCode, headers, body}` 响应信封。
//! 所有响应（成功或失败）都带有允许任意来源的跨域头。

use axum::{
    http::{HeaderName, HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::types::ErrorBody;

/// 跨域头名称
pub const CORS_ORIGIN_HEADER: &str = "Access-Control-Allow-Origin";

/// # 网关响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// JSON 字符串形式的响应体
    pub body: String,
}

impl GatewayResponse {
    fn default_headers() -> BTreeMap<String, String> {
        BTreeMap::from([(CORS_ORIGIN_HEADER.to_string(), "*".to_string())])
    }

    /// 以可序列化的值构建 JSON 响应
    ///
    /// 序列化失败时退化为 500 错误响应。
    pub fn json<T: Serialize>(status_code: u16, value: &T) -> Self {
        match serde_json::to_string(value) {
            Ok(body) => Self {
                status_code,
                headers: Self::default_headers(),
                body,
            },
            Err(e) => Self {
                status_code: 500,
                headers: Self::default_headers(),
                body: serde_json::json!({ "code": 500, "message": e.to_string(), "encoding": null })
                    .to_string(),
            },
        }
    }

    /// 解析响应体
    pub fn body_json<T: for<'de> Deserialize<'de>>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.body)
    }

    /// 跨域头的值
    #[must_use]
    pub fn cors_origin(&self) -> Option<&str> {
        self.headers.get(CORS_ORIGIN_HEADER).map(String::as_str)
    }
}

/// # 便捷函数：成功响应
pub fn create_success_response<T: Serialize>(result: &T) -> GatewayResponse {
    GatewayResponse::json(200, result)
}

/// # 便捷函数：错误响应
pub fn create_error_response(code: u16, message: &str, encoding: Option<&str>) -> GatewayResponse {
    GatewayResponse::json(
        code,
        &ErrorBody {
            code,
            message: message.to_string(),
            encoding: encoding.map(str::to_string),
        },
    )
}

impl IntoResponse for GatewayResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response = (status, self.body).into_response();

        let headers = response.headers_mut();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        for (name, value) in &self.headers {
            if let (Ok(name), Ok(value)) = (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                headers.insert(name, value);
            }
        }

        response
    }
}
