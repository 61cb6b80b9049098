//! # 媒体列表模块
//!
//! 列出 bucket 中的媒体文件，可按编码后缀过滤，输出 JSON 摘要

pub mod filter;
pub mod listing;
pub mod response;
pub mod types;

pub use listing::{MediaListService, NOT_FOUND_MESSAGE};
pub use response::{GatewayResponse, create_error_response, create_success_response};
pub use types::{ErrorBody, ListingQuery, ListingResult, ObjectSummary};
