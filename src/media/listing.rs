//! # 媒体列表服务
//!
//! 按顺序执行：构建 bucket 参数 → 拉取列表 → 过滤投影 → 组装结果。
//! 任一步失败即中止，最终统一转换为带跨域头的 JSON 响应。

use std::sync::Arc;

use super::filter::project;
use super::response::{GatewayResponse, create_error_response, create_success_response};
use super::types::{ListingQuery, ListingResult};
use crate::config::AppConfig;
use crate::error::StorageError;
use crate::lerror;
use crate::logging::{LogComponent, LogStage};
use crate::storage::{ListingRequest, ObjectStore, StoredObject};

/// 没有匹配文件时的提示
pub const NOT_FOUND_MESSAGE: &str = "No files were found";

/// 媒体列表服务
pub struct MediaListService {
    store: Arc<dyn ObjectStore>,
    config: Arc<AppConfig>,
}

impl MediaListService {
    /// 创建服务
    pub fn new(store: Arc<dyn ObjectStore>, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }

    /// 处理一次列表请求
    ///
    /// 流水线失败返回 500，没有匹配文件返回 404，否则返回 200 和列表结果。
    pub async fn list_media(&self, query: &ListingQuery) -> GatewayResponse {
        let encoding = query.encoding.as_deref();

        match self.run_pipeline(encoding).await {
            Ok(result) if result.files.is_empty() => {
                create_error_response(404, NOT_FOUND_MESSAGE, encoding)
            }
            Ok(result) => create_success_response(&result),
            Err(e) => {
                lerror!(
                    "media",
                    LogStage::Listing,
                    LogComponent::MediaList,
                    "list_media_failed",
                    "列出媒体文件失败",
                    error = e.to_string(),
                    encoding = encoding
                );
                create_error_response(500, &e.to_string(), encoding)
            }
        }
    }

    /// 执行列表流水线
    pub async fn run_pipeline(
        &self,
        encoding: Option<&str>,
    ) -> Result<ListingResult, StorageError> {
        let request = self.create_bucket_params();
        let objects = self.fetch_listing(request).await?;
        Ok(self.create_list(encoding, &objects))
    }

    fn create_bucket_params(&self) -> ListingRequest {
        ListingRequest::first_page(&self.config.storage.bucket)
    }

    /// 拉取完整列表，跟随续传令牌直到没有下一页
    async fn fetch_listing(
        &self,
        request: ListingRequest,
    ) -> Result<Vec<StoredObject>, StorageError> {
        let max_pages = self.config.storage.max_pages;
        let mut objects = Vec::new();
        let mut request = request;
        let mut pages = 0_u32;

        loop {
            let page = self.store.list_page(&request).await?;
            pages += 1;
            objects.extend(page.objects);

            match page.next_continuation_token {
                None => break,
                Some(_) if pages >= max_pages => {
                    return Err(StorageError::TooManyPages {
                        bucket: request.bucket,
                        max_pages,
                    });
                }
                Some(token) => request = request.next_page(token),
            }
        }

        Ok(objects)
    }

    fn create_list(&self, encoding: Option<&str>, objects: &[StoredObject]) -> ListingResult {
        ListingResult {
            domain: self.config.storage.base_url.clone(),
            bucket: self.config.storage.bucket.clone(),
            files: project(objects, encoding),
        }
    }
}
