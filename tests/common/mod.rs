//! 集成测试公共工具

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use media_gateway::AppConfig;
use media_gateway::config::{AuthConfig, ServerConfig, StorageConfig};
use media_gateway::error::StorageError;
use media_gateway::storage::{ListingPage, ListingRequest, ObjectStore, StoredObject};

pub const SECRET: &str = "integration-secret";
pub const BUCKET: &str = "media-bucket";
pub const BASE_URL: &str = "https://cdn.example.com";

/// 内存对象存储：按页返回预置对象，并记录每次调用
#[derive(Default)]
pub struct InMemoryStore {
    pages: Vec<Vec<StoredObject>>,
    fail_listing: Option<String>,
    fail_grant: Option<String>,
    pub requests: Mutex<Vec<ListingRequest>>,
    pub grants: Mutex<Vec<(String, String)>>,
}

impl InMemoryStore {
    pub fn with_pages(pages: Vec<Vec<StoredObject>>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    pub fn failing_listing(detail: &str) -> Self {
        Self {
            fail_listing: Some(detail.to_string()),
            ..Self::default()
        }
    }

    pub fn failing_grant(detail: &str) -> Self {
        Self {
            fail_grant: Some(detail.to_string()),
            ..Self::default()
        }
    }

    pub fn recorded_requests(&self) -> Vec<ListingRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn recorded_grants(&self) -> Vec<(String, String)> {
        self.grants.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for InMemoryStore {
    async fn list_page(&self, request: &ListingRequest) -> Result<ListingPage, StorageError> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(detail) = &self.fail_listing {
            return Err(StorageError::request("ListObjectsV2", &request.bucket, detail.clone()));
        }

        let index = request
            .continuation_token
            .as_deref()
            .and_then(|token| token.strip_prefix("page-"))
            .and_then(|n| n.parse::<usize>().ok())
            .unwrap_or(0);

        let objects = self.pages.get(index).cloned().unwrap_or_default();
        let next_continuation_token =
            (index + 1 < self.pages.len()).then(|| format!("page-{}", index + 1));

        Ok(ListingPage {
            objects,
            next_continuation_token,
        })
    }

    async fn grant_public_read(&self, bucket: &str, key: &str) -> Result<(), StorageError> {
        if let Some(detail) = &self.fail_grant {
            return Err(StorageError::request("PutObjectAcl", bucket, detail.clone()));
        }
        self.grants
            .lock()
            .unwrap()
            .push((bucket.to_string(), key.to_string()));
        Ok(())
    }
}

pub fn object(key: &str, e_tag: Option<&str>, size: i64) -> StoredObject {
    StoredObject {
        key: key.to_string(),
        e_tag: e_tag.map(ToString::to_string),
        size,
    }
}

pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        auth: AuthConfig {
            secret: SECRET.to_string(),
            secret_base64: false,
        },
        storage: StorageConfig {
            bucket: BUCKET.to_string(),
            base_url: BASE_URL.to_string(),
            max_pages: 10,
            ..StorageConfig::default()
        },
    }
}

pub fn store_arc(store: InMemoryStore) -> (Arc<InMemoryStore>, Arc<dyn ObjectStore>) {
    let store = Arc::new(store);
    let dyn_store: Arc<dyn ObjectStore> = Arc::clone(&store) as Arc<dyn ObjectStore>;
    (store, dyn_store)
}

pub fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}
