//! # S3 对象存储实现
//!
//! 基于 `aws-sdk-s3` 实现 [`ObjectStore`]，支持自定义端点以接入 S3 兼容存储

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
use aws_sdk_s3::types::{AccessControlPolicy, Grant, Grantee, Object, Permission, Type};

use super::traits::ObjectStore;
use super::types::{ListingPage, ListingRequest, StoredObject};
use crate::config::StorageConfig;
use crate::error::StorageError;
use crate::ldebug;
use crate::logging::{LogComponent, LogStage};

/// 所有用户组的 grantee URI
pub const ALL_USERS_GROUP_URI: &str = "http://acs.amazonaws.com/groups/global/AllUsers";

/// S3 对象存储
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
}

impl S3ObjectStore {
    /// 使用已构建的客户端
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    /// 根据存储配置构建客户端，凭据来自 SDK 默认的凭据链
    pub async fn from_config(config: &StorageConfig) -> Self {
        let shared = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;

        let mut builder =
            aws_sdk_s3::config::Builder::from(&shared).force_path_style(config.force_path_style);
        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        ldebug!(
            "system",
            LogStage::Startup,
            LogComponent::Storage,
            "s3_client_built",
            "S3 客户端已创建",
            region = config.region,
            endpoint = config.endpoint_url
        );

        Self::new(Client::from_conf(builder.build()))
    }
}

fn to_stored_object(object: &Object) -> StoredObject {
    StoredObject {
        key: object.key().unwrap_or_default().to_string(),
        e_tag: object.e_tag().map(str::to_string),
        size: object.size().unwrap_or_default(),
    }
}

fn to_listing_page(output: &ListObjectsV2Output) -> ListingPage {
    let next_continuation_token = if output.is_truncated().unwrap_or(false) {
        output.next_continuation_token().map(str::to_string)
    } else {
        None
    };

    ListingPage {
        objects: output.contents().iter().map(to_stored_object).collect(),
        next_continuation_token,
    }
}

fn is_public_read(grant: &Grant) -> bool {
    grant.permission() == Some(&Permission::Read)
        && grant.grantee().and_then(Grantee::uri) == Some(ALL_USERS_GROUP_URI)
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn list_page(&self, request: &ListingRequest) -> Result<ListingPage, StorageError> {
        let output = self
            .client
            .list_objects_v2()
            .bucket(&request.bucket)
            .set_continuation_token(request.continuation_token.clone())
            .send()
            .await
            .map_err(|e| {
                StorageError::request(
                    "ListObjectsV2",
                    &request.bucket,
                    DisplayErrorContext(&e).to_string(),
                )
            })?;

        Ok(to_listing_page(&output))
    }

    async fn grant_public_read(&self, bucket: &str, key: &str) -> Result<(), StorageError> {
        let acl = self
            .client
            .get_object_acl()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                StorageError::request("GetObjectAcl", bucket, DisplayErrorContext(&e).to_string())
            })?;

        if acl.grants().iter().any(is_public_read) {
            return Ok(());
        }

        let grantee = Grantee::builder()
            .r#type(Type::Group)
            .uri(ALL_USERS_GROUP_URI)
            .build()
            .map_err(|e| StorageError::request("PutObjectAcl", bucket, e.to_string()))?;

        let mut grants = acl.grants().to_vec();
        grants.push(
            Grant::builder()
                .grantee(grantee)
                .permission(Permission::Read)
                .build(),
        );

        let policy = AccessControlPolicy::builder()
            .set_grants(Some(grants))
            .set_owner(acl.owner().cloned())
            .build();

        self.client
            .put_object_acl()
            .bucket(bucket)
            .key(key)
            .access_control_policy(policy)
            .send()
            .await
            .map_err(|e| {
                StorageError::request("PutObjectAcl", bucket, DisplayErrorContext(&e).to_string())
            })?;

        Ok(())
    }
}
