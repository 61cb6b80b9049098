//! # 对象公开授权
//!
//! 收到存储通知后，为对应对象追加所有人可读的授权。

use std::sync::Arc;

use super::event::{ObjectReference, TopicEvent};
use crate::error::Result;
use crate::logging::{LogComponent, LogStage};
use crate::storage::ObjectStore;
use crate::{lerror, linfo};

/// 对象公开授权服务
pub struct AclPublisher {
    store: Arc<dyn ObjectStore>,
}

impl AclPublisher {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }

    /// 处理一条通知事件，返回被公开的对象
    pub async fn publish(&self, event: &TopicEvent) -> Result<ObjectReference> {
        let reference = event.object_reference().inspect_err(|e| {
            lerror!(
                "notification",
                LogStage::Notification,
                LogComponent::AclPublisher,
                "parse_notification_failed",
                "无法解析存储通知",
                error = e.to_string()
            );
        })?;

        if let Err(e) = self
            .store
            .grant_public_read(&reference.bucket, &reference.key)
            .await
        {
            lerror!(
                "notification",
                LogStage::Notification,
                LogComponent::AclPublisher,
                "grant_public_read_failed",
                "设置对象公开读取失败",
                bucket = reference.bucket,
                key = reference.key,
                error = e.to_string()
            );
            return Err(e.into());
        }

        linfo!(
            "notification",
            LogStage::Notification,
            LogComponent::AclPublisher,
            "object_published",
            "对象已设置为公开读取",
            bucket = reference.bucket,
            key = reference.key
        );
        Ok(reference)
    }
}
