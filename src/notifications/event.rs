//! # 通知事件结构
//!
//! 消息主题投递的事件中，`Message` 字段是一段存储通知的 JSON 文本。

use serde::{Deserialize, Serialize};

use crate::error::NotificationError;

/// 主题投递的事件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicEvent {
    #[serde(rename = "Records", default)]
    pub records: Vec<TopicRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicRecord {
    #[serde(rename = "Sns")]
    pub sns: TopicMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicMessage {
    #[serde(rename = "Message")]
    pub message: String,
}

/// 存储通知
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageNotification {
    #[serde(rename = "Records", default)]
    pub records: Vec<StorageRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageRecord {
    pub s3: StorageEntity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageEntity {
    pub bucket: BucketEntity,
    pub object: ObjectEntity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BucketEntity {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectEntity {
    pub key: String,
}

/// 通知指向的对象
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectReference {
    pub bucket: String,
    /// 已解码的对象键
    pub key: String,
}

/// 解码通知中的对象键：`+` 还原为空格，再做百分号解码
pub fn decode_object_key(raw: &str) -> Result<String, NotificationError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .map_err(|_| NotificationError::KeyEncoding(raw.to_string()))
}

impl TopicEvent {
    /// 取第一条记录指向的对象
    pub fn object_reference(&self) -> Result<ObjectReference, NotificationError> {
        let record = self.records.first().ok_or(NotificationError::NoRecords)?;
        let notification: StorageNotification = serde_json::from_str(&record.sns.message)?;
        let entity = &notification
            .records
            .first()
            .ok_or(NotificationError::NoRecords)?
            .s3;

        Ok(ObjectReference {
            bucket: entity.bucket.name.clone(),
            key: decode_object_key(&entity.object.key)?,
        })
    }
}
