//! # 存储通知处理模块

pub mod event;
pub mod publisher;

pub use event::{ObjectReference, TopicEvent};
pub use publisher::AclPublisher;
