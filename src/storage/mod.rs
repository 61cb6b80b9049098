//! # 对象存储模块
//!
//! 对象存储的访问接口及其 S3 实现

pub mod s3;
pub mod traits;
pub mod types;

pub use s3::S3ObjectStore;
#[cfg(any(test, feature = "testing"))]
pub use traits::MockObjectStore;
pub use traits::ObjectStore;
pub use types::{ListingPage, ListingRequest, StoredObject};
