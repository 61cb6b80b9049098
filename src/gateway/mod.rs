//! # 网关 HTTP 模块

pub mod handlers;
pub mod routes;
pub mod server;

pub use server::{AppState, GatewayServer};
