//! Core Module
//!
//! 配置、服务器状态和 HTTP 服务器。

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::{build_app, build_app_with_state, Server};
pub use state::ServerState;
