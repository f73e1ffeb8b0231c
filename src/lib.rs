//! SkyLight Cinema Server - 影院管理系统后端
//!
//! # 架构概述
//!
//! 本模块是影院后端的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储，含展示编号分配器
//! - **认证** (`auth`): JWT + Argon2 认证体系
//! - **工资计算** (`payroll`): 服务器端工资公式
//! - **HTTP API** (`api`): RESTful CRUD 接口
//!
//! # 模块结构
//!
//! ```text
//! src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、中间件
//! ├── api/           # HTTP 路由和处理器
//! ├── payroll/       # 工资计算
//! ├── utils/         # 错误、日志、校验
//! └── db/            # 数据库层 (models / repository / sequence)
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod payroll;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use core::{build_app, build_app_with_state, Config, Server, ServerState};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment(config: &Config) {
    if config.log_to_file {
        let log_dir = config.log_dir();
        let _ = std::fs::create_dir_all(&log_dir);
        init_logger_with_file(Some(&config.log_level), log_dir.to_str());
    } else {
        init_logger_with_file(Some(&config.log_level), None);
    }
}

pub fn print_banner() {
    println!(
        r#"
   _____ __        __    _       __    __
  / ___// /____  _/ /   (_)___ _/ /_  / /_
  \__ \/ //_/ / / / /  / / __ `/ __ \/ __/
 ___/ / ,< / /_/ / /__/ / /_/ / / / / /_
/____/_/|_|\__, /____/_/\__, /_/ /_/\__/
          /____/       /____/  Cinema
    "#
    );
}
