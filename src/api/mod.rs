//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 认证相关接口
//! - [`movies`] - 电影管理接口
//! - [`bookings`] - 订票管理接口
//! - [`payments`] - 支付记录接口
//! - [`promotions`] - 促销活动接口
//! - [`employees`] - 员工管理接口
//! - [`salaries`] - 工资单接口
//! - [`inventory`] - 设施维护接口
//! - [`feedback`] - 用户反馈接口
//! - [`users`] - 用户账户接口

pub mod auth;
pub mod health;

// Data models API
pub mod bookings;
pub mod employees;
pub mod feedback;
pub mod inventory;
pub mod movies;
pub mod payments;
pub mod promotions;
pub mod salaries;
pub mod users;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
