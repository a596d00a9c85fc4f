// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 用例、DTO 与应用层错误
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 用户与认证两个限界上下文，以及共享内核
pub mod domain;

/// 基础设施模块
///
/// 数据库仓库、密码哈希、JWT、事件发布与服务容器
pub mod infrastructure;

/// 表示层模块
///
/// 处理HTTP请求和响应，包括路由、处理器和中间件
pub mod presentation;

/// 工具模块
pub mod utils;

/// 工作器模块
///
/// 后台维护任务，如清理过期凭据
pub mod workers;
