// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 领域端口的具体实现：
/// - 容器（container）：依赖装配
/// - 数据库（database）：连接池和SeaORM实体
/// - 事件（events）：进程内事件发布和默认处理器
/// - 仓库实现（repositories）：SeaORM 与内存两套实现
/// - 安全（security）：密码哈希与JWT
///
/// 基础设施层依赖领域层的抽象接口，领域层不感知这里的实现。
pub mod container;
pub mod database;
pub mod events;
pub mod repositories;
pub mod security;
