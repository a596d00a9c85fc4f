// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用户限界上下文
///
/// - 值对象（value_objects）：用户名与邮箱的校验和规范化
/// - 实体（entities）：用户聚合根
/// - 事件（events）：用户生命周期中发生的事实
/// - 仓库（repositories）：用户聚合的持久化端口
/// - 服务（services）：跨实体的唯一性校验
pub mod entities;
pub mod events;
pub mod repositories;
pub mod services;
pub mod value_objects;
