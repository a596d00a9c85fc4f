// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 按限界上下文组织的核心业务逻辑：
/// - 共享内核（shared）：实体特质、领域错误、领域事件和通用仓库接口
/// - 用户（user）：用户聚合、值对象、唯一性规则
/// - 认证（authentication）：会话、令牌、密码策略以及安全端口
///
/// 领域层不依赖任何具体实现，基础设施通过端口注入。
pub mod authentication;
pub mod shared;
pub mod user;
