// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 共享内核
///
/// 各限界上下文共同依赖的实体抽象、领域事件、错误类型和仓库接口
pub mod entity;
pub mod errors;
pub mod events;
pub mod repositories;
