// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域事件分发
///
/// - publisher：进程内事件发布者
/// - handlers：默认事件处理器
pub mod handlers;
pub mod publisher;
