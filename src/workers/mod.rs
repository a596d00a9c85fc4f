// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工作器模块
///
/// 后台定期运行的维护任务
pub mod expiration_worker;

pub use expiration_worker::ExpirationWorker;
