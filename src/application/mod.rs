// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用层模块
///
/// 编排领域对象完成具体操作，每个操作对应一个用例
/// - dto：用例的输入输出数据
/// - errors：统一的应用层错误
/// - use_cases：按限界上下文划分的用例
pub mod dto;
pub mod errors;
pub mod use_cases;
