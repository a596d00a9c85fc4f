// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// 领域实体
///
/// 实体具有唯一标识和生命周期，两个实体相等当且仅当标识相等
pub trait Entity {
    /// 实体标识类型
    type Id: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static;

    /// 返回实体标识
    fn id(&self) -> Self::Id;
}

/// 值对象
///
/// 不可变、按属性比较的领域值
pub trait ValueObject: Clone + Eq + Display {}
