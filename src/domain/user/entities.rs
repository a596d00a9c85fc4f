// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{Email, Username};
use crate::domain::shared::entity::Entity;
use crate::domain::shared::errors::DomainError;

/// 用户实体（聚合根）
///
/// 用户名和邮箱在构造和修改时都经过值对象校验，邮箱以规范化后的形式保存
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 用户唯一标识符
    pub id: Uuid,
    /// 用户名
    pub username: String,
    /// 邮箱（小写）
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// 是否激活
    pub is_active: bool,
    /// 是否为员工
    pub is_staff: bool,
    /// 是否为管理员
    pub is_admin: bool,
    /// 是否为超级用户
    pub is_superuser: bool,
    /// 编码后的密码哈希
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    /// 最近一次登录时间
    pub last_login: Option<DateTime<Utc>>,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 创建新用户
    ///
    /// # 参数
    ///
    /// * `username` - 用户名
    /// * `email` - 邮箱地址
    ///
    /// # 返回值
    ///
    /// * `Ok(User)` - 激活状态的新用户，没有密码
    /// * `Err(DomainError)` - 用户名或邮箱格式无效
    pub fn new(username: &str, email: &str) -> Result<Self, DomainError> {
        let username = Username::parse(username)?;
        let email = Email::parse(email)?;
        let now = Utc::now();

        Ok(Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            first_name: None,
            last_name: None,
            is_active: true,
            is_staff: false,
            is_admin: false,
            is_superuser: false,
            password_hash: None,
            last_login: None,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn with_names(mut self, first_name: Option<String>, last_name: Option<String>) -> Self {
        self.first_name = first_name;
        self.last_name = last_name;
        self
    }

    /// 修改名
    pub fn set_first_name(&mut self, first_name: String) {
        self.first_name = Some(first_name);
        self.touch();
    }

    pub fn set_last_name(&mut self, last_name: String) {
        self.last_name = Some(last_name);
        self.touch();
    }

    /// 激活用户
    pub fn activate(&mut self) {
        self.is_active = true;
        self.touch();
    }

    /// 停用用户
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.touch();
    }

    pub fn promote_to_admin(&mut self) {
        self.is_admin = true;
        self.touch();
    }

    pub fn demote_from_admin(&mut self) {
        self.is_admin = false;
        self.touch();
    }

    /// 设置新的密码哈希
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = Some(password_hash);
        self.touch();
    }

    /// 修改邮箱，新邮箱需通过格式校验
    pub fn change_email(&mut self, email: &str) -> Result<(), DomainError> {
        let email = Email::parse(email)?;
        self.email = email.into();
        self.touch();
        Ok(())
    }

    /// 记录一次成功登录
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login = Some(now);
        self.updated_at = now;
    }

    /// 全名，名和姓都为空时返回空字符串
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 是否拥有管理其他用户的权限
    pub fn can_manage_users(&self) -> bool {
        self.is_staff || self.is_admin || self.is_superuser
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Entity for User {
    type Id = Uuid;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}
