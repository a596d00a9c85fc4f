// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod auth_dto;
pub mod page;
pub mod user_dto;

pub use auth_dto::{AuthenticationResultDto, ChangePasswordDto};
pub use page::Page;
pub use user_dto::{UserCreateDto, UserDto, UserUpdateDto};
