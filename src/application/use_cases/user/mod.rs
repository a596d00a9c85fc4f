// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod change_password;
pub mod create_user;
pub mod get_user;
pub mod list_users;
pub mod set_user_active;
pub mod update_user;

pub use change_password::ChangePasswordUseCase;
pub use create_user::CreateUserUseCase;
pub use get_user::GetUserUseCase;
pub use list_users::ListUsersUseCase;
pub use set_user_active::SetUserActiveUseCase;
pub use update_user::UpdateUserUseCase;
