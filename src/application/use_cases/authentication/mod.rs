// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod authenticate_user;
pub mod authenticate_user_jwt;
pub mod logout;
pub mod refresh_token;
pub mod resolve_current_user;

pub use authenticate_user::AuthenticateUserUseCase;
pub use authenticate_user_jwt::AuthenticateUserJwtUseCase;
pub use logout::LogoutUseCase;
pub use refresh_token::RefreshTokenUseCase;
pub use resolve_current_user::ResolveCurrentUserUseCase;
