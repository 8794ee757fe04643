//! Wire DTOs for the users resource.
//!
//! The adapter decodes into these transport DTOs first, then maps into domain
//! users in one pass.

use serde::{Deserialize, Serialize};

use crate::domain::{NewUser, User};

#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    pub(super) id: i64,
    pub(super) name: String,
    pub(super) email: String,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        Self::new(dto.id, dto.name, dto.email)
    }
}

#[derive(Debug, Serialize)]
pub(super) struct NewUserDto<'a> {
    pub(super) name: &'a str,
    pub(super) email: &'a str,
}

impl<'a> From<&'a NewUser> for NewUserDto<'a> {
    fn from(candidate: &'a NewUser) -> Self {
        Self {
            name: candidate.name(),
            email: candidate.email(),
        }
    }
}
