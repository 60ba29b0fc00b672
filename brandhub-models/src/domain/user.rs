use crate::{domain::session::Session, entities::user::ActiveModel};
use chrono::{DateTime, Utc};
use sea_orm::DeriveIntoActiveModel;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration payload.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(email(message = "email is invalid"), length(max = 50))]
    pub email: String,
    #[validate(length(min = 6, max = 72, message = "password length must be 6..=72"))]
    pub password: String,
    #[validate(length(max = 50))]
    #[serde(default)]
    pub name: String,
    #[validate(length(max = 50))]
    #[serde(default)]
    pub surname: String,
}

/// Row to insert into `users`; `password` already holds the bcrypt hash.
#[derive(Clone, Debug, PartialEq, DeriveIntoActiveModel)]
pub struct NewUser {
    pub email: String,
    pub password: String,
    pub name: String,
    pub surname: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl From<&Session> for LoginResponse {
    fn from(session: &Session) -> Self {
        LoginResponse {
            token: session.token.to_string(),
            expires_at: session.expires_at,
        }
    }
}
