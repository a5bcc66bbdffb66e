use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub is_admin: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // user_id
    pub username: String,
    pub is_admin: bool,
    pub exp: usize, // expiration timestamp
    pub iat: usize, // issued at
}

/// Client-side authentication state.
///
/// Single source of truth for "is the current user signed in": route guards
/// consult [`is_authenticated`](Self::is_authenticated) on entry instead of
/// inspecting tokens themselves.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub user: Option<UserInfo>,
    /// Expiry of the access token, mirrored from its `exp` claim
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn signed_in(response: LoginResponse, expires_at: DateTime<Utc>) -> Self {
        Self {
            access_token: Some(response.access_token),
            refresh_token: Some(response.refresh_token),
            user: Some(response.user),
            expires_at: Some(expires_at),
        }
    }

    /// True while an unexpired access token is held
    pub fn is_authenticated(&self) -> bool {
        match (&self.access_token, self.expires_at) {
            (Some(_), Some(expires_at)) => Utc::now() < expires_at,
            _ => false,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    /// Drop all credentials, returning to the signed-out state
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
