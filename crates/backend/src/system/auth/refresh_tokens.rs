//! Refresh token bookkeeping.
//!
//! Tokens are stored hashed (SHA-256); validation checks expiry and
//! revocation. Logout revokes rather than deletes so a replayed token can
//! be distinguished from an unknown one in the logs.

use super::jwt;
use crate::shared::data::store::{self, RefreshTokenRecord};
use anyhow::Result;
use chrono::Utc;

pub async fn store_refresh_token(user_id: &str, token: &str) -> Result<()> {
    let record = RefreshTokenRecord {
        id: uuid::Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        token_hash: hash_token(token),
        expires_at: jwt::calculate_refresh_token_expiration(),
        revoked_at: None,
        created_at: Utc::now(),
    };

    let mut store = store::write()?;
    store.refresh_tokens.push(record);
    Ok(())
}

/// Resolve a refresh token to its user id, if valid
pub async fn validate_refresh_token(token: &str) -> Result<String> {
    let token_hash = hash_token(token);
    let now = Utc::now();

    let store = store::read()?;
    store
        .refresh_tokens
        .iter()
        .find(|r| r.token_hash == token_hash && r.expires_at > now && r.revoked_at.is_none())
        .map(|r| r.user_id.clone())
        .ok_or_else(|| anyhow::anyhow!("Invalid or expired refresh token"))
}

pub async fn revoke_refresh_token(token: &str) -> Result<()> {
    let token_hash = hash_token(token);
    let mut store = store::write()?;
    for record in store
        .refresh_tokens
        .iter_mut()
        .filter(|r| r.token_hash == token_hash)
    {
        record.revoked_at = Some(Utc::now());
    }
    Ok(())
}

fn hash_token(token: &str) -> String {
    use sha2::{Digest, Sha256};
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stored_token_validates_until_revoked() {
        let token = jwt::generate_refresh_token();
        store_refresh_token("refresh-user-1", &token).await.unwrap();

        let user_id = validate_refresh_token(&token).await.unwrap();
        assert_eq!(user_id, "refresh-user-1");

        revoke_refresh_token(&token).await.unwrap();
        assert!(validate_refresh_token(&token).await.is_err());
    }

    #[tokio::test]
    async fn unknown_token_is_rejected() {
        assert!(validate_refresh_token("never-issued").await.is_err());
    }
}
