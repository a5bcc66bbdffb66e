use anyhow::Result;
use chrono::Utc;
use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto, User};

use super::repository;
use crate::system::auth::password;

/// Create a new user
pub async fn create(dto: CreateUserDto) -> Result<String> {
    if dto.username.trim().is_empty() {
        return Err(anyhow::anyhow!("Username cannot be empty"));
    }

    if repository::get_by_username(&dto.username).await?.is_some() {
        return Err(anyhow::anyhow!("Username already exists"));
    }

    if let Some(ref email) = dto.email {
        if !email.trim().is_empty() && !email.contains('@') {
            return Err(anyhow::anyhow!("Invalid email format"));
        }
    }

    password::validate_password_strength(&dto.password)?;
    let password_hash = password::hash_password(&dto.password)?;

    let user_id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now();

    let user = User {
        id: user_id.clone(),
        username: dto.username,
        email: dto.email,
        full_name: dto.full_name,
        is_active: true,
        is_admin: dto.is_admin,
        created_at: now,
        updated_at: now,
        last_login_at: None,
    };

    repository::create_with_password(&user, &password_hash).await?;

    Ok(user_id)
}

/// Update user
pub async fn update(dto: UpdateUserDto) -> Result<()> {
    let mut user = repository::get_by_id(&dto.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("User not found"))?;

    if let Some(ref email) = dto.email {
        if !email.trim().is_empty() && !email.contains('@') {
            return Err(anyhow::anyhow!("Invalid email format"));
        }
    }

    user.email = dto.email;
    user.full_name = dto.full_name;
    user.is_active = dto.is_active;
    user.is_admin = dto.is_admin;
    user.updated_at = Utc::now();

    repository::update(&user).await?;

    Ok(())
}

/// Delete user
pub async fn delete(id: &str) -> Result<bool> {
    Ok(repository::delete(id).await?)
}

/// Get user by ID
pub async fn get_by_id(id: &str) -> Result<Option<User>> {
    Ok(repository::get_by_id(id).await?)
}

/// List all users
pub async fn list_all() -> Result<Vec<User>> {
    Ok(repository::list_all().await?)
}

/// Change user password
pub async fn change_password(dto: ChangePasswordDto, requester_id: &str) -> Result<()> {
    let _user = repository::get_by_id(&dto.user_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("User not found"))?;

    let requester = repository::get_by_id(requester_id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Requester not found"))?;

    if dto.user_id != requester_id {
        // Changing someone else's password - must be admin
        if !requester.is_admin {
            return Err(anyhow::anyhow!("Permission denied"));
        }
        // Admin can change without old password
    } else {
        // Changing own password - old password is mandatory
        let old_password = dto
            .old_password
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Old password is required"))?;

        let current_hash = repository::get_password_hash(&dto.user_id)
            .await?
            .ok_or_else(|| anyhow::anyhow!("Password hash not found"))?;

        if !password::verify_password(old_password, &current_hash)? {
            return Err(anyhow::anyhow!("Invalid old password"));
        }
    }

    password::validate_password_strength(&dto.new_password)?;
    let new_hash = password::hash_password(&dto.new_password)?;
    repository::update_password(&dto.user_id, &new_hash).await?;

    Ok(())
}

/// Verify user credentials (for login)
pub async fn verify_credentials(username: &str, password: &str) -> Result<Option<User>> {
    let user = match repository::get_by_username(username).await? {
        Some(u) => u,
        None => return Ok(None),
    };

    if !user.is_active {
        return Err(anyhow::anyhow!("User account is inactive"));
    }

    let password_hash = repository::get_password_hash(&user.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("Password hash not found"))?;

    if !password::verify_password(password, &password_hash)? {
        return Ok(None);
    }

    let _ = repository::update_last_login(&user.id).await;

    Ok(Some(user))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_dto(username: &str) -> CreateUserDto {
        CreateUserDto {
            username: username.to_string(),
            password: "secret-pass".to_string(),
            email: Some("user@example.com".to_string()),
            full_name: Some("Test User".to_string()),
            is_admin: false,
        }
    }

    #[tokio::test]
    async fn duplicate_usernames_are_rejected() {
        create(create_dto("dup-user")).await.unwrap();
        assert!(create(create_dto("dup-user")).await.is_err());
    }

    #[tokio::test]
    async fn credentials_verify_and_track_last_login() {
        let id = create(create_dto("login-user")).await.unwrap();

        let verified = verify_credentials("login-user", "secret-pass")
            .await
            .unwrap()
            .expect("valid credentials");
        assert_eq!(verified.id, id);

        let after = get_by_id(&id).await.unwrap().unwrap();
        assert!(after.last_login_at.is_some());

        let wrong = verify_credentials("login-user", "wrong").await.unwrap();
        assert!(wrong.is_none());
    }

    #[tokio::test]
    async fn inactive_accounts_cannot_sign_in() {
        let id = create(create_dto("inactive-user")).await.unwrap();
        update(UpdateUserDto {
            id: id.clone(),
            email: None,
            full_name: None,
            is_active: false,
            is_admin: false,
        })
        .await
        .unwrap();

        assert!(verify_credentials("inactive-user", "secret-pass")
            .await
            .is_err());
    }

    #[tokio::test]
    async fn own_password_change_requires_the_old_one() {
        let id = create(create_dto("pw-user")).await.unwrap();

        let wrong_old = ChangePasswordDto {
            user_id: id.clone(),
            old_password: Some("not-it".to_string()),
            new_password: "brand-new".to_string(),
        };
        assert!(change_password(wrong_old, &id).await.is_err());

        let right_old = ChangePasswordDto {
            user_id: id.clone(),
            old_password: Some("secret-pass".to_string()),
            new_password: "brand-new".to_string(),
        };
        change_password(right_old, &id).await.unwrap();

        assert!(verify_credentials("pw-user", "brand-new")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn own_password_change_requires_the_old_password() {
        let id = create(create_dto("self-pw-user")).await.unwrap();

        let missing_old = ChangePasswordDto {
            user_id: id.clone(),
            old_password: None,
            new_password: "brand-new".to_string(),
        };
        assert!(change_password(missing_old, &id).await.is_err());
    }

    #[tokio::test]
    async fn non_admin_cannot_change_another_users_password() {
        let target = create(create_dto("target-user")).await.unwrap();
        let other = create(create_dto("other-user")).await.unwrap();

        let dto = ChangePasswordDto {
            user_id: target,
            old_password: None,
            new_password: "hijacked".to_string(),
        };
        assert!(change_password(dto, &other).await.is_err());
    }
}
