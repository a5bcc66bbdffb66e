use anyhow::Result;

use crate::shared::data::seed;
use crate::system::users::{repository, service};
use contracts::system::users::CreateUserDto;

/// Seed the in-memory store with the mock dataset
pub fn seed_mock_data() -> Result<()> {
    seed::seed_store()?;
    Ok(())
}

/// Ensure admin user exists (create if no users yet)
pub async fn ensure_admin_user_exists() -> Result<()> {
    let count = repository::count_users().await?;

    if count == 0 {
        tracing::info!("No users found. Creating default admin user...");

        let admin_dto = CreateUserDto {
            username: "admin".to_string(),
            password: "admin".to_string(),
            email: None,
            full_name: Some("Administrator".to_string()),
            is_admin: true,
        };

        let user_id = service::create(admin_dto).await?;
        tracing::info!("Default admin user created with id {}", user_id);
        tracing::warn!("Default credentials are admin/admin - change the password after first login");
    }

    Ok(())
}
