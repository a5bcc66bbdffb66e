use crate::shared::data::store::{self, StoreError, StoredUser};
use chrono::Utc;
use contracts::system::users::User;

pub async fn create_with_password(user: &User, password_hash: &str) -> Result<(), StoreError> {
    let mut store = store::write()?;
    if store.users.iter().any(|u| u.user.username == user.username) {
        return Err(StoreError::Conflict(format!(
            "username '{}' already exists",
            user.username
        )));
    }
    store.users.push(StoredUser {
        user: user.clone(),
        password_hash: password_hash.to_string(),
    });
    Ok(())
}

pub async fn get_by_id(id: &str) -> Result<Option<User>, StoreError> {
    let store = store::read()?;
    Ok(store
        .users
        .iter()
        .find(|u| u.user.id == id)
        .map(|u| u.user.clone()))
}

pub async fn get_by_username(username: &str) -> Result<Option<User>, StoreError> {
    let store = store::read()?;
    Ok(store
        .users
        .iter()
        .find(|u| u.user.username == username)
        .map(|u| u.user.clone()))
}

pub async fn list_all() -> Result<Vec<User>, StoreError> {
    let store = store::read()?;
    Ok(store.users.iter().map(|u| u.user.clone()).collect())
}

pub async fn update(user: &User) -> Result<(), StoreError> {
    let mut store = store::write()?;
    let slot = store
        .users
        .iter_mut()
        .find(|u| u.user.id == user.id)
        .ok_or(StoreError::NotFound("user"))?;
    slot.user = user.clone();
    Ok(())
}

pub async fn delete(id: &str) -> Result<bool, StoreError> {
    let mut store = store::write()?;
    let before = store.users.len();
    store.users.retain(|u| u.user.id != id);
    Ok(store.users.len() < before)
}

pub async fn get_password_hash(user_id: &str) -> Result<Option<String>, StoreError> {
    let store = store::read()?;
    Ok(store
        .users
        .iter()
        .find(|u| u.user.id == user_id)
        .map(|u| u.password_hash.clone()))
}

pub async fn update_password(user_id: &str, password_hash: &str) -> Result<(), StoreError> {
    let mut store = store::write()?;
    let slot = store
        .users
        .iter_mut()
        .find(|u| u.user.id == user_id)
        .ok_or(StoreError::NotFound("user"))?;
    slot.password_hash = password_hash.to_string();
    slot.user.updated_at = Utc::now();
    Ok(())
}

pub async fn update_last_login(user_id: &str) -> Result<(), StoreError> {
    let mut store = store::write()?;
    let slot = store
        .users
        .iter_mut()
        .find(|u| u.user.id == user_id)
        .ok_or(StoreError::NotFound("user"))?;
    slot.user.last_login_at = Some(Utc::now());
    Ok(())
}

pub async fn count_users() -> Result<usize, StoreError> {
    let store = store::read()?;
    Ok(store.users.len())
}
