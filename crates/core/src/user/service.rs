//! User management service

use std::sync::Arc;

use meetnotify_domain::constants::MIN_PASSWORD_LENGTH;
use meetnotify_domain::{MeetNotifyError, NewUser, Result, User, UserRole, UserUpdate};
use tracing::{info, warn};

use super::ports::UserRepository;

/// User account use cases
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// All users sorted by username
    pub async fn list(&self) -> Result<Vec<User>> {
        let mut users = self.repository.list().await?;
        users.sort_by_cached_key(|u| u.username.to_lowercase());
        Ok(users)
    }

    pub async fn get(&self, id: u64) -> Result<User> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| MeetNotifyError::NotFound(format!("user {id}")))
    }

    /// Validate and create a user
    ///
    /// # Errors
    /// `InvalidInput` for malformed fields, `Conflict` for a taken username.
    pub async fn create(&self, mut user: NewUser) -> Result<User> {
        user.username = user.username.trim().to_string();
        if user.username.is_empty() || user.username.chars().any(char::is_whitespace) {
            return Err(MeetNotifyError::InvalidInput(
                "username must be non-empty and contain no spaces".into(),
            ));
        }
        if user.name.trim().is_empty() {
            return Err(MeetNotifyError::InvalidInput("name must not be empty".into()));
        }
        validate_password(&user.password)?;
        validate_email(user.email.as_deref())?;

        let taken = self
            .repository
            .list()
            .await?
            .iter()
            .any(|existing| existing.username.eq_ignore_ascii_case(&user.username));
        if taken {
            return Err(MeetNotifyError::Conflict(format!(
                "username '{}' is already taken",
                user.username
            )));
        }

        let created = self.repository.create(user).await?;
        info!(user_id = created.id, role = %created.role, "user created");
        Ok(created)
    }

    /// Validate and update a user; the last admin cannot be demoted
    pub async fn update(&self, id: u64, update: UserUpdate) -> Result<User> {
        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(MeetNotifyError::InvalidInput("name must not be empty".into()));
            }
        }
        if let Some(password) = &update.password {
            validate_password(password)?;
        }
        validate_email(update.email.as_deref())?;

        let existing = self.get(id).await?;
        if existing.role == UserRole::Admin
            && update.role.is_some_and(|role| role != UserRole::Admin)
        {
            self.ensure_another_admin(id).await?;
        }

        let updated = self.repository.update(id, update).await?;
        info!(user_id = id, "user updated");
        Ok(updated)
    }

    /// Delete a user; the last admin cannot be deleted
    pub async fn delete(&self, id: u64) -> Result<()> {
        let existing = self.get(id).await?;
        if existing.role == UserRole::Admin {
            self.ensure_another_admin(id).await?;
        }
        self.repository.delete(id).await?;
        info!(user_id = id, "user deleted");
        Ok(())
    }

    async fn ensure_another_admin(&self, id: u64) -> Result<()> {
        let admins = self
            .repository
            .list()
            .await?
            .iter()
            .filter(|u| u.role == UserRole::Admin && u.id != id)
            .count();
        if admins == 0 {
            warn!(user_id = id, "refusing to remove the last admin");
            return Err(MeetNotifyError::Conflict("at least one admin must remain".into()));
        }
        Ok(())
    }
}

fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(MeetNotifyError::InvalidInput(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

fn validate_email(email: Option<&str>) -> Result<()> {
    match email {
        Some(email) if !email.contains('@') => Err(MeetNotifyError::InvalidInput(format!(
            "'{email}' is not an email address"
        ))),
        _ => Ok(()),
    }
}
