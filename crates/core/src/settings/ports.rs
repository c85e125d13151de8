//! Port interface for notification settings

use async_trait::async_trait;
use meetnotify_domain::{NotificationSettings, Result};

/// Trait for reading and storing the notification settings panel
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get(&self) -> Result<NotificationSettings>;

    async fn update(&self, settings: NotificationSettings) -> Result<NotificationSettings>;
}
