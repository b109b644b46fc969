//! Repository traits for config settings.

use async_trait::async_trait;

use crate::errors::Result;
use crate::settings::ConfigSetting;

/// Repository trait for the key/value config table.
#[async_trait]
pub trait ConfigRepositoryTrait: Send + Sync {
    /// All settings, ordered by key.
    fn get_all(&self) -> Result<Vec<ConfigSetting>>;

    /// Get a single setting value by key.
    ///
    /// Returns `DatabaseError::NotFound` when the key does not exist.
    fn get_setting(&self, key: &str) -> Result<String>;

    /// Update a single setting and return the stored row.
    async fn update_setting(&self, key: &str, value: &str) -> Result<ConfigSetting>;
}
