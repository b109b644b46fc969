use super::ConfigRepositoryTrait;
use crate::constants::MONTHLY_WINDOW_SETTING_KEY;
use crate::errors::{DatabaseError, Error, Result, ValidationError};
use crate::settings::{ConfigSetting, MonthlySettings};
use async_trait::async_trait;
use log::{debug, warn};
use std::sync::Arc;

#[async_trait]
pub trait ConfigServiceTrait: Send + Sync {
    fn get_all(&self) -> Result<Vec<ConfigSetting>>;

    /// Value stored under `key`, or `default` when the key does not exist.
    fn get_value(&self, key: &str, default: &str) -> Result<String>;

    async fn set_value(&self, key: &str, value: &str) -> Result<ConfigSetting>;

    fn monthly_settings(&self) -> Result<MonthlySettings>;
}

pub struct ConfigService {
    config_repository: Arc<dyn ConfigRepositoryTrait>,
}

impl ConfigService {
    pub fn new(config_repository: Arc<dyn ConfigRepositoryTrait>) -> Self {
        ConfigService { config_repository }
    }
}

#[async_trait]
impl ConfigServiceTrait for ConfigService {
    fn get_all(&self) -> Result<Vec<ConfigSetting>> {
        self.config_repository.get_all()
    }

    fn get_value(&self, key: &str, default: &str) -> Result<String> {
        match self.config_repository.get_setting(key) {
            Ok(value) => Ok(value),
            Err(Error::Database(DatabaseError::NotFound(_))) => Ok(default.to_string()),
            Err(e) => Err(e),
        }
    }

    async fn set_value(&self, key: &str, value: &str) -> Result<ConfigSetting> {
        if key.trim().is_empty() {
            return Err(ValidationError::MissingField("key".to_string()).into());
        }
        debug!("Updating config key {}", key);
        self.config_repository.update_setting(key, value).await
    }

    fn monthly_settings(&self) -> Result<MonthlySettings> {
        let defaults = MonthlySettings::default();
        let raw = self.get_value(
            MONTHLY_WINDOW_SETTING_KEY,
            &defaults.default_window_months.to_string(),
        )?;

        let default_window_months = match raw.trim().parse::<u32>() {
            Ok(months) if months > 0 => months,
            _ => {
                warn!(
                    "Invalid value '{}' for {}, using {}",
                    raw, MONTHLY_WINDOW_SETTING_KEY, defaults.default_window_months
                );
                defaults.default_window_months
            }
        };

        Ok(MonthlySettings {
            default_window_months,
        })
    }
}
