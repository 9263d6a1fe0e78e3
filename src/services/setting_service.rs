use std::sync::Arc;

use crate::{
    constants::{DEFAULT_MARQUEE_TEXT, MARQUEE_SETTING_KEY},
    errors::ApiError,
    repositories::setting_repository::SettingRepository,
};

pub struct SettingService {
    setting_repository: Arc<SettingRepository>,
}

impl SettingService {
    pub fn new(setting_repository: Arc<SettingRepository>) -> Self {
        Self { setting_repository }
    }

    pub async fn marquee_text(&self) -> Result<String, ApiError> {
        let setting = self
            .setting_repository
            .find_by_key(MARQUEE_SETTING_KEY)
            .await?;
        Ok(setting
            .map(|s| s.value)
            .unwrap_or_else(|| DEFAULT_MARQUEE_TEXT.to_string()))
    }

    pub async fn set_marquee_text(&self, text: &str) -> Result<(), ApiError> {
        self.setting_repository
            .upsert(MARQUEE_SETTING_KEY, text)
            .await?;
        Ok(())
    }
}
