use crate::error::{AppResult, SettingsError, StoreError};
use crate::models::settings::Settings;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载设置
///
/// 文件不存在时返回默认设置；文件存在但格式错误时报错
pub async fn load_settings(settings_path: &Path) -> AppResult<Settings> {
    let content = match fs::read_to_string(settings_path).await {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::info!("未找到设置文件 {}，使用默认设置", settings_path.display());
            return Ok(Settings::default());
        }
        Err(e) => return Err(StoreError::read_failed(settings_path, e).into()),
    };

    let settings: Settings =
        toml::from_str(&content).map_err(|source| SettingsError::TomlParseFailed {
            path: settings_path.to_path_buf(),
            source,
        })?;

    tracing::debug!("已加载设置: {:?}", settings);

    Ok(settings)
}

/// 将设置写入 TOML 文件（覆盖原文件）
pub async fn save_settings(settings_path: &Path, settings: &Settings) -> AppResult<()> {
    let content = toml::to_string_pretty(settings).map_err(SettingsError::from)?;

    if let Some(parent) = settings_path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| StoreError::write_failed(parent, e))?;
    }

    fs::write(settings_path, content)
        .await
        .map_err(|e| StoreError::write_failed(settings_path, e))?;

    tracing::info!("设置已保存至: {}", settings_path.display());

    Ok(())
}
