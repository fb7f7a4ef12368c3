use crate::error::ConfigError;
use std::path::PathBuf;

/// 程序运行配置（进程级）
///
/// 用户可见的题目设置保存在笔记库内的 TOML 文件中，见 [`crate::models::Settings`]
#[derive(Clone, Debug)]
pub struct Config {
    /// 笔记库根目录
    pub vault_dir: PathBuf,
    /// 设置文件名（相对于笔记库根目录）
    pub settings_file: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vault_dir: PathBuf::from("."),
            settings_file: ".diary-questions.toml".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let default = Self::default();
        Ok(Self {
            vault_dir: std::env::var("DIARY_VAULT_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.vault_dir),
            settings_file: std::env::var("DIARY_SETTINGS_FILE").unwrap_or(default.settings_file),
            verbose_logging: parse_bool_var(
                "DIARY_VERBOSE_LOGGING",
                std::env::var("DIARY_VERBOSE_LOGGING").ok(),
            )?
            .unwrap_or(default.verbose_logging),
        })
    }

    /// 设置文件的完整路径
    pub fn settings_path(&self) -> PathBuf {
        self.vault_dir.join(&self.settings_file)
    }
}

/// 解析布尔型环境变量，未设置时返回 None
fn parse_bool_var(var_name: &str, value: Option<String>) -> Result<Option<bool>, ConfigError> {
    match value {
        None => Ok(None),
        Some(v) => {
            let normalized = v.trim().to_ascii_lowercase();
            match normalized.as_str() {
                "1" | "true" | "yes" | "on" => Ok(Some(true)),
                "0" | "false" | "no" | "off" | "" => Ok(Some(false)),
                _ => Err(ConfigError::EnvVarParseFailed {
                    var_name: var_name.to_string(),
                    value: v,
                    expected_type: "bool".to_string(),
                }),
            }
        }
    }
}
