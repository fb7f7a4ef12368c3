use std::path::PathBuf;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 文档存储错误
    #[error("文档存储错误: {0}")]
    Store(#[from] StoreError),
    /// 设置文件错误
    #[error("设置错误: {0}")]
    Settings(#[from] SettingsError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 文档存储错误
#[derive(Debug, Error)]
pub enum StoreError {
    /// 找不到对应的文档
    #[error("文档不存在: {identifier}")]
    NotFound { identifier: String },
    /// 读取文件失败
    #[error("读取文件失败 ({}): {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({}): {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 目录不存在
    #[error("目录不存在: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },
}

/// 设置文件错误
#[derive(Debug, Error)]
pub enum SettingsError {
    /// TOML 解析失败
    #[error("TOML解析失败 ({}): {source}", .path.display())]
    TomlParseFailed {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// TOML 序列化失败
    #[error("TOML序列化失败: {0}")]
    TomlSerializeFailed(#[from] toml::ser::Error),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
    /// 笔记路径模板无效
    #[error("笔记路径模板无效: '{template}'")]
    InvalidNoteTemplate { template: String },
}

// ========== 便捷构造函数 ==========

impl StoreError {
    /// 创建文件读取错误
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// 创建文件写入错误
    pub fn write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::WriteFailed {
            path: path.into(),
            source,
        }
    }

    /// 是否为"文档不存在"
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_converts_into_app_error() {
        let err: AppError = StoreError::NotFound {
            identifier: "StructureDiaryQuestions".to_string(),
        }
        .into();

        assert!(matches!(err, AppError::Store(StoreError::NotFound { .. })));
        assert!(err.to_string().contains("StructureDiaryQuestions"));
    }

    #[test]
    fn test_is_not_found() {
        let missing = StoreError::NotFound {
            identifier: "x".to_string(),
        };
        let io = StoreError::read_failed(
            "a.md",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );

        assert!(missing.is_not_found());
        assert!(!io.is_not_found());
    }
}
