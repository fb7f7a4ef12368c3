use serde::{Deserialize, Serialize};

/// 用户设置，保存在笔记库内的 TOML 文件中
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 题目文档（路径或文件名片段）
    pub source_file: String,
    /// 每个分区抽题数量的模板，例如 `1-3;2-2`
    pub count_template: String,
    /// 输出时是否带上分区标题
    pub show_headers: bool,
    /// 输出笔记路径模板（chrono strftime 格式）
    pub target_note: String,
    /// 固定随机种子，便于复现
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_file: "StructureDiaryQuestions".to_string(),
            count_template: String::new(),
            show_headers: false,
            target_note: "Diary/%Y-%m-%d.md".to_string(),
            seed: None,
        }
    }
}

/// 命令行对设置的单次覆盖，`None` 表示沿用已保存的值
#[derive(Debug, Clone, Default)]
pub struct SettingsOverride {
    pub source_file: Option<String>,
    pub count_template: Option<String>,
    pub show_headers: Option<bool>,
    pub target_note: Option<String>,
    pub seed: Option<u64>,
}

impl Settings {
    /// 应用覆盖项，返回新的设置
    pub fn with_override(mut self, over: &SettingsOverride) -> Self {
        if let Some(source_file) = &over.source_file {
            self.source_file = source_file.clone();
        }
        if let Some(count_template) = &over.count_template {
            self.count_template = count_template.clone();
        }
        if let Some(show_headers) = over.show_headers {
            self.show_headers = show_headers;
        }
        if let Some(target_note) = &over.target_note {
            self.target_note = target_note.clone();
        }
        if over.seed.is_some() {
            self.seed = over.seed;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let settings: Settings = toml::from_str("count_template = \"1-2\"").unwrap();

        assert_eq!(settings.count_template, "1-2");
        assert_eq!(settings.source_file, "StructureDiaryQuestions");
        assert!(!settings.show_headers);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_with_override_only_touches_given_fields() {
        let over = SettingsOverride {
            show_headers: Some(true),
            seed: Some(7),
            ..Default::default()
        };
        let settings = Settings::default().with_override(&over);

        assert!(settings.show_headers);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.target_note, "Diary/%Y-%m-%d.md");
    }
}
