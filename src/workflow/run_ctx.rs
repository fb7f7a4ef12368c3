//! 单次运行上下文
//!
//! 封装"这次从哪读题、写到哪篇笔记"这一信息

use crate::error::ConfigError;
use crate::models::Settings;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::{Display, Write};

/// 单次运行上下文
#[derive(Debug, Clone)]
pub struct RunCtx {
    /// 题目文档标识
    pub source_file: String,

    /// 目标笔记路径（已按日期展开）
    pub target_note: String,

    /// 运行时间
    pub started_at: DateTime<Local>,

    /// 随机种子（未设置时使用系统熵）
    pub seed: Option<u64>,
}

impl RunCtx {
    /// 根据设置和当前时间创建上下文
    pub fn new(settings: &Settings, started_at: DateTime<Local>) -> Result<Self, ConfigError> {
        Ok(Self {
            source_file: settings.source_file.clone(),
            target_note: render_note_path(&settings.target_note, &started_at)?,
            started_at,
            seed: settings.seed,
        })
    }

    pub fn now(settings: &Settings) -> Result<Self, ConfigError> {
        Self::new(settings, Local::now())
    }
}

impl Display for RunCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[题目 {} → 笔记 {} @ {}",
            self.source_file,
            self.target_note,
            self.started_at.format("%Y-%m-%d %H:%M:%S")
        )?;
        if let Some(seed) = self.seed {
            write!(f, " 种子#{}", seed)?;
        }
        write!(f, "]")
    }
}

/// 按 strftime 模板展开笔记路径，例如 `Diary/%Y-%m-%d.md`
pub fn render_note_path<Tz>(template: &str, at: &DateTime<Tz>) -> Result<String, ConfigError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let invalid = || ConfigError::InvalidNoteTemplate {
        template: template.to_string(),
    };

    let mut rendered = String::new();
    write!(rendered, "{}", at.format(template)).map_err(|_| invalid())?;

    if rendered.trim().is_empty() {
        return Err(invalid());
    }

    Ok(rendered)
}
