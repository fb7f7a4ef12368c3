//! 宿主插件 - 编排层
//!
//! ## 职责
//!
//! 1. **生命周期**：`load` 读取设置，`save` 保存设置
//! 2. **命令分发**：`run` 根据命令调用流程层
//! 3. **资源管理**：持有文档存储，流程层只借用
//!
//! 核心流程不依赖这里的任何状态，设置在每次运行时显式传入

use std::future::Future;

use tracing::info;

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::{DocumentStore, FsDocumentStore};
use crate::models::{load_settings, save_settings, Settings, SettingsOverride};
use crate::utils::logging::log_run_summary;
use crate::workflow::{DiaryFlow, Generated, RunCtx, RunOutcome};

/// 可执行的命令
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 生成题目并追加到当天的笔记
    Insert,
    /// 只生成题目，不写入
    Preview,
}

/// 命令执行结果
#[derive(Debug, Clone)]
pub enum CommandOutput {
    Inserted(RunOutcome),
    Previewed(Generated),
}

/// 宿主插件接口
pub trait Plugin {
    /// 加载已保存的设置
    fn load(&mut self) -> impl Future<Output = AppResult<()>> + Send;

    /// 保存设置并立即生效
    fn save(&mut self, settings: Settings) -> impl Future<Output = AppResult<()>> + Send;

    /// 执行命令
    fn run(&self, command: Command) -> impl Future<Output = AppResult<CommandOutput>> + Send;
}

/// 应用主结构
pub struct App<S> {
    config: Config,
    store: S,
    settings: Settings,
    overrides: SettingsOverride,
}

impl App<FsDocumentStore> {
    /// 以配置中的笔记库目录创建应用
    pub fn from_config(config: Config) -> Self {
        let store = FsDocumentStore::new(config.vault_dir.clone());
        Self::new(config, store)
    }
}

impl<S: DocumentStore> App<S> {
    pub fn new(config: Config, store: S) -> Self {
        Self {
            config,
            store,
            settings: Settings::default(),
            overrides: SettingsOverride::default(),
        }
    }

    /// 设置本次运行的临时覆盖项（不会被保存）
    pub fn with_overrides(mut self, overrides: SettingsOverride) -> Self {
        self.overrides = overrides;
        self
    }

    /// 已保存的设置
    pub fn saved_settings(&self) -> &Settings {
        &self.settings
    }

    /// 合并覆盖项后实际使用的设置
    pub fn effective_settings(&self) -> Settings {
        self.settings.clone().with_override(&self.overrides)
    }
}

impl<S: DocumentStore + Send + Sync> Plugin for App<S> {
    async fn load(&mut self) -> AppResult<()> {
        self.settings = load_settings(&self.config.settings_path()).await?;
        Ok(())
    }

    async fn save(&mut self, settings: Settings) -> AppResult<()> {
        save_settings(&self.config.settings_path(), &settings).await?;
        self.settings = settings;
        Ok(())
    }

    async fn run(&self, command: Command) -> AppResult<CommandOutput> {
        let flow = DiaryFlow::new(self.effective_settings());
        let mut rng = flow.rng();

        match command {
            Command::Insert => {
                let ctx = RunCtx::now(flow.settings())?;
                let outcome = flow.run(&self.store, &ctx, &mut rng).await?;
                log_run_summary(&outcome);
                Ok(CommandOutput::Inserted(outcome))
            }
            Command::Preview => {
                let generated = flow.generate(&self.store, &mut rng).await?;
                info!("👀 预览: 共 {} 道题", generated.question_count());
                Ok(CommandOutput::Previewed(generated))
            }
        }
    }
}
