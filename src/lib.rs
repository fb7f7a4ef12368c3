//! # Diary Questions
//!
//! 从结构化的题目文档中随机抽取日记问题，并写入当天的笔记
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有笔记库目录，只暴露读写能力
//! - `DocumentStore` - 核心与外部交互的唯一接口
//!
//! ### ② 业务能力层（Services）
//! - `section_splitter` - 文档 → 分区
//! - `question_sampler` - 分区 → 随机抽题（纯函数，随机源由调用方提供）
//! - `source_reader` / `note_writer` - 读题目文档、追加写笔记
//!
//! ### ③ 流程层（Workflow）
//! - `DiaryFlow` - 一次完整生成（读取 → 拆分 → 抽题 → 写入）
//! - `RunCtx` - 本次运行的来源、目标笔记和时间
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator::plugin` - `Plugin` 生命周期（load / save / run）
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{DocumentStore, FsDocumentStore};
pub use models::{CountConfig, Section, Settings};
pub use orchestrator::{App, Command, Plugin};
pub use services::{sample, split};
pub use workflow::{DiaryFlow, RunCtx};
