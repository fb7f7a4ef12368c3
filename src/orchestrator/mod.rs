//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (Plugin: load / save / run)
//!     ↓
//! workflow::DiaryFlow (一次生成)
//!     ↓
//! services (能力层：split / sample / read / write)
//!     ↓
//! infrastructure (基础设施：DocumentStore)
//! ```
//!
//! 编排层只做生命周期管理和命令分发，不做具体业务判断

pub mod plugin;

pub use plugin::{App, Command, CommandOutput, Plugin};
