//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::workflow::RunOutcome;

/// 初始化日志
///
/// `RUST_LOG` 优先；否则默认 `info`，开启详细日志时为 `debug`
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 日记题目生成");
    info!("📁 笔记库: {}", config.vault_dir.display());
    info!("⚙️ 设置文件: {}", config.settings_path().display());
    info!("{}", "=".repeat(60));
}

/// 打印单次运行统计
pub fn log_run_summary(outcome: &RunOutcome) {
    info!("\n{}", "─".repeat(60));
    info!(
        "📊 分区 {} 个 | 抽中 {} 道题 | 题目来源: {:?}",
        outcome.generated.section_count,
        outcome.generated.question_count(),
        outcome.generated.source
    );
    match outcome.write_mode {
        Some(mode) => info!("✅ 笔记: {} ({:?})", outcome.target_note, mode),
        None => info!("❌ 未写入笔记: {}", outcome.target_note),
    }
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
