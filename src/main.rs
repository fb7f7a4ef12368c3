use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use diary_questions::models::SettingsOverride;
use diary_questions::orchestrator::{App, Command, CommandOutput, Plugin};
use diary_questions::utils::logging;
use diary_questions::Config;

#[derive(Parser)]
#[command(name = "diary-questions")]
#[command(about = "从题目文档中随机抽取日记问题并写入当天的笔记", long_about = None)]
struct Cli {
    /// 笔记库根目录（默认读取 DIARY_VAULT_DIR）
    #[arg(long, global = true, value_name = "DIR")]
    vault: Option<PathBuf>,

    /// 输出详细日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(flatten)]
    overrides: OverrideArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// 对已保存设置的单次覆盖
#[derive(Args)]
struct OverrideArgs {
    /// 题目文档（路径或文件名片段）
    #[arg(long, global = true, value_name = "FILE")]
    source: Option<String>,

    /// 每个分区的抽题数量，例如 "1-3;2-2"
    #[arg(long, global = true, value_name = "TEMPLATE")]
    counts: Option<String>,

    /// 输出分区标题
    #[arg(long, global = true, conflicts_with = "no_headers")]
    headers: bool,

    /// 不输出分区标题
    #[arg(long, global = true)]
    no_headers: bool,

    /// 目标笔记路径模板，例如 "Diary/%Y-%m-%d.md"
    #[arg(long, global = true, value_name = "TEMPLATE")]
    target: Option<String>,

    /// 随机种子
    #[arg(long, global = true)]
    seed: Option<u64>,
}

impl OverrideArgs {
    fn into_override(self) -> SettingsOverride {
        let show_headers = match (self.headers, self.no_headers) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        SettingsOverride {
            source_file: self.source,
            count_template: self.counts,
            show_headers,
            target_note: self.target,
            seed: self.seed,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// 生成题目并追加到目标笔记（默认命令）
    Insert,
    /// 只生成题目并打印
    Preview {
        /// 以 JSON 输出每个分区的结果
        #[arg(long)]
        json: bool,
    },
    /// 查看或修改已保存的设置
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// 打印已保存的设置
    Show,
    /// 将命令行覆盖项写入设置文件
    Set,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let mut config = Config::from_env().context("读取环境变量配置失败")?;
    if let Some(vault) = cli.vault {
        config.vault_dir = vault;
    }
    config.verbose_logging |= cli.verbose;

    // 初始化日志
    logging::init(config.verbose_logging);
    logging::log_startup(&config);

    let mut app = App::from_config(config).with_overrides(cli.overrides.into_override());
    app.load().await.context("加载设置失败")?;

    match cli.command.unwrap_or(Commands::Insert) {
        Commands::Insert => {
            if let CommandOutput::Inserted(outcome) = app.run(Command::Insert).await? {
                if outcome.write_mode.is_some() {
                    println!("{}", outcome.target_note);
                }
            }
        }
        Commands::Preview { json } => {
            if let CommandOutput::Previewed(generated) = app.run(Command::Preview).await? {
                if json {
                    let rendered = serde_json::to_string_pretty(&generated.blocks)
                        .context("序列化抽题结果失败")?;
                    println!("{}", rendered);
                } else {
                    println!("{}", generated.text);
                }
            }
        }
        Commands::Settings { action } => match action {
            SettingsAction::Show => {
                let rendered = toml::to_string_pretty(app.saved_settings())
                    .context("序列化设置失败")?;
                print!("{}", rendered);
            }
            SettingsAction::Set => {
                let settings = app.effective_settings();
                app.save(settings).await.context("保存设置失败")?;
            }
        },
    }

    Ok(())
}
