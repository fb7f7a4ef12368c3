//! 日记题目生成流程 - 流程层
//!
//! 核心职责：定义"一次生成"的完整流程
//!
//! 流程顺序：
//! 1. 读取题目文档（找不到则用内置题目）
//! 2. 拆分分区 → 解析数量模板 → 抽题
//! 3. 追加写入目标笔记 → 定位笔记

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};

use crate::error::AppResult;
use crate::infrastructure::DocumentStore;
use crate::models::{CountConfig, Settings};
use crate::services::{
    read_or_default, render_blocks, sample_blocks, split, NoteWriter, SampledBlock, SourceKind,
    WriteMode,
};
use crate::utils::logging::truncate_text;
use crate::workflow::run_ctx::RunCtx;

/// 抽题结果
#[derive(Debug, Clone)]
pub struct Generated {
    /// 题目来源
    pub source: SourceKind,
    /// 文档中有效分区的数量
    pub section_count: usize,
    /// 每个分区的抽题结果
    pub blocks: Vec<SampledBlock>,
    /// 最终输出文本
    pub text: String,
}

impl Generated {
    /// 抽中的题目总数
    pub fn question_count(&self) -> usize {
        self.blocks.iter().map(|b| b.questions.len()).sum()
    }
}

/// 单次运行结果
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// 写入的笔记路径
    pub target_note: String,
    /// 写入方式，没有抽到题目时为 `None`
    pub write_mode: Option<WriteMode>,
    pub generated: Generated,
}

/// 日记题目生成流程
///
/// - 不持有任何资源（store 由调用方传入）
/// - 设置按值传入，不依赖全局状态
pub struct DiaryFlow {
    settings: Settings,
    counts: CountConfig,
}

impl DiaryFlow {
    pub fn new(settings: Settings) -> Self {
        let counts = CountConfig::parse(&settings.count_template);
        Self { settings, counts }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// 根据设置创建随机数生成器
    pub fn rng(&self) -> StdRng {
        match self.settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// 只生成题目文本，不写入笔记
    pub async fn generate<S, R>(&self, store: &S, rng: &mut R) -> AppResult<Generated>
    where
        S: DocumentStore,
        R: Rng + ?Sized,
    {
        let source = read_or_default(store, &self.settings.source_file).await?;
        Ok(self.generate_from(source.kind, &source.content, rng))
    }

    /// 对已读取的文档抽题
    pub fn generate_from<R: Rng + ?Sized>(
        &self,
        source: SourceKind,
        content: &str,
        rng: &mut R,
    ) -> Generated {
        let sections = split(content);
        info!(
            "📋 共 {} 个分区，数量配置 {} 项",
            sections.len(),
            self.counts.len()
        );

        let blocks = sample_blocks(&sections, &self.counts, self.settings.show_headers, rng);
        let text = render_blocks(&blocks);

        Generated {
            source,
            section_count: sections.len(),
            blocks,
            text,
        }
    }

    /// 完整流程：生成 → 写入 → 定位
    pub async fn run<S, R>(&self, store: &S, ctx: &RunCtx, rng: &mut R) -> AppResult<RunOutcome>
    where
        S: DocumentStore,
        R: Rng + ?Sized,
    {
        info!("{} 🎲 开始生成日记题目", ctx);

        let generated = self.generate(store, rng).await?;

        if generated.text.is_empty() {
            warn!("{} ⚠️ 没有抽到任何题目，不写入笔记", ctx);
            return Ok(RunOutcome {
                target_note: ctx.target_note.clone(),
                write_mode: None,
                generated,
            });
        }

        info!(
            "{} ✓ 抽中 {} 道题: {}",
            ctx,
            generated.question_count(),
            truncate_text(&generated.text.replace('\n', " | "), 80)
        );

        let mode = NoteWriter::new(store)
            .write(&ctx.target_note, &generated.text)
            .await?;
        store.focus(&ctx.target_note).await?;

        info!("{} ✓ 已写入笔记 ({:?})", ctx, mode);

        Ok(RunOutcome {
            target_note: ctx.target_note.clone(),
            write_mode: Some(mode),
            generated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::FsDocumentStore;
    use tempfile::tempdir;

    fn settings(template: &str) -> Settings {
        Settings {
            source_file: "questions.md".to_string(),
            count_template: template.to_string(),
            target_note: "Diary/today.md".to_string(),
            seed: Some(1),
            ..Default::default()
        }
    }

    #[test]
    fn test_generate_from_counts_questions() {
        let flow = DiaryFlow::new(settings("1-2;2-1"));
        let mut rng = flow.rng();

        let generated =
            flow.generate_from(SourceKind::Document, "# A\nQ1\nQ2\nQ3\n# B\nQ4\n", &mut rng);

        assert_eq!(generated.section_count, 2);
        assert_eq!(generated.question_count(), 3);
        assert_eq!(generated.text.split("\n\n").count(), 2);
    }

    #[tokio::test]
    async fn test_run_writes_note() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("questions.md"), "# A\nQ1\nQ2\n# B\nQ3\n").unwrap();
        let store = FsDocumentStore::new(dir.path());
        let flow = DiaryFlow::new(settings("1-5;2-1"));
        let ctx = RunCtx::now(flow.settings()).unwrap();

        let outcome = flow.run(&store, &ctx, &mut flow.rng()).await.unwrap();

        assert_eq!(outcome.write_mode, Some(WriteMode::Created));
        let written = std::fs::read_to_string(dir.path().join("Diary/today.md")).unwrap();
        assert_eq!(written, "Q1\nQ2\n\nQ3");
    }

    #[tokio::test]
    async fn test_run_with_nothing_drawn_skips_write() {
        let dir = tempdir().unwrap();
        // 每个分区只有一题且没有配置数量，随机数量必然为 0
        std::fs::write(dir.path().join("questions.md"), "# A\nQ1\n# B\nQ2\n").unwrap();
        let store = FsDocumentStore::new(dir.path());
        let flow = DiaryFlow::new(settings(""));
        let ctx = RunCtx::now(flow.settings()).unwrap();

        let outcome = flow.run(&store, &ctx, &mut flow.rng()).await.unwrap();

        assert_eq!(outcome.write_mode, None);
        assert!(!dir.path().join("Diary/today.md").exists());
    }

    #[tokio::test]
    async fn test_generate_uses_built_in_questions_when_missing() {
        let dir = tempdir().unwrap();
        let store = FsDocumentStore::new(dir.path());
        let flow = DiaryFlow::new(settings("1-1;2-1;3-1;4-1"));

        let generated = flow.generate(&store, &mut flow.rng()).await.unwrap();

        assert_eq!(generated.source, SourceKind::BuiltIn);
        assert_eq!(generated.section_count, 4);
        assert_eq!(generated.question_count(), 4);
    }
}
