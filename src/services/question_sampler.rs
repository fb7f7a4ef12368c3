//! 随机抽题 - 业务能力层
//!
//! 对每个分区确定抽题数量（配置值，或随机兜底），然后不放回地逐个抽取。
//! 抽取顺序即输出顺序，不保留原文档中的顺序。

use crate::models::{CountConfig, Section};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

/// 单个分区的抽题结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampledBlock {
    /// 分区序号（从 1 开始）
    pub index: usize,
    /// 仅在需要显示标题时填充
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    pub questions: Vec<String>,
}

impl SampledBlock {
    /// 标题（如有）单独一行，题目逐行排列
    pub fn render(&self) -> String {
        self.header
            .iter()
            .chain(self.questions.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// 确定某个分区要抽取的题目数量
///
/// 配置了非零数量时直接使用；否则在 `[0, available)` 中随机取值。
/// 上界不包含 `available`，所以随机兜底永远不会选中整个分区。
pub fn resolve_target<R: Rng + ?Sized>(
    configured: Option<usize>,
    available: usize,
    rng: &mut R,
) -> usize {
    match configured {
        Some(count) if count != 0 => count,
        _ if available == 0 => 0,
        _ => rng.gen_range(0..available),
    }
}

/// 从题目列表中不放回地抽取 `target` 道题
///
/// `target` 不小于题目总数时原样返回全部题目
pub fn draw_questions<R: Rng + ?Sized>(
    questions: &[String],
    target: usize,
    rng: &mut R,
) -> Vec<String> {
    if target >= questions.len() {
        return questions.to_vec();
    }
    if target == 0 {
        return Vec::new();
    }

    let mut pool = questions.to_vec();
    let mut drawn = Vec::with_capacity(target);
    for _ in 0..target {
        let pick = rng.gen_range(0..pool.len());
        drawn.push(pool.swap_remove(pick));
    }
    drawn
}

/// 对所有分区抽题，返回结构化结果
///
/// 抽到 0 道题的分区不产生结果块（也不输出其标题）
pub fn sample_blocks<R: Rng + ?Sized>(
    sections: &[Section],
    counts: &CountConfig,
    show_headers: bool,
    rng: &mut R,
) -> Vec<SampledBlock> {
    let mut blocks = Vec::new();

    for (pos, section) in sections.iter().enumerate() {
        let index = pos + 1;
        let configured = counts.get(index);
        let target = resolve_target(configured, section.len(), rng);
        let questions = draw_questions(&section.questions, target, rng);

        debug!(
            "分区 {} {:?}: 配置 {:?}, 目标 {}, 共 {} 题, 抽中 {} 题",
            index,
            section.header,
            configured,
            target,
            section.len(),
            questions.len()
        );

        if questions.is_empty() {
            continue;
        }

        blocks.push(SampledBlock {
            index,
            header: if show_headers {
                section.header.clone()
            } else {
                None
            },
            questions,
        });
    }

    blocks
}

/// 将结果块拼接为最终文本，块与块之间空一行
pub fn render_blocks(blocks: &[SampledBlock]) -> String {
    blocks
        .iter()
        .map(SampledBlock::render)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// 抽题并生成输出文本
pub fn sample<R: Rng + ?Sized>(
    sections: &[Section],
    counts: &CountConfig,
    show_headers: bool,
    rng: &mut R,
) -> String {
    render_blocks(&sample_blocks(sections, counts, show_headers, rng))
}
