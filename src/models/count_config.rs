//! 每个分区抽题数量的配置
//!
//! 模板格式：`分区序号-数量`，多项之间以 `;` 分隔，例如 `1-3;2-2`。
//! 分区序号从 1 开始，按过滤掉空分区后的顺序计数。

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;

static ENTRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*-\s*(\d+)\s*$").expect("合法的正则表达式"));

/// 分区序号 → 抽题数量
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountConfig {
    counts: BTreeMap<usize, usize>,
}

impl CountConfig {
    /// 解析数量模板
    ///
    /// 无法解析的条目直接忽略，同一序号出现多次时以最后一次为准
    pub fn parse(template: &str) -> Self {
        let mut counts = BTreeMap::new();

        for entry in template.split(';').filter(|e| !e.trim().is_empty()) {
            match parse_entry(entry) {
                Some((index, count)) => {
                    counts.insert(index, count);
                }
                None => debug!("忽略无法解析的数量配置: {:?}", entry),
            }
        }

        Self { counts }
    }

    /// 获取指定分区（从 1 开始）配置的数量
    pub fn get(&self, index: usize) -> Option<usize> {
        self.counts.get(&index).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(k, v)| (*k, *v))
    }
}

fn parse_entry(entry: &str) -> Option<(usize, usize)> {
    let caps = ENTRY_RE.captures(entry)?;
    let index = caps[1].parse().ok()?;
    let count = caps[2].parse().ok()?;
    Some((index, count))
}
