//! 题目文档读取服务 - 业务能力层
//!
//! 只负责"拿到题目文档全文"，找不到文档时退回内置题目

use crate::error::StoreError;
use crate::infrastructure::DocumentStore;
use crate::models::DEFAULT_QUESTIONS;
use tracing::{info, warn};

/// 题目来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// 笔记库中的文档
    Document,
    /// 内置默认题目
    BuiltIn,
}

/// 读取到的题目文档
#[derive(Debug, Clone)]
pub struct SourceText {
    pub kind: SourceKind,
    pub content: String,
}

/// 读取题目文档，文档不存在时使用内置题目
///
/// 其他读取错误（权限、编码等）照常返回
pub async fn read_or_default<S: DocumentStore>(
    store: &S,
    identifier: &str,
) -> Result<SourceText, StoreError> {
    match store.read_text(identifier).await {
        Ok(content) => {
            info!("✓ 已读取题目文档: {}", identifier);
            Ok(SourceText {
                kind: SourceKind::Document,
                content,
            })
        }
        Err(e) if e.is_not_found() => {
            warn!("⚠️ 未找到题目文档 {}，使用内置题目", identifier);
            Ok(SourceText {
                kind: SourceKind::BuiltIn,
                content: DEFAULT_QUESTIONS.to_string(),
            })
        }
        Err(e) => Err(e),
    }
}
