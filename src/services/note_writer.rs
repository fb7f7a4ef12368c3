//! 笔记写入服务 - 业务能力层
//!
//! 只负责"把结果写进笔记"能力，不关心流程

use crate::error::StoreError;
use crate::infrastructure::DocumentStore;
use tracing::debug;

/// 追加写入时与原内容之间的分隔
const BLOCK_SEPARATOR: &str = "\n\n";

/// 写入方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// 新建笔记（或覆盖空白笔记）
    Created,
    /// 追加到已有笔记末尾
    Appended,
}

/// 笔记写入服务
///
/// 目标笔记已存在时在末尾空一行后追加，否则新建
pub struct NoteWriter<'a, S> {
    store: &'a S,
}

impl<'a, S: DocumentStore> NoteWriter<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// 写入结果文本
    ///
    /// # 参数
    /// - `target`: 目标笔记路径（相对于笔记库根目录）
    /// - `content`: 要写入的内容
    pub async fn write(&self, target: &str, content: &str) -> Result<WriteMode, StoreError> {
        let existing = self.store.load_note(target).await?;

        let (mode, merged) = match existing {
            Some(old) if !old.trim().is_empty() => (WriteMode::Appended, merge(&old, content)),
            Some(_) | None => (WriteMode::Created, content.to_string()),
        };

        debug!(
            "写入笔记 {} ({:?}) | 新增内容长度: {}",
            target,
            mode,
            content.len()
        );

        self.store.write_text(target, &merged).await?;

        Ok(mode)
    }
}

/// 在原内容之后空一行追加新内容
fn merge(old: &str, new: &str) -> String {
    let mut merged = old.trim_end_matches(['\n', '\r']).to_string();
    merged.push_str(BLOCK_SEPARATOR);
    merged.push_str(new);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// 内存中的笔记库
    #[derive(Default)]
    struct MemoryStore {
        notes: Mutex<HashMap<String, String>>,
    }

    impl DocumentStore for MemoryStore {
        async fn read_text(&self, identifier: &str) -> Result<String, StoreError> {
            self.load_note(identifier)
                .await?
                .ok_or_else(|| StoreError::NotFound {
                    identifier: identifier.to_string(),
                })
        }

        async fn load_note(&self, target: &str) -> Result<Option<String>, StoreError> {
            Ok(self.notes.lock().unwrap().get(target).cloned())
        }

        async fn write_text(&self, target: &str, content: &str) -> Result<(), StoreError> {
            self.notes
                .lock()
                .unwrap()
                .insert(target.to_string(), content.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_merge_trims_trailing_newlines() {
        assert_eq!(merge("old\n\n\n", "new"), "old\n\nnew");
        assert_eq!(merge("old", "new"), "old\n\nnew");
        assert_eq!(merge("old\r\n", "new"), "old\n\nnew");
    }

    #[test]
    fn test_creates_missing_note() {
        let store = MemoryStore::default();
        let writer = NoteWriter::new(&store);

        let mode = tokio_test::block_on(writer.write("d.md", "Q1")).unwrap();

        assert_eq!(mode, WriteMode::Created);
        assert_eq!(store.notes.lock().unwrap()["d.md"], "Q1");
    }

    #[test]
    fn test_appends_to_existing_note() {
        let store = MemoryStore::default();
        store
            .notes
            .lock()
            .unwrap()
            .insert("d.md".to_string(), "Morning notes\n".to_string());
        let writer = NoteWriter::new(&store);

        let mode = tokio_test::block_on(writer.write("d.md", "Q1\nQ2")).unwrap();

        assert_eq!(mode, WriteMode::Appended);
        assert_eq!(
            store.notes.lock().unwrap()["d.md"],
            "Morning notes\n\nQ1\nQ2"
        );
    }

    #[test]
    fn test_blank_existing_note_is_replaced() {
        let store = MemoryStore::default();
        store
            .notes
            .lock()
            .unwrap()
            .insert("d.md".to_string(), "\n  \n".to_string());
        let writer = NoteWriter::new(&store);

        let mode = tokio_test::block_on(writer.write("d.md", "Q1")).unwrap();

        assert_eq!(mode, WriteMode::Created);
        assert_eq!(store.notes.lock().unwrap()["d.md"], "Q1");
    }

    #[test]
    fn test_append_twice_keeps_both_runs() {
        let store = MemoryStore::default();
        let writer = NoteWriter::new(&store);

        tokio_test::block_on(async {
            writer.write("d.md", "first").await.unwrap();
            writer.write("d.md", "second").await.unwrap();
        });

        assert_eq!(store.notes.lock().unwrap()["d.md"], "first\n\nsecond");
    }
}
