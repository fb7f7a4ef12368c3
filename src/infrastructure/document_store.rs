//! 文档存储 - 基础设施层
//!
//! 持有笔记库根目录，只暴露"读 / 写 / 定位"能力，不关心题目逻辑

use crate::error::StoreError;
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// 笔记文档存储
///
/// 核心逻辑只通过这个接口与外部交互
pub trait DocumentStore {
    /// 按逻辑标识读取文档全文，找不到时返回 [`StoreError::NotFound`]
    fn read_text(
        &self,
        identifier: &str,
    ) -> impl Future<Output = Result<String, StoreError>> + Send;

    /// 精确读取指定笔记，不存在时返回 `None`
    fn load_note(
        &self,
        target: &str,
    ) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;

    /// 写入笔记（不存在则创建，存在则覆盖）
    fn write_text(
        &self,
        target: &str,
        content: &str,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// 将笔记呈现给用户
    fn focus(&self, target: &str) -> impl Future<Output = Result<(), StoreError>> + Send {
        async move {
            debug!("focus: {}", target);
            Ok(())
        }
    }
}

/// 基于文件系统目录的笔记库
#[derive(Debug, Clone)]
pub struct FsDocumentStore {
    root: PathBuf,
}

impl FsDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 将逻辑标识解析为实际文件
    ///
    /// 1. 相对于根目录的路径（缺少扩展名时补上 `.md`）
    /// 2. 文件名包含该标识的第一个 markdown 文件（按路径排序）
    async fn resolve(&self, identifier: &str) -> Result<Option<PathBuf>, StoreError> {
        let direct = self.root.join(identifier);
        if is_file(&direct).await {
            return Ok(Some(direct));
        }

        if direct.extension().is_none() {
            let with_ext = direct.with_extension("md");
            if is_file(&with_ext).await {
                return Ok(Some(with_ext));
            }
        }

        let files = match list_markdown_files(&self.root).await {
            Ok(files) => files,
            Err(StoreError::DirectoryNotFound { .. }) => return Ok(None),
            Err(e) => return Err(e),
        };

        let found = files.into_iter().find(|path| {
            path.file_name()
                .map(|name| name.to_string_lossy().contains(identifier))
                .unwrap_or(false)
        });

        Ok(found)
    }
}

impl DocumentStore for FsDocumentStore {
    async fn read_text(&self, identifier: &str) -> Result<String, StoreError> {
        let path = self
            .resolve(identifier)
            .await?
            .ok_or_else(|| StoreError::NotFound {
                identifier: identifier.to_string(),
            })?;

        debug!("读取文档: {}", path.display());

        fs::read_to_string(&path)
            .await
            .map_err(|e| StoreError::read_failed(path, e))
    }

    async fn load_note(&self, target: &str) -> Result<Option<String>, StoreError> {
        let path = self.root.join(target);
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::read_failed(path, e)),
        }
    }

    async fn write_text(&self, target: &str, content: &str) -> Result<(), StoreError> {
        let path = self.root.join(target);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::write_failed(parent, e))?;
        }

        fs::write(&path, content)
            .await
            .map_err(|e| StoreError::write_failed(path, e))
    }

    async fn focus(&self, target: &str) -> Result<(), StoreError> {
        let path = self.root.join(target);
        let shown = fs::canonicalize(&path).await.unwrap_or(path);
        info!("📝 笔记位置: {}", shown.display());
        Ok(())
    }
}

async fn is_file(path: &Path) -> bool {
    fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

/// 递归列出目录下所有 markdown 文件，跳过隐藏文件和目录，结果按路径排序
pub async fn list_markdown_files(dir: &Path) -> Result<Vec<PathBuf>, StoreError> {
    if !fs::try_exists(dir).await.unwrap_or(false) {
        return Err(StoreError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        let mut entries = fs::read_dir(&current)
            .await
            .map_err(|e| StoreError::read_failed(&current, e))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| StoreError::read_failed(&current, e))?
        {
            let path = entry.path();
            let hidden = path
                .file_name()
                .map(|n| n.to_string_lossy().starts_with('.'))
                .unwrap_or(false);
            if hidden {
                continue;
            }

            let file_type = entry
                .file_type()
                .await
                .map_err(|e| StoreError::read_failed(&path, e))?;
            if file_type.is_dir() {
                pending.push(path);
            } else if path.extension().map(|e| e == "md").unwrap_or(false) {
                files.push(path);
            }
        }
    }

    files.sort();
    Ok(files)
}
