use serde::Serialize;

/// 标题行前缀
pub const HEADER_MARKER: &str = "# ";

/// 题目分区：一行标题 + 若干题目行
///
/// `header` 只有在文档开头、第一个标题之前就出现题目时才为 `None`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub header: Option<String>,
    pub questions: Vec<String>,
}

impl Section {
    pub fn new(header: Option<String>, questions: Vec<String>) -> Self {
        Self { header, questions }
    }

    /// 题目数量（不含标题）
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// 标题在前、题目在后的行序列
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.header
            .as_deref()
            .into_iter()
            .chain(self.questions.iter().map(String::as_str))
    }
}

/// 判断一行是否为分区标题
pub fn is_header_line(line: &str) -> bool {
    line.trim_start().starts_with(HEADER_MARKER)
}
