//! 分区解析 - 业务能力层
//!
//! 逐行扫描文档：遇到标题行就开始一个新分区，直到下一个标题或文档结束。
//! 第一个标题之前的内容归入一个没有标题的分区；没有题目的分区被丢弃。

use crate::models::section::{is_header_line, Section, HEADER_MARKER};

/// 将文档拆分为分区列表
pub fn split(content: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current = Section::new(None, Vec::new());

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if is_header_line(line) {
            push_if_not_empty(&mut sections, current);
            current = Section::new(Some(header_text(trimmed)), Vec::new());
        } else {
            current.questions.push(trimmed.to_string());
        }
    }
    push_if_not_empty(&mut sections, current);

    sections
}

/// 标题为空时（`"# "`）保留完整前缀，否则去掉首尾空白后仍是标题行
fn header_text(trimmed: &str) -> String {
    if is_header_line(trimmed) {
        trimmed.to_string()
    } else {
        HEADER_MARKER.to_string()
    }
}

fn push_if_not_empty(sections: &mut Vec<Section>, section: Section) {
    if !section.is_empty() {
        sections.push(section);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_split_two_sections() {
        let sections = split("# A\nQ1\nQ2\nQ3\n# B\nQ4\n");

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].header.as_deref(), Some("# A"));
        assert_eq!(sections[0].questions, owned(&["Q1", "Q2", "Q3"]));
        assert_eq!(sections[1].header.as_deref(), Some("# B"));
        assert_eq!(sections[1].questions, owned(&["Q4"]));
    }

    #[test]
    fn test_split_empty_document() {
        assert!(split("").is_empty());
        assert!(split("\n\n   \n").is_empty());
    }

    #[test]
    fn test_header_without_body_is_dropped() {
        let sections = split("# Empty\n\n   \n# Full\nQ1\n# Trailing\n");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].header.as_deref(), Some("# Full"));
    }

    #[test]
    fn test_blank_lines_are_skipped_and_questions_trimmed() {
        let sections = split("# A\r\n\r\n  Q1  \r\n\t\r\nQ2\r\n");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].questions, owned(&["Q1", "Q2"]));
    }

    #[test]
    fn test_leading_block_without_header_is_kept() {
        let sections = split("Intro question?\n# A\nQ1\n");

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].header, None);
        assert_eq!(sections[0].questions, owned(&["Intro question?"]));
        assert_eq!(sections[1].header.as_deref(), Some("# A"));
    }

    #[test]
    fn test_document_without_headers() {
        let sections = split("Q1\nQ2\n");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].header, None);
        assert_eq!(sections[0].len(), 2);
    }

    #[test]
    fn test_subheadings_are_question_lines() {
        let sections = split("# A\n## not a section\nQ1\n");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].questions, owned(&["## not a section", "Q1"]));
    }

    #[test]
    fn test_no_section_has_an_empty_body() {
        let docs = [
            "",
            "# A",
            "# A\n# B\n# C",
            "x\n# A\n\n# B\ny",
            "   # A\n  \n# B\n\tq\n",
        ];
        for doc in docs {
            assert!(split(doc).iter().all(|s| !s.is_empty()), "doc: {:?}", doc);
        }
    }

    #[test]
    fn test_empty_title_header_keeps_marker() {
        let sections = split("# \nQ1\nQ2\n");

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].header.as_deref(), Some("# "));
        assert_eq!(sections[0].questions, owned(&["Q1", "Q2"]));

        let rendered = sections[0].lines().collect::<Vec<_>>().join("\n");
        assert_eq!(split(&rendered), sections);
    }

    #[test]
    fn test_split_is_idempotent_on_a_single_section() {
        let sections = split("# A\nQ1\nQ2\n# B\nQ3\n# \nQ4\nQ5\n");
        assert_eq!(sections.len(), 3);

        for section in &sections {
            let rendered = section.lines().collect::<Vec<_>>().join("\n");
            assert_eq!(split(&rendered), vec![section.clone()]);
        }
    }
}
