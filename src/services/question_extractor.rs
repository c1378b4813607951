//! 题目提取服务 - 业务能力层
//!
//! 把含有页眉、考试说明等杂质的整卷文本切分成一条条干净的题目。
//!
//! 流程：
//! 1. 定位正文起点（`Q.1` / `Question 1`），丢弃之前的说明部分
//! 2. 规整空行
//! 3. 按子题编号（`A)`、`B)`…）切分
//! 4. 子题切分无结果时回退到主题编号（`Q.1`、`Q.2`…）切分
//! 5. 逐条清洗并过滤长度不足或属于噪音的候选

use crate::services::{noise_classifier, text_cleaner};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// 正文起点标记，按优先级依次尝试
static START_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bQ\.?\s*1[\.\):\s]", // Q.1 / Q1. / Q1:
        r"(?i)\bQuestion\s+1\b",    // Question 1
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static MULTI_NEWLINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

/// 行首子题编号：`A) `、`b) `…
static SUB_QUESTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[A-Za-z]\)\s+").unwrap());

/// 行首主题编号：`Q.1 `、`Q2)`、`Q 3:`…
static MAIN_QUESTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*Q\.?\s*\d+[\.\):\s]+").unwrap());

/// 首行短于该字符数时拼接第二行（换行折断的题干恢复）
const SHORT_LEAD_LEN: usize = 40;

/// 清洗后短于等于该字符数的候选视为无效
const MIN_QUESTION_LEN: usize = 25;

/// 从整卷文本中提取题目列表
///
/// # 参数
/// - `document_text`: 文档原始文本
///
/// # 返回
/// 返回按文档顺序排列的干净题目文本；两种切分都无结果时返回空列表
/// （是否视为处理失败由调用方决定）
pub fn extract(document_text: &str) -> Vec<String> {
    let content = locate_question_start(document_text);

    // 规整空行
    let normalized = MULTI_NEWLINE_RE.replace_all(content, "\n");
    let normalized = normalized.trim();

    let mut questions = extract_sub_questions(normalized);

    // 没有子题编号时回退到主题编号切分
    if questions.is_empty() {
        debug!("未找到子题编号，回退到主题编号切分");
        questions = extract_main_questions(normalized);
    }

    questions
}

/// 定位正文起点，丢弃页眉/说明部分
///
/// 两个标记都找不到时保留全文
fn locate_question_start(text: &str) -> &str {
    for pattern in START_PATTERNS.iter() {
        if let Some(m) = pattern.find(text) {
            if m.start() > 0 {
                debug!("在位置 {} 找到正文起点，丢弃之前的说明", m.start());
            }
            return &text[m.start()..];
        }
    }
    text
}

/// 按子题编号（`A)`、`B)`…）切分并提取候选题目
fn extract_sub_questions(text: &str) -> Vec<String> {
    let tags: Vec<_> = SUB_QUESTION_RE.find_iter(text).collect();

    let mut questions = Vec::new();
    for (idx, tag) in tags.iter().enumerate() {
        let block_end = tags.get(idx + 1).map(|next| next.start()).unwrap_or(text.len());
        let block = text[tag.end()..block_end].trim();

        if let Some(question) = candidate_from_block(block) {
            questions.push(question);
        }
    }
    questions
}

/// 回退切分：按主题编号（`Q.1`、`Q.2`…）切分并提取候选题目
fn extract_main_questions(text: &str) -> Vec<String> {
    let tags: Vec<_> = MAIN_QUESTION_RE.find_iter(text).collect();

    let mut questions = Vec::new();
    for (idx, tag) in tags.iter().enumerate() {
        let block_end = tags.get(idx + 1).map(|next| next.start()).unwrap_or(text.len());
        let block = text[tag.end()..block_end].trim();

        let mut lines = block.lines().map(str::trim);
        let first = lines.next().unwrap_or("");

        // 首行本身是"任选几题"类指令时改用第二行
        let lower = first.to_lowercase();
        let candidate = if lower.contains("solve any") || lower.contains("attempt any") {
            lines.next().unwrap_or(first)
        } else {
            first
        };

        if let Some(question) = filter_candidate(candidate.to_string()) {
            questions.push(question);
        }
    }
    questions
}

/// 从一个子题内容块中取出候选题目
///
/// 取首行；首行过短且存在第二行时拼接第二行（恢复折行的题干）
fn candidate_from_block(block: &str) -> Option<String> {
    let mut lines = block.lines().map(str::trim);
    let first = lines.next().unwrap_or("");

    let candidate = if first.chars().count() < SHORT_LEAD_LEN {
        match lines.next() {
            Some(second) => format!("{} {}", first, second),
            None => first.to_string(),
        }
    } else {
        first.to_string()
    };

    filter_candidate(candidate)
}

/// 清洗候选并应用长度/噪音过滤
fn filter_candidate(candidate: String) -> Option<String> {
    let cleaned = text_cleaner::clean(&candidate);
    if cleaned.chars().count() > MIN_QUESTION_LEN && !noise_classifier::is_noise(&cleaned) {
        Some(cleaned)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_is_trimmed_before_q1() {
        let text = "University of Somewhere\nInstructions to candidates\nQ.1 Solve the following\nA) Explain the OSI reference model with all seven layers (5 marks)\nB) Describe the TCP three way handshake with a neat diagram (5 marks)";
        let questions = extract(text);
        assert_eq!(
            questions,
            vec![
                "Explain the OSI reference model with all seven layers",
                "Describe the TCP three way handshake with a neat diagram",
            ]
        );
    }

    #[test]
    fn test_no_start_marker_keeps_full_text() {
        // 没有 Q.1 / Question 1 标记时全文参与切分
        let text = "A) Explain the OSI reference model with all seven layers\nB) Describe the TCP three way handshake with a neat diagram";
        let questions = extract(text);
        assert_eq!(questions.len(), 2);
        assert_eq!(
            questions[0],
            "Explain the OSI reference model with all seven layers"
        );
    }

    #[test]
    fn test_question_start_uses_question_word_marker() {
        let text = "Read all instructions first.\nQuestion 1\nA) Explain the difference between a hub and a switch in networking";
        let questions = extract(text);
        assert_eq!(
            questions,
            vec!["Explain the difference between a hub and a switch in networking"]
        );
    }

    #[test]
    fn test_short_first_line_joins_second_line() {
        let text = "Q.1 Answer the following\nA) Define\nthe complete OSI reference model with its seven layers (5 marks)";
        let questions = extract(text);
        assert_eq!(
            questions,
            vec!["Define the complete OSI reference model with its seven layers"]
        );
    }

    #[test]
    fn test_noise_blocks_are_filtered() {
        let text = "Q.1 Attempt the following\nA) All questions are compulsory and carry equal marks everywhere\nB) Explain the OSI reference model with all seven layers";
        let questions = extract(text);
        assert_eq!(
            questions,
            vec!["Explain the OSI reference model with all seven layers"]
        );
    }

    #[test]
    fn test_short_candidates_are_filtered() {
        let text = "Q.1 Solve\nA) Define TCP (2 marks)\nB) Explain the OSI reference model with all seven layers";
        let questions = extract(text);
        assert_eq!(
            questions,
            vec!["Explain the OSI reference model with all seven layers"]
        );
    }

    #[test]
    fn test_fallback_to_main_question_numbers() {
        let text = "Q1) Explain the OSI reference model and the function of each layer (5 marks)\nQ2) Define the TCP IP protocol suite and its four layers (5 marks)";
        let questions = extract(text);
        assert_eq!(
            questions,
            vec![
                "Explain the OSI reference model and the function of each layer",
                "Define the TCP IP protocol suite and its four layers",
            ]
        );
    }

    #[test]
    fn test_fallback_instruction_line_uses_second_line() {
        let text = "Q.1 Solve any two of the following questions\nExplain the OSI reference model and the function of each layer\nQ.2 Define the TCP IP protocol suite and its four layers completely";
        let questions = extract(text);
        assert_eq!(
            questions,
            vec![
                "Explain the OSI reference model and the function of each layer",
                "Define the TCP IP protocol suite and its four layers completely",
            ]
        );
    }

    #[test]
    fn test_extraction_preserves_document_order() {
        let text = "Q.1 Solve\nA) Describe the TCP three way handshake with a neat diagram\nB) Explain the OSI reference model with all seven layers";
        let questions = extract(text);
        assert_eq!(questions.len(), 2);
        assert!(questions[0].starts_with("Describe the TCP"));
        assert!(questions[1].starts_with("Explain the OSI"));
    }

    #[test]
    fn test_empty_document_yields_empty_list() {
        assert!(extract("").is_empty());
        assert!(extract("Max Marks: 80\nDuration: 3 Hours").is_empty());
    }

    #[test]
    fn test_blank_lines_are_normalized() {
        let text = "Q.1 Solve the following\n\n\nA) Explain the OSI reference model with all seven layers\n\n\nB) Describe the TCP three way handshake with a neat diagram";
        let questions = extract(text);
        assert_eq!(questions.len(), 2);
    }
}
