//! 文本清洗服务 - 业务能力层
//!
//! 从题目文本中去掉评分与元数据标记：布鲁姆认知层级/CO 标签、
//! 分值标注、裸认知关键词，然后规整空白字符。

use regex::Regex;
use std::sync::LazyLock;

/// 按顺序应用的删除规则
///
/// 顺序敏感：带括号/方括号的形式必须排在裸形式之前，
/// 否则裸规则会先掏空内容，留下 `[]` / `()` 残渣。
static REMOVE_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // 层级/CO 标签
        r"(?i)\(Level/CO\)",
        r"(?i)\(CO\d+\)",
        // 分值标注（带括号形式优先）
        r"(?i)\[Marks?\s*:?\s*\d+\]",
        r"(?i)\(\s*\d+\s*marks?\s*\)",
        // 带括号的认知关键词
        r"(?i)\(Remember\)",
        r"(?i)\(Understand\)",
        r"(?i)\(Apply\)",
        r"(?i)\(Analyze\)",
        r"(?i)\(Analysis\)",
        r"(?i)\(Evaluate\)",
        r"(?i)\(Create\)",
        // 裸分值标注
        r"(?i)Marks\s*:?\s*\d+",
        // 裸认知关键词（整词匹配，可带尾随数字）
        r"(?i)\bRemember\b\s*\d*",
        r"(?i)\bUnderstand\b\s*\d*",
        r"(?i)\bApply\b\s*\d*",
        r"(?i)\bAnalyze\b\s*\d*",
        r"(?i)\bAnalysis\b\s*\d*",
        r"(?i)\bEvaluate\b\s*\d*",
        r"(?i)\bCreate\b\s*\d*",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// 末尾孤立数字（通常是残留的分值）
static TRAILING_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+\d+\s*$").unwrap());

/// 清洗题目文本
///
/// 按固定顺序删除元数据标记，把连续空白压成单个空格并去掉首尾空白，
/// 最后去掉末尾残留的孤立数字。对清洗结果再次清洗不会产生变化。
///
/// # 参数
/// - `text`: 原始题目文本
///
/// # 返回
/// 返回清洗后的文本
pub fn clean(text: &str) -> String {
    let mut cleaned = text.to_string();

    for rule in REMOVE_RULES.iter() {
        cleaned = rule.replace_all(&cleaned, "").into_owned();
    }

    let cleaned = WHITESPACE_RE.replace_all(&cleaned, " ");
    let cleaned = cleaned.trim();

    TRAILING_NUMBER_RE.replace(cleaned, "").trim().to_string()
}
