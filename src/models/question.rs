use serde::{Deserialize, Serialize};

/// 一道已清洗、已过滤的候选题目，附带来源文件
///
/// 由提取器产出后不再修改；`source` 只是一个不透明的标签
/// （文件名或文档ID），不同题目之间允许重复。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuestionUnit {
    /// 题目文本（已通过清洗和噪音过滤）
    pub text: String,
    /// 来源文档标签
    pub source: String,
}

impl QuestionUnit {
    /// 创建新的题目单元
    pub fn new(text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
        }
    }
}

/// 分组优先级
///
/// 每次分析都基于当批最大分组的数量重新计算，
/// 是相对排名而不是绝对阈值。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "High"),
            Priority::Medium => write!(f, "Medium"),
            Priority::Low => write!(f, "Low"),
        }
    }
}

/// 语义等价题目的分组
///
/// `representative` 是该分组的种子题目文本（第一个遇到的成员，
/// 不一定是最"典型"的）。不变量：`count == variants.len()`，
/// 且每道题目恰好属于一个分组。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    /// 代表题目文本
    pub representative: String,
    /// 分组内所有题目变体（按加入顺序）
    pub variants: Vec<QuestionUnit>,
    /// 变体数量
    pub count: usize,
    /// 优先级（派生值，每次分析重新计算）
    pub priority: Priority,
}

impl Group {
    /// 以一道题目为种子创建新分组
    pub fn seeded(unit: QuestionUnit) -> Self {
        Self {
            representative: unit.text.clone(),
            variants: vec![unit],
            count: 1,
            priority: Priority::Low,
        }
    }

    /// 向分组追加一个变体
    pub fn push_variant(&mut self, unit: QuestionUnit) {
        self.variants.push(unit);
        self.count += 1;
    }
}

impl std::fmt::Display for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // 截断代表题目以便显示（最多80个字符）
        let preview = if self.representative.chars().count() > 80 {
            self.representative.chars().take(80).collect::<String>() + "..."
        } else {
            self.representative.clone()
        };
        write!(f, "[{}] x{} {}", self.priority, self.count, preview)
    }
}

/// 待分析的输入文档（原始字节 + 名称）
#[derive(Debug, Clone)]
pub struct DocumentInput {
    /// 文档名称（通常是文件名）
    pub name: String,
    /// 文档原始字节
    pub bytes: Vec<u8>,
}

impl DocumentInput {
    /// 创建新的输入文档
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}
