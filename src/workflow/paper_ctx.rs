//! 试卷处理上下文
//!
//! 封装"我正在处理第几份、哪一份试卷"这一信息

use std::fmt::Display;

/// 试卷处理上下文
#[derive(Debug, Clone)]
pub struct PaperCtx {
    /// 试卷名称（文件名）
    pub paper_name: String,

    /// 试卷索引（从1开始，仅用于日志显示）
    pub paper_index: usize,
}

impl PaperCtx {
    /// 创建新的试卷上下文
    pub fn new(paper_name: String, paper_index: usize) -> Self {
        Self {
            paper_name,
            paper_index,
        }
    }
}

impl Display for PaperCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[试卷 {}] {}", self.paper_index, self.paper_name)
    }
}
