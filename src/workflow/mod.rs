//! 流程层（Workflow）
//!
//! 定义"一份试卷"的完整处理流程：
//! - `PaperCtx` - 上下文封装（第几份、哪一份）
//! - `PaperFlow` - 流程编排（文本提取 → 题目切分 → 打来源标签）

pub mod paper_ctx;
pub mod paper_flow;

pub use paper_ctx::PaperCtx;
pub use paper_flow::PaperFlow;
