//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `analyzer` - 端到端分析器
//! - 实现核心对外接口 `process_documents`
//! - 逐份提取（Vec<DocumentInput> → Vec<QuestionUnit>）
//! - 守住"提取完成后才分组"的硬性屏障
//! - 调用分组服务并返回排名结果
//!
//! ### `batch_processor` - 批量试卷处理器
//! - 管理应用生命周期（初始化、运行）
//! - 扫描试卷目录并加载文件
//! - 写出 JSON 分析报告
//! - 输出全局统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (二进制入口, 处理文件 IO)
//!     ↓
//! analyzer (处理 Vec<DocumentInput>)
//!     ↓
//! workflow::PaperFlow (处理单份试卷)
//!     ↓
//! services (能力层：clean / noise / extract / group)
//!     ↓
//! infrastructure (基础设施：TextSource / Embedder)
//! ```

pub mod analyzer;
pub mod batch_processor;

// 重新导出主要类型
pub use analyzer::Analyzer;
pub use batch_processor::App;
