//! # Exam Paper Analyzer
//!
//! 一个用于分析历年试卷高频题目的 Rust 应用程序：
//! 提取每份试卷中的真实考题，按语义相似度聚类，
//! 并按出现频率给出复习优先级。
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 只暴露能力接口，不处理业务流程
//! - `TextSource` - 字节 → 原始文本（PDF 解析由外部协作方实现）
//! - `Embedder` - 文本 → 定长向量（模型服务由外部协作方实现）
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个服务一种能力
//! - `text_cleaner` - 清洗评分/元数据标记
//! - `noise_classifier` - 判别说明文字与真实考题
//! - `question_extractor` - 整卷文本 → 题目列表
//! - `grouping_service` - 语义聚类 + 频率排名 + 优先级
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一份试卷"的完整处理流程
//! - `PaperCtx` - 上下文封装（第几份、哪一份）
//! - `PaperFlow` - 流程编排（文本提取 → 切分 → 打来源标签）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/analyzer` - 端到端分析器，逐份提取后一次分组
//! - `orchestrator/batch_processor` - 二进制入口，扫描目录、写报告
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::RemoteEmbedder;
pub use config::Config;
pub use error::{AppError, AppResult, ExtractionError, GroupingError};
pub use infrastructure::{Embedder, PlainTextSource, TextSource};
pub use models::{AnalysisReport, DocumentInput, Group, Priority, QuestionUnit};
pub use orchestrator::{Analyzer, App};
pub use services::{GroupingService, SIMILARITY_THRESHOLD};
pub use workflow::{PaperCtx, PaperFlow};
