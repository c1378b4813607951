//! 数据模型
//!
//! 题目单元、分组、优先级与分析报告

pub mod question;
pub mod report;

pub use question::{DocumentInput, Group, Priority, QuestionUnit};
pub use report::AnalysisReport;
