//! 业务能力层（Services）
//!
//! 描述"我能做什么"，每个服务只关心一种能力：
//! - `text_cleaner` - 清洗题目文本中的评分/元数据标记
//! - `noise_classifier` - 判别说明文字与真实考题
//! - `question_extractor` - 把整卷文本切分成题目列表
//! - `grouping_service` - 语义相似度聚类与优先级排名

pub mod grouping_service;
pub mod noise_classifier;
pub mod question_extractor;
pub mod text_cleaner;

pub use grouping_service::{cosine_similarity, GroupingService, SIMILARITY_THRESHOLD};
