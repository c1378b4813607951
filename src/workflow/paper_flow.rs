//! 试卷处理流程 - 流程层
//!
//! 核心职责：定义"一份试卷"的完整处理流程
//!
//! 流程顺序：
//! 1. 文本提取能力（TextSource）→ 原始文本
//! 2. 题目提取服务 → 干净的题目列表
//! 3. 打上来源标签 → Vec<QuestionUnit>

use crate::error::{AppError, AppResult};
use crate::infrastructure::TextSource;
use crate::models::QuestionUnit;
use crate::services::question_extractor;
use crate::utils::logging::truncate_text;
use crate::workflow::paper_ctx::PaperCtx;
use tracing::{debug, info, warn};

/// 试卷处理流程
///
/// - 编排单份试卷的提取流程
/// - 持有文本提取能力，不认识分组
pub struct PaperFlow<S: TextSource> {
    text_source: S,
}

impl<S: TextSource> PaperFlow<S> {
    /// 创建新的试卷处理流程
    pub fn new(text_source: S) -> Self {
        Self { text_source }
    }

    /// 处理一份试卷，返回带来源标签的题目单元
    ///
    /// # 参数
    /// - `document_bytes`: 文档原始字节
    /// - `ctx`: 试卷上下文
    ///
    /// # 返回
    /// 返回按文档顺序排列的题目单元；文本提取失败时整个请求终止，
    /// 错误中标明是哪份文件
    pub fn run(&self, document_bytes: &[u8], ctx: &PaperCtx) -> AppResult<Vec<QuestionUnit>> {
        let text = self
            .text_source
            .extract_text(document_bytes)
            .map_err(|e| AppError::text_extract_failed(ctx.paper_name.clone(), e))?;

        info!("{} 文本长度: {} 字符", ctx, text.chars().count());

        let questions = question_extractor::extract(&text);

        if questions.is_empty() {
            warn!("{} ⚠️ 未提取到任何题目", ctx);
        } else {
            info!("{} ✓ 提取到 {} 道题目", ctx, questions.len());
            debug!("{} 第一道题目: {}", ctx, truncate_text(&questions[0], 80));
        }

        Ok(questions
            .into_iter()
            .map(|text| QuestionUnit::new(text, ctx.paper_name.clone()))
            .collect())
    }
}
