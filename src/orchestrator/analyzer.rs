//! 分析器 - 编排层
//!
//! ## 职责
//!
//! 本模块实现核心对外接口 `process_documents`：
//!
//! 1. **逐份提取**：顺序处理每份文档（失败即整批终止，标明文件）
//! 2. **硬性屏障**：分组必须看到所有文档的全部题目，
//!    所以提取全部完成之前绝不开始分组
//! 3. **一次分组**：对合并后的题目集合做一次语义分组
//!
//! 单次请求内部同步串行，无重试；多个独立请求可并发运行，
//! 前提是各自持有自己的向量化能力（本类型即如此）。

use crate::error::{AppError, AppResult};
use crate::infrastructure::{Embedder, TextSource};
use crate::models::{DocumentInput, Group};
use crate::services::GroupingService;
use crate::workflow::{PaperCtx, PaperFlow};
use tracing::info;

/// 端到端分析器
///
/// 文本提取能力与向量化能力均为显式注入，测试可替换为假实现。
pub struct Analyzer<S: TextSource, E: Embedder> {
    paper_flow: PaperFlow<S>,
    grouping_service: GroupingService,
    embedder: E,
}

impl<S: TextSource, E: Embedder> Analyzer<S, E> {
    /// 创建新的分析器
    pub fn new(text_source: S, embedder: E) -> Self {
        Self {
            paper_flow: PaperFlow::new(text_source),
            grouping_service: GroupingService::new(),
            embedder,
        }
    }

    /// 端到端处理一批文档，返回按频率排序的题目分组
    ///
    /// # 参数
    /// - `documents`: 按上传顺序排列的文档列表
    ///
    /// # 返回
    /// 返回已赋优先级的分组列表。所有文档都未提取到题目时返回
    /// `AppError::EmptyResult`（特殊结果，调用方据此提示"未找到题目"）
    pub async fn process_documents(&self, documents: Vec<DocumentInput>) -> AppResult<Vec<Group>> {
        let mut all_units = Vec::new();

        // 第一步：逐份提取（全部完成之前不开始分组）
        for (idx, document) in documents.iter().enumerate() {
            let ctx = PaperCtx::new(document.name.clone(), idx + 1);
            info!("{} 开始处理", ctx);

            let units = self.paper_flow.run(&document.bytes, &ctx)?;
            all_units.extend(units);
        }

        info!("📊 全部文件共提取到 {} 道题目", all_units.len());

        if all_units.is_empty() {
            return Err(AppError::EmptyResult);
        }

        // 第二步：语义分组（一次性处理全部题目）
        info!("🔍 开始语义相似度分组...");
        let groups = self
            .grouping_service
            .group_questions(&self.embedder, all_units)
            .await?;

        info!("✓ 共生成 {} 个题目分组", groups.len());
        Ok(groups)
    }
}
