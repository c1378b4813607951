//! 语义分组服务 - 业务能力层
//!
//! 把来自不同试卷、措辞不同但语义相同的题目聚成分组，
//! 按出现频率排序并赋予优先级。
//!
//! 聚类是单遍贪心算法：按输入顺序取第一个未访问的题目作为种子，
//! 向后扫描所有未访问题目，余弦相似度达到阈值即并入当前分组。
//! 该算法依赖输入顺序且不具传递性（A~B、B~C 不保证 A、C 同组），
//! 这是既定行为，不要"修正"成连通分量聚类。

use crate::error::{AppError, AppResult, GroupingError};
use crate::infrastructure::Embedder;
use crate::models::{Group, Priority, QuestionUnit};
use tracing::{debug, info};

/// 判定两道题目语义等价的余弦相似度阈值（全局固定）
pub const SIMILARITY_THRESHOLD: f32 = 0.75;

/// 优先级比例阈值：count / max_count 达到即为 High
const HIGH_RATIO: f64 = 0.6;
/// 优先级比例阈值：count / max_count 达到即为 Medium
const MEDIUM_RATIO: f64 = 0.3;

/// 语义分组服务
pub struct GroupingService {
    threshold: f32,
}

impl Default for GroupingService {
    fn default() -> Self {
        Self::new()
    }
}

impl GroupingService {
    /// 创建使用固定阈值的分组服务
    pub fn new() -> Self {
        Self {
            threshold: SIMILARITY_THRESHOLD,
        }
    }

    /// 对题目列表做语义分组
    ///
    /// 一次性批量计算全部向量（效率考虑，逐条计算必须得到相同分组），
    /// 向量计算失败整批终止，不返回部分结果。
    ///
    /// # 参数
    /// - `embedder`: 注入的向量化能力
    /// - `units`: 按提取顺序排列的题目单元
    ///
    /// # 返回
    /// 返回按频率降序、已赋优先级的分组列表；输入为空时返回空列表
    pub async fn group_questions<E: Embedder>(
        &self,
        embedder: &E,
        units: Vec<QuestionUnit>,
    ) -> AppResult<Vec<Group>> {
        if units.is_empty() {
            return Ok(Vec::new());
        }

        let texts: Vec<String> = units.iter().map(|u| u.text.clone()).collect();
        let embeddings = embedder
            .embed(&texts)
            .await
            .map_err(|e| AppError::embedding_failed(e))?;

        validate_embeddings(units.len(), &embeddings)?;

        let groups = self.cluster(units, &embeddings);
        info!("✓ 聚类完成，共 {} 个分组", groups.len());

        Ok(groups)
    }

    /// 单遍贪心聚类（每次调用独立的 visited 标记）
    fn cluster(&self, units: Vec<QuestionUnit>, embeddings: &[Vec<f32>]) -> Vec<Group> {
        let mut visited = vec![false; units.len()];
        let mut groups: Vec<Group> = Vec::new();

        for i in 0..units.len() {
            if visited[i] {
                continue;
            }
            visited[i] = true;

            // 以第 i 道题目为种子开新分组
            let mut group = Group::seeded(units[i].clone());

            // 向后扫描所有未访问的题目
            for j in (i + 1)..units.len() {
                if visited[j] {
                    continue;
                }
                let similarity = cosine_similarity(&embeddings[i], &embeddings[j]);
                if similarity >= self.threshold {
                    debug!(
                        "题目 {} 与种子 {} 相似度 {:.3}，并入当前分组",
                        j, i, similarity
                    );
                    group.push_variant(units[j].clone());
                    visited[j] = true;
                }
            }

            groups.push(group);
        }

        rank_groups(groups)
    }
}

/// 按频率降序排序并赋予优先级
///
/// 稳定排序，数量相同的分组保持创建顺序。优先级以当批最大分组
/// 数量为基准：ratio >= 0.6 为 High，ratio >= 0.3 为 Medium，
/// 否则为 Low。单分组批次恒为 High（ratio = 1.0）。
pub fn rank_groups(mut groups: Vec<Group>) -> Vec<Group> {
    groups.sort_by(|a, b| b.count.cmp(&a.count));

    let max_count = groups.first().map(|g| g.count).unwrap_or(1) as f64;
    for group in groups.iter_mut() {
        let ratio = group.count as f64 / max_count;
        group.priority = if ratio >= HIGH_RATIO {
            Priority::High
        } else if ratio >= MEDIUM_RATIO {
            Priority::Medium
        } else {
            Priority::Low
        };
    }

    groups
}

/// 余弦相似度
///
/// 任一向量为零向量时返回 0.0
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// 校验向量批次：数量与题目一致，维度统一且非零
fn validate_embeddings(expected: usize, embeddings: &[Vec<f32>]) -> AppResult<()> {
    if embeddings.len() != expected {
        return Err(AppError::Grouping(GroupingError::EmbeddingCountMismatch {
            expected,
            actual: embeddings.len(),
        }));
    }

    let dim = embeddings[0].len();
    if dim == 0 {
        return Err(AppError::Grouping(GroupingError::DimensionMismatch {
            expected: 1,
            actual: 0,
        }));
    }
    for vector in embeddings.iter() {
        if vector.len() != dim {
            return Err(AppError::Grouping(GroupingError::DimensionMismatch {
                expected: dim,
                actual: vector.len(),
            }));
        }
    }

    Ok(())
}
