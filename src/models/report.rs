use crate::models::question::Group;
use serde::Serialize;

/// 一次完整分析的对外输出
///
/// 对应 API 层返回给前端的 JSON 结构
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    /// 所有文件共提取到的题目总数
    pub total_questions_extracted: usize,
    /// 分组总数
    pub total_groups: usize,
    /// 参与分析的文件名列表
    pub papers_analyzed: Vec<String>,
    /// 按出现频率排序的题目分组
    pub ranked_questions: Vec<Group>,
}

impl AnalysisReport {
    /// 由分组结果构建报告
    ///
    /// 分组满足划分不变量，因此题目总数就是各分组数量之和。
    pub fn build(papers_analyzed: Vec<String>, ranked_questions: Vec<Group>) -> Self {
        let total_questions_extracted = ranked_questions.iter().map(|g| g.count).sum();
        Self {
            total_questions_extracted,
            total_groups: ranked_questions.len(),
            papers_analyzed,
            ranked_questions,
        }
    }
}
