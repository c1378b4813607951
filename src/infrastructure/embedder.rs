//! 向量化能力 - 基础设施层
//!
//! 把题目文本映射为定长数值向量的能力接口。模型服务由外部协作方
//! 提供（见 `clients::RemoteEmbedder`）；作为显式注入的对象传给
//! 分组服务，而不是进程级全局状态，测试可以替换为确定性假实现。

use anyhow::Result;

/// 批量向量化能力
///
/// 约定：
/// - 输出顺序与输入一致，长度相同
/// - 同一文本的向量是确定的
/// - 所有向量维度一致
/// - 纯函数，不修改外部状态
#[allow(async_fn_in_trait)]
pub trait Embedder: Send + Sync {
    /// 批量将文本转换为向量
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}
