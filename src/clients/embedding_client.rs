/// 向量模型 API 客户端
///
/// 封装对 OpenAI 兼容 /embeddings 接口的调用逻辑
use crate::config::Config;
use crate::infrastructure::Embedder;
use anyhow::{Context, Result};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 向量化请求体
#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

/// 向量化响应体
#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    index: usize,
    embedding: Vec<f32>,
}

/// 远程向量化客户端
pub struct RemoteEmbedder {
    client: reqwest::Client,
    api_base_url: String,
    api_key: String,
    model_name: String,
    batch_size: usize,
}

impl RemoteEmbedder {
    /// 创建新的向量化客户端
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base_url: config.embedding_api_base_url.clone(),
            api_key: config.embedding_api_key.clone(),
            model_name: config.embedding_model_name.clone(),
            batch_size: config.embedding_batch_size.max(1),
        }
    }

    /// 调用一次 /embeddings 接口
    ///
    /// # 参数
    /// - `chunk`: 单批文本（不超过 batch_size 条）
    ///
    /// # 返回
    /// 返回与输入同序的向量列表
    async fn embed_chunk(&self, chunk: &[String]) -> Result<Vec<Vec<f32>>> {
        let url = format!(
            "{}/embeddings",
            self.api_base_url.trim_end_matches('/')
        );
        debug!("调用向量化接口，模型: {}，条数: {}", self.model_name, chunk.len());

        let request = EmbeddingRequest {
            model: &self.model_name,
            input: chunk,
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .with_context(|| format!("向量化请求失败 ({})", url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("向量化接口返回错误响应 ({}): {} {}", url, status, body);
        }

        let mut body: EmbeddingResponse = response
            .json()
            .await
            .context("向量化响应 JSON 解析失败")?;

        if body.data.len() != chunk.len() {
            anyhow::bail!(
                "向量化接口返回数量不匹配: 期望 {}, 实际 {}",
                chunk.len(),
                body.data.len()
            );
        }

        // 按 index 还原输入顺序
        body.data.sort_by_key(|d| d.index);
        Ok(body.data.into_iter().map(|d| d.embedding).collect())
    }
}

impl Embedder for RemoteEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        // 分批并发请求，try_join_all 保持批次顺序
        let chunks = texts.chunks(self.batch_size);
        let results = try_join_all(chunks.map(|chunk| self.embed_chunk(chunk))).await?;

        let mut embeddings = Vec::with_capacity(texts.len());
        for mut batch in results {
            embeddings.append(&mut batch);
        }
        Ok(embeddings)
    }
}
