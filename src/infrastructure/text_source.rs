//! 原始文本提取能力 - 基础设施层
//!
//! 把文档字节流变成原始文本的能力接口。PDF 解析由外部协作方提供，
//! 核心只消费这个接口；`PlainTextSource` 是二进制程序和测试使用的
//! 纯文本实现。

use anyhow::{Context, Result};

/// 原始文本提取能力
///
/// 职责：
/// - 只负责"字节 → 文本"
/// - 不认识 Question / Paper
/// - 失败由调用方按文档归因
pub trait TextSource: Send + Sync {
    /// 从文档字节流提取原始文本
    fn extract_text(&self, document_bytes: &[u8]) -> Result<String>;
}

/// 纯文本实现：文档本身就是 UTF-8 文本
pub struct PlainTextSource;

impl TextSource for PlainTextSource {
    fn extract_text(&self, document_bytes: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(document_bytes).context("文件内容不是有效的 UTF-8 文本")?;
        Ok(text.to_string())
    }
}
