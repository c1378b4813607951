//! 基础设施层（Infrastructure）
//!
//! 只暴露能力接口，不处理业务流程：
//! - `TextSource` - 字节 → 原始文本
//! - `Embedder` - 文本 → 定长向量

pub mod embedder;
pub mod text_source;

pub use embedder::Embedder;
pub use text_source::{PlainTextSource, TextSource};
