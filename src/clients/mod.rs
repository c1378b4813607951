//! 外部服务客户端
//!
//! 封装对外部协作方（模型服务）的调用

pub mod embedding_client;

pub use embedding_client::RemoteEmbedder;
