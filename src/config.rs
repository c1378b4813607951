use crate::error::{AppError, AppResult, FileError};
use serde::Deserialize;
use std::fs;
use tracing::info;

/// 配置文件路径
const CONFIG_FILE: &str = "analyzer.toml";

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 试卷文本文件存放目录
    pub papers_folder: String,
    /// 分析报告输出文件
    pub output_report_file: String,
    /// 输出日志文件
    pub output_log_file: String,
    /// 是否显示详细日志（逐条列出分组变体）
    pub verbose_logging: bool,
    // --- 向量模型 API 配置 ---
    pub embedding_api_key: String,
    pub embedding_api_base_url: String,
    pub embedding_model_name: String,
    /// 单次向量化请求的最大条数
    pub embedding_batch_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            papers_folder: "papers".to_string(),
            output_report_file: "analysis_report.json".to_string(),
            output_log_file: "output.txt".to_string(),
            verbose_logging: false,
            embedding_api_key: String::new(),
            embedding_api_base_url: "http://localhost:8000/v1".to_string(),
            embedding_model_name: "all-MiniLM-L6-v2".to_string(),
            embedding_batch_size: 64,
        }
    }
}

impl Config {
    /// 加载配置：优先 analyzer.toml，否则读取环境变量
    pub fn load() -> Self {
        match Self::from_file(CONFIG_FILE) {
            Ok(config) => {
                info!("✓ 已加载配置文件: {}", CONFIG_FILE);
                config
            }
            Err(_) => Self::from_env(),
        }
    }

    /// 从 TOML 配置文件加载
    pub fn from_file(path: &str) -> AppResult<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| AppError::file_read_failed(path, e))?;
        let config = toml::from_str(&content).map_err(|e| {
            AppError::File(FileError::TomlParseFailed {
                path: path.to_string(),
                source: Box::new(e),
            })
        })?;
        Ok(config)
    }

    /// 从环境变量加载（缺失项用默认值）
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            papers_folder: std::env::var("PAPERS_FOLDER").unwrap_or(default.papers_folder),
            output_report_file: std::env::var("OUTPUT_REPORT_FILE")
                .unwrap_or(default.output_report_file),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
            embedding_api_key: std::env::var("EMBEDDING_API_KEY")
                .unwrap_or(default.embedding_api_key),
            embedding_api_base_url: std::env::var("EMBEDDING_API_BASE_URL")
                .unwrap_or(default.embedding_api_base_url),
            embedding_model_name: std::env::var("EMBEDDING_MODEL_NAME")
                .unwrap_or(default.embedding_model_name),
            embedding_batch_size: std::env::var("EMBEDDING_BATCH_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.embedding_batch_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.papers_folder, "papers");
        assert_eq!(config.embedding_model_name, "all-MiniLM-L6-v2");
        assert_eq!(config.embedding_batch_size, 64);
        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_from_toml_with_partial_fields() {
        let config: Config =
            toml::from_str("papers_folder = \"uploads\"\nverbose_logging = true").unwrap();
        assert_eq!(config.papers_folder, "uploads");
        assert!(config.verbose_logging);
        // 未提供的字段使用默认值
        assert_eq!(config.embedding_model_name, "all-MiniLM-L6-v2");
    }
}
