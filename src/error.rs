use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 题目提取错误
    Extraction(ExtractionError),
    /// 语义分组错误
    Grouping(GroupingError),
    /// 所有文件都未能提取到题目（区别于崩溃的特殊结果）
    EmptyResult,
    /// 文件操作错误
    File(FileError),
    /// 配置错误
    Config(ConfigError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Extraction(e) => write!(f, "提取错误: {}", e),
            AppError::Grouping(e) => write!(f, "分组错误: {}", e),
            AppError::EmptyResult => write!(f, "未能从任何文件中提取到题目"),
            AppError::File(e) => write!(f, "文件错误: {}", e),
            AppError::Config(e) => write!(f, "配置错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Extraction(e) => Some(e),
            AppError::Grouping(e) => Some(e),
            AppError::File(e) => Some(e),
            AppError::Config(e) => Some(e),
            AppError::EmptyResult | AppError::Other(_) => None,
        }
    }
}

/// 题目提取相关错误
#[derive(Debug)]
pub enum ExtractionError {
    /// 文档文本提取失败
    TextExtractFailed {
        document: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionError::TextExtractFailed { document, source } => {
                write!(f, "文件 {} 文本提取失败: {}", document, source)
            }
        }
    }
}

impl std::error::Error for ExtractionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractionError::TextExtractFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
        }
    }
}

/// 语义分组相关错误
#[derive(Debug)]
pub enum GroupingError {
    /// 向量计算失败（整批终止，不返回部分结果）
    EmbeddingFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 向量数量与题目数量不一致
    EmbeddingCountMismatch { expected: usize, actual: usize },
    /// 向量维度不一致
    DimensionMismatch { expected: usize, actual: usize },
}

impl fmt::Display for GroupingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupingError::EmbeddingFailed { source } => {
                write!(f, "向量计算失败: {}", source)
            }
            GroupingError::EmbeddingCountMismatch { expected, actual } => {
                write!(f, "向量数量不匹配: 期望 {}, 实际 {}", expected, actual)
            }
            GroupingError::DimensionMismatch { expected, actual } => {
                write!(f, "向量维度不一致: 期望 {}, 实际 {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for GroupingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GroupingError::EmbeddingFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 文件操作错误
#[derive(Debug)]
pub enum FileError {
    /// 读取文件失败
    ReadFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 写入文件失败
    WriteFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// TOML 解析失败
    TomlParseFailed {
        path: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// 目录不存在
    DirectoryNotFound { path: String },
}

impl fmt::Display for FileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileError::ReadFailed { path, source } => {
                write!(f, "读取文件失败 ({}): {}", path, source)
            }
            FileError::WriteFailed { path, source } => {
                write!(f, "写入文件失败 ({}): {}", path, source)
            }
            FileError::TomlParseFailed { path, source } => {
                write!(f, "TOML解析失败 ({}): {}", path, source)
            }
            FileError::DirectoryNotFound { path } => write!(f, "目录不存在: {}", path),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::ReadFailed { source, .. }
            | FileError::WriteFailed { source, .. }
            | FileError::TomlParseFailed { source, .. } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

/// 配置错误
#[derive(Debug)]
pub enum ConfigError {
    /// 环境变量解析失败
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EnvVarParseFailed {
                var_name,
                value,
                expected_type,
            } => {
                write!(
                    f,
                    "环境变量 {} 解析失败: 值 '{}' 无法转换为 {}",
                    var_name, value, expected_type
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: String::new(),
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Other(format!("JSON序列化失败: {}", err))
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文档文本提取失败错误
    pub fn text_extract_failed(
        document: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        AppError::Extraction(ExtractionError::TextExtractFailed {
            document: document.into(),
            source: source.into(),
        })
    }

    /// 创建向量计算失败错误
    pub fn embedding_failed(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        AppError::Grouping(GroupingError::EmbeddingFailed {
            source: source.into(),
        })
    }

    /// 创建文件读取错误
    pub fn file_read_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(
        path: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source: Box::new(source),
        })
    }

    /// 是否为"未提取到题目"的特殊结果
    pub fn is_empty_result(&self) -> bool {
        matches!(self, AppError::EmptyResult)
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
