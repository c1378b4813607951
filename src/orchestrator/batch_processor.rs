//! 批量试卷处理器 - 编排层
//!
//! ## 职责
//!
//! 管理二进制程序的生命周期：
//! 1. **扫描文件**：从试卷目录加载所有 `.txt` 文件
//! 2. **运行分析**：构建 Analyzer（纯文本提取 + 远程向量化）
//! 3. **输出结果**：写 JSON 报告、打印排名与统计信息
//!
//! "没有文件"与"未提取到题目"以警告结束运行，不算程序错误。

use crate::clients::RemoteEmbedder;
use crate::config::Config;
use crate::error::AppError;
use crate::infrastructure::PlainTextSource;
use crate::models::{AnalysisReport, DocumentInput, Group};
use crate::orchestrator::analyzer::Analyzer;
use crate::utils::logging::{init_log_file, truncate_text};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        init_log_file(&config.output_log_file)?;
        log_startup(&config);
        Ok(Self { config })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 加载所有待分析的试卷
        let documents = load_documents(&self.config.papers_folder)?;

        if documents.is_empty() {
            warn!("⚠️ 没有找到待分析的试卷文件，程序结束");
            return Ok(());
        }

        log_documents_loaded(&documents);

        let papers_analyzed: Vec<String> = documents.iter().map(|d| d.name.clone()).collect();
        let analyzer = Analyzer::new(PlainTextSource, RemoteEmbedder::new(&self.config));

        match analyzer.process_documents(documents).await {
            Ok(groups) => {
                log_ranked_groups(&groups, self.config.verbose_logging);

                let report = AnalysisReport::build(papers_analyzed, groups);
                write_report(&report, &self.config.output_report_file)?;

                print_final_stats(&report, &self.config.output_report_file);
                Ok(())
            }
            // 特殊结果：未提取到题目，提示而不是报错
            Err(e) if e.is_empty_result() => {
                warn!("⚠️ 未能从上传的文件中提取到任何题目");
                Ok(())
            }
            Err(e) => Err(e).context("试卷分析失败"),
        }
    }
}

/// 从目录加载所有 .txt 试卷文件（按文件名排序）
fn load_documents(folder: &str) -> Result<Vec<DocumentInput>> {
    info!("\n📁 正在扫描待分析的试卷: {}", folder);

    let dir = Path::new(folder);
    if !dir.is_dir() {
        anyhow::bail!(AppError::File(crate::error::FileError::DirectoryNotFound {
            path: folder.to_string(),
        }));
    }

    let mut paths: Vec<_> = fs::read_dir(dir)
        .with_context(|| format!("无法读取目录: {}", folder))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "txt").unwrap_or(false))
        .collect();
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let bytes =
            fs::read(&path).with_context(|| format!("无法读取文件: {}", path.display()))?;
        documents.push(DocumentInput::new(name, bytes));
    }

    Ok(documents)
}

/// 写出 JSON 分析报告
fn write_report(report: &AnalysisReport, path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("报告序列化失败")?;
    fs::write(path, json).with_context(|| format!("无法写入报告: {}", path))?;
    info!("✓ 分析报告已保存至: {}", path);
    Ok(())
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 试卷高频题分析模式");
    info!("📊 向量模型: {}", config.embedding_model_name);
    info!("{}", "=".repeat(60));
}

fn log_documents_loaded(documents: &[DocumentInput]) {
    info!("✓ 找到 {} 份待分析的试卷", documents.len());
    for (idx, doc) in documents.iter().enumerate() {
        info!("  {}. {}", idx + 1, doc.name);
    }
}

fn log_ranked_groups(groups: &[Group], verbose: bool) {
    info!("\n{}", "=".repeat(60));
    info!("📋 高频题目排名（共 {} 组）", groups.len());
    info!("{}", "=".repeat(60));

    for (rank, group) in groups.iter().enumerate() {
        info!(
            "{}. [{}] 出现 {} 次: {}",
            rank + 1,
            group.priority,
            group.count,
            truncate_text(&group.representative, 80)
        );

        if verbose {
            for variant in &group.variants {
                info!("     - ({}) {}", variant.source, truncate_text(&variant.text, 80));
            }
        }
    }
}

fn print_final_stats(report: &AnalysisReport, report_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部分析完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 试卷: {} 份", report.papers_analyzed.len());
    info!("✅ 题目: {} 道", report.total_questions_extracted);
    info!("✅ 分组: {} 个", report.total_groups);
    info!("{}", "=".repeat(60));
    info!("\n报告已保存至: {}", report_path);
}
