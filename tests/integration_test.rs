use anyhow::Result;
use exam_paper_analyzer::{
    Analyzer, AppError, DocumentInput, Embedder, GroupingError, PlainTextSource, Priority,
    TextSource,
};

/// 确定性假向量化器：按关键词查表返回固定向量
///
/// 生产环境的模型服务是外部协作方，端到端测试用它替换
struct KeywordEmbedder;

impl Embedder for KeywordEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts
            .iter()
            .map(|text| {
                let lower = text.to_lowercase();
                if lower.contains("osi") {
                    vec![1.0, 0.0, 0.0]
                } else if lower.contains("tcp") {
                    vec![0.0, 1.0, 0.0]
                } else {
                    vec![0.0, 0.0, 1.0]
                }
            })
            .collect())
    }
}

/// 始终失败的向量化器
struct BrokenEmbedder;

impl Embedder for BrokenEmbedder {
    async fn embed(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>> {
        anyhow::bail!("模型服务不可用")
    }
}

/// 始终失败的文本提取能力
struct BrokenTextSource;

impl TextSource for BrokenTextSource {
    fn extract_text(&self, _document_bytes: &[u8]) -> Result<String> {
        anyhow::bail!("模拟 PDF 解析失败")
    }
}

const PAPER_TEXT: &str = "Q1) Explain the OSI reference model and the function of each layer (5 marks)\nQ2) Define the TCP IP protocol suite and its four layers (5 marks)";

fn paper(name: &str) -> DocumentInput {
    DocumentInput::new(name, PAPER_TEXT.as_bytes().to_vec())
}

#[tokio::test]
async fn test_two_papers_yield_two_high_priority_groups() {
    let analyzer = Analyzer::new(PlainTextSource, KeywordEmbedder);

    let groups = analyzer
        .process_documents(vec![paper("2022.txt"), paper("2023.txt")])
        .await
        .expect("分析应该成功");

    // 两份试卷各两道题，跨卷语义相同 → 恰好 2 组，每组 2 个变体
    assert_eq!(groups.len(), 2);
    for group in &groups {
        assert_eq!(group.count, 2);
        assert_eq!(group.variants.len(), 2);
        assert_eq!(group.priority, Priority::High);

        let sources: Vec<&str> = group.variants.iter().map(|v| v.source.as_str()).collect();
        assert_eq!(sources, vec!["2022.txt", "2023.txt"]);
    }

    // 代表题目是种子（第一个遇到的成员）的文本
    assert_eq!(
        groups[0].representative,
        "Explain the OSI reference model and the function of each layer"
    );
    assert_eq!(
        groups[1].representative,
        "Define the TCP IP protocol suite and its four layers"
    );
}

#[tokio::test]
async fn test_groups_partition_every_question() {
    let analyzer = Analyzer::new(PlainTextSource, KeywordEmbedder);

    let groups = analyzer
        .process_documents(vec![paper("a.txt"), paper("b.txt"), paper("c.txt")])
        .await
        .expect("分析应该成功");

    let total: usize = groups.iter().map(|g| g.count).sum();
    assert_eq!(total, 6);
    for group in &groups {
        assert_eq!(group.count, group.variants.len());
    }
}

#[tokio::test]
async fn test_boilerplate_only_papers_yield_empty_result() {
    let analyzer = Analyzer::new(PlainTextSource, KeywordEmbedder);

    let boilerplate = DocumentInput::new(
        "instructions.txt",
        b"All questions are compulsory.\nMax Marks: 80\nDuration: 3 Hours".to_vec(),
    );

    let result = analyzer.process_documents(vec![boilerplate]).await;

    // 特殊结果而不是崩溃，调用方据此提示"未找到题目"
    match result {
        Err(e) => assert!(e.is_empty_result()),
        Ok(_) => panic!("应该返回 EmptyResult"),
    }
}

#[tokio::test]
async fn test_text_extraction_failure_names_the_document() {
    let analyzer = Analyzer::new(BrokenTextSource, KeywordEmbedder);

    let result = analyzer
        .process_documents(vec![DocumentInput::new("broken.pdf", vec![1, 2, 3])])
        .await;

    match result {
        Err(AppError::Extraction(e)) => {
            assert!(e.to_string().contains("broken.pdf"));
        }
        other => panic!("应该返回提取错误，实际: {:?}", other.map(|g| g.len())),
    }
}

#[tokio::test]
async fn test_embedding_failure_aborts_whole_request() {
    let analyzer = Analyzer::new(PlainTextSource, BrokenEmbedder);

    let result = analyzer.process_documents(vec![paper("2022.txt")]).await;

    // 整批终止，不返回部分分组
    assert!(matches!(
        result,
        Err(AppError::Grouping(GroupingError::EmbeddingFailed { .. }))
    ));
}

#[tokio::test]
async fn test_empty_document_list_yields_empty_result() {
    let analyzer = Analyzer::new(PlainTextSource, KeywordEmbedder);

    let result = analyzer.process_documents(Vec::new()).await;

    match result {
        Err(e) => assert!(e.is_empty_result()),
        Ok(_) => panic!("应该返回 EmptyResult"),
    }
}
