use anyhow::Result;
use exam_paper_analyzer::utils::logging;
use exam_paper_analyzer::{App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::load();

    // 初始化并运行应用
    App::initialize(config)?.run().await?;

    Ok(())
}
