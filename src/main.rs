mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use ielts_test_compiler::{logger, orchestrator, App, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    logger::init(config.verbose_logging);

    match cli.command {
        Command::Compile { file } => {
            let bundle = orchestrator::compile_file(&file, &config).await?;
            println!("{}", serde_json::to_string_pretty(&bundle)?);
        }
        Command::Count { file } => {
            println!("{}", orchestrator::count_file(&file, &config).await?);
        }
        Command::Score { test, submission } => {
            let report = orchestrator::score_files(&test, &submission, &config).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Export => {
            let stats = App::initialize(config)?.run().await?;
            if stats.failed > 0 {
                anyhow::bail!("{} 套测试导出失败", stats.failed);
            }
        }
    }

    Ok(())
}
