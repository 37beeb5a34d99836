use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "编译雅思模考的题号与答案表", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// 编译单个测试文件，输出导出包 JSON
    Compile {
        /// 测试文件（.json / .toml）
        file: PathBuf,
    },
    /// 输出测试的作答单元总数
    Count {
        /// 测试文件（.json / .toml）
        file: PathBuf,
    },
    /// 用测试的答案表给提交判分，输出报告 JSON
    Score {
        /// 测试文件（.json / .toml）
        test: PathBuf,
        /// 学生提交（.json / .toml）
        submission: PathBuf,
    },
    /// 批量导出 TEST_FOLDER 中的所有测试
    Export,
}
